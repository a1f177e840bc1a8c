//! Handlers for business-for-sale listings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use vitrina_core::error::CoreError;
use vitrina_core::listing::{self, resolve_status_patch, ListingStatus};
use vitrina_core::naming::listing_slug;
use vitrina_core::pagination::{clamp_limit, clamp_offset};
use vitrina_core::types::DbId;
use vitrina_db::models::business::CreateBusiness;
use vitrina_db::models::listing::{ListingListParams, UpdateListingStatus};
use vitrina_db::repositories::BusinessRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /businesses
// ---------------------------------------------------------------------------

/// Submit a new business listing. Starts `pending` and hidden.
pub async fn create_business(
    State(state): State<AppState>,
    Json(input): Json<CreateBusiness>,
) -> AppResult<impl IntoResponse> {
    listing::validate_name(&input.name)?;

    let slug = match &input.slug {
        Some(s) => s.clone(),
        None => listing_slug(&input.name),
    };
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Cannot derive a slug from the given name".to_string(),
        )));
    }

    let business = BusinessRepo::create(&state.pool, &slug, &input).await?;

    tracing::info!(business_id = business.id, "Business created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: business })))
}

// ---------------------------------------------------------------------------
// GET /businesses
// ---------------------------------------------------------------------------

/// Public list: active businesses only.
pub async fn list_businesses(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let businesses = BusinessRepo::list_active(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse { data: businesses }))
}

// ---------------------------------------------------------------------------
// GET /businesses/scope/{scope}
// ---------------------------------------------------------------------------

/// Scoped list: `active` (public) or `all` (moderation, optional
/// `?status=` filter).
pub async fn list_businesses_scoped(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    Query(params): Query<ListingListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let businesses = match scope.as_str() {
        "active" => BusinessRepo::list_active(&state.pool, limit, offset).await?,
        "all" => {
            if let Some(s) = &params.status {
                ListingStatus::parse(s)?;
            }
            BusinessRepo::list_all(&state.pool, params.status.as_deref(), limit, offset).await?
        }
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown scope '{other}'. Expected 'active' or 'all'"
            )));
        }
    };

    Ok(Json(DataResponse { data: businesses }))
}

// ---------------------------------------------------------------------------
// GET /businesses/{id}
// ---------------------------------------------------------------------------

/// Get a single business by ID.
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let business = BusinessRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Business",
            id,
        }))?;

    Ok(Json(DataResponse { data: business }))
}

// ---------------------------------------------------------------------------
// PATCH /businesses/{id}/status
// ---------------------------------------------------------------------------

/// Apply a moderation transition from a `{status, is_active?}` body.
///
/// The pair is collapsed into a single target status; a contradictory
/// pair is rejected. Idempotent: transitioning to the current status
/// skips the write and returns the row unchanged.
pub async fn update_business_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateListingStatus>,
) -> AppResult<impl IntoResponse> {
    let target = resolve_status_patch(input.status.as_deref(), input.is_active)?;

    let current = BusinessRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Business",
            id,
        }))?;

    if current.status == target.as_str() {
        return Ok(Json(DataResponse { data: current }));
    }

    let updated = BusinessRepo::update_status(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Business",
            id,
        }))?;

    tracing::info!(
        business_id = id,
        from = %current.status,
        to = %target,
        "Business status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}
