//! Handlers for franchise listings.
//!
//! Franchises follow the shared listing lifecycle, but their legacy status
//! endpoint carries only `{is_active}` on the wire; the target status is
//! derived from the flag.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use vitrina_core::error::CoreError;
use vitrina_core::listing::{self, ListingStatus};
use vitrina_core::naming::listing_slug;
use vitrina_core::pagination::{clamp_limit, clamp_offset};
use vitrina_core::types::DbId;
use vitrina_db::models::franchise::{CreateFranchise, UpdateFranchiseActive};
use vitrina_db::models::listing::ListingListParams;
use vitrina_db::repositories::FranchiseRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /franchises
// ---------------------------------------------------------------------------

/// Submit a new franchise listing. Starts `pending` and hidden.
pub async fn create_franchise(
    State(state): State<AppState>,
    Json(input): Json<CreateFranchise>,
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

    let franchise = FranchiseRepo::create(&state.pool, &slug, &input).await?;

    tracing::info!(franchise_id = franchise.id, "Franchise created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: franchise })))
}

// ---------------------------------------------------------------------------
// GET /franchises
// ---------------------------------------------------------------------------

/// Public list: active franchises only.
pub async fn list_franchises(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let franchises = FranchiseRepo::list_active(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse { data: franchises }))
}

// ---------------------------------------------------------------------------
// GET /franchises/scope/{scope}
// ---------------------------------------------------------------------------

/// Scoped list: `active` (public) or `all` (moderation, optional
/// `?status=` filter).
pub async fn list_franchises_scoped(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    Query(params): Query<ListingListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let franchises = match scope.as_str() {
        "active" => FranchiseRepo::list_active(&state.pool, limit, offset).await?,
        "all" => {
            if let Some(s) = &params.status {
                ListingStatus::parse(s)?;
            }
            FranchiseRepo::list_all(&state.pool, params.status.as_deref(), limit, offset).await?
        }
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown scope '{other}'. Expected 'active' or 'all'"
            )));
        }
    };

    Ok(Json(DataResponse { data: franchises }))
}

// ---------------------------------------------------------------------------
// GET /franchises/{id}
// ---------------------------------------------------------------------------

/// Get a single franchise by ID.
pub async fn get_franchise(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let franchise = FranchiseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }))?;

    Ok(Json(DataResponse { data: franchise }))
}

// ---------------------------------------------------------------------------
// PATCH /franchises/{id}/status
// ---------------------------------------------------------------------------

/// Apply a moderation transition from the legacy `{is_active}` body.
///
/// Idempotent: transitioning to the current status skips the write and
/// returns the row unchanged.
pub async fn update_franchise_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFranchiseActive>,
) -> AppResult<impl IntoResponse> {
    let target = ListingStatus::from_active_flag(input.is_active);

    let current = FranchiseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }))?;

    if current.status == target.as_str() {
        return Ok(Json(DataResponse { data: current }));
    }

    let updated = FranchiseRepo::update_status(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }))?;

    tracing::info!(
        franchise_id = id,
        from = %current.status,
        to = %target,
        "Franchise status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}
