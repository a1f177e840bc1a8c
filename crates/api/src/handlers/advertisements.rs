//! Handlers for advertisements.
//!
//! Advertisements carry a payment status alongside the shared listing
//! lifecycle; the two are mutated through separate endpoints and never
//! affect each other.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use vitrina_core::advertisement::PaymentStatus;
use vitrina_core::error::CoreError;
use vitrina_core::listing::{self, resolve_status_patch, ListingStatus};
use vitrina_core::pagination::{clamp_limit, clamp_offset};
use vitrina_core::types::DbId;
use vitrina_db::models::advertisement::{CreateAdvertisement, UpdateAdvertisementPayment};
use vitrina_db::models::listing::{ListingListParams, UpdateListingStatus};
use vitrina_db::repositories::AdvertisementRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /advertisements
// ---------------------------------------------------------------------------

/// Submit a new advertisement. Starts `pending`, hidden, and `unpaid`.
pub async fn create_advertisement(
    State(state): State<AppState>,
    Json(input): Json<CreateAdvertisement>,
) -> AppResult<impl IntoResponse> {
    listing::validate_name(&input.title)?;

    let advertisement = AdvertisementRepo::create(&state.pool, &input).await?;

    tracing::info!(advertisement_id = advertisement.id, "Advertisement created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: advertisement,
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /advertisements
// ---------------------------------------------------------------------------

/// Public list: active advertisements only.
pub async fn list_advertisements(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let advertisements = AdvertisementRepo::list_active(&state.pool, limit, offset).await?;

    Ok(Json(DataResponse {
        data: advertisements,
    }))
}

// ---------------------------------------------------------------------------
// GET /advertisements/scope/{scope}
// ---------------------------------------------------------------------------

/// Scoped list: `active` (public) or `all` (moderation, optional
/// `?status=` filter).
pub async fn list_advertisements_scoped(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    Query(params): Query<ListingListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, 50, 200);
    let offset = clamp_offset(params.offset);

    let advertisements = match scope.as_str() {
        "active" => AdvertisementRepo::list_active(&state.pool, limit, offset).await?,
        "all" => {
            if let Some(s) = &params.status {
                ListingStatus::parse(s)?;
            }
            AdvertisementRepo::list_all(&state.pool, params.status.as_deref(), limit, offset)
                .await?
        }
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown scope '{other}'. Expected 'active' or 'all'"
            )));
        }
    };

    Ok(Json(DataResponse {
        data: advertisements,
    }))
}

// ---------------------------------------------------------------------------
// GET /advertisements/{id}
// ---------------------------------------------------------------------------

/// Get a single advertisement by ID.
pub async fn get_advertisement(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let advertisement = AdvertisementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Advertisement",
            id,
        }))?;

    Ok(Json(DataResponse {
        data: advertisement,
    }))
}

// ---------------------------------------------------------------------------
// PATCH /advertisements/{id}/status
// ---------------------------------------------------------------------------

/// Apply a moderation transition from a `{status, is_active?}` body.
///
/// Idempotent: transitioning to the current status skips the write and
/// returns the row unchanged.
pub async fn update_advertisement_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateListingStatus>,
) -> AppResult<impl IntoResponse> {
    let target = resolve_status_patch(input.status.as_deref(), input.is_active)?;

    let current = AdvertisementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Advertisement",
            id,
        }))?;

    if current.status == target.as_str() {
        return Ok(Json(DataResponse { data: current }));
    }

    let updated = AdvertisementRepo::update_status(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Advertisement",
            id,
        }))?;

    tracing::info!(
        advertisement_id = id,
        from = %current.status,
        to = %target,
        "Advertisement status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// PATCH /advertisements/{id}/payment
// ---------------------------------------------------------------------------

/// Record a payment state change. Never touches the listing status.
pub async fn update_advertisement_payment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdvertisementPayment>,
) -> AppResult<impl IntoResponse> {
    let target = PaymentStatus::parse(&input.payment_status)?;

    let current = AdvertisementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Advertisement",
            id,
        }))?;

    if current.payment_status == target.as_str() {
        return Ok(Json(DataResponse { data: current }));
    }

    let updated = AdvertisementRepo::update_payment_status(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Advertisement",
            id,
        }))?;

    tracing::info!(
        advertisement_id = id,
        from = %current.payment_status,
        to = %target,
        "Advertisement payment status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}
