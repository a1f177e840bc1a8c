//! Handlers for inquiries.
//!
//! Submission is public; the list and status endpoints serve the
//! moderation view. The moderation filter is built fresh from the query
//! string on every request and applied in-process over the full list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use vitrina_core::error::CoreError;
use vitrina_core::inquiry::{self, InquiryFilter, InquiryStatus};
use vitrina_core::types::DbId;
use vitrina_db::models::inquiry::{CreateInquiry, InquiryListParams, UpdateInquiryStatus};
use vitrina_db::repositories::{BusinessRepo, FranchiseRepo, InquiryRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /inquiries
// ---------------------------------------------------------------------------

/// Submit a new inquiry, optionally attached to a franchise or business.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(input): Json<CreateInquiry>,
) -> AppResult<impl IntoResponse> {
    inquiry::validate_required_text("name", &input.name)?;
    inquiry::validate_required_text("subject", &input.subject)?;
    inquiry::validate_required_text("message", &input.message)?;
    inquiry::validate_email(&input.email)?;
    inquiry::validate_target(input.franchise_id, input.business_id)?;

    // Resolve the target listing up front so a dangling reference surfaces
    // as 404 instead of a foreign-key failure.
    if let Some(fid) = input.franchise_id {
        FranchiseRepo::find_by_id(&state.pool, fid)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Franchise",
                id: fid,
            }))?;
    }
    if let Some(bid) = input.business_id {
        BusinessRepo::find_by_id(&state.pool, bid)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Business",
                id: bid,
            }))?;
    }

    let created = InquiryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        inquiry_id = created.id,
        kind = created.kind(),
        "Inquiry submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /inquiries
// ---------------------------------------------------------------------------

/// Moderation list with optional `?search=&status=&type=` filters.
///
/// The filters are applied in-process over the full list; `all` and empty
/// values mean "no filter on this dimension".
pub async fn list_inquiries(
    State(state): State<AppState>,
    Query(params): Query<InquiryListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = InquiryFilter::from_params(
        params.search.as_deref(),
        params.status.as_deref(),
        params.kind.as_deref(),
    )?;

    let mut inquiries = InquiryRepo::list_all(&state.pool).await?;
    inquiries.retain(|i| {
        filter.matches(
            &i.name,
            &i.email,
            &i.subject,
            &i.status,
            i.franchise_id,
            i.business_id,
        )
    });

    Ok(Json(DataResponse { data: inquiries }))
}

// ---------------------------------------------------------------------------
// GET /inquiries/{id}
// ---------------------------------------------------------------------------

/// Get a single inquiry by ID.
pub async fn get_inquiry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }))?;

    Ok(Json(DataResponse { data: found }))
}

// ---------------------------------------------------------------------------
// PATCH /inquiries/{id}/status
// ---------------------------------------------------------------------------

/// Update the triage status of an inquiry.
///
/// Idempotent: transitioning to the current status skips the write.
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInquiryStatus>,
) -> AppResult<impl IntoResponse> {
    let target = InquiryStatus::parse(&input.status)?;

    let current = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }))?;

    if current.status == target.as_str() {
        return Ok(Json(DataResponse { data: current }));
    }

    let updated = InquiryRepo::update_status(&state.pool, id, target)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Inquiry",
            id,
        }))?;

    tracing::info!(
        inquiry_id = id,
        from = %current.status,
        to = %target,
        "Inquiry status updated",
    );

    Ok(Json(DataResponse { data: updated }))
}
