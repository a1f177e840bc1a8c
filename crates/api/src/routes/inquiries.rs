//! Route definitions for inquiries.
//!
//! Mounted at `/inquiries` by `api_routes()`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// Inquiry routes.
///
/// ```text
/// POST   /                  -> submit_inquiry
/// GET    /                  -> list_inquiries (moderation; ?search=&status=&type=)
/// GET    /{id}              -> get_inquiry
/// PATCH  /{id}/status       -> update_inquiry_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(inquiries::submit_inquiry).get(inquiries::list_inquiries),
        )
        .route("/{id}", get(inquiries::get_inquiry))
        .route("/{id}/status", patch(inquiries::update_inquiry_status))
}
