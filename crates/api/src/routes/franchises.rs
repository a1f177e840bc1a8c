//! Route definitions for franchise listings.
//!
//! Mounted at `/franchises` by `api_routes()`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::franchises;
use crate::state::AppState;

/// Franchise routes.
///
/// ```text
/// POST   /                  -> create_franchise
/// GET    /                  -> list_franchises (active only)
/// GET    /scope/{scope}     -> list_franchises_scoped (active | all)
/// GET    /{id}              -> get_franchise
/// PATCH  /{id}/status       -> update_franchise_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(franchises::create_franchise).get(franchises::list_franchises),
        )
        .route("/scope/{scope}", get(franchises::list_franchises_scoped))
        .route("/{id}", get(franchises::get_franchise))
        .route("/{id}/status", patch(franchises::update_franchise_status))
}
