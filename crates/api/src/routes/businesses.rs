//! Route definitions for business-for-sale listings.
//!
//! Mounted at `/businesses` by `api_routes()`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::businesses;
use crate::state::AppState;

/// Business routes.
///
/// ```text
/// POST   /                  -> create_business
/// GET    /                  -> list_businesses (active only)
/// GET    /scope/{scope}     -> list_businesses_scoped (active | all)
/// GET    /{id}              -> get_business
/// PATCH  /{id}/status       -> update_business_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(businesses::create_business).get(businesses::list_businesses),
        )
        .route("/scope/{scope}", get(businesses::list_businesses_scoped))
        .route("/{id}", get(businesses::get_business))
        .route("/{id}/status", patch(businesses::update_business_status))
}
