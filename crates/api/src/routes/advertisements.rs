//! Route definitions for advertisements.
//!
//! Mounted at `/advertisements` by `api_routes()`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::advertisements;
use crate::state::AppState;

/// Advertisement routes.
///
/// ```text
/// POST   /                  -> create_advertisement
/// GET    /                  -> list_advertisements (active only)
/// GET    /scope/{scope}     -> list_advertisements_scoped (active | all)
/// GET    /{id}              -> get_advertisement
/// PATCH  /{id}/status       -> update_advertisement_status
/// PATCH  /{id}/payment      -> update_advertisement_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(advertisements::create_advertisement).get(advertisements::list_advertisements),
        )
        .route(
            "/scope/{scope}",
            get(advertisements::list_advertisements_scoped),
        )
        .route("/{id}", get(advertisements::get_advertisement))
        .route(
            "/{id}/status",
            patch(advertisements::update_advertisement_status),
        )
        .route(
            "/{id}/payment",
            patch(advertisements::update_advertisement_payment),
        )
}
