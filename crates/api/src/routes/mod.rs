pub mod advertisements;
pub mod businesses;
pub mod franchises;
pub mod health;
pub mod inquiries;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /franchises                        public list (active only), create
/// /franchises/scope/{scope}          scoped list: active | all (moderation)
/// /franchises/{id}                   get
/// /franchises/{id}/status            status transition (body: {is_active})
///
/// /businesses                        public list (active only), create
/// /businesses/scope/{scope}          scoped list: active | all (moderation)
/// /businesses/{id}                   get
/// /businesses/{id}/status            status transition (body: {status, is_active?})
///
/// /advertisements                    public list (active only), create
/// /advertisements/scope/{scope}      scoped list: active | all (moderation)
/// /advertisements/{id}               get
/// /advertisements/{id}/status        status transition (body: {status, is_active?})
/// /advertisements/{id}/payment       payment status (body: {payment_status})
///
/// /inquiries                         submit, moderation list (?search=&status=&type=)
/// /inquiries/{id}                    get
/// /inquiries/{id}/status             triage transition (body: {status})
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/franchises", franchises::router())
        .nest("/businesses", businesses::router())
        .nest("/advertisements", advertisements::router())
        .nest("/inquiries", inquiries::router())
}
