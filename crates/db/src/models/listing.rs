//! DTOs shared by all listing kinds (franchises, businesses,
//! advertisements).

use serde::Deserialize;

/// Body of `PATCH /{kind}/{id}/status` for businesses and advertisements.
///
/// Legacy clients send `status` and `is_active` as independent fields;
/// `vitrina_core::listing::resolve_status_patch` collapses them into a
/// single coherent target status.
#[derive(Debug, Deserialize)]
pub struct UpdateListingStatus {
    pub status: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for the moderation (`scope = all`) listing reads.
#[derive(Debug, Deserialize)]
pub struct ListingListParams {
    /// Exact status filter (`pending` / `active` / `inactive`).
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
