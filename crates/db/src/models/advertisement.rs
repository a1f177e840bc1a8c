//! Advertisement entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrina_core::types::{DbId, Timestamp};

/// A row from the `advertisements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Advertisement {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    /// Site placement slot (e.g. `home_banner`, `sidebar`). Opaque payload.
    pub placement: Option<String>,
    /// Booked price, in cents.
    pub price: Option<i64>,
    pub owner_user_id: Option<DbId>,
    pub payment_status: String,
    pub status: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new advertisement.
///
/// Starts `pending`/hidden with `payment_status = unpaid`.
#[derive(Debug, Deserialize)]
pub struct CreateAdvertisement {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub placement: Option<String>,
    pub price: Option<i64>,
    pub owner_user_id: Option<DbId>,
}

/// Body of `PATCH /advertisements/{id}/payment`.
#[derive(Debug, Deserialize)]
pub struct UpdateAdvertisementPayment {
    pub payment_status: String,
}
