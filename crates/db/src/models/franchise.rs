//! Franchise listing entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrina_core::types::{DbId, Timestamp};

/// A row from the `franchises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Franchise {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Minimum required investment, in cents.
    pub investment_min: Option<i64>,
    /// Maximum expected investment, in cents.
    pub investment_max: Option<i64>,
    pub logo_url: Option<String>,
    pub owner_user_id: Option<DbId>,
    pub status: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new franchise listing.
///
/// New listings always start `pending`/hidden; the status fields are not
/// accepted at creation time.
#[derive(Debug, Deserialize)]
pub struct CreateFranchise {
    pub name: String,
    /// Optional explicit slug; generated from `name` when absent.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub investment_min: Option<i64>,
    pub investment_max: Option<i64>,
    pub logo_url: Option<String>,
    pub owner_user_id: Option<DbId>,
}

/// Body of `PATCH /franchises/{id}/status`.
///
/// The legacy franchise surface carries only the visibility flag; the
/// target status is derived from it.
#[derive(Debug, Deserialize)]
pub struct UpdateFranchiseActive {
    pub is_active: bool,
}
