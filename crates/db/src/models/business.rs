//! Business-for-sale listing entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrina_core::types::{DbId, Timestamp};

/// A row from the `businesses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Business {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Asking price, in cents.
    pub asking_price: Option<i64>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub owner_user_id: Option<DbId>,
    pub status: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new business listing.
#[derive(Debug, Deserialize)]
pub struct CreateBusiness {
    pub name: String,
    /// Optional explicit slug; generated from `name` when absent.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub asking_price: Option<i64>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub owner_user_id: Option<DbId>,
}
