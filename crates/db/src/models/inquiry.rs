//! Inquiry entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrina_core::inquiry::derived_kind;
use vitrina_core::types::{DbId, Timestamp};

/// A row from the `inquiries` table.
///
/// At most one of `franchise_id` / `business_id` is set (enforced at the
/// API boundary and by a table CHECK constraint). The target
/// classification is derived from the foreign keys, never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phone: Option<String>,
    pub franchise_id: Option<DbId>,
    pub business_id: Option<DbId>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Inquiry {
    /// Derived target classification (`franchise` / `business` / `general`).
    pub fn kind(&self) -> &'static str {
        derived_kind(self.franchise_id, self.business_id).as_str()
    }
}

/// DTO for submitting a new inquiry.
#[derive(Debug, Deserialize)]
pub struct CreateInquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phone: Option<String>,
    pub franchise_id: Option<DbId>,
    pub business_id: Option<DbId>,
}

/// Body of `PATCH /inquiries/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateInquiryStatus {
    pub status: String,
}

/// Query parameters for the moderation inquiry list.
///
/// Feed these into `vitrina_core::inquiry::InquiryFilter::from_params`;
/// they are never held as ambient state.
#[derive(Debug, Deserialize)]
pub struct InquiryListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
