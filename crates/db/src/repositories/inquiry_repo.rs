//! Repository for the `inquiries` table.

use sqlx::PgPool;
use vitrina_core::inquiry::InquiryStatus;
use vitrina_core::types::DbId;

use crate::models::inquiry::{CreateInquiry, Inquiry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, email, subject, message, phone, \
    franchise_id, business_id, status, created_at, updated_at";

/// Provides CRUD operations for inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a new inquiry, returning the created row.
    ///
    /// New rows rely on the table default for `status` (`pending`).
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries \
                (name, email, subject, message, phone, franchise_id, business_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(&input.phone)
            .bind(input.franchise_id)
            .bind(input.business_id)
            .fetch_one(pool)
            .await
    }

    /// Find an inquiry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries WHERE id = $1");
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all inquiries, newest first.
    ///
    /// The moderation view filters the full list in-process; there is no
    /// SQL-side search.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Inquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inquiries ORDER BY created_at DESC");
        sqlx::query_as::<_, Inquiry>(&query).fetch_all(pool).await
    }

    /// Update the triage status of an inquiry. Returns the updated row if
    /// found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: InquiryStatus,
    ) -> Result<Option<Inquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE inquiries \
             SET status = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
