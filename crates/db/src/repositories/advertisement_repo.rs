//! Repository for the `advertisements` table.

use sqlx::PgPool;
use vitrina_core::advertisement::PaymentStatus;
use vitrina_core::listing::ListingStatus;
use vitrina_core::types::DbId;

use crate::models::advertisement::{Advertisement, CreateAdvertisement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, description, image_url, target_url, placement, price, \
    owner_user_id, payment_status, status, is_active, created_at, updated_at";

/// Provides CRUD operations for advertisements.
pub struct AdvertisementRepo;

impl AdvertisementRepo {
    /// Insert a new advertisement, returning the created row.
    ///
    /// Relies on table defaults: `status = pending`, `is_active = false`,
    /// `payment_status = unpaid`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdvertisement,
    ) -> Result<Advertisement, sqlx::Error> {
        let query = format!(
            "INSERT INTO advertisements \
                (title, description, image_url, target_url, placement, price, owner_user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.target_url)
            .bind(&input.placement)
            .bind(input.price)
            .bind(input.owner_user_id)
            .fetch_one(pool)
            .await
    }

    /// Find an advertisement by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Advertisement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advertisements WHERE id = $1");
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active advertisements only (the public read path).
    pub async fn list_active(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Advertisement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM advertisements WHERE is_active = true \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List all advertisements regardless of visibility (the moderation
    /// read path), with an optional exact status filter.
    pub async fn list_all(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Advertisement>, sqlx::Error> {
        let query = if status.is_some() {
            format!(
                "SELECT {COLUMNS} FROM advertisements WHERE status = $3 \
                 ORDER BY created_at DESC LIMIT $1 OFFSET $2"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM advertisements \
                 ORDER BY created_at DESC LIMIT $1 OFFSET $2"
            )
        };
        let mut q = sqlx::query_as::<_, Advertisement>(&query)
            .bind(limit)
            .bind(offset);
        if let Some(s) = status {
            q = q.bind(s);
        }
        q.fetch_all(pool).await
    }

    /// Apply a status transition, writing `status` and the derived
    /// `is_active` together. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ListingStatus,
    ) -> Result<Option<Advertisement>, sqlx::Error> {
        let query = format!(
            "UPDATE advertisements \
             SET status = $2, is_active = $3, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(status.is_active())
            .fetch_optional(pool)
            .await
    }

    /// Record a payment state change. Never touches the listing status.
    pub async fn update_payment_status(
        pool: &PgPool,
        id: DbId,
        payment_status: PaymentStatus,
    ) -> Result<Option<Advertisement>, sqlx::Error> {
        let query = format!(
            "UPDATE advertisements \
             SET payment_status = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(id)
            .bind(payment_status.as_str())
            .fetch_optional(pool)
            .await
    }
}
