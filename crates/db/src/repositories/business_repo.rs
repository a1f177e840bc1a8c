//! Repository for the `businesses` table.

use sqlx::PgPool;
use vitrina_core::listing::ListingStatus;
use vitrina_core::types::DbId;

use crate::models::business::{Business, CreateBusiness};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, slug, description, category, \
    asking_price, location, image_url, owner_user_id, \
    status, is_active, created_at, updated_at";

/// Provides CRUD operations for business-for-sale listings.
pub struct BusinessRepo;

impl BusinessRepo {
    /// Insert a new business, returning the created row.
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        input: &CreateBusiness,
    ) -> Result<Business, sqlx::Error> {
        let query = format!(
            "INSERT INTO businesses \
                (name, slug, description, category, \
                 asking_price, location, image_url, owner_user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Business>(&query)
            .bind(&input.name)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.asking_price)
            .bind(&input.location)
            .bind(&input.image_url)
            .bind(input.owner_user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a business by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Business>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM businesses WHERE id = $1");
        sqlx::query_as::<_, Business>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active businesses only (the public read path).
    pub async fn list_active(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Business>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM businesses WHERE is_active = true \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Business>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List all businesses regardless of visibility (the moderation read
    /// path), with an optional exact status filter.
    pub async fn list_all(
        pool: &PgPool,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Business>, sqlx::Error> {
        let query = if status.is_some() {
            format!(
                "SELECT {COLUMNS} FROM businesses WHERE status = $3 \
                 ORDER BY created_at DESC LIMIT $1 OFFSET $2"
            )
        } else {
            format!(
                "SELECT {COLUMNS} FROM businesses \
                 ORDER BY created_at DESC LIMIT $1 OFFSET $2"
            )
        };
        let mut q = sqlx::query_as::<_, Business>(&query).bind(limit).bind(offset);
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
    ) -> Result<Option<Business>, sqlx::Error> {
        let query = format!(
            "UPDATE businesses \
             SET status = $2, is_active = $3, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Business>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(status.is_active())
            .fetch_optional(pool)
            .await
    }
}
