//! Repository for the `services` table.

use agency_core::defaults::{self, COLLECTION_SERVICES};
use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};
use crate::repositories::seed;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, slug, description, icon, features, \
    sort_order, is_active, created_at, updated_at";

/// Provides CRUD operations for service offerings.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Write the default services once per database. Returns `true` if this
    /// call performed the seeding.
    pub async fn ensure_defaults(pool: &PgPool) -> Result<bool, sqlx::Error> {
        if seed::is_seeded(pool, COLLECTION_SERVICES).await? {
            return Ok(false);
        }

        let mut tx = pool.begin().await?;
        if !seed::claim(&mut tx, COLLECTION_SERVICES).await? {
            return Ok(false);
        }
        for (position, service) in defaults::SERVICES.iter().enumerate() {
            sqlx::query(
                "INSERT INTO services (title, slug, description, icon, features, sort_order) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 ON CONFLICT (slug) DO NOTHING",
            )
            .bind(service.title)
            .bind(service.slug)
            .bind(service.description)
            .bind(service.icon)
            .bind(service.features)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::info!(count = defaults::SERVICES.len(), "Seeded default services");
        Ok(true)
    }

    /// List every service (active or not) in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY sort_order, id");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// List services shown on the public site.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM services WHERE is_active = true ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Find a service by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a service by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Service>, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM services WHERE slug = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new service with an already-resolved `slug`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateService,
        slug: &str,
    ) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (title, slug, description, icon, features, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.features)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a service. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                 title = COALESCE($2, title), \
                 slug = COALESCE($3, slug), \
                 description = COALESCE($4, description), \
                 icon = COALESCE($5, icon), \
                 features = COALESCE($6, features), \
                 sort_order = COALESCE($7, sort_order), \
                 is_active = COALESCE($8, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.features)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of services.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(pool)
            .await
    }
}
