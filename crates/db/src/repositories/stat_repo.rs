//! Repository for the `stats` table.

use agency_core::defaults::{self, COLLECTION_STATS};
use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::stat::{CreateStat, Stat, UpdateStat};
use crate::repositories::seed;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, label, value, icon, sort_order, created_at, updated_at";

/// Provides CRUD operations for headline stats.
pub struct StatRepo;

impl StatRepo {
    /// Write the default stats once per database.
    pub async fn ensure_defaults(pool: &PgPool) -> Result<bool, sqlx::Error> {
        if seed::is_seeded(pool, COLLECTION_STATS).await? {
            return Ok(false);
        }

        let mut tx = pool.begin().await?;
        if !seed::claim(&mut tx, COLLECTION_STATS).await? {
            return Ok(false);
        }
        for (position, stat) in defaults::STATS.iter().enumerate() {
            sqlx::query("INSERT INTO stats (label, value, icon, sort_order) VALUES ($1, $2, $3, $4)")
                .bind(stat.label)
                .bind(stat.value)
                .bind(stat.icon)
                .bind(position as i32)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!(count = defaults::STATS.len(), "Seeded default stats");
        Ok(true)
    }

    /// List all stats in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Stat>, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM stats ORDER BY sort_order, id");
        sqlx::query_as::<_, Stat>(&query).fetch_all(pool).await
    }

    /// Find a stat by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stats WHERE id = $1");
        sqlx::query_as::<_, Stat>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new stat, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStat) -> Result<Stat, sqlx::Error> {
        let query = format!(
            "INSERT INTO stats (label, value, icon, sort_order) \
             VALUES ($1, $2, $3, COALESCE($4, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stat>(&query)
            .bind(&input.label)
            .bind(&input.value)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Partially update a stat. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStat,
    ) -> Result<Option<Stat>, sqlx::Error> {
        let query = format!(
            "UPDATE stats SET \
                 label = COALESCE($2, label), \
                 value = COALESCE($3, value), \
                 icon = COALESCE($4, icon), \
                 sort_order = COALESCE($5, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stat>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(&input.value)
            .bind(&input.icon)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a stat by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
