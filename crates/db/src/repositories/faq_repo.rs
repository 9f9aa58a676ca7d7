//! Repository for the `faqs` table.

use agency_core::defaults::{self, COLLECTION_FAQS};
use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::{CreateFaq, Faq, UpdateFaq};
use crate::repositories::seed;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, question, answer, category, sort_order, is_published, created_at, updated_at";

/// Provides CRUD operations for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    /// Write the default FAQs once per database.
    pub async fn ensure_defaults(pool: &PgPool) -> Result<bool, sqlx::Error> {
        if seed::is_seeded(pool, COLLECTION_FAQS).await? {
            return Ok(false);
        }

        let mut tx = pool.begin().await?;
        if !seed::claim(&mut tx, COLLECTION_FAQS).await? {
            return Ok(false);
        }
        for (position, faq) in defaults::FAQS.iter().enumerate() {
            sqlx::query(
                "INSERT INTO faqs (question, answer, category, sort_order) VALUES ($1, $2, $3, $4)",
            )
            .bind(faq.question)
            .bind(faq.answer)
            .bind(faq.category)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::info!(count = defaults::FAQS.len(), "Seeded default FAQs");
        Ok(true)
    }

    /// List all FAQ entries (published or not) in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM faqs ORDER BY sort_order, id");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// List entries visible on the public FAQ page.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Faq>, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM faqs WHERE is_published = true ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    /// Find an FAQ entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new FAQ entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFaq) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question, answer, category, sort_order, is_published) \
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Partially update an FAQ entry. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaq,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET \
                 question = COALESCE($2, question), \
                 answer = COALESCE($3, answer), \
                 category = COALESCE($4, category), \
                 sort_order = COALESCE($5, sort_order), \
                 is_published = COALESCE($6, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .bind(input.sort_order)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete an FAQ entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
