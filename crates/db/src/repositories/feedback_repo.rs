//! Repository for the `feedback` table.

use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback, FeedbackSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, email, company, rating, comment, is_approved, created_at, updated_at";

/// Provides CRUD operations for client feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Store a public submission. New feedback is hidden until approved.
    pub async fn create(pool: &PgPool, input: &CreateFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (name, email, company, rating, comment) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.company)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// List all feedback, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }

    /// List approved feedback, newest first, up to `limit` rows when given.
    pub async fn list_approved(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feedback WHERE is_approved = true \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a feedback entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE id = $1");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Approve or hide a feedback entry.
    pub async fn set_approved(
        pool: &PgPool,
        id: DbId,
        is_approved: bool,
    ) -> Result<Option<Feedback>, sqlx::Error> {
        let query =
            format!("UPDATE feedback SET is_approved = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(id)
            .bind(is_approved)
            .fetch_optional(pool)
            .await
    }

    /// Delete a feedback entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count and average rating of approved feedback.
    pub async fn approved_summary(pool: &PgPool) -> Result<FeedbackSummary, sqlx::Error> {
        sqlx::query_as::<_, FeedbackSummary>(
            "SELECT COUNT(*) AS count, AVG(rating)::FLOAT8 AS average_rating \
             FROM feedback WHERE is_approved = true",
        )
        .fetch_one(pool)
        .await
    }

    /// Number of submissions awaiting moderation.
    pub async fn count_pending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM feedback WHERE is_approved = false")
            .fetch_one(pool)
            .await
    }
}
