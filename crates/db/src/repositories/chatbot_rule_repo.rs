//! Repository for the `chatbot_rules` table.
//!
//! Rows are returned in fetch order `priority NULLS LAST, id`, which is the
//! tie-break order the matcher relies on for equal priorities.

use agency_core::chatbot::DEFAULT_RULE_PRIORITY;
use agency_core::defaults::{self, COLLECTION_CHATBOT_RULES};
use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::chatbot_rule::ChatbotRule;
use crate::repositories::seed;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, keywords, response, priority, is_active, created_at, updated_at";

/// Provides CRUD operations for chatbot keyword rules.
///
/// Writers pass keywords already normalized by
/// `agency_core::chatbot::normalize_keywords`.
pub struct ChatbotRuleRepo;

impl ChatbotRuleRepo {
    /// Write the default rules once per database.
    pub async fn ensure_defaults(pool: &PgPool) -> Result<bool, sqlx::Error> {
        if seed::is_seeded(pool, COLLECTION_CHATBOT_RULES).await? {
            return Ok(false);
        }

        let mut tx = pool.begin().await?;
        if !seed::claim(&mut tx, COLLECTION_CHATBOT_RULES).await? {
            return Ok(false);
        }
        for rule in defaults::CHATBOT_RULES {
            sqlx::query("INSERT INTO chatbot_rules (keywords, response, priority) VALUES ($1, $2, $3)")
                .bind(rule.keywords)
                .bind(rule.response)
                .bind(rule.priority)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::info!(count = defaults::CHATBOT_RULES.len(), "Seeded default chatbot rules");
        Ok(true)
    }

    /// List every rule in fetch order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ChatbotRule>, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM chatbot_rules ORDER BY priority NULLS LAST, id");
        sqlx::query_as::<_, ChatbotRule>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the rules the public chatbot answers with.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ChatbotRule>, sqlx::Error> {
        Self::ensure_defaults(pool).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM chatbot_rules WHERE is_active = true \
             ORDER BY priority NULLS LAST, id"
        );
        sqlx::query_as::<_, ChatbotRule>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a rule by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ChatbotRule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chatbot_rules WHERE id = $1");
        sqlx::query_as::<_, ChatbotRule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new rule. A missing `priority` stores [`DEFAULT_RULE_PRIORITY`].
    pub async fn create(
        pool: &PgPool,
        keywords: &[String],
        response: &str,
        priority: Option<i32>,
        is_active: Option<bool>,
    ) -> Result<ChatbotRule, sqlx::Error> {
        let query = format!(
            "INSERT INTO chatbot_rules (keywords, response, priority, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatbotRule>(&query)
            .bind(keywords)
            .bind(response)
            .bind(priority.unwrap_or(DEFAULT_RULE_PRIORITY))
            .bind(is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a rule. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        keywords: Option<&[String]>,
        response: Option<&str>,
        priority: Option<i32>,
        is_active: Option<bool>,
    ) -> Result<Option<ChatbotRule>, sqlx::Error> {
        let query = format!(
            "UPDATE chatbot_rules SET \
                 keywords = COALESCE($2, keywords), \
                 response = COALESCE($3, response), \
                 priority = COALESCE($4, priority), \
                 is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatbotRule>(&query)
            .bind(id)
            .bind(keywords)
            .bind(response)
            .bind(priority)
            .bind(is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a rule by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chatbot_rules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
