//! Repository for the `service_inquiries` table.

use agency_core::inquiry::STATUS_NEW;
use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact_message::StatusCount;
use crate::models::inquiry::{CreateServiceInquiry, ServiceInquiry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, service_id, service_name, name, email, phone, company, budget, timeline, \
    message, status, created_at, updated_at";

/// Provides CRUD operations for service inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Store an inquiry. `service_name` is the resolved title of `service_id`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceInquiry,
        service_name: Option<&str>,
    ) -> Result<ServiceInquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_inquiries \
                 (service_id, service_name, name, email, phone, company, budget, timeline, message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceInquiry>(&query)
            .bind(input.service_id)
            .bind(service_name)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.budget)
            .bind(&input.timeline)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List inquiries, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<ServiceInquiry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_inquiries \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ServiceInquiry>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Find an inquiry by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceInquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_inquiries WHERE id = $1");
        sqlx::query_as::<_, ServiceInquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Move an inquiry to another workflow status.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ServiceInquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE service_inquiries SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceInquiry>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an inquiry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_inquiries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of inquiries per status.
    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count FROM service_inquiries GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of inquiries still waiting for a first response.
    pub async fn count_new(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM service_inquiries WHERE status = $1")
            .bind(STATUS_NEW)
            .fetch_one(pool)
            .await
    }
}
