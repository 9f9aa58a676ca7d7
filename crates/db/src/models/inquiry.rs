//! Service inquiry models and DTOs.

use agency_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `service_inquiries` table.
///
/// `service_name` is captured at submission time so the inquiry still reads
/// correctly after the service is renamed or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceInquiry {
    pub id: DbId,
    pub service_id: Option<DbId>,
    pub service_name: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO submitted by the public inquiry form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServiceInquiry {
    pub service_id: Option<DbId>,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(length(max = 100))]
    pub budget: Option<String>,
    #[validate(length(max = 100))]
    pub timeline: Option<String>,
    #[validate(length(min = 10, max = 5000, message = "must be between 10 and 5000 characters"))]
    pub message: String,
}

/// DTO for changing an inquiry's workflow status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInquiryStatus {
    pub status: String,
}
