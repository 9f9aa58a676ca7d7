//! Client feedback (testimonial) models and DTOs.

use agency_core::types::{DbId, Timestamp};
use agency_core::validation::{MAX_RATING, MIN_RATING};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub rating: i16,
    pub comment: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO submitted by the public feedback form. New feedback awaits approval.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedback {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(range(min = MIN_RATING, max = MAX_RATING))]
    pub rating: i16,
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
}

/// DTO for approving or hiding a feedback entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFeedbackApproval {
    pub is_approved: bool,
}

/// Aggregate over approved feedback.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct FeedbackSummary {
    pub count: i64,
    pub average_rating: Option<f64>,
}
