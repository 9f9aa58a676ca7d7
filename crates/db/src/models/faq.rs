//! FAQ entry models and DTOs.

use agency_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub sort_order: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an FAQ entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFaq {
    #[validate(length(min = 1, max = 500))]
    pub question: String,
    #[validate(length(min = 1, max = 5000))]
    pub answer: String,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// DTO for partially updating an FAQ entry.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFaq {
    #[validate(length(min = 1, max = 500))]
    pub question: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub answer: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_published: Option<bool>,
}
