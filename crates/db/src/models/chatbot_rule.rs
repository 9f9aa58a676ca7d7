//! Chatbot keyword rule models and DTOs.

use agency_core::chatbot::{RuleRef, MAX_RESPONSE_LENGTH};
use agency_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// `MAX_RESPONSE_LENGTH` as the `u64` the `validator` length check expects.
const MAX_RESPONSE_LENGTH_U64: u64 = MAX_RESPONSE_LENGTH as u64;

/// A row from the `chatbot_rules` table.
///
/// `keywords` are stored normalized (lowercase, trimmed, de-duplicated).
/// `priority` may be NULL for rows written without one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatbotRule {
    pub id: DbId,
    pub keywords: Vec<String>,
    pub response: String,
    pub priority: Option<i32>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ChatbotRule {
    /// Borrow this row as matcher input.
    pub fn as_rule(&self) -> RuleRef<'_> {
        RuleRef {
            keywords: &self.keywords,
            response: &self.response,
            priority: self.priority,
        }
    }
}

/// DTO for creating a rule. Keywords are normalized before insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChatbotRule {
    pub keywords: Vec<String>,
    #[validate(length(min = 1, max = MAX_RESPONSE_LENGTH_U64))]
    pub response: String,
    #[validate(range(min = 0, max = 1000))]
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a rule.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateChatbotRule {
    pub keywords: Option<Vec<String>>,
    #[validate(length(min = 1, max = MAX_RESPONSE_LENGTH_U64))]
    pub response: Option<String>,
    #[validate(range(min = 0, max = 1000))]
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
}
