//! Site-wide settings (a single row).

use agency_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// The `site_settings` row (always `id = 1`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: DbId,
    pub site_name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub business_hours: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub instagram_url: Option<String>,
    pub github_url: Option<String>,
    pub chatbot_greeting: Option<String>,
    pub chatbot_fallback: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for partially updating the settings.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSiteSettings {
    #[validate(length(min = 1, max = 120))]
    pub site_name: Option<String>,
    #[validate(length(max = 300))]
    pub tagline: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(length(max = 50))]
    pub contact_phone: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 200))]
    pub business_hours: Option<String>,
    #[validate(url)]
    pub facebook_url: Option<String>,
    #[validate(url)]
    pub twitter_url: Option<String>,
    #[validate(url)]
    pub linkedin_url: Option<String>,
    #[validate(url)]
    pub instagram_url: Option<String>,
    #[validate(url)]
    pub github_url: Option<String>,
    #[validate(length(max = 1000))]
    pub chatbot_greeting: Option<String>,
    #[validate(length(min = 1, max = 1000))]
    pub chatbot_fallback: Option<String>,
}
