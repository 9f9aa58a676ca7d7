//! Repository for the singleton `site_settings` row.

use agency_core::defaults;
use sqlx::PgPool;

use crate::models::settings::{SiteSettings, UpdateSiteSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, site_name, tagline, description, contact_email, contact_phone, address, \
    business_hours, facebook_url, twitter_url, linkedin_url, instagram_url, github_url, \
    chatbot_greeting, chatbot_fallback, created_at, updated_at";

/// The only valid primary key of `site_settings`.
const SETTINGS_ID: i64 = 1;

/// Provides access to the site settings document.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Insert the default settings row if none exists yet.
    ///
    /// Idempotent: concurrent callers collide on the primary key and all but
    /// one insert become no-ops.
    pub async fn ensure_exists(pool: &PgPool) -> Result<(), sqlx::Error> {
        let inserted = sqlx::query(
            "INSERT INTO site_settings \
                 (id, site_name, tagline, description, contact_email, contact_phone, \
                  business_hours, chatbot_greeting, chatbot_fallback) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(SETTINGS_ID)
        .bind(defaults::SITE_NAME)
        .bind(defaults::SITE_TAGLINE)
        .bind(defaults::SITE_DESCRIPTION)
        .bind(defaults::CONTACT_EMAIL)
        .bind(defaults::CONTACT_PHONE)
        .bind(defaults::BUSINESS_HOURS)
        .bind(defaults::CHATBOT_GREETING)
        .bind(defaults::CHATBOT_FALLBACK)
        .execute(pool)
        .await?;

        if inserted.rows_affected() > 0 {
            tracing::info!("Seeded default site settings");
        }
        Ok(())
    }

    /// Fetch the settings, creating the default row on first access.
    pub async fn get(pool: &PgPool) -> Result<SiteSettings, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        let existing = sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .fetch_optional(pool)
            .await?;
        if let Some(settings) = existing {
            return Ok(settings);
        }

        Self::ensure_exists(pool).await?;
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .fetch_one(pool)
            .await
    }

    /// Partially update the settings. Only non-`None` fields are changed.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        Self::ensure_exists(pool).await?;
        let query = format!(
            "UPDATE site_settings SET \
                 site_name = COALESCE($2, site_name), \
                 tagline = COALESCE($3, tagline), \
                 description = COALESCE($4, description), \
                 contact_email = COALESCE($5, contact_email), \
                 contact_phone = COALESCE($6, contact_phone), \
                 address = COALESCE($7, address), \
                 business_hours = COALESCE($8, business_hours), \
                 facebook_url = COALESCE($9, facebook_url), \
                 twitter_url = COALESCE($10, twitter_url), \
                 linkedin_url = COALESCE($11, linkedin_url), \
                 instagram_url = COALESCE($12, instagram_url), \
                 github_url = COALESCE($13, github_url), \
                 chatbot_greeting = COALESCE($14, chatbot_greeting), \
                 chatbot_fallback = COALESCE($15, chatbot_fallback) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .bind(&input.site_name)
            .bind(&input.tagline)
            .bind(&input.description)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(&input.address)
            .bind(&input.business_hours)
            .bind(&input.facebook_url)
            .bind(&input.twitter_url)
            .bind(&input.linkedin_url)
            .bind(&input.instagram_url)
            .bind(&input.github_url)
            .bind(&input.chatbot_greeting)
            .bind(&input.chatbot_fallback)
            .fetch_one(pool)
            .await
    }
}
