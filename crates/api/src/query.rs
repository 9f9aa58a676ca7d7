//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?status=` filter for the message and inquiry inboxes.
#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

/// `?category=` filter for the projects page.
#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}
