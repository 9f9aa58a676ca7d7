//! Portfolio project models and DTOs.

use agency_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: Option<String>,
    pub technologies: Vec<String>,
    pub client_name: Option<String>,
    pub project_url: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(url)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[validate(length(max = 200))]
    pub client_name: Option<String>,
    #[validate(url)]
    pub project_url: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for partially updating a project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[validate(length(max = 200))]
    pub client_name: Option<String>,
    #[validate(url)]
    pub project_url: Option<String>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}
