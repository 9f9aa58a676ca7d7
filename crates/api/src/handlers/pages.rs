//! Public page payloads.
//!
//! Each handler gathers what one page of the marketing site renders. All
//! reads go through the repositories, so seeded collections get their
//! defaults on the first visit.

use agency_core::faq::{group_by_category, FaqGroup};
use agency_core::types::{DbId, Timestamp};
use agency_db::models::faq::Faq;
use agency_db::models::feedback::Feedback;
use agency_db::models::project::Project;
use agency_db::models::service::Service;
use agency_db::models::settings::SiteSettings;
use agency_db::models::stat::StatDisplay;
use agency_db::models::team_member::TeamMember;
use agency_db::repositories::{
    FaqRepo, FeedbackRepo, ProjectRepo, ServiceRepo, SettingsRepo, StatRepo, TeamMemberRepo,
};
use agency_db::DbPool;
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::CategoryFilter;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of testimonials shown on the home page.
const HOME_TESTIMONIAL_LIMIT: i64 = 6;

// ---------------------------------------------------------------------------
// Payload types
// ---------------------------------------------------------------------------

/// Approved feedback as shown publicly (no email address).
#[derive(Debug, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub company: Option<String>,
    pub rating: i16,
    pub comment: String,
    pub created_at: Timestamp,
}

impl From<Feedback> for Testimonial {
    fn from(f: Feedback) -> Self {
        Self {
            id: f.id,
            name: f.name,
            company: f.company,
            rating: f.rating,
            comment: f.comment,
            created_at: f.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub settings: SiteSettings,
    pub services: Vec<Service>,
    pub featured_projects: Vec<Project>,
    pub stats: Vec<StatDisplay>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Serialize)]
pub struct AboutPage {
    pub settings: SiteSettings,
    pub team: Vec<TeamMember>,
    pub stats: Vec<StatDisplay>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    pub categories: Vec<String>,
    /// The category filter that was applied, if any.
    pub category: Option<String>,
}

/// Contact details plus the services offered in the inquiry form.
#[derive(Debug, Serialize)]
pub struct ContactPage {
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub business_hours: Option<String>,
    pub services: Vec<Service>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackPage {
    pub testimonials: Vec<Testimonial>,
    pub count: i64,
    /// Mean rating of approved feedback, absent when there is none.
    pub average_rating: Option<f64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/pages/home
pub async fn home(State(state): State<AppState>) -> AppResult<Json<DataResponse<HomePage>>> {
    let pool = &state.pool;
    let settings = SettingsRepo::get(pool).await?;
    let services = ServiceRepo::list_active(pool).await?;
    let featured_projects = ProjectRepo::list_featured(pool).await?;
    let stats = stat_displays(pool).await?;
    let testimonials = FeedbackRepo::list_approved(pool, Some(HOME_TESTIMONIAL_LIMIT))
        .await?
        .into_iter()
        .map(Testimonial::from)
        .collect();

    Ok(Json(DataResponse {
        data: HomePage {
            settings,
            services,
            featured_projects,
            stats,
            testimonials,
        },
    }))
}

/// GET /api/v1/pages/about
pub async fn about(State(state): State<AppState>) -> AppResult<Json<DataResponse<AboutPage>>> {
    let pool = &state.pool;
    let settings = SettingsRepo::get(pool).await?;
    let team = TeamMemberRepo::list_active(pool).await?;
    let stats = stat_displays(pool).await?;

    Ok(Json(DataResponse {
        data: AboutPage {
            settings,
            team,
            stats,
        },
    }))
}

/// GET /api/v1/pages/services
pub async fn services(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Service>>>> {
    let services = ServiceRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// GET /api/v1/pages/projects?category=
///
/// A blank `category` is treated as no filter.
pub async fn projects(
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<Json<DataResponse<ProjectsPage>>> {
    let category = filter
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let projects = match &category {
        Some(c) => ProjectRepo::list_by_category(&state.pool, c).await?,
        None => ProjectRepo::list(&state.pool).await?,
    };
    let categories = ProjectRepo::list_categories(&state.pool).await?;

    Ok(Json(DataResponse {
        data: ProjectsPage {
            projects,
            categories,
            category,
        },
    }))
}

/// GET /api/v1/pages/team
pub async fn team(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<TeamMember>>>> {
    let team = TeamMemberRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: team }))
}

/// GET /api/v1/pages/faq
///
/// Published FAQs grouped by category, groups in order of first appearance.
pub async fn faq(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<FaqGroup<Faq>>>>> {
    let faqs = FaqRepo::list_published(&state.pool).await?;
    let groups = group_by_category(faqs, |f| f.category.as_deref());
    Ok(Json(DataResponse { data: groups }))
}

/// GET /api/v1/pages/contact
pub async fn contact(State(state): State<AppState>) -> AppResult<Json<DataResponse<ContactPage>>> {
    let settings = SettingsRepo::get(&state.pool).await?;
    let services = ServiceRepo::list_active(&state.pool).await?;

    Ok(Json(DataResponse {
        data: ContactPage {
            contact_email: settings.contact_email,
            contact_phone: settings.contact_phone,
            address: settings.address,
            business_hours: settings.business_hours,
            services,
        },
    }))
}

/// GET /api/v1/pages/feedback
pub async fn feedback(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<FeedbackPage>>> {
    let testimonials = FeedbackRepo::list_approved(&state.pool, None)
        .await?
        .into_iter()
        .map(Testimonial::from)
        .collect();
    let summary = FeedbackRepo::approved_summary(&state.pool).await?;

    Ok(Json(DataResponse {
        data: FeedbackPage {
            testimonials,
            count: summary.count,
            average_rating: summary.average_rating,
        },
    }))
}

async fn stat_displays(pool: &DbPool) -> AppResult<Vec<StatDisplay>> {
    Ok(StatRepo::list(pool)
        .await?
        .into_iter()
        .map(StatDisplay::from)
        .collect())
}
