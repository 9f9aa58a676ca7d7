//! Dashboard overview and notification badge counts.

use agency_db::models::contact_message::StatusCount;
use agency_db::models::feedback::FeedbackSummary;
use agency_db::repositories::{
    ContactMessageRepo, FeedbackRepo, InquiryRepo, ProjectRepo, ServiceRepo, TeamMemberRepo,
};
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Unread counts polled by the dashboard header.
#[derive(Debug, Serialize)]
pub struct NotificationCounts {
    pub new_messages: i64,
    pub new_inquiries: i64,
    pub pending_feedback: i64,
}

/// Totals shown on the dashboard landing page.
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub services: i64,
    pub projects: i64,
    pub team_members: i64,
    pub messages_by_status: Vec<StatusCount>,
    pub inquiries_by_status: Vec<StatusCount>,
    pub approved_feedback: FeedbackSummary,
    pub pending_feedback: i64,
}

/// GET /api/v1/admin/notifications/counts
pub async fn notification_counts(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<NotificationCounts>>> {
    let pool = &state.pool;
    Ok(Json(DataResponse {
        data: NotificationCounts {
            new_messages: ContactMessageRepo::count_new(pool).await?,
            new_inquiries: InquiryRepo::count_new(pool).await?,
            pending_feedback: FeedbackRepo::count_pending(pool).await?,
        },
    }))
}

/// GET /api/v1/admin/dashboard
pub async fn overview(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardOverview>>> {
    let pool = &state.pool;
    Ok(Json(DataResponse {
        data: DashboardOverview {
            services: ServiceRepo::count(pool).await?,
            projects: ProjectRepo::count(pool).await?,
            team_members: TeamMemberRepo::count(pool).await?,
            messages_by_status: ContactMessageRepo::count_by_status(pool).await?,
            inquiries_by_status: InquiryRepo::count_by_status(pool).await?,
            approved_feedback: FeedbackRepo::approved_summary(pool).await?,
            pending_feedback: FeedbackRepo::count_pending(pool).await?,
        },
    }))
}
