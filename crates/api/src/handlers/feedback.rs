//! Feedback moderation (`/admin/feedback`).

use agency_core::types::DbId;
use agency_db::models::feedback::UpdateFeedbackApproval;
use agency_db::repositories::FeedbackRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/feedback
pub async fn list_feedback(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let entries = FeedbackRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// PATCH /api/v1/admin/feedback/{id}/approval
pub async fn set_approval(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFeedbackApproval>,
) -> AppResult<impl IntoResponse> {
    let entry = FeedbackRepo::set_approved(&state.pool, id, input.is_approved)
        .await?
        .ok_or_else(|| AppError::not_found("Feedback", id))?;

    tracing::info!(
        feedback_id = id,
        is_approved = entry.is_approved,
        user_id = user.user_id,
        "Feedback moderated",
    );

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/admin/feedback/{id}
pub async fn delete_feedback(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !FeedbackRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Feedback", id));
    }

    tracing::info!(feedback_id = id, user_id = user.user_id, "Feedback deleted");

    Ok(StatusCode::NO_CONTENT)
}
