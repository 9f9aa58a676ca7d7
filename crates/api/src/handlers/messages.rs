//! Admin inbox for contact form messages (`/admin/messages`).

use agency_core::message;
use agency_core::types::DbId;
use agency_db::models::contact_message::{ReplyToMessage, UpdateMessageStatus};
use agency_db::repositories::ContactMessageRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/messages?status=
pub async fn list_messages(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &filter.status {
        message::validate_status(status)?;
    }
    let messages = ContactMessageRepo::list(&state.pool, filter.status.as_deref()).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/v1/admin/messages/{id}
///
/// Opening a `new` message marks it `read`.
pub async fn get_message(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut msg = ContactMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("ContactMessage", id))?;

    if msg.status == message::STATUS_NEW {
        if let Some(updated) =
            ContactMessageRepo::set_status(&state.pool, id, message::STATUS_READ).await?
        {
            msg = updated;
        }
    }

    Ok(Json(DataResponse { data: msg }))
}

/// PATCH /api/v1/admin/messages/{id}/status
pub async fn update_message_status(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMessageStatus>,
) -> AppResult<impl IntoResponse> {
    message::validate_status(&input.status)?;

    let msg = ContactMessageRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::not_found("ContactMessage", id))?;

    tracing::info!(message_id = id, status = %msg.status, user_id = user.user_id, "Message status changed");

    Ok(Json(DataResponse { data: msg }))
}

/// POST /api/v1/admin/messages/{id}/reply
///
/// Records the reply and marks the message `replied`. Nothing is emailed.
pub async fn reply_to_message(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplyToMessage>,
) -> AppResult<impl IntoResponse> {
    message::validate_reply(&input.reply)?;

    let msg = ContactMessageRepo::reply(&state.pool, id, input.reply.trim())
        .await?
        .ok_or_else(|| AppError::not_found("ContactMessage", id))?;

    tracing::info!(message_id = id, user_id = user.user_id, "Message reply recorded");

    Ok(Json(DataResponse { data: msg }))
}

/// DELETE /api/v1/admin/messages/{id}
pub async fn delete_message(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ContactMessageRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("ContactMessage", id));
    }

    tracing::info!(message_id = id, user_id = user.user_id, "Message deleted");

    Ok(StatusCode::NO_CONTENT)
}
