//! Admin inbox for service inquiries (`/admin/inquiries`).

use agency_core::inquiry;
use agency_core::types::DbId;
use agency_db::models::inquiry::UpdateInquiryStatus;
use agency_db::repositories::InquiryRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/inquiries?status=
pub async fn list_inquiries(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &filter.status {
        inquiry::validate_status(status)?;
    }
    let inquiries = InquiryRepo::list(&state.pool, filter.status.as_deref()).await?;
    Ok(Json(DataResponse { data: inquiries }))
}

/// GET /api/v1/admin/inquiries/{id}
pub async fn get_inquiry(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = InquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("ServiceInquiry", id))?;
    Ok(Json(DataResponse { data: found }))
}

/// PATCH /api/v1/admin/inquiries/{id}/status
pub async fn update_inquiry_status(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInquiryStatus>,
) -> AppResult<impl IntoResponse> {
    inquiry::validate_status(&input.status)?;

    let updated = InquiryRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::not_found("ServiceInquiry", id))?;

    tracing::info!(inquiry_id = id, status = %updated.status, user_id = user.user_id, "Inquiry status changed");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/admin/inquiries/{id}
pub async fn delete_inquiry(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !InquiryRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("ServiceInquiry", id));
    }

    tracing::info!(inquiry_id = id, user_id = user.user_id, "Inquiry deleted");

    Ok(StatusCode::NO_CONTENT)
}
