//! Admin handlers for FAQ entries (`/admin/faqs`).

use agency_core::types::DbId;
use agency_core::validation::require_non_blank;
use agency_db::models::faq::{CreateFaq, UpdateFaq};
use agency_db::repositories::FaqRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/faqs
///
/// Flat list including unpublished entries.
pub async fn list_faqs(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let faqs = FaqRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: faqs }))
}

/// GET /api/v1/admin/faqs/{id}
pub async fn get_faq(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let faq = FaqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Faq", id))?;
    Ok(Json(DataResponse { data: faq }))
}

/// POST /api/v1/admin/faqs
pub async fn create_faq(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateFaq>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("question", &input.question)?;
    require_non_blank("answer", &input.answer)?;

    let faq = FaqRepo::create(&state.pool, &input).await?;

    tracing::info!(faq_id = faq.id, user_id = user.user_id, "FAQ created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: faq })))
}

/// PUT /api/v1/admin/faqs/{id}
pub async fn update_faq(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaq>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let faq = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Faq", id))?;

    tracing::info!(faq_id = id, user_id = user.user_id, "FAQ updated");

    Ok(Json(DataResponse { data: faq }))
}

/// DELETE /api/v1/admin/faqs/{id}
pub async fn delete_faq(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !FaqRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Faq", id));
    }

    tracing::info!(faq_id = id, user_id = user.user_id, "FAQ deleted");

    Ok(StatusCode::NO_CONTENT)
}
