//! Admin handlers for portfolio projects (`/admin/projects`).

use agency_core::types::DbId;
use agency_core::validation::{require_non_blank, validate_labels};
use agency_db::models::project::{CreateProject, UpdateProject};
use agency_db::repositories::ProjectRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

const MAX_TECHNOLOGIES: usize = 30;
const MAX_TECHNOLOGY_LENGTH: usize = 60;

/// GET /api/v1/admin/projects
pub async fn list_projects(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_project(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/admin/projects
pub async fn create_project(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("title", &input.title)?;
    require_non_blank("category", &input.category)?;
    validate_labels(
        "technologies",
        &input.technologies,
        MAX_TECHNOLOGIES,
        MAX_TECHNOLOGY_LENGTH,
    )?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        project_id = project.id,
        category = %project.category,
        user_id = user.user_id,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update_project(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(technologies) = &input.technologies {
        validate_labels(
            "technologies",
            technologies,
            MAX_TECHNOLOGIES,
            MAX_TECHNOLOGY_LENGTH,
        )?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;

    tracing::info!(project_id = id, user_id = user.user_id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete_project(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Project", id));
    }

    tracing::info!(project_id = id, user_id = user.user_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
