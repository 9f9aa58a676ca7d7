//! Admin handlers for team members (`/admin/team`).

use agency_core::types::DbId;
use agency_core::validation::require_non_blank;
use agency_db::models::team_member::{CreateTeamMember, UpdateTeamMember};
use agency_db::repositories::TeamMemberRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/team
pub async fn list_members(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: members }))
}

/// GET /api/v1/admin/team/{id}
pub async fn get_member(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("TeamMember", id))?;
    Ok(Json(DataResponse { data: member }))
}

/// POST /api/v1/admin/team
pub async fn create_member(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("name", &input.name)?;
    require_non_blank("position", &input.position)?;

    let member = TeamMemberRepo::create(&state.pool, &input).await?;

    tracing::info!(member_id = member.id, user_id = user.user_id, "Team member added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// PUT /api/v1/admin/team/{id}
pub async fn update_member(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeamMember>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("TeamMember", id))?;

    tracing::info!(member_id = id, user_id = user.user_id, "Team member updated");

    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/admin/team/{id}
pub async fn delete_member(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TeamMemberRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("TeamMember", id));
    }

    tracing::info!(member_id = id, user_id = user.user_id, "Team member removed");

    Ok(StatusCode::NO_CONTENT)
}
