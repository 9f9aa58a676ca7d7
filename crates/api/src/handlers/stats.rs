//! Admin handlers for headline stats (`/admin/stats`).
//!
//! Responses carry the parsed counter next to the stored display value so
//! the dashboard can preview the animation target.

use agency_core::types::DbId;
use agency_core::validation::require_non_blank;
use agency_db::models::stat::{CreateStat, StatDisplay, UpdateStat};
use agency_db::repositories::StatRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/stats
pub async fn list_stats(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats: Vec<StatDisplay> = StatRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(StatDisplay::from)
        .collect();
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/admin/stats/{id}
pub async fn get_stat(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stat = StatRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Stat", id))?;
    Ok(Json(DataResponse {
        data: StatDisplay::from(stat),
    }))
}

/// POST /api/v1/admin/stats
pub async fn create_stat(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateStat>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("label", &input.label)?;
    require_non_blank("value", &input.value)?;

    let stat = StatRepo::create(&state.pool, &input).await?;

    tracing::info!(stat_id = stat.id, value = %stat.value, user_id = user.user_id, "Stat created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: StatDisplay::from(stat),
        }),
    ))
}

/// PUT /api/v1/admin/stats/{id}
pub async fn update_stat(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStat>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let stat = StatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Stat", id))?;

    tracing::info!(stat_id = id, user_id = user.user_id, "Stat updated");

    Ok(Json(DataResponse {
        data: StatDisplay::from(stat),
    }))
}

/// DELETE /api/v1/admin/stats/{id}
pub async fn delete_stat(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !StatRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Stat", id));
    }

    tracing::info!(stat_id = id, user_id = user.user_id, "Stat deleted");

    Ok(StatusCode::NO_CONTENT)
}
