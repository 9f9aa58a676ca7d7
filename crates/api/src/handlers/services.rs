//! Admin handlers for service offerings (`/admin/services`).

use agency_core::error::CoreError;
use agency_core::slug::{generate_slug, validate_slug};
use agency_core::types::DbId;
use agency_core::validation::{require_non_blank, validate_labels};
use agency_db::models::service::{CreateService, UpdateService};
use agency_db::repositories::ServiceRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum number of feature bullets per service.
const MAX_FEATURES: usize = 20;
/// Maximum length of one feature bullet.
const MAX_FEATURE_LENGTH: usize = 120;

/// GET /api/v1/admin/services
pub async fn list_services(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: services }))
}

/// GET /api/v1/admin/services/{id}
pub async fn get_service(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Service", id))?;
    Ok(Json(DataResponse { data: service }))
}

/// POST /api/v1/admin/services
///
/// Without an explicit `slug` one is generated from the title. A taken slug
/// is rejected with 409 by the `uq_services_slug` constraint.
pub async fn create_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateService>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("title", &input.title)?;
    validate_labels("features", &input.features, MAX_FEATURES, MAX_FEATURE_LENGTH)?;

    let slug = match &input.slug {
        Some(slug) => slug.clone(),
        None => generate_slug(&input.title),
    };
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must contain at least one letter or digit to derive a slug".into(),
        )));
    }
    validate_slug(&slug)?;

    let service = ServiceRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(
        service_id = service.id,
        slug = %service.slug,
        user_id = user.user_id,
        "Service created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PUT /api/v1/admin/services/{id}
pub async fn update_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(title) = &input.title {
        require_non_blank("title", title)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(features) = &input.features {
        validate_labels("features", features, MAX_FEATURES, MAX_FEATURE_LENGTH)?;
    }

    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Service", id))?;

    tracing::info!(service_id = id, user_id = user.user_id, "Service updated");

    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/v1/admin/services/{id}
///
/// Inquiries that referenced the service keep their recorded service name.
pub async fn delete_service(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ServiceRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Service", id));
    }

    tracing::info!(service_id = id, user_id = user.user_id, "Service deleted");

    Ok(StatusCode::NO_CONTENT)
}
