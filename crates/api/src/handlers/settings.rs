//! Site settings: public read, admin read/update.

use agency_core::validation::require_non_blank;
use agency_db::models::settings::{SiteSettings, UpdateSiteSettings};
use agency_db::repositories::SettingsRepo;
use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn public_settings(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SiteSettings>>> {
    let settings = SettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// GET /api/v1/admin/settings
pub async fn get_settings(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SiteSettings>>> {
    let settings = SettingsRepo::get(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/admin/settings
///
/// Partial update; omitted fields keep their stored values.
pub async fn update_settings(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateSiteSettings>,
) -> AppResult<Json<DataResponse<SiteSettings>>> {
    input.validate()?;
    if let Some(site_name) = &input.site_name {
        require_non_blank("site_name", site_name)?;
    }
    if let Some(fallback) = &input.chatbot_fallback {
        require_non_blank("chatbot_fallback", fallback)?;
    }

    let settings = SettingsRepo::update(&state.pool, &input).await?;

    tracing::info!(user_id = admin.user_id, "Site settings updated");

    Ok(Json(DataResponse { data: settings }))
}
