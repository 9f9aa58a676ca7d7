//! Chatbot endpoints: the public responder and admin rule management.

use agency_core::chatbot::{
    normalize_keywords, validate_keywords, MatchOutcome, Matcher, DEFAULT_FALLBACK,
};
use agency_core::defaults::CHATBOT_GREETING;
use agency_core::types::DbId;
use agency_core::validation::require_non_blank;
use agency_db::models::chatbot_rule::{CreateChatbotRule, UpdateChatbotRule};
use agency_db::repositories::{ChatbotRuleRepo, SettingsRepo};
use agency_db::DbPool;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /chatbot/respond` and the admin test endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(max = 1000))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub greeting: String,
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/chatbot/respond
///
/// Answer a visitor message from the active rules. Unmatched and empty
/// messages receive the configured fallback with `matched: false`.
pub async fn respond(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<Json<DataResponse<MatchOutcome>>> {
    input.validate()?;
    let outcome = answer(&state.pool, &input.message).await?;

    tracing::debug!(matched = outcome.matched, "Chatbot responded");

    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/chatbot/greeting
pub async fn greeting(State(state): State<AppState>) -> AppResult<Json<DataResponse<Greeting>>> {
    let settings = SettingsRepo::get(&state.pool).await?;
    let greeting = settings
        .chatbot_greeting
        .filter(|g| !g.trim().is_empty())
        .unwrap_or_else(|| CHATBOT_GREETING.to_string());
    Ok(Json(DataResponse {
        data: Greeting { greeting },
    }))
}

// ---------------------------------------------------------------------------
// Admin rule management
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/chatbot-rules
pub async fn list_rules(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rules = ChatbotRuleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: rules }))
}

/// GET /api/v1/admin/chatbot-rules/{id}
pub async fn get_rule(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rule = ChatbotRuleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("ChatbotRule", id))?;
    Ok(Json(DataResponse { data: rule }))
}

/// POST /api/v1/admin/chatbot-rules
///
/// Keywords are normalized before storage; a rule must keep at least one.
pub async fn create_rule(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateChatbotRule>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("response", &input.response)?;
    let keywords = normalize_keywords(&input.keywords);
    validate_keywords(&keywords)?;

    let rule = ChatbotRuleRepo::create(
        &state.pool,
        &keywords,
        input.response.trim(),
        input.priority,
        input.is_active,
    )
    .await?;

    tracing::info!(
        rule_id = rule.id,
        keywords = rule.keywords.len(),
        user_id = admin.user_id,
        "Chatbot rule created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: rule })))
}

/// PUT /api/v1/admin/chatbot-rules/{id}
pub async fn update_rule(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChatbotRule>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(response) = &input.response {
        require_non_blank("response", response)?;
    }
    let keywords = match &input.keywords {
        Some(raw) => {
            let normalized = normalize_keywords(raw);
            validate_keywords(&normalized)?;
            Some(normalized)
        }
        None => None,
    };

    let rule = ChatbotRuleRepo::update(
        &state.pool,
        id,
        keywords.as_deref(),
        input.response.as_deref().map(str::trim),
        input.priority,
        input.is_active,
    )
    .await?
    .ok_or_else(|| AppError::not_found("ChatbotRule", id))?;

    tracing::info!(rule_id = id, user_id = admin.user_id, "Chatbot rule updated");

    Ok(Json(DataResponse { data: rule }))
}

/// DELETE /api/v1/admin/chatbot-rules/{id}
pub async fn delete_rule(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ChatbotRuleRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("ChatbotRule", id));
    }

    tracing::info!(rule_id = id, user_id = admin.user_id, "Chatbot rule deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/chatbot-rules/test
///
/// Preview how the stored active rules answer `message`.
pub async fn test_rules(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<Json<DataResponse<MatchOutcome>>> {
    input.validate()?;
    let outcome = answer(&state.pool, &input.message).await?;
    Ok(Json(DataResponse { data: outcome }))
}

/// Match `message` against the active rules with the configured fallback.
async fn answer(pool: &DbPool, message: &str) -> AppResult<MatchOutcome> {
    let rules = ChatbotRuleRepo::list_active(pool).await?;
    let settings = SettingsRepo::get(pool).await?;
    let fallback = settings
        .chatbot_fallback
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FALLBACK.to_string());

    let matcher = Matcher::new(rules.iter().map(|r| r.as_rule()), fallback);
    Ok(matcher.respond(message))
}
