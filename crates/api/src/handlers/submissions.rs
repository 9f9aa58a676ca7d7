//! Public form submissions: contact messages, service inquiries, feedback.

use agency_core::validation::require_non_blank;
use agency_db::models::contact_message::CreateContactMessage;
use agency_db::models::feedback::CreateFeedback;
use agency_db::models::inquiry::CreateServiceInquiry;
use agency_db::repositories::{ContactMessageRepo, FeedbackRepo, InquiryRepo, ServiceRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("name", &input.name)?;

    let message = ContactMessageRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// POST /api/v1/inquiries
///
/// When `service_id` is given the service must exist; its current title is
/// stored with the inquiry.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(input): Json<CreateServiceInquiry>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("name", &input.name)?;

    let service_name = match input.service_id {
        Some(service_id) => {
            let service = ServiceRepo::find_by_id(&state.pool, service_id)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(format!("Service with id {service_id} does not exist"))
                })?;
            Some(service.title)
        }
        None => None,
    };

    let inquiry = InquiryRepo::create(&state.pool, &input, service_name.as_deref()).await?;

    tracing::info!(
        inquiry_id = inquiry.id,
        service_id = ?inquiry.service_id,
        "Service inquiry received",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: inquiry })))
}

/// POST /api/v1/feedback
///
/// Stored unapproved; it appears publicly once moderated.
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    require_non_blank("name", &input.name)?;
    require_non_blank("comment", &input.comment)?;

    let feedback = FeedbackRepo::create(&state.pool, &input).await?;

    tracing::info!(feedback_id = feedback.id, rating = feedback.rating, "Feedback received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}
