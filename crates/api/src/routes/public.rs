//! Unauthenticated routes used by the marketing site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chatbot, pages, settings, submissions};
use crate::state::AppState;

/// Page payloads, public settings, form submissions and the chatbot.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/pages", pages_router())
        .route("/settings", get(settings::public_settings))
        .route("/contact", post(submissions::submit_contact))
        .route("/inquiries", post(submissions::submit_inquiry))
        .route("/feedback", post(submissions::submit_feedback))
        .route("/chatbot/respond", post(chatbot::respond))
        .route("/chatbot/greeting", get(chatbot::greeting))
}

fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/home", get(pages::home))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/projects", get(pages::projects))
        .route("/team", get(pages::team))
        .route("/faq", get(pages::faq))
        .route("/contact", get(pages::contact))
        .route("/feedback", get(pages::feedback))
}
