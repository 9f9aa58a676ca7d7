//! Route definitions for the admin dashboard, mounted at `/admin`.
//!
//! Every handler enforces its role through an extractor
//! (`RequireEditor` or `RequireAdmin`).

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::{
    chatbot, dashboard, faqs, feedback, inquiries, messages, projects, services, settings, stats,
    team,
};
use crate::state::AppState;

/// ```text
/// GET, POST          /services
/// GET, PUT, DELETE   /services/{id}
/// GET, POST          /projects
/// GET, PUT, DELETE   /projects/{id}
/// GET, POST          /team
/// GET, PUT, DELETE   /team/{id}
/// GET, POST          /stats
/// GET, PUT, DELETE   /stats/{id}
/// GET, POST          /faqs
/// GET, PUT, DELETE   /faqs/{id}
/// GET, POST          /chatbot-rules
/// POST               /chatbot-rules/test
/// GET, PUT, DELETE   /chatbot-rules/{id}
/// GET, PUT           /settings
/// GET                /messages
/// GET, DELETE        /messages/{id}
/// PATCH              /messages/{id}/status
/// POST               /messages/{id}/reply
/// GET                /inquiries
/// GET, DELETE        /inquiries/{id}
/// PATCH              /inquiries/{id}/status
/// GET                /feedback
/// DELETE             /feedback/{id}
/// PATCH              /feedback/{id}/approval
/// GET                /notifications/counts
/// GET                /dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Content
        .route(
            "/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/services/{id}",
            get(services::get_service)
                .put(services::update_service)
                .delete(services::delete_service),
        )
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/team", get(team::list_members).post(team::create_member))
        .route(
            "/team/{id}",
            get(team::get_member)
                .put(team::update_member)
                .delete(team::delete_member),
        )
        .route("/stats", get(stats::list_stats).post(stats::create_stat))
        .route(
            "/stats/{id}",
            get(stats::get_stat)
                .put(stats::update_stat)
                .delete(stats::delete_stat),
        )
        .route("/faqs", get(faqs::list_faqs).post(faqs::create_faq))
        .route(
            "/faqs/{id}",
            get(faqs::get_faq)
                .put(faqs::update_faq)
                .delete(faqs::delete_faq),
        )
        // Chatbot and settings (admin only)
        .route(
            "/chatbot-rules",
            get(chatbot::list_rules).post(chatbot::create_rule),
        )
        .route("/chatbot-rules/test", post(chatbot::test_rules))
        .route(
            "/chatbot-rules/{id}",
            get(chatbot::get_rule)
                .put(chatbot::update_rule)
                .delete(chatbot::delete_rule),
        )
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        // Inboxes
        .route("/messages", get(messages::list_messages))
        .route(
            "/messages/{id}",
            get(messages::get_message).delete(messages::delete_message),
        )
        .route(
            "/messages/{id}/status",
            patch(messages::update_message_status),
        )
        .route("/messages/{id}/reply", post(messages::reply_to_message))
        .route("/inquiries", get(inquiries::list_inquiries))
        .route(
            "/inquiries/{id}",
            get(inquiries::get_inquiry).delete(inquiries::delete_inquiry),
        )
        .route(
            "/inquiries/{id}/status",
            patch(inquiries::update_inquiry_status),
        )
        .route("/feedback", get(feedback::list_feedback))
        .route("/feedback/{id}", delete(feedback::delete_feedback))
        .route("/feedback/{id}/approval", patch(feedback::set_approval))
        // Overview
        .route(
            "/notifications/counts",
            get(dashboard::notification_counts),
        )
        .route("/dashboard", get(dashboard::overview))
}
