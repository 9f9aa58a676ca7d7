pub mod admin;
pub mod auth;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                           login (public)
/// /auth/refresh                         refresh (public)
/// /auth/logout                          logout (requires auth)
/// /auth/me                              current account (requires auth)
///
/// /pages/home                           home payload
/// /pages/about                          about payload
/// /pages/services                       active services
/// /pages/projects?category=             projects + categories
/// /pages/team                           active team
/// /pages/faq                            published FAQs by category
/// /pages/contact                        contact details + services
/// /pages/feedback                       approved feedback + rating
/// /settings                             public site settings
///
/// /contact                              submit contact message (POST)
/// /inquiries                            submit service inquiry (POST)
/// /feedback                             submit feedback (POST)
/// /chatbot/respond                      chatbot answer (POST)
/// /chatbot/greeting                     chatbot greeting (GET)
///
/// /admin/services[/{id}]                CRUD (editor)
/// /admin/projects[/{id}]                CRUD (editor)
/// /admin/team[/{id}]                    CRUD (editor)
/// /admin/stats[/{id}]                   CRUD (editor)
/// /admin/faqs[/{id}]                    CRUD (editor)
/// /admin/chatbot-rules[/{id}]           CRUD (admin)
/// /admin/chatbot-rules/test             preview matcher (POST, admin)
/// /admin/settings                       get, update (admin)
/// /admin/messages?status=               list (editor)
/// /admin/messages/{id}                  get, delete
/// /admin/messages/{id}/status           change status (PATCH)
/// /admin/messages/{id}/reply            record reply (POST)
/// /admin/inquiries?status=              list (editor)
/// /admin/inquiries/{id}                 get, delete
/// /admin/inquiries/{id}/status          change status (PATCH)
/// /admin/feedback                       list (editor)
/// /admin/feedback/{id}                  delete
/// /admin/feedback/{id}/approval         approve / hide (PATCH)
/// /admin/notifications/counts           badge counts
/// /admin/dashboard                      totals
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(public::router())
        .nest("/admin", admin::router())
}
