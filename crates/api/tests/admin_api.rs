//! Admin content management and inbox workflows.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get, get_auth, patch_json_auth, post_json,
    post_json_auth, put_json_auth, token_for,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn service_crud_with_generated_slug(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;

    let body = json!({
        "title": "Data & Analytics",
        "description": "Dashboards and pipelines.",
        "features": ["Reporting", "ETL"]
    });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/admin/services", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await["data"].clone();
    assert_eq!(created["slug"], "data-analytics");
    assert_eq!(created["is_active"], true);
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/services/{id}"),
        json!({ "is_active": false }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await["data"].clone();
    assert_eq!(updated["is_active"], false);
    assert_eq!(updated["title"], "Data & Analytics");

    // Hidden from the public page.
    let public = body_json(get(build_test_app(pool.clone()), "/api/v1/pages/services").await).await;
    assert!(public["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|s| s["id"].as_i64() != Some(id)));

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/services/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/services/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_service_slug_is_a_conflict(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let body = json!({ "title": "Web Development", "description": "Again" });

    // Seed defaults first so the slug already exists.
    get(build_test_app(pool.clone()), "/api/v1/pages/services").await;

    let response =
        post_json_auth(build_test_app(pool), "/api/v1/admin/services", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_slug_and_blank_features_are_rejected(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;

    let body = json!({ "title": "Consulting", "slug": "Not A Slug", "description": "Advice" });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/admin/services", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({ "title": "Consulting", "description": "Advice", "features": [" "] });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/admin/services", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({ "title": "!!!", "description": "Advice" });
    let response =
        post_json_auth(build_test_app(pool), "/api/v1/admin/services", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleted_defaults_are_not_reseeded(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let list = body_json(get_auth(build_test_app(pool.clone()), "/api/v1/admin/services", &token).await).await;
    for service in list["data"].as_array().unwrap() {
        let id = service["id"].as_i64().unwrap();
        let response = delete_auth(
            build_test_app(pool.clone()),
            &format!("/api/v1/admin/services/{id}"),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let public = body_json(get(build_test_app(pool), "/api/v1/pages/services").await).await;
    assert_eq!(public["data"], json!([]));
}

// ---------------------------------------------------------------------------
// Stats, team, FAQs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn stat_responses_carry_parsed_counter(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/stats",
        json!({ "label": "Lines of code", "value": "250k" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let stat = body_json(response).await["data"].clone();
    assert_eq!(stat["counter"], json!({ "target": 250, "suffix": "k" }));

    let id = stat["id"].as_i64().unwrap();
    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/stats/{id}"),
        json!({ "value": "N/A" }),
        &token,
    )
    .await;
    let stat = body_json(response).await["data"].clone();
    assert_eq!(stat["counter"], json!({ "target": 0, "suffix": "N/A" }));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn inactive_team_members_are_hidden(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    for (name, active) in [("Jo", true), ("Sam", false)] {
        let response = post_json_auth(
            build_test_app(pool.clone()),
            "/api/v1/admin/team",
            json!({ "name": name, "position": "Engineer", "is_active": active }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let public = body_json(get(build_test_app(pool.clone()), "/api/v1/pages/team").await).await;
    assert_eq!(public["data"].as_array().unwrap().len(), 1);
    assert_eq!(public["data"][0]["name"], "Jo");

    let admin = body_json(get_auth(build_test_app(pool), "/api/v1/admin/team", &token).await).await;
    assert_eq!(admin["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn team_member_urls_are_validated(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/admin/team",
        json!({ "name": "Jo", "position": "Engineer", "github_url": "not a url" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "github_url: url");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unpublished_faq_is_admin_only(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/faqs",
        json!({
            "question": "Do you sign NDAs?",
            "answer": "Yes.",
            "category": "Legal",
            "is_published": false
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let public = body_json(get(build_test_app(pool.clone()), "/api/v1/pages/faq").await).await;
    assert!(public["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|g| g["category"] != "Legal"));

    let admin = body_json(get_auth(build_test_app(pool), "/api/v1/admin/faqs", &token).await).await;
    assert_eq!(admin["data"].as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn settings_partial_update_keeps_other_fields(pool: PgPool) {
    let token = token_for(&pool, "admin", "admin").await;
    let response = put_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/settings",
        json!({ "tagline": "Small team, big results", "github_url": "https://github.com/northwind" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let public = body_json(get(build_test_app(pool), "/api/v1/settings").await).await;
    assert_eq!(public["data"]["tagline"], "Small team, big results");
    assert_eq!(public["data"]["github_url"], "https://github.com/northwind");
    assert_eq!(public["data"]["site_name"], "Northwind Digital");
    assert_eq!(public["data"]["id"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn settings_reject_blank_site_name(pool: PgPool) {
    let token = token_for(&pool, "admin", "admin").await;
    let response = put_json_auth(
        build_test_app(pool),
        "/api/v1/admin/settings",
        json!({ "site_name": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Inboxes
// ---------------------------------------------------------------------------

async fn submit_message(pool: &PgPool) -> i64 {
    let body = json!({
        "name": "Pat",
        "email": "pat@example.com",
        "message": "Please call me about a project."
    });
    let response = post_json(build_test_app(pool.clone()), "/api/v1/contact", body).await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn message_workflow(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let id = submit_message(&pool).await;

    let list = body_json(
        get_auth(build_test_app(pool.clone()), "/api/v1/admin/messages?status=new", &token).await,
    )
    .await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    // Opening marks it read.
    let opened = body_json(
        get_auth(build_test_app(pool.clone()), &format!("/api/v1/admin/messages/{id}"), &token).await,
    )
    .await;
    assert_eq!(opened["data"]["status"], "read");

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/messages/{id}/reply"),
        json!({ "reply": "Thanks, we will call tomorrow." }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let replied = body_json(response).await["data"].clone();
    assert_eq!(replied["status"], "replied");
    assert_eq!(replied["reply"], "Thanks, we will call tomorrow.");
    assert!(replied["replied_at"].is_string());

    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/messages/{id}/status"),
        json!({ "status": "archived" }),
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["data"]["status"], "archived");

    let response = delete_auth(
        build_test_app(pool),
        &format!("/api/v1/admin/messages/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn message_status_and_reply_are_validated(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let id = submit_message(&pool).await;

    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/messages/{id}/status"),
        json!({ "status": "spam" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/messages/{id}/reply"),
        json!({ "reply": "  " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_auth(
        build_test_app(pool),
        "/api/v1/admin/messages?status=unknown",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn inquiry_status_filter(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let body = json!({
        "name": "Lee",
        "email": "lee@example.com",
        "message": "General question about pricing."
    });
    let response = post_json(build_test_app(pool.clone()), "/api/v1/inquiries", body).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/inquiries/{id}/status"),
        json!({ "status": "in_progress" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let new = body_json(
        get_auth(build_test_app(pool.clone()), "/api/v1/admin/inquiries?status=new", &token).await,
    )
    .await;
    assert_eq!(new["data"], json!([]));

    let in_progress = body_json(
        get_auth(build_test_app(pool), "/api/v1/admin/inquiries?status=in_progress", &token).await,
    )
    .await;
    assert_eq!(in_progress["data"][0]["id"], id);
    assert!(in_progress["data"][0]["service_name"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_totals(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    submit_message(&pool).await;
    submit_message(&pool).await;

    let json = body_json(get_auth(build_test_app(pool), "/api/v1/admin/dashboard", &token).await).await;
    let data = &json["data"];
    assert_eq!(data["services"], 4);
    assert_eq!(data["projects"], 0);
    assert_eq!(data["messages_by_status"], json!([{ "status": "new", "count": 2 }]));
    assert_eq!(data["inquiries_by_status"], json!([]));
    assert_eq!(data["approved_feedback"]["count"], 0);
    assert_eq!(data["pending_feedback"], 0);
}
