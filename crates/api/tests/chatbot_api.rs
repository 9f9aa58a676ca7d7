//! Chatbot responder and admin rule management over HTTP.

mod common;

use agency_core::chatbot::DEFAULT_FALLBACK;
use agency_core::defaults::CHATBOT_GREETING;
use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, post_json_auth, put_json_auth, token_for};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn ask(pool: &PgPool, message: &str) -> Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/chatbot/respond",
        json!({ "message": message }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn default_rules_answer_greetings(pool: PgPool) {
    let answer = ask(&pool, "Hi!").await;
    assert_eq!(answer["matched"], true);
    assert_eq!(answer["response"], "Hello! How can we help you today?");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn plural_keyword_in_defaults_matches(pool: PgPool) {
    let answer = ask(&pool, "What services do you offer?").await;
    assert_eq!(answer["matched"], true);
    assert!(answer["response"]
        .as_str()
        .unwrap()
        .starts_with("We offer web development"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unmatched_and_empty_messages_get_fallback(pool: PgPool) {
    for message in ["xyzzy plugh", "", "   "] {
        let answer = ask(&pool, message).await;
        assert_eq!(answer["matched"], false);
        assert_eq!(answer["response"], DEFAULT_FALLBACK);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn fallback_follows_settings(pool: PgPool) {
    let token = token_for(&pool, "admin", "admin").await;
    let response = put_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/settings",
        json!({ "chatbot_fallback": "Please call us." }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let answer = ask(&pool, "xyzzy").await;
    assert_eq!(answer["response"], "Please call us.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn greeting_comes_from_settings(pool: PgPool) {
    let json = body_json(get(build_test_app(pool), "/api/v1/chatbot/greeting").await).await;
    assert_eq!(json["data"]["greeting"], CHATBOT_GREETING);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn new_rule_is_normalized_and_wins_by_priority(pool: PgPool) {
    let token = token_for(&pool, "admin", "admin").await;
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/chatbot-rules",
        json!({
            "keywords": ["  Warranty ", "warranty", ""],
            "response": "Every project includes a 90-day warranty.",
            "priority": 0
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let rule = body_json(response).await["data"].clone();
    assert_eq!(rule["keywords"], json!(["warranty"]));
    assert_eq!(rule["priority"], 0);

    // "offer" also hits the default services rule, which has priority 10.
    let answer = ask(&pool, "Do you offer a WARRANTY?").await;
    assert_eq!(answer["response"], "Every project includes a 90-day warranty.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rule_without_priority_gets_default(pool: PgPool) {
    let token = token_for(&pool, "admin", "admin").await;
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/admin/chatbot-rules",
        json!({ "keywords": ["support"], "response": "We offer 24/7 support plans." }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let rule = body_json(response).await["data"].clone();
    assert_eq!(rule["priority"], 10);
    assert_eq!(rule["is_active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rule_needs_a_keyword(pool: PgPool) {
    let token = token_for(&pool, "admin", "admin").await;
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/admin/chatbot-rules",
        json!({ "keywords": ["  ", ""], "response": "Nothing" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deactivated_rule_stops_matching(pool: PgPool) {
    let token = token_for(&pool, "admin", "admin").await;
    let rules = body_json(
        common::get_auth(build_test_app(pool.clone()), "/api/v1/admin/chatbot-rules", &token).await,
    )
    .await;
    let greeting_rule = rules["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["keywords"].as_array().unwrap().contains(&json!("hello")))
        .expect("default greeting rule")
        .clone();
    let id = greeting_rule["id"].as_i64().unwrap();

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/chatbot-rules/{id}"),
        json!({ "is_active": false }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let answer = ask(&pool, "hello").await;
    assert_eq!(answer["matched"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_can_preview_matching(pool: PgPool) {
    let token = token_for(&pool, "admin", "admin").await;
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/admin/chatbot-rules/test",
        json!({ "message": "what are your opening hours" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["matched"], true);
    assert_eq!(json["data"]["response"], "We are available Monday to Friday, 9:00 to 18:00.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn editors_cannot_change_rules(pool: PgPool) {
    let token = token_for(&pool, "editor", "editor").await;
    let response = post_json_auth(
        build_test_app(pool),
        "/api/v1/admin/chatbot-rules",
        json!({ "keywords": ["x"], "response": "y" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
