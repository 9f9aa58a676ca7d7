//! Repository round trips for content, inbox and account tables.

use agency_core::chatbot::{Matcher, DEFAULT_FALLBACK};
use agency_core::message::STATUS_REPLIED;
use agency_db::models::contact_message::CreateContactMessage;
use agency_db::models::feedback::CreateFeedback;
use agency_db::models::project::{CreateProject, UpdateProject};
use agency_db::models::session::CreateSession;
use agency_db::models::user::CreateUser;
use agency_db::repositories::{
    ChatbotRuleRepo, ContactMessageRepo, FeedbackRepo, ProjectRepo, SessionRepo, UserRepo,
};
use sqlx::PgPool;

fn project(title: &str, category: &str, featured: bool) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: "Case study".to_string(),
        category: category.to_string(),
        image_url: None,
        technologies: vec!["Rust".to_string()],
        client_name: None,
        project_url: None,
        is_featured: Some(featured),
        sort_order: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn project_partial_update_keeps_unset_fields(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &project("Portal", "Web", false))
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        created.id,
        &UpdateProject {
            is_featured: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert!(updated.is_featured);
    assert_eq!(updated.title, "Portal");
    assert_eq!(updated.technologies, vec!["Rust"]);
    assert_eq!(ProjectRepo::list_featured(&pool).await.unwrap().len(), 1);

    assert!(ProjectRepo::update(&pool, created.id + 1000, &UpdateProject::default())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn project_categories_are_distinct(pool: PgPool) {
    for (title, category) in [("A", "Web"), ("B", "Mobile"), ("C", "Web")] {
        ProjectRepo::create(&pool, &project(title, category, false))
            .await
            .unwrap();
    }
    assert_eq!(
        ProjectRepo::list_categories(&pool).await.unwrap(),
        vec!["Mobile", "Web"]
    );
    assert_eq!(ProjectRepo::list_by_category(&pool, "WEB").await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn active_rules_feed_the_matcher_in_fetch_order(pool: PgPool) {
    ChatbotRuleRepo::ensure_defaults(&pool).await.unwrap();
    let unset = ChatbotRuleRepo::create(
        &pool,
        &["quote".to_string()],
        "unset-first?",
        None,
        None,
    )
    .await
    .unwrap();
    assert_eq!(unset.priority, Some(10));

    // Rows inserted with a NULL priority sort after every explicit one.
    sqlx::query("UPDATE chatbot_rules SET priority = NULL WHERE id = $1")
        .bind(unset.id)
        .execute(&pool)
        .await
        .unwrap();

    let rules = ChatbotRuleRepo::list_active(&pool).await.unwrap();
    assert_eq!(rules.last().unwrap().id, unset.id);

    let matcher = Matcher::new(rules.iter().map(|r| r.as_rule()), DEFAULT_FALLBACK);
    let outcome = matcher.respond("Can I get a quote?");
    assert!(outcome.matched);
    assert!(outcome.response.starts_with("Pricing depends on scope"));
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_keyword_array_is_rejected_by_schema(pool: PgPool) {
    let result = ChatbotRuleRepo::create(&pool, &[], "nothing", None, None).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn message_reply_sets_status_and_timestamp(pool: PgPool) {
    let msg = ContactMessageRepo::create(
        &pool,
        &CreateContactMessage {
            name: "Pat".into(),
            email: "pat@example.com".into(),
            phone: None,
            subject: None,
            message: "Hello, are you available?".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(ContactMessageRepo::count_new(&pool).await.unwrap(), 1);

    let replied = ContactMessageRepo::reply(&pool, msg.id, "Yes we are.")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(replied.status, STATUS_REPLIED);
    assert_eq!(replied.reply.as_deref(), Some("Yes we are."));
    assert!(replied.replied_at.is_some());
    assert_eq!(ContactMessageRepo::count_new(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn feedback_summary_counts_only_approved(pool: PgPool) {
    for rating in [5, 3, 1] {
        let fb = FeedbackRepo::create(
            &pool,
            &CreateFeedback {
                name: "Client".into(),
                email: None,
                company: None,
                rating,
                comment: "Feedback".into(),
            },
        )
        .await
        .unwrap();
        if rating >= 3 {
            FeedbackRepo::set_approved(&pool, fb.id, true).await.unwrap();
        }
    }

    let summary = FeedbackRepo::approved_summary(&pool).await.unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average_rating, Some(4.0));
    assert_eq!(FeedbackRepo::count_pending(&pool).await.unwrap(), 1);
    assert_eq!(FeedbackRepo::list_approved(&pool, Some(1)).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn revoked_sessions_are_not_found(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "sam".into(),
            email: "sam@test.com".into(),
            password_hash: "$argon2id$placeholder".into(),
            role: "editor".into(),
        },
    )
    .await
    .unwrap();

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "abc123".into(),
            expires_at: chrono::Utc::now() + chrono::Duration::days(1),
        },
    )
    .await
    .unwrap();

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "abc123")
        .await
        .unwrap()
        .is_some());
    assert!(SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(!SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "abc123")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_username_is_skipped_by_create_if_absent(pool: PgPool) {
    let input = CreateUser {
        username: "root".into(),
        email: "root@test.com".into(),
        password_hash: "$argon2id$placeholder".into(),
        role: "admin".into(),
    };
    assert!(UserRepo::create_if_absent(&pool, &input).await.unwrap().is_some());
    assert!(UserRepo::create_if_absent(&pool, &input).await.unwrap().is_none());
}
