//! Default content is written exactly once per collection.

use agency_core::defaults;
use agency_db::repositories::{
    seed, ChatbotRuleRepo, FaqRepo, ServiceRepo, SettingsRepo, StatRepo,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn first_read_seeds_each_collection(pool: PgPool) {
    assert!(!seed::is_seeded(&pool, defaults::COLLECTION_SERVICES).await.unwrap());

    assert_eq!(ServiceRepo::list(&pool).await.unwrap().len(), defaults::SERVICES.len());
    assert_eq!(StatRepo::list(&pool).await.unwrap().len(), defaults::STATS.len());
    assert_eq!(FaqRepo::list(&pool).await.unwrap().len(), defaults::FAQS.len());
    assert_eq!(
        ChatbotRuleRepo::list(&pool).await.unwrap().len(),
        defaults::CHATBOT_RULES.len()
    );

    for collection in [
        defaults::COLLECTION_SERVICES,
        defaults::COLLECTION_STATS,
        defaults::COLLECTION_FAQS,
        defaults::COLLECTION_CHATBOT_RULES,
    ] {
        assert!(seed::is_seeded(&pool, collection).await.unwrap(), "{collection}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn ensure_defaults_is_idempotent(pool: PgPool) {
    assert!(ServiceRepo::ensure_defaults(&pool).await.unwrap());
    assert!(!ServiceRepo::ensure_defaults(&pool).await.unwrap());
    assert_eq!(ServiceRepo::count(&pool).await.unwrap(), 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_first_reads_seed_once(pool: PgPool) {
    let mut handles = Vec::new();
    for _ in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move { StatRepo::list(&pool).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stats")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count as usize, defaults::STATS.len());
}

#[sqlx::test(migrations = "./migrations")]
async fn emptied_collection_stays_empty(pool: PgPool) {
    for faq in FaqRepo::list(&pool).await.unwrap() {
        assert!(FaqRepo::delete(&pool, faq.id).await.unwrap());
    }
    assert!(FaqRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn settings_are_created_on_first_get(pool: PgPool) {
    let settings = SettingsRepo::get(&pool).await.unwrap();
    assert_eq!(settings.id, 1);
    assert_eq!(settings.site_name, defaults::SITE_NAME);
    assert_eq!(settings.chatbot_fallback.as_deref(), Some(defaults::CHATBOT_FALLBACK));

    SettingsRepo::ensure_exists(&pool).await.unwrap();
    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM site_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}
