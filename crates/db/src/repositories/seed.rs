//! One-time default seeding for content collections.
//!
//! A collection is seeded by the transaction that manages to insert its
//! marker row into `content_seeds`. Concurrent first reads race on the
//! primary key; the loser's insert waits for the winner to commit and then
//! does nothing, so defaults are written exactly once. Deleting the seeded
//! rows later does not bring them back.

use sqlx::{PgConnection, PgPool};

/// Whether `collection` has already received its defaults.
pub async fn is_seeded(pool: &PgPool, collection: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM content_seeds WHERE collection = $1)",
    )
    .bind(collection)
    .fetch_one(pool)
    .await
}

/// Try to claim the seeding of `collection` inside the caller's transaction.
///
/// Returns `true` if this transaction inserted the marker and must now
/// write the default rows.
pub async fn claim(conn: &mut PgConnection, collection: &str) -> Result<bool, sqlx::Error> {
    let claimed = sqlx::query_scalar::<_, String>(
        "INSERT INTO content_seeds (collection) VALUES ($1) \
         ON CONFLICT (collection) DO NOTHING \
         RETURNING collection",
    )
    .bind(collection)
    .fetch_optional(conn)
    .await?;
    Ok(claimed.is_some())
}
