//! Startup provisioning of the first admin account.

use agency_core::error::CoreError;
use agency_core::roles::ROLE_ADMIN;
use agency_db::models::user::CreateUser;
use agency_db::repositories::UserRepo;
use agency_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::config::AdminBootstrap;
use crate::error::{AppError, AppResult};

/// Create the configured admin account unless its username already exists.
///
/// Returns `true` when a new account was inserted. An existing account is
/// left untouched, including its password.
pub async fn ensure_admin(pool: &DbPool, admin: &AdminBootstrap) -> AppResult<bool> {
    validate_password_strength(&admin.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Admin account already present");
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let created = UserRepo::create_if_absent(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    match created {
        Some(user) => {
            tracing::info!(user_id = user.id, username = %user.username, "Bootstrapped admin account");
            Ok(true)
        }
        None => Ok(false),
    }
}
