//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `users.role` in
//! `20260101000002_create_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// All roles an account may hold.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR];

/// Whether `role` may manage site content and the inboxes.
pub fn can_edit_content(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

/// Whether `role` may change site settings and chatbot rules.
pub fn can_configure_site(role: &str) -> bool {
    role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_edits_content_but_not_settings() {
        assert!(can_edit_content(ROLE_EDITOR));
        assert!(!can_configure_site(ROLE_EDITOR));
    }

    #[test]
    fn admin_has_every_permission() {
        assert!(can_edit_content(ROLE_ADMIN));
        assert!(can_configure_site(ROLE_ADMIN));
    }

    #[test]
    fn unknown_role_has_none() {
        assert!(!can_edit_content("viewer"));
        assert!(!can_configure_site("Admin"));
    }
}
