//! Contact message workflow statuses and reply rules.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const STATUS_NEW: &str = "new";
pub const STATUS_READ: &str = "read";
pub const STATUS_REPLIED: &str = "replied";
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid contact message statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_READ, STATUS_REPLIED, STATUS_ARCHIVED];

/// Maximum length of an admin reply in characters.
pub const MAX_REPLY_LENGTH: usize = 5_000;

/// Validate a contact message status name.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("status", status, VALID_STATUSES)
}

/// Validate the text of an admin reply.
pub fn validate_reply(reply: &str) -> Result<(), CoreError> {
    if reply.trim().is_empty() {
        return Err(CoreError::Validation("Reply must not be empty".into()));
    }
    if reply.chars().count() > MAX_REPLY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Reply exceeds maximum length of {MAX_REPLY_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_accepted() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok());
        }
        assert!(validate_status("deleted").is_err());
    }

    #[test]
    fn reply_bounds() {
        assert!(validate_reply("  ").is_err());
        assert!(validate_reply("Thanks, we'll be in touch.").is_ok());
        assert!(validate_reply(&"a".repeat(MAX_REPLY_LENGTH + 1)).is_err());
    }
}
