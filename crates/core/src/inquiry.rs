//! Service inquiry workflow statuses.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const STATUS_NEW: &str = "new";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_CLOSED: &str = "closed";

/// All valid service inquiry statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_IN_PROGRESS, STATUS_CLOSED];

/// Validate a service inquiry status name.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("status", status, VALID_STATUSES)
}
