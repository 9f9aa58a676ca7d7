//! Headline stat models and DTOs.

use agency_core::counter::{parse_counter_value, CounterValue};
use agency_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `stats` table. `value` is the display string (`"50+"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stat {
    pub id: DbId,
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public view of a stat carrying the parsed counter next to the raw value.
#[derive(Debug, Clone, Serialize)]
pub struct StatDisplay {
    pub id: DbId,
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
    pub counter: CounterValue,
}

impl From<Stat> for StatDisplay {
    fn from(stat: Stat) -> Self {
        let counter = parse_counter_value(&stat.value);
        Self {
            id: stat.id,
            label: stat.label,
            value: stat.value,
            icon: stat.icon,
            counter,
        }
    }
}

/// DTO for creating a stat.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStat {
    #[validate(length(min = 1, max = 100))]
    pub label: String,
    #[validate(length(min = 1, max = 30))]
    pub value: String,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}

/// DTO for partially updating a stat.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStat {
    #[validate(length(min = 1, max = 100))]
    pub label: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub value: Option<String>,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    pub sort_order: Option<i32>,
}
