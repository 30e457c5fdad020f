//! Habit Entities
//!
//! A habit as listed for one day, and the payload used to create one.

use serde::{Deserialize, Serialize};
use super::error::{DomainError, DomainResult};

/// Number of weekdays a habit can recur on (0 = Sunday .. 6 = Saturday)
pub const WEEK_DAY_COUNT: u8 = 7;

/// A habit as scheduled for a specific date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSummary {
    /// Opaque server-assigned identifier
    pub id: String,
    pub title: String,
}

/// Body of `POST /habits`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub title: String,
    /// Sorted, without duplicates
    pub week_days: Vec<u8>,
}

impl NewHabit {
    /// Validate and normalize a creation request.
    ///
    /// The title is trimmed; week days are sorted and deduplicated.
    pub fn new(title: &str, mut week_days: Vec<u8>) -> DomainResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("habit title is empty".to_string()));
        }
        if let Some(day) = week_days.iter().find(|d| **d >= WEEK_DAY_COUNT) {
            return Err(DomainError::InvalidInput(format!("week day {} out of range", day)));
        }
        week_days.sort_unstable();
        week_days.dedup();
        if week_days.is_empty() {
            return Err(DomainError::InvalidInput("no week day selected".to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            week_days,
        })
    }
}
