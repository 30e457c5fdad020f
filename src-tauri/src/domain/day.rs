//! Day Info
//!
//! The server's view of one calendar day.

use serde::{Deserialize, Serialize};
use super::habit::HabitSummary;

/// Habits applicable to a date plus the ids already completed on it.
///
/// Missing lists are read as empty; a wrong type is still a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInfo {
    #[serde(default)]
    pub possible_habits: Vec<HabitSummary>,
    #[serde(default)]
    pub completed_habits: Vec<String>,
}
