//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Habit as scheduled for a day (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub id: String,
    pub title: String,
}

/// One calendar day as the server sees it (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInfo {
    #[serde(default)]
    pub possible_habits: Vec<HabitSummary>,
    #[serde(default)]
    pub completed_habits: Vec<String>,
}

/// Validated creation request; also the `create_habit` command args
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHabit {
    pub title: String,
    pub week_days: Vec<u8>,
}

/// Remote API location (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
}
