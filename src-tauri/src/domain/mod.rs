//! Domain Layer
//!
//! Habit entities exchanged with the remote API.
//! This layer has NO external dependencies (except serde for serialization).

mod day;
mod error;
mod habit;

pub use day::DayInfo;
pub use error::{DomainError, DomainResult};
pub use habit::{HabitSummary, NewHabit};
