//! API Layer - Core Traits
//!
//! Abstract interface to the remote habits service.
//! The HTTP implementation lives in `client`; tests substitute fakes.

use async_trait::async_trait;
use crate::domain::{DayInfo, NewHabit};
use super::error::ApiResult;

/// Operations the remote habits API offers
#[async_trait]
pub trait HabitApi: Send + Sync {
    /// Habits possible on `date` and the ids already completed.
    ///
    /// `date` is passed through verbatim.
    async fn day(&self, date: &str) -> ApiResult<DayInfo>;

    /// Flip completion of a habit for the server's current date context.
    ///
    /// Returns the resulting state when the server reports it.
    async fn toggle(&self, habit_id: &str) -> ApiResult<Option<bool>>;

    /// Create a new habit definition
    async fn create(&self, habit: &NewHabit) -> ApiResult<()>;
}
