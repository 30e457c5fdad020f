//! Habit Service
//!
//! What the screens need from the remote API. The app talks to it through
//! Tauri commands; tests use in-memory fakes.

use async_trait::async_trait;

use crate::commands;
use crate::error::ScreenError;
use crate::models::{DayInfo, NewHabit};

#[async_trait(?Send)]
pub trait HabitService {
    async fn day(&self, date: &str) -> Result<DayInfo, ScreenError>;

    /// Resulting completion state, when the server reports it
    async fn toggle(&self, habit_id: &str) -> Result<Option<bool>, ScreenError>;

    async fn create(&self, habit: &NewHabit) -> Result<(), ScreenError>;
}

/// Service backed by the Tauri shell
pub struct TauriHabitService;

#[async_trait(?Send)]
impl HabitService for TauriHabitService {
    async fn day(&self, date: &str) -> Result<DayInfo, ScreenError> {
        commands::get_day(date).await.map_err(ScreenError::Request)
    }

    async fn toggle(&self, habit_id: &str) -> Result<Option<bool>, ScreenError> {
        commands::toggle_habit(habit_id).await.map_err(ScreenError::Request)
    }

    async fn create(&self, habit: &NewHabit) -> Result<(), ScreenError> {
        commands::create_habit(habit).await.map_err(ScreenError::Request)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;

    use super::*;
    use crate::notify::{Notice, Notifier};

    /// Scripted service that records every call
    pub struct FakeService {
        pub day: Result<DayInfo, ScreenError>,
        pub toggle: Result<Option<bool>, ScreenError>,
        pub create: Result<(), ScreenError>,
        pub calls: RefCell<Vec<String>>,
        pub created: RefCell<Vec<NewHabit>>,
    }

    impl FakeService {
        pub fn ok() -> Self {
            Self {
                day: Ok(DayInfo::default()),
                toggle: Ok(None),
                create: Ok(()),
                calls: RefCell::new(Vec::new()),
                created: RefCell::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            let failure = || ScreenError::Request("server responded with status 500".into());
            Self {
                day: Err(failure()),
                toggle: Err(failure()),
                create: Err(failure()),
                ..Self::ok()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl HabitService for FakeService {
        async fn day(&self, date: &str) -> Result<DayInfo, ScreenError> {
            self.calls.borrow_mut().push(format!("day {}", date));
            self.day.clone()
        }

        async fn toggle(&self, habit_id: &str) -> Result<Option<bool>, ScreenError> {
            self.calls.borrow_mut().push(format!("toggle {}", habit_id));
            self.toggle.clone()
        }

        async fn create(&self, habit: &NewHabit) -> Result<(), ScreenError> {
            self.calls.borrow_mut().push(format!("create {}", habit.title));
            self.created.borrow_mut().push(habit.clone());
            self.create.clone()
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub notices: RefCell<Vec<Notice>>,
    }

    impl RecordingNotifier {
        pub fn notices(&self) -> Vec<Notice> {
            self.notices.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices.borrow_mut().push(notice.clone());
        }
    }
}
