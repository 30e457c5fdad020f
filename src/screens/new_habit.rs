//! Habit Creation Screen State
//!
//! Draft title and weekday selection, validated before anything is sent.

use std::collections::BTreeSet;

use crate::error::{MissingField, ScreenError};
use crate::models::NewHabit;
use crate::notify::{Notice, Notifier};
use crate::service::HabitService;
use super::WEEK_DAYS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitDraft {
    pub title: String,
    pub week_days: BTreeSet<u8>,
}

impl HabitDraft {
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Flip a weekday (0 = Sunday .. 6 = Saturday); other indices are ignored
    pub fn toggle_weekday(&mut self, index: u8) {
        if usize::from(index) >= WEEK_DAYS.len() {
            return;
        }
        if !self.week_days.remove(&index) {
            self.week_days.insert(index);
        }
    }

    pub fn has_weekday(&self, index: u8) -> bool {
        self.week_days.contains(&index)
    }

    pub fn validate(&self) -> Result<NewHabit, ScreenError> {
        let title = self.title.trim();
        let mut missing = Vec::new();
        if title.is_empty() {
            missing.push(MissingField::Title);
        }
        if self.week_days.is_empty() {
            missing.push(MissingField::WeekDays);
        }
        if !missing.is_empty() {
            return Err(ScreenError::Validation(missing));
        }

        Ok(NewHabit {
            title: title.to_string(),
            week_days: self.week_days.iter().copied().collect(),
        })
    }

    /// Clear after a successful submit; keep the input otherwise
    pub fn apply_submit(&mut self, outcome: &Result<(), ScreenError>) {
        if outcome.is_ok() {
            *self = Self::default();
        }
    }
}

/// Validate and post the draft. Exactly one request when valid, none otherwise.
pub async fn submit_habit(
    service: &dyn HabitService,
    notifier: &dyn Notifier,
    draft: &HabitDraft,
) -> Result<(), ScreenError> {
    let habit = match draft.validate() {
        Ok(habit) => habit,
        Err(err) => {
            if let ScreenError::Validation(fields) = &err {
                notifier.notify(&Notice::missing(fields));
            }
            return Err(err);
        }
    };

    match service.create(&habit).await {
        Ok(()) => {
            log::info!("habit {:?} created", habit.title);
            notifier.notify(&Notice::created());
            Ok(())
        }
        Err(err) => {
            log::error!("creating habit {:?} failed: {}", habit.title, err);
            notifier.notify(&Notice::create_failed());
            Err(err)
        }
    }
}
