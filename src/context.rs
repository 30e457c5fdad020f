//! Application Context
//!
//! Navigation shared via Leptos Context API.

use chrono::{Duration, Local, NaiveDate};
use leptos::prelude::*;

/// Screens reachable from the header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Checklist for the selected date
    Day,
    NewHabit,
    Settings,
}

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    set_screen: WriteSignal<Screen>,
    set_date: WriteSignal<NaiveDate>,
}

impl AppContext {
    pub fn new(set_screen: WriteSignal<Screen>, set_date: WriteSignal<NaiveDate>) -> Self {
        Self { set_screen, set_date }
    }

    pub fn open(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Return to the day checklist
    pub fn back(&self) {
        self.set_screen.set(Screen::Day);
    }

    pub fn open_today(&self) {
        self.set_date.set(Local::now().date_naive());
        self.back();
    }

    /// Move the selected date by `days` and show its checklist
    pub fn shift_day(&self, days: i64) {
        self.set_date.update(|date| {
            if let Some(next) = date.checked_add_signed(Duration::days(days)) {
                *date = next;
            }
        });
        self.back();
    }
}
