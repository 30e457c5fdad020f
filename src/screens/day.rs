//! Day Screen State
//!
//! Checklist of the habits scheduled for one date, with completion toggles
//! locked once the date is over.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::error::ScreenError;
use crate::models::{DayInfo, HabitSummary};
use crate::notify::{Notice, Notifier};
use crate::service::HabitService;
use super::WEEK_DAYS;

/// Percentage of completed habits, rounded half up, 0 for an empty day.
pub fn progress(possible: usize, completed: usize) -> u8 {
    if possible == 0 {
        return 0;
    }
    let completed = completed.min(possible);
    ((200 * completed + possible) / (2 * possible)) as u8
}

/// Read the navigation date: plain `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(date) {
        return Some(instant.with_timezone(&Local).date_naive());
    }
    NaiveDate::parse_from_str(date.get(..10)?, "%Y-%m-%d").ok()
}

/// True once the last millisecond of `date` lies before `now`.
pub fn is_locked_at(date: NaiveDate, now: NaiveDateTime) -> bool {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .is_some_and(|end_of_day| end_of_day < now)
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Lowercase weekday name, e.g. "quarta-feira"
pub fn weekday_label(date: NaiveDate) -> String {
    let index = date.weekday().num_days_from_sunday() as usize;
    WEEK_DAYS[index].to_lowercase()
}

/// "DD/MM"
pub fn day_and_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// One checklist line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitRow {
    pub id: String,
    pub title: String,
    pub checked: bool,
    pub disabled: bool,
}

/// What the list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayBody {
    Empty,
    Checklist(Vec<HabitRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayState {
    date: String,
    parsed: Option<NaiveDate>,
    pub loading: bool,
    pub day_info: Option<DayInfo>,
    pub completed: BTreeSet<String>,
    pending: BTreeSet<String>,
}

impl DayState {
    /// Fresh screen for `date`, waiting for its first fetch
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            parsed: parse_date(date),
            loading: true,
            day_info: None,
            completed: BTreeSet::new(),
            pending: BTreeSet::new(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.parsed
    }

    /// Unparseable dates are never locked
    pub fn is_locked_at(&self, now: NaiveDateTime) -> bool {
        self.parsed.is_some_and(|date| is_locked_at(date, now))
    }

    /// Replace day info and completion state wholesale
    pub fn apply_fetch(&mut self, result: Result<DayInfo, ScreenError>) {
        self.loading = false;
        self.pending.clear();
        match result {
            Ok(info) => {
                self.completed = info.completed_habits.iter().cloned().collect();
                self.day_info = Some(info);
            }
            Err(_) => {
                self.day_info = None;
                self.completed.clear();
            }
        }
    }

    pub fn possible_habits(&self) -> &[HabitSummary] {
        self.day_info
            .as_ref()
            .map(|info| info.possible_habits.as_slice())
            .unwrap_or(&[])
    }

    /// Completed ids that belong to this day's habits
    pub fn completed_count(&self) -> usize {
        self.possible_habits()
            .iter()
            .filter(|habit| self.completed.contains(&habit.id))
            .count()
    }

    pub fn progress(&self) -> u8 {
        progress(self.possible_habits().len(), self.completed_count())
    }

    pub fn is_pending(&self, habit_id: &str) -> bool {
        self.pending.contains(habit_id)
    }

    /// Claim a toggle for `habit_id`.
    ///
    /// Refused for a locked day and while a toggle of the same habit is in flight.
    pub fn begin_toggle(&mut self, habit_id: &str, now: NaiveDateTime) -> bool {
        if self.loading || self.is_locked_at(now) {
            return false;
        }
        self.pending.insert(habit_id.to_string())
    }

    /// Mirror the server after a toggle; failures leave completion untouched.
    pub fn finish_toggle(&mut self, habit_id: &str, outcome: Result<Option<bool>, ScreenError>) {
        if !self.pending.remove(habit_id) {
            // Superseded by a fetch while in flight.
            return;
        }
        if let Ok(reported) = outcome {
            let completed = reported.unwrap_or_else(|| !self.completed.contains(habit_id));
            if completed {
                self.completed.insert(habit_id.to_string());
            } else {
                self.completed.remove(habit_id);
            }
        }
    }

    pub fn body(&self, now: NaiveDateTime) -> DayBody {
        let habits = self.possible_habits();
        if habits.is_empty() {
            return DayBody::Empty;
        }
        let locked = self.is_locked_at(now);
        DayBody::Checklist(
            habits
                .iter()
                .map(|habit| HabitRow {
                    id: habit.id.clone(),
                    title: habit.title.clone(),
                    checked: self.completed.contains(&habit.id),
                    disabled: locked || self.is_pending(&habit.id),
                })
                .collect(),
        )
    }
}

/// Fetch day info; failures are logged and announced, never retried.
pub async fn load_day(
    service: &dyn HabitService,
    notifier: &dyn Notifier,
    date: &str,
) -> Result<DayInfo, ScreenError> {
    let result = service.day(date).await;
    if let Err(err) = &result {
        log::error!("loading day {} failed: {}", date, err);
        notifier.notify(&Notice::load_failed());
    }
    result
}

/// Send one toggle request; failures are logged and announced.
pub async fn toggle_habit(
    service: &dyn HabitService,
    notifier: &dyn Notifier,
    habit_id: &str,
) -> Result<Option<bool>, ScreenError> {
    let result = service.toggle(habit_id).await;
    if let Err(err) = &result {
        log::error!("toggling habit {} failed: {}", habit_id, err);
        notifier.notify(&Notice::toggle_failed());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fake::{FakeService, RecordingNotifier};
    use chrono::{Duration, NaiveTime};

    fn habit(id: &str, title: &str) -> HabitSummary {
        HabitSummary {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    fn info(possible: &[&str], completed: &[&str]) -> DayInfo {
        DayInfo {
            possible_habits: possible.iter().map(|id| habit(id, &id.to_uppercase())).collect(),
            completed_habits: completed.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_time(NaiveTime::parse_from_str(time, "%H:%M:%S%.3f").unwrap())
    }

    fn loaded(possible: &[&str], completed: &[&str]) -> DayState {
        let mut state = DayState::new("2024-03-05");
        state.apply_fetch(Ok(info(possible, completed)));
        state
    }

    const SAME_DAY: &str = "2024-03-05";

    #[test]
    fn test_progress_values() {
        assert_eq!(progress(0, 0), 0);
        assert_eq!(progress(4, 2), 50);
        assert_eq!(progress(3, 1), 33);
        assert_eq!(progress(3, 2), 67);
        assert_eq!(progress(8, 1), 13);
        assert_eq!(progress(5, 5), 100);
        assert_eq!(progress(2, 9), 100);
    }

    #[test]
    fn test_progress_monotonic() {
        for possible in 1..=12 {
            let values: Vec<u8> = (0..=possible).map(|c| progress(possible, c)).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "possible={}", possible);
        }
    }

    #[test]
    fn test_parse_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_date("2024-03-05"), expected);
        assert_eq!(parse_date("2024-03-05T00:00:00"), expected);
        assert!(parse_date("2024-03-05T12:00:00Z").is_some());
        assert_eq!(parse_date("05/03/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_lock_relative_to_now() {
        let now = now();
        let today = now.date();
        assert!(is_locked_at(today - Duration::days(1), now));
        assert!(!is_locked_at(today + Duration::days(1), now));
        assert!(!is_locked_at(today, now));
    }

    #[test]
    fn test_today_locks_at_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert!(!is_locked_at(date, at(SAME_DAY, "23:59:59.999")));
        assert!(is_locked_at(date, at("2024-03-06", "00:00:00.000")));
    }

    #[test]
    fn test_unparseable_date_never_locked() {
        let state = DayState::new("someday");
        assert!(!state.is_locked_at(at("2999-01-01", "00:00:00.000")));
    }

    #[test]
    fn test_header_labels() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_eq!(weekday_label(date), "quarta-feira");
        assert_eq!(day_and_month(date), "06/03");
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(weekday_label(sunday), "domingo");
    }

    #[test]
    fn test_fetch_replaces_state() {
        let mut state = loaded(&["a", "b", "c"], &["a", "b", "c"]);
        state.apply_fetch(Ok(info(&["x", "y"], &["x"])));

        assert!(!state.loading);
        assert_eq!(state.completed, BTreeSet::from(["x".to_string()]));
        assert_eq!(state.possible_habits().len(), 2);
    }

    #[test]
    fn test_failed_fetch_clears_data() {
        let mut state = loaded(&["a"], &["a"]);
        state.apply_fetch(Err(ScreenError::Request("offline".into())));

        assert!(!state.loading);
        assert!(state.day_info.is_none());
        assert!(state.completed.is_empty());
        assert_eq!(state.body(at(SAME_DAY, "10:00:00.000")), DayBody::Empty);
    }

    #[test]
    fn test_toggle_mirrors_flip() {
        let noon = at(SAME_DAY, "12:00:00.000");
        let mut state = loaded(&["a", "b"], &["a"]);

        assert!(state.begin_toggle("a", noon));
        state.finish_toggle("a", Ok(None));
        assert!(state.completed.is_empty());

        let mut state = loaded(&["a", "b"], &["a"]);
        assert!(state.begin_toggle("b", noon));
        state.finish_toggle("b", Ok(None));
        assert_eq!(state.completed, BTreeSet::from(["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_toggle_prefers_reported_state() {
        let noon = at(SAME_DAY, "12:00:00.000");
        let mut state = loaded(&["a"], &["a"]);

        assert!(state.begin_toggle("a", noon));
        state.finish_toggle("a", Ok(Some(true)));
        assert!(state.completed.contains("a"));
    }

    #[test]
    fn test_failed_toggle_keeps_state() {
        let noon = at(SAME_DAY, "12:00:00.000");
        let mut state = loaded(&["a", "b"], &["a"]);

        assert!(state.begin_toggle("b", noon));
        state.finish_toggle("b", Err(ScreenError::Request("offline".into())));
        assert_eq!(state.completed, BTreeSet::from(["a".to_string()]));
        assert!(!state.is_pending("b"));
    }

    #[test]
    fn test_overlapping_toggle_refused() {
        let noon = at(SAME_DAY, "12:00:00.000");
        let mut state = loaded(&["a"], &[]);

        assert!(state.begin_toggle("a", noon));
        assert!(!state.begin_toggle("a", noon));
        state.finish_toggle("a", Ok(None));
        assert!(state.begin_toggle("a", noon));
    }

    #[test]
    fn test_locked_day_refuses_toggle() {
        let mut state = loaded(&["a"], &[]);
        assert!(!state.begin_toggle("a", at("2024-03-06", "08:00:00.000")));
        assert!(!state.is_pending("a"));
    }

    #[test]
    fn test_toggle_superseded_by_fetch_is_ignored() {
        let noon = at(SAME_DAY, "12:00:00.000");
        let mut state = loaded(&["a"], &[]);
        assert!(state.begin_toggle("a", noon));

        state.apply_fetch(Ok(info(&["a"], &["a"])));
        state.finish_toggle("a", Ok(None));
        assert!(state.completed.contains("a"));
    }

    #[test]
    fn test_body_rows_and_empty_state() {
        let noon = at(SAME_DAY, "12:00:00.000");
        assert_eq!(loaded(&[], &[]).body(noon), DayBody::Empty);

        let state = loaded(&["a", "b"], &["b"]);
        let DayBody::Checklist(rows) = state.body(noon) else {
            panic!("expected checklist");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "A");
        assert!(!rows[0].checked && rows[1].checked);
        assert!(rows.iter().all(|row| !row.disabled));

        let DayBody::Checklist(rows) = state.body(at("2024-03-07", "00:00:00.000")) else {
            panic!("expected checklist");
        };
        assert!(rows.iter().all(|row| row.disabled));
    }

    #[test]
    fn test_unknown_completed_ids_are_ignored() {
        let state = loaded(&["a", "b"], &["a", "ghost"]);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.progress(), 50);
    }

    #[tokio::test]
    async fn test_load_day_success() {
        let mut service = FakeService::ok();
        service.day = Ok(info(&["a"], &["a"]));
        let notifier = RecordingNotifier::default();

        let result = load_day(&service, &notifier, "2024-03-05").await;

        assert_eq!(result, Ok(info(&["a"], &["a"])));
        assert_eq!(service.calls(), vec!["day 2024-03-05"]);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_load_day_failure_notifies_once() {
        let service = FakeService::failing();
        let notifier = RecordingNotifier::default();
        let mut state = DayState::new("2024-03-05");

        state.apply_fetch(load_day(&service, &notifier, "2024-03-05").await);

        assert_eq!(notifier.notices(), vec![Notice::load_failed()]);
        assert_eq!(service.calls().len(), 1);
        assert!(!state.loading);
        assert!(state.day_info.is_none());
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let noon = at(SAME_DAY, "12:00:00.000");
        let service = FakeService::ok();
        let notifier = RecordingNotifier::default();
        let mut state = loaded(&["a", "b"], &["a"]);

        assert!(state.begin_toggle("a", noon));
        state.finish_toggle("a", toggle_habit(&service, &notifier, "a").await);
        assert!(state.completed.is_empty());

        assert!(state.begin_toggle("b", noon));
        state.finish_toggle("b", toggle_habit(&service, &notifier, "b").await);
        assert_eq!(state.completed, BTreeSet::from(["b".to_string()]));

        assert_eq!(service.calls(), vec!["toggle a", "toggle b"]);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_failure_notifies() {
        let service = FakeService::failing();
        let notifier = RecordingNotifier::default();

        let result = toggle_habit(&service, &notifier, "a").await;

        assert!(result.is_err());
        assert_eq!(notifier.notices(), vec![Notice::toggle_failed()]);
    }
}
