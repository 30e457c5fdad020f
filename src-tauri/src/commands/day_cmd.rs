//! Tauri Commands for Day Info
//!
//! Exposes the day checklist data to the frontend via Tauri IPC.

use tauri::State;
use crate::api::HabitApi;
use crate::domain::DayInfo;
use crate::AppState;

/// Habits possible on `date` and which of them are completed
#[tauri::command]
pub async fn get_day(state: State<'_, AppState>, date: String) -> Result<DayInfo, String> {
    let api = state.api().await;
    fetch_day(api.as_ref(), &date).await
}

pub(crate) async fn fetch_day(api: &dyn HabitApi, date: &str) -> Result<DayInfo, String> {
    match api.day(date).await {
        Ok(info) => {
            log::info!(
                "day {}: {} possible, {} completed",
                date,
                info.possible_habits.len(),
                info.completed_habits.len()
            );
            Ok(info)
        }
        Err(e) => {
            log::error!("failed to load day {}: {}", date, e);
            Err(e.to_string())
        }
    }
}
