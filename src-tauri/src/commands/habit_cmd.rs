//! Tauri Commands for Habits
//!
//! Toggle completion and create habits through the remote API.

use tauri::State;
use crate::api::HabitApi;
use crate::domain::NewHabit;
use crate::AppState;

/// Toggle a habit's completion for the server's current date.
///
/// Returns the resulting state when the server reports it.
#[tauri::command]
pub async fn toggle_habit(state: State<'_, AppState>, habit_id: String) -> Result<Option<bool>, String> {
    let api = state.api().await;
    toggle(api.as_ref(), &habit_id).await
}

/// Create a new habit
#[tauri::command]
pub async fn create_habit(
    state: State<'_, AppState>,
    title: String,
    week_days: Vec<u8>,
) -> Result<(), String> {
    let api = state.api().await;
    create(api.as_ref(), &title, week_days).await
}

pub(crate) async fn toggle(api: &dyn HabitApi, habit_id: &str) -> Result<Option<bool>, String> {
    api.toggle(habit_id).await.map_err(|e| {
        log::error!("failed to toggle habit {}: {}", habit_id, e);
        e.to_string()
    })
}

pub(crate) async fn create(api: &dyn HabitApi, title: &str, week_days: Vec<u8>) -> Result<(), String> {
    let habit = NewHabit::new(title, week_days).map_err(|e| {
        log::warn!("rejected habit draft: {}", e);
        e.to_string()
    })?;

    api.create(&habit).await.map_err(|e| {
        log::error!("failed to create habit {:?}: {}", habit.title, e);
        e.to_string()
    })?;
    log::info!("created habit {:?} on days {:?}", habit.title, habit.week_days);
    Ok(())
}
