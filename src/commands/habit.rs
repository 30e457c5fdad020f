//! Habit Commands
//!
//! Frontend bindings for toggling and creating habits.

use serde::Serialize;
use crate::models::NewHabit;
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct HabitIdArgs<'a> {
    #[serde(rename = "habitId")]
    habit_id: &'a str,
}

/// Returns the resulting completion state when the server reports it
pub async fn toggle_habit(habit_id: &str) -> Result<Option<bool>, String> {
    let js_args = serde_wasm_bindgen::to_value(&HabitIdArgs { habit_id }).map_err(|e| e.to_string())?;
    let result = invoke("toggle_habit", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_habit(habit: &NewHabit) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(habit).map_err(|e| e.to_string())?;
    invoke("create_habit", js_args).await.map_err(invoke_error)?;
    Ok(())
}
