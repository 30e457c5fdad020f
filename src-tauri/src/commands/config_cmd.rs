//! API Configuration Commands
//!
//! Read and change where the remote habits API lives.

use tauri::State;
use crate::api::ApiConfig;
use crate::AppState;

/// Current API configuration
#[tauri::command]
pub async fn get_api_config(state: State<'_, AppState>) -> Result<ApiConfig, String> {
    Ok(state.config().await)
}

/// Validate, persist and apply a new API base URL
#[tauri::command]
pub async fn save_api_config(state: State<'_, AppState>, base_url: String) -> Result<ApiConfig, String> {
    let config = ApiConfig::new(&base_url).map_err(|e| e.to_string())?;
    state.replace_config(config).await.map_err(|e| {
        log::error!("failed to save API config: {}", e);
        e.to_string()
    })
}
