//! Habits Backend
//!
//! Layered architecture:
//! - domain: Habit entities exchanged with the remote API
//! - api: Remote habits service client and its configuration
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::Manager;
use tokio::sync::RwLock;

mod api;
mod commands;
mod domain;

use api::{ApiConfig, ConfigError, HabitApi, HttpHabitApi};

/// Application state shared across commands
pub struct AppState {
    api: RwLock<Arc<dyn HabitApi>>,
    config: RwLock<ApiConfig>,
    config_dir: PathBuf,
    http: reqwest::Client,
}

impl AppState {
    /// Load the API config from `config_dir` (env override applied)
    pub fn new(config_dir: PathBuf) -> Result<Self, ConfigError> {
        let config = ApiConfig::load_effective(&config_dir)?;
        Self::with_config(config_dir, config)
    }

    fn with_config(config_dir: PathBuf, config: ApiConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::new();
        let api = HttpHabitApi::with_client(http.clone(), &config)?;
        log::info!("habits API at {}", api.base_url());

        Ok(Self {
            api: RwLock::new(Arc::new(api)),
            config: RwLock::new(config),
            config_dir,
            http,
        })
    }

    /// Client for the currently configured API
    pub async fn api(&self) -> Arc<dyn HabitApi> {
        self.api.read().await.clone()
    }

    pub async fn config(&self) -> ApiConfig {
        self.config.read().await.clone()
    }

    /// Persist `config` and route subsequent requests to it
    pub async fn replace_config(&self, config: ApiConfig) -> Result<ApiConfig, ConfigError> {
        let api = HttpHabitApi::with_client(self.http.clone(), &config)?;
        config.save(&self.config_dir)?;

        *self.api.write().await = Arc::new(api);
        *self.config.write().await = config.clone();
        log::info!("habits API moved to {}", config.base_url);
        Ok(config)
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Habits")?;

            let config_dir = app_handle.path().app_config_dir()?;
            let state = AppState::new(config_dir)?;
            app.manage(state);

            let _ = rolling_logger::info("App setup finished");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_day,
            commands::toggle_habit,
            commands::create_habit,
            commands::get_api_config,
            commands::save_api_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
