//! API Layer
//!
//! Access to the remote habits service and its configuration.

mod client;
mod config;
mod error;
mod traits;


pub use client::HttpHabitApi;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ConfigError};
pub use traits::HabitApi;
