//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the remote API.

mod config_cmd;
mod day_cmd;
mod habit_cmd;

#[cfg(test)]
mod tests;

pub use config_cmd::*;
pub use day_cmd::*;
pub use habit_cmd::*;
