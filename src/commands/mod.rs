//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod config;
mod day;
mod habit;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Command errors arrive as the backend's `String`; anything else is stringified.
fn invoke_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use config::*;
pub use day::*;
pub use habit::*;
