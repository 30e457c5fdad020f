//! Day Commands
//!
//! Frontend binding for the day checklist data.

use serde::Serialize;
use crate::models::DayInfo;
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct DateArgs<'a> {
    date: &'a str,
}

pub async fn get_day(date: &str) -> Result<DayInfo, String> {
    let js_args = serde_wasm_bindgen::to_value(&DateArgs { date }).map_err(|e| e.to_string())?;
    let result = invoke("get_day", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
