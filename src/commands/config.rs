//! API Config Commands

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::ApiConfig;
use super::{invoke, invoke_error};

#[derive(Serialize)]
struct BaseUrlArgs<'a> {
    #[serde(rename = "baseUrl")]
    base_url: &'a str,
}

pub async fn get_api_config() -> Result<ApiConfig, String> {
    let result = invoke("get_api_config", JsValue::NULL).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_api_config(base_url: &str) -> Result<ApiConfig, String> {
    let js_args = serde_wasm_bindgen::to_value(&BaseUrlArgs { base_url }).map_err(|e| e.to_string())?;
    let result = invoke("save_api_config", js_args).await.map_err(invoke_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
