//! HTTP Habit API
//!
//! reqwest implementation of [`HabitApi`].

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response, Url};
use serde::Deserialize;

use crate::domain::{DayInfo, NewHabit};
use super::config::ApiConfig;
use super::error::{ApiError, ApiResult, ConfigError};
use super::traits::HabitApi;

/// Characters escaped in a habit id path segment (RFC 3986 unreserved stay as-is)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

/// Remote habits API over HTTP
#[derive(Clone)]
pub struct HttpHabitApi {
    client: Client,
    base_url: Url,
}

impl HttpHabitApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        Self::with_client(Client::new(), config)
    }

    /// Reuse an existing client (connection pool) for a new base URL
    pub fn with_client(client: Client, config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client,
            base_url: config.base()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Endpoint(e.to_string()))
    }

    fn toggle_endpoint(&self, habit_id: &str) -> ApiResult<Url> {
        let segment = utf8_percent_encode(habit_id, PATH_SEGMENT);
        self.endpoint(&format!("habits/{}/toggle", segment))
    }
}

#[async_trait]
impl HabitApi for HttpHabitApi {
    async fn day(&self, date: &str) -> ApiResult<DayInfo> {
        let url = self.endpoint("day")?;
        let response = self.client.get(url).query(&[("date", date)]).send().await?;
        let body = ensure_success(response)?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn toggle(&self, habit_id: &str) -> ApiResult<Option<bool>> {
        let url = self.toggle_endpoint(habit_id)?;
        let response = self.client.patch(url).send().await?;
        let body = ensure_success(response)?.text().await?;
        Ok(completed_from_toggle_body(&body))
    }

    async fn create(&self, habit: &NewHabit) -> ApiResult<()> {
        let url = self.endpoint("habits")?;
        let response = self.client.post(url).json(habit).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}

fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}

#[derive(Deserialize)]
struct ToggleBody {
    completed: bool,
}

/// Resulting completion state, if the toggle response carries one.
///
/// Empty or unrecognized bodies mean the server did not say.
fn completed_from_toggle_body(body: &str) -> Option<bool> {
    serde_json::from_str::<ToggleBody>(body)
        .ok()
        .map(|parsed| parsed.completed)
}
