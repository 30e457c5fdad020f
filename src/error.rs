//! Screen Errors
//!
//! The two ways a user action can fail.

/// Draft field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Title,
    WeekDays,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
    /// Detected before any network call
    #[error("missing fields: {0:?}")]
    Validation(Vec<MissingField>),
    /// Transport, status or decode failure reported by the backend
    #[error("request failed: {0}")]
    Request(String),
}
