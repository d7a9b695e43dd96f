//! The wire envelope wrapped around every backend response

use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// How a business error should be surfaced to the user.
///
/// Carried on the wire as a bare integer. Values outside the known range are
/// preserved in [`ShowType::Unknown`] so deserialization never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ShowType {
    /// No UI at all
    Silent,
    /// Warning toast
    Warn,
    /// Error toast
    Error,
    /// Persistent notification banner
    Notification,
    /// Any value the backend sends that we don't recognize
    Unknown(u8),
}

impl From<u8> for ShowType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Silent,
            1 => Self::Warn,
            2 => Self::Error,
            3 => Self::Notification,
            other => Self::Unknown(other),
        }
    }
}

impl From<ShowType> for u8 {
    fn from(value: ShowType) -> Self {
        match value {
            ShowType::Silent => 0,
            ShowType::Warn => 1,
            ShowType::Error => 2,
            ShowType::Notification => 3,
            ShowType::Unknown(other) => other,
        }
    }
}

impl Default for ShowType {
    fn default() -> Self {
        Self::Error
    }
}

/// Standard response envelope: `{ success, data, errorCode, errorMessage, showType }`.
///
/// Every field except `success` defaults when absent: success payloads don't
/// carry the error fields, and failure payloads may omit `data` entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub show_type: ShowType,
}

impl<T: Serialize> Envelope<T> {
    /// Classify the envelope, then unwrap it.
    ///
    /// `success == false` is a business error regardless of the HTTP status
    /// the envelope arrived with. The resulting [`ApiError::Business`]
    /// carries the envelope's error fields verbatim, with `data` as JSON null
    /// when the backend omitted it; a successful envelope yields `data`
    /// unchanged.
    pub fn into_data(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            let data = self
                .data
                .and_then(|data| serde_json::to_value(data).ok())
                .unwrap_or(serde_json::Value::Null);
            Err(ApiError::Business {
                code: self.error_code,
                message: self.error_message,
                show_type: self.show_type,
                data,
            })
        }
    }
}
