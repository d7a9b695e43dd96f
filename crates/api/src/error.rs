//! Request layer error types

use crate::envelope::ShowType;
use std::fmt;
use thiserror::Error;

/// Where a transport failure happened relative to the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportPhase {
    /// The server responded, but with a non-success HTTP status
    Responded { status: u16 },
    /// The request went out and no usable response came back
    NoResponse,
    /// The request was never sent
    NotSent,
}

impl fmt::Display for TransportPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Responded { status } => write!(f, "responded with status {status}"),
            Self::NoResponse => f.write_str("no response"),
            Self::NotSent => f.write_str("not sent"),
        }
    }
}

/// Request layer error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP exchange succeeded but the envelope flagged a business failure
    #[error("business error {code}: {message}")]
    Business {
        code: String,
        message: String,
        show_type: ShowType,
        data: serde_json::Value,
    },

    /// The HTTP exchange itself failed
    #[error("transport failure ({phase}): {detail}")]
    Transport {
        phase: TransportPhase,
        detail: String,
    },

    /// The response body was not a valid envelope (or the data didn't match)
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// True for envelope-level failures, false for everything transport-side.
    pub fn is_business(&self) -> bool {
        matches!(self, Self::Business { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let phase = if let Some(status) = err.status() {
            TransportPhase::Responded {
                status: status.as_u16(),
            }
        } else if err.is_builder() {
            TransportPhase::NotSent
        } else {
            TransportPhase::NoResponse
        };

        Self::Transport {
            phase,
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_phase_displays() {
        assert_eq!(
            TransportPhase::Responded { status: 502 }.to_string(),
            "responded with status 502"
        );
        assert_eq!(TransportPhase::NoResponse.to_string(), "no response");
        assert_eq!(TransportPhase::NotSent.to_string(), "not sent");
    }

    #[test]
    fn business_classification() {
        let err = ApiError::Business {
            code: "E1".into(),
            message: "nope".into(),
            show_type: ShowType::Error,
            data: serde_json::Value::Null,
        };
        assert!(err.is_business());

        let err = ApiError::Transport {
            phase: TransportPhase::NoResponse,
            detail: "connection reset".into(),
        };
        assert!(!err.is_business());
    }
}
