//! Error presentation
//!
//! Maps request layer failures to UI notification descriptors. The api crate
//! decides *what* to show; rendering lives in the frontend.

use crate::envelope::ShowType;
use crate::error::{ApiError, TransportPhase};

/// Visual severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// How a notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeDisplay {
    /// Corner message; stays until dismissed
    Toast,
    /// Full-width banner with a title; stays until dismissed
    Banner,
}

/// A user-facing notification descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub display: NoticeDisplay,
    pub title: Option<String>,
    pub body: String,
}

impl Notice {
    pub fn warning_toast(body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            display: NoticeDisplay::Toast,
            title: None,
            body: body.into(),
        }
    }

    pub fn error_toast(body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            display: NoticeDisplay::Toast,
            title: None,
            body: body.into(),
        }
    }

    pub fn banner(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            display: NoticeDisplay::Banner,
            title: Some(title.into()),
            body: body.into(),
        }
    }

    /// Notices to render for a failed call. Every failure surfaces exactly
    /// once; an empty vec means stay silent.
    ///
    /// `Notification` intentionally yields the banner *and* a trailing error
    /// toast: the behavior shipped that way (a fallthrough in the original
    /// dispatch) and is kept until product says otherwise.
    pub fn for_error(error: &ApiError) -> Vec<Notice> {
        match error {
            ApiError::Business {
                code,
                message,
                show_type,
                ..
            } => match show_type {
                ShowType::Silent => Vec::new(),
                ShowType::Warn => vec![Self::warning_toast(message)],
                ShowType::Error => vec![Self::error_toast(message)],
                ShowType::Notification => {
                    vec![Self::banner(code, message), Self::error_toast(message)]
                }
                ShowType::Unknown(_) => vec![Self::error_toast(message)],
            },
            ApiError::Transport { phase, .. } => match phase {
                TransportPhase::Responded { status } => {
                    vec![Self::error_toast(format!("response status: {status}"))]
                }
                TransportPhase::NoResponse => vec![Self::error_toast("no response received")],
                TransportPhase::NotSent => vec![Self::error_toast("request failed to send")],
            },
            ApiError::Decode(_) | ApiError::Configuration(_) => {
                vec![Self::error_toast(error.to_string())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(show_type: ShowType) -> ApiError {
        ApiError::Business {
            code: "E42".into(),
            message: "something went sideways".into(),
            show_type,
            data: serde_json::Value::Null,
        }
    }

    #[test]
    fn silent_renders_nothing() {
        assert!(Notice::for_error(&business(ShowType::Silent)).is_empty());
    }

    #[test]
    fn warn_renders_one_warning_toast() {
        let notices = Notice::for_error(&business(ShowType::Warn));
        assert_eq!(notices, vec![Notice::warning_toast("something went sideways")]);
    }

    #[test]
    fn error_renders_one_error_toast() {
        let notices = Notice::for_error(&business(ShowType::Error));
        assert_eq!(notices, vec![Notice::error_toast("something went sideways")]);
    }

    #[test]
    fn notification_renders_banner_then_trailing_toast() {
        let notices = Notice::for_error(&business(ShowType::Notification));
        assert_eq!(
            notices,
            vec![
                Notice::banner("E42", "something went sideways"),
                Notice::error_toast("something went sideways"),
            ]
        );
    }

    #[test]
    fn unknown_show_type_falls_back_to_error_toast() {
        let notices = Notice::for_error(&business(ShowType::Unknown(7)));
        assert_eq!(notices, vec![Notice::error_toast("something went sideways")]);
    }

    #[test]
    fn transport_phases_map_to_fixed_toasts() {
        let responded = ApiError::Transport {
            phase: TransportPhase::Responded { status: 503 },
            detail: "Service Unavailable".into(),
        };
        assert_eq!(
            Notice::for_error(&responded),
            vec![Notice::error_toast("response status: 503")]
        );

        let no_response = ApiError::Transport {
            phase: TransportPhase::NoResponse,
            detail: "timed out".into(),
        };
        assert_eq!(
            Notice::for_error(&no_response),
            vec![Notice::error_toast("no response received")]
        );

        let not_sent = ApiError::Transport {
            phase: TransportPhase::NotSent,
            detail: "bad header value".into(),
        };
        assert_eq!(
            Notice::for_error(&not_sent),
            vec![Notice::error_toast("request failed to send")]
        );
    }
}
