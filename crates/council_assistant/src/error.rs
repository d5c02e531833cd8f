//! Assistant failure taxonomy.
//!
//! Errors never reach the board user directly: `AssistantGateway::send_query`
//! replaces them with a fixed message.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// No API key was configured.
    MissingApiKey,
    /// Connection-level failure before a response arrived.
    Network(String),
    /// The request exceeded the configured timeout.
    Timeout,
    /// The service answered with a non-success status.
    Http { status: u16, body: String },
    /// The response body was not the expected JSON.
    Parse(String),
}

impl AssistantError {
    /// Stable code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "missing_api_key",
            Self::Network(_) => "network",
            Self::Timeout => "timeout",
            Self::Http { .. } => "http_status",
            Self::Parse(_) => "parse",
        }
    }
}

impl Display for AssistantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "assistant API key is not configured"),
            Self::Network(message) => write!(f, "assistant network error: {message}"),
            Self::Timeout => write!(f, "assistant request timed out"),
            Self::Http { status, body } => write!(f, "assistant HTTP {status}: {body}"),
            Self::Parse(message) => write!(f, "assistant response parse error: {message}"),
        }
    }
}

impl Error for AssistantError {}

impl From<reqwest::Error> for AssistantError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout
        } else if value.is_decode() {
            Self::Parse(value.to_string())
        } else {
            Self::Network(value.to_string())
        }
    }
}
