//! Assistant client configuration.

use std::fmt::{Debug, Formatter};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_API_KEY: &str = "GEMINI_API_KEY";
const ENV_API_KEY_FALLBACK: &str = "API_KEY";
const ENV_MODEL: &str = "COUNCIL_ASSISTANT_MODEL";
const ENV_BASE_URL: &str = "COUNCIL_ASSISTANT_BASE_URL";

/// Connection settings for the text-generation service.
#[derive(Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// API root without trailing slash, e.g. `.../v1beta`.
    pub base_url: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Debug for AssistantConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AssistantConfig {
    /// Reads `GEMINI_API_KEY` (or `API_KEY`), `COUNCIL_ASSISTANT_MODEL` and
    /// `COUNCIL_ASSISTANT_BASE_URL`. Missing values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();
        Self {
            api_key: non_blank(ENV_API_KEY).or_else(|| non_blank(ENV_API_KEY_FALLBACK)),
            model: non_blank(ENV_MODEL).unwrap_or(defaults.model),
            base_url: non_blank(ENV_BASE_URL).unwrap_or(defaults.base_url),
            ..defaults
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}
