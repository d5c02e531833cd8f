//! Gemini `generateContent` backend.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::AssistantBackend;
use crate::config::AssistantConfig;
use crate::conversation::Turn;
use crate::error::AssistantError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP backend for the Gemini REST API.
pub struct GeminiBackend {
    client: Client,
    config: AssistantConfig,
}

impl GeminiBackend {
    /// Builds the HTTP client with the configured request timeout.
    ///
    /// A missing API key is not rejected here; every `generate` call reports
    /// it instead, so a board without a key still opens.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| AssistantError::Network(err.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    fn request_body<'a>(
        &self,
        system_instruction: &'a str,
        history: &'a [Turn],
        user_text: &'a str,
    ) -> GenerateRequest<'a> {
        let mut contents: Vec<Content<'a>> = history
            .iter()
            .map(|turn| Content {
                role: turn.role().as_str(),
                parts: vec![Part { text: turn.text() }],
            })
            .collect();
        contents.push(Content {
            role: "user",
            parts: vec![Part { text: user_text }],
        });

        GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate; empty when there is none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl AssistantBackend for GeminiBackend {
    fn id(&self) -> &str {
        &self.config.model
    }

    async fn generate(
        &self,
        system_instruction: &str,
        history: &[Turn],
        user_text: &str,
    ) -> Result<String, AssistantError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistantError::MissingApiKey)?;

        let body = self.request_body(system_instruction, history, user_text);
        let response = self
            .client
            .post(self.config.generate_url())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&raw).map_err(|err| AssistantError::Parse(err.to_string()))?;
        debug!(
            "event=assistant_generate module=gemini status=ok model={} candidates={}",
            self.config.model,
            parsed.candidates.len()
        );
        Ok(parsed.text())
    }
}
