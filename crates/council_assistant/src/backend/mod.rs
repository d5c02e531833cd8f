//! Text-generation backends.
//!
//! - `GeminiBackend`: HTTP client for the Gemini `generateContent` API.
//! - `ScriptedBackend`: canned replies for tests and offline UI work.

pub mod gemini;
pub mod scripted;

use crate::conversation::Turn;
use crate::error::AssistantError;
use async_trait::async_trait;

pub use gemini::GeminiBackend;
pub use scripted::ScriptedBackend;

/// Boundary to the external text-generation capability.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Backend identifier, usually the model name.
    fn id(&self) -> &str;

    /// Generates the model reply for `user_text` given the prior turns.
    ///
    /// An empty string means the service produced no text.
    async fn generate(
        &self,
        system_instruction: &str,
        history: &[Turn],
        user_text: &str,
    ) -> Result<String, AssistantError>;
}
