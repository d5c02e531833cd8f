//! Scripted backend with queued replies.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use super::AssistantBackend;
use crate::conversation::Turn;
use crate::error::AssistantError;

/// Backend that replays queued outcomes in order.
///
/// Once the queue is drained every call answers with the fallback reply.
pub struct ScriptedBackend {
    id: String,
    replies: Mutex<VecDeque<Result<String, AssistantError>>>,
    fallback: String,
    call_count: AtomicU32,
    last_history_len: AtomicU32,
}

impl ScriptedBackend {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            replies: Mutex::new(VecDeque::new()),
            fallback: "Respuesta de prueba".to_string(),
            call_count: AtomicU32::new(0),
            last_history_len: AtomicU32::new(0),
        }
    }

    /// Queues a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: AssistantError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn with_fallback(mut self, text: impl Into<String>) -> Self {
        self.fallback = text.into();
        self
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Number of history turns seen by the most recent call.
    pub fn last_history_len(&self) -> u32 {
        self.last_history_len.load(Ordering::SeqCst)
    }

    fn push(&self, reply: Result<String, AssistantError>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self::new("scripted-model")
    }
}

#[async_trait]
impl AssistantBackend for ScriptedBackend {
    fn id(&self) -> &str {
        &self.id
    }

    async fn generate(
        &self,
        _system_instruction: &str,
        history: &[Turn],
        _user_text: &str,
    ) -> Result<String, AssistantError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.last_history_len
            .store(history.len() as u32, Ordering::SeqCst);

        let next = match self.replies.lock() {
            Ok(mut replies) => replies.pop_front(),
            Err(_) => None,
        };
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}
