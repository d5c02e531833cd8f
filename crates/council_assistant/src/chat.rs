//! Chat transcript for the assistant panel.

use crate::backend::AssistantBackend;
use crate::conversation::Conversation;
use crate::gateway::AssistantGateway;

/// First message of every transcript.
pub const GREETING: &str =
    "Hola. Soy tu asistente del Manual General. ¿Cómo puedo ayudar al consejo a coordinar mejor hoy?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    fn user(text: &str) -> Self {
        Self {
            role: ChatRole::User,
            text: text.to_string(),
        }
    }

    fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Visible transcript plus the conversation handle behind it.
///
/// `submit` borrows the chat mutably for the whole round trip, so only one
/// request can be in flight.
pub struct AssistantChat<B: AssistantBackend> {
    gateway: AssistantGateway<B>,
    conversation: Conversation,
    messages: Vec<ChatMessage>,
}

impl<B: AssistantBackend> AssistantChat<B> {
    pub fn new(gateway: AssistantGateway<B>) -> Self {
        let conversation = gateway.start_conversation();
        Self {
            gateway,
            conversation,
            messages: vec![ChatMessage::model(GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Sends trimmed `text` and appends both sides to the transcript.
    ///
    /// Returns the reply, or `None` when the input was blank.
    pub async fn submit(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        let reply = self.gateway.send_query(&mut self.conversation, text).await;
        self.messages.push(ChatMessage::model(reply));
        self.messages.last()
    }
}
