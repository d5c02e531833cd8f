//! Manual assistant for the ward council board.
//!
//! Wraps an external text-generation service behind a gateway that always
//! returns displayable text, plus the chat transcript the board shows.

pub mod backend;
pub mod chat;
pub mod config;
pub mod conversation;
pub mod error;
pub mod gateway;

pub use backend::{AssistantBackend, GeminiBackend, ScriptedBackend};
pub use chat::{AssistantChat, ChatMessage, ChatRole, GREETING};
pub use config::AssistantConfig;
pub use conversation::{Conversation, Turn, TurnRole};
pub use error::AssistantError;
pub use gateway::{AssistantGateway, EMPTY_REPLY, ERROR_REPLY, SYSTEM_INSTRUCTION};
