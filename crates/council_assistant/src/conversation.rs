//! Conversation handle threaded through every assistant turn.

/// Speaker of one conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

impl TurnRole {
    /// Role name used by the generation API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One exchanged message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    role: TurnRole,
    text: String,
}

impl Turn {
    pub fn role(&self) -> TurnRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Multi-turn context for one chat session.
///
/// Created once per session and passed back on every query. Only successful
/// exchanges are recorded, as a user turn followed by a model turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn history(&self) -> &[Turn] {
        &self.turns
    }

    pub(crate) fn record_exchange(&mut self, user_text: &str, model_text: &str) {
        self.turns.push(Turn {
            role: TurnRole::User,
            text: user_text.to_string(),
        });
        self.turns.push(Turn {
            role: TurnRole::Model,
            text: model_text.to_string(),
        });
    }
}
