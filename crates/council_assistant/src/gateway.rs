//! Assistant gateway: never-failing query entry point for the board.

use log::{info, warn};

use crate::backend::{AssistantBackend, GeminiBackend};
use crate::config::AssistantConfig;
use crate::conversation::Conversation;
use crate::error::AssistantError;

/// Domain prompt sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "\
Actúa como un experto consultor en el Manual General de La Iglesia de Jesucristo de los Santos de los Últimos Días.
Tu objetivo es ayudar a un Consejo de Barrio a organizar sus esfuerzos para ayudar a los miembros en la Senda de los Convenios.
Responde siempre en Español.
Basa tus respuestas en políticas oficiales, enfocándote en:
1. Reuniones de Coordinación Misional.
2. Reuniones de Coordinación de Templo e Historia Familiar.
3. El papel de las Organizaciones Auxiliares.
4. La centralidad de la Senda de los Convenios.
5. Cómo usar la herramienta de asignación de tareas del tablero.

Sé conciso, inspirador y práctico. Usa listas con viñetas cuando des pasos a seguir.
Si te preguntan sobre una situación específica, sugiere cómo el consejo podría deliberar, citando principios del manual.
";

/// Reply shown when the backend fails.
pub const ERROR_REPLY: &str =
    "Hubo un error al consultar el manual. Por favor verifica tu conexión o intenta más tarde.";

/// Reply shown when the backend answers without text.
pub const EMPTY_REPLY: &str = "Lo siento, no pude generar una respuesta en este momento.";

pub struct AssistantGateway<B: AssistantBackend> {
    backend: B,
}

impl AssistantGateway<GeminiBackend> {
    /// Gateway over the Gemini backend.
    pub fn gemini(config: AssistantConfig) -> Result<Self, AssistantError> {
        Ok(Self::new(GeminiBackend::new(config)?))
    }
}

impl<B: AssistantBackend> AssistantGateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Opens a fresh conversation handle for one chat session.
    pub fn start_conversation(&self) -> Conversation {
        info!(
            "event=assistant_session_start module=gateway status=ok backend={}",
            self.backend.id()
        );
        Conversation::new()
    }

    /// Sends `user_text` in the context of `conversation`.
    ///
    /// Both turns are recorded only when the backend returned non-empty text.
    /// `Ok("")` means the backend succeeded without producing text.
    pub async fn try_send_query(
        &self,
        conversation: &mut Conversation,
        user_text: &str,
    ) -> Result<String, AssistantError> {
        let reply = self
            .backend
            .generate(SYSTEM_INSTRUCTION, conversation.history(), user_text)
            .await?;
        if !reply.is_empty() {
            conversation.record_exchange(user_text, &reply);
        }
        Ok(reply)
    }

    /// Like [`Self::try_send_query`] but always yields displayable text.
    pub async fn send_query(&self, conversation: &mut Conversation, user_text: &str) -> String {
        match self.try_send_query(conversation, user_text).await {
            Ok(reply) if reply.is_empty() => {
                warn!(
                    "event=assistant_query module=gateway status=empty backend={}",
                    self.backend.id()
                );
                EMPTY_REPLY.to_string()
            }
            Ok(reply) => {
                info!(
                    "event=assistant_query module=gateway status=ok backend={} turns={}",
                    self.backend.id(),
                    conversation.turn_count()
                );
                reply
            }
            Err(err) => {
                warn!(
                    "event=assistant_query module=gateway status=error backend={} error_code={}",
                    self.backend.id(),
                    err.code()
                );
                ERROR_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AssistantGateway, EMPTY_REPLY, ERROR_REPLY};
    use crate::backend::ScriptedBackend;
    use crate::error::AssistantError;

    #[tokio::test]
    async fn successful_reply_records_both_turns() {
        let gateway = AssistantGateway::new(ScriptedBackend::default().with_reply("Claro."));
        let mut conversation = gateway.start_conversation();

        let reply = gateway.send_query(&mut conversation, "¿Cómo empezamos?").await;

        assert_eq!(reply, "Claro.");
        assert_eq!(conversation.turn_count(), 2);
        assert_eq!(conversation.history()[0].text(), "¿Cómo empezamos?");
        assert_eq!(conversation.history()[1].text(), "Claro.");
    }

    #[tokio::test]
    async fn backend_error_yields_fixed_message_and_keeps_history() {
        let gateway = AssistantGateway::new(
            ScriptedBackend::default()
                .with_reply("Primera respuesta")
                .with_error(AssistantError::Timeout),
        );
        let mut conversation = gateway.start_conversation();
        gateway.send_query(&mut conversation, "uno").await;

        let reply = gateway.send_query(&mut conversation, "dos").await;

        assert_eq!(reply, ERROR_REPLY);
        assert_eq!(conversation.turn_count(), 2);
        assert_eq!(gateway.backend().last_history_len(), 2);
    }

    #[tokio::test]
    async fn empty_reply_yields_apology_without_recording() {
        let gateway = AssistantGateway::new(ScriptedBackend::default().with_reply(""));
        let mut conversation = gateway.start_conversation();

        let reply = gateway.send_query(&mut conversation, "hola").await;

        assert_eq!(reply, EMPTY_REPLY);
        assert_eq!(conversation.turn_count(), 0);
    }

    #[tokio::test]
    async fn try_send_query_surfaces_the_error() {
        let gateway =
            AssistantGateway::new(ScriptedBackend::default().with_error(AssistantError::MissingApiKey));
        let mut conversation = gateway.start_conversation();

        let err = gateway
            .try_send_query(&mut conversation, "hola")
            .await
            .unwrap_err();
        assert_eq!(err, AssistantError::MissingApiKey);
    }
}
