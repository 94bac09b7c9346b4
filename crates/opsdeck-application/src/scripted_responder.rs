//! Scripted Assistant Responder
//!
//! Produces the canned, keyword-matched replies the dashboard ships
//! with. No model is invoked; this implementation stands on the core's
//! responder seam so a real backend can replace it without touching
//! the store.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use opsdeck_core::chat::{
    ActionKind, AssistantReply, AssistantResponder, Department, MessageAction,
};
use opsdeck_core::error::Result;

/// Keyword-to-reply table, checked in order against the lowercased prompt.
static KEYWORD_REPLIES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        (
            "contrato",
            "He encontrado 3 contratos relacionados. El contrato con Empresa A vence el \
             15/03/2024. ¿Te gustaría que lo mueva a una carpeta de \"Próximos a Vencer\"?",
        ),
        (
            "organiza",
            "He organizado los documentos por fecha. Creé las siguientes carpetas: \
             \"2024\", \"2023\", \"2022\". ¿Quieres que aplique algún filtro adicional?",
        ),
        (
            "busca",
            "Encontré 12 documentos que coinciden con tu búsqueda. Los he ordenado por \
             relevancia y fecha de modificación.",
        ),
        (
            "crea",
            "He creado la carpeta \"Q2-2024\" y he movido 8 reportes financieros. La \
             operación se completó exitosamente.",
        ),
    ]
});

const FALLBACK_REPLY: &str = "He procesado tu solicitud. ¿Hay algo específico que te gustaría \
                              que haga con los documentos encontrados?";

/// Per-department suggested prompts shown next to the chat input.
///
/// Departments without a curated list get an empty slice.
pub fn suggested_prompts(department: Department) -> &'static [&'static str] {
    match department {
        Department::Legal => &[
            "Busca el contrato con X empresa y extrae las fechas clave",
            "Encuentra todos los documentos que vencen este mes",
            "Organiza los contratos por tipo y fecha de vencimiento",
        ],
        Department::RecursosHumanos => &[
            "Organiza los documentos de RH por antigüedad",
            "Busca expedientes de empleados activos",
            "Crea un reporte de políticas actualizadas",
        ],
        Department::Finanzas => &[
            "Crea una carpeta Q2-2024 y mueve estos informes",
            "Busca facturas pendientes de pago",
            "Organiza reportes financieros por trimestre",
        ],
        _ => &[],
    }
}

/// The shipped assistant: canned replies keyed on prompt keywords.
#[derive(Debug, Default, Clone)]
pub struct ScriptedResponder;

impl ScriptedResponder {
    pub fn new() -> Self {
        Self
    }

    fn reply_text(prompt: &str) -> &'static str {
        KEYWORD_REPLIES
            .iter()
            .find(|(keyword, _)| prompt.contains(keyword))
            .map(|(_, reply)| *reply)
            .unwrap_or(FALLBACK_REPLY)
    }

    fn follow_up_actions(prompt: &str) -> Vec<MessageAction> {
        if prompt.contains("contrato") {
            return vec![
                MessageAction::new(ActionKind::Move, "Mover a \"Próximos a Vencer\""),
                MessageAction::new(ActionKind::View, "Ver detalles del contrato"),
            ];
        }
        if prompt.contains("organiza") {
            return vec![
                MessageAction::new(ActionKind::Undo, "Deshacer organización"),
                MessageAction::new(ActionKind::View, "Ver estructura creada"),
            ];
        }
        Vec::new()
    }
}

#[async_trait]
impl AssistantResponder for ScriptedResponder {
    async fn respond(&self, department: Department, prompt: &str) -> Result<AssistantReply> {
        let prompt = prompt.to_lowercase();
        tracing::debug!(%department, "producing scripted reply");
        Ok(AssistantReply::new(
            Self::reply_text(&prompt),
            Self::follow_up_actions(&prompt),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_contract_prompt_gets_contract_reply_and_actions() {
        let responder = ScriptedResponder::new();
        let reply = responder
            .respond(Department::Legal, "Busca el CONTRATO con Empresa A")
            .await
            .unwrap();

        assert!(reply.text.contains("contratos relacionados"));
        assert_eq!(reply.actions.len(), 2);
        assert_eq!(reply.actions[0].kind, ActionKind::Move);
        assert_eq!(reply.actions[1].kind, ActionKind::View);
    }

    #[tokio::test]
    async fn test_organize_prompt_gets_undo_action() {
        let responder = ScriptedResponder::new();
        let reply = responder
            .respond(Department::Finanzas, "Organiza los reportes")
            .await
            .unwrap();

        assert!(reply.text.contains("organizado los documentos"));
        assert_eq!(reply.actions[0].kind, ActionKind::Undo);
    }

    #[tokio::test]
    async fn test_unmatched_prompt_falls_back_without_actions() {
        let responder = ScriptedResponder::new();
        let reply = responder
            .respond(Department::It, "hola")
            .await
            .unwrap();

        assert_eq!(reply.text, super::FALLBACK_REPLY);
        assert!(reply.actions.is_empty());
    }

    #[test]
    fn test_suggested_prompts_cover_curated_departments() {
        assert_eq!(suggested_prompts(Department::Legal).len(), 3);
        assert_eq!(suggested_prompts(Department::RecursosHumanos).len(), 3);
        assert_eq!(suggested_prompts(Department::Finanzas).len(), 3);
        assert!(suggested_prompts(Department::Marketing).is_empty());
    }
}
