use std::sync::Arc;
use std::time::Duration;

use opsdeck_application::{AssistantService, ScriptedResponder};
use opsdeck_core::WorkspaceStore;
use opsdeck_core::chat::{ActionKind, Department, MessageAuthor};
use opsdeck_core::config::{AssistantConfig, SimulationConfig, UploadConfig};
use opsdeck_core::upload::UploadRequest;

fn fast_simulation() -> SimulationConfig {
    SimulationConfig {
        upload: UploadConfig {
            tick_interval_ms: 5,
            min_increment: 40.0,
            max_increment: 60.0,
            completed_linger_ms: 30,
        },
        assistant: AssistantConfig {
            typing_delay_ms: 10,
        },
    }
}

#[tokio::test]
async fn test_contract_question_gets_scripted_reply_with_actions() {
    let config = fast_simulation();
    let store = WorkspaceStore::with_config(config.clone());
    let service = AssistantService::new(
        store.clone(),
        Arc::new(ScriptedResponder::new()),
        &config.assistant,
    );

    store.set_selected_department(Department::Legal).await;
    let seeded = store.session(Department::Legal).await.len();

    service
        .send_user_message(Department::Legal, "Busca el contrato con Empresa A")
        .await
        .expect("non-blank input should append");

    // The reply lands after the typing delay.
    let deadline = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            if store.session(Department::Legal).await.len() == seeded + 2 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    assert!(deadline.is_ok(), "assistant reply never arrived");

    let session = store.session(Department::Legal).await;
    let user = &session[seeded];
    let reply = &session[seeded + 1];
    assert_eq!(user.author, MessageAuthor::User);
    assert_eq!(reply.author, MessageAuthor::Assistant);
    assert!(reply.text.contains("contratos relacionados"));
    assert_eq!(reply.actions[0].kind, ActionKind::Move);
    assert!(reply.id > user.id);
}

#[tokio::test]
async fn test_chat_and_uploads_share_one_store() {
    let config = fast_simulation();
    let store = WorkspaceStore::with_config(config.clone());
    let service = AssistantService::new(
        store.clone(),
        Arc::new(ScriptedResponder::new()),
        &config.assistant,
    );

    let ids = store
        .submit_uploads(vec![
            UploadRequest::new("a.pdf", 1024 * 1024),
            UploadRequest::new("b.pdf", 1024 * 1024),
        ])
        .await;
    assert_eq!(ids.len(), 2);

    service
        .send_user_message(Department::Finanzas, "Crea una carpeta Q2-2024")
        .await
        .expect("non-blank input should append");

    // Upload expiry and the chat exchange are driven independently.
    let deadline = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            let drained = store.active_uploads().await.is_empty();
            let replied = store.session(Department::Finanzas).await.len() == 2;
            if drained && replied {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    assert!(deadline.is_ok(), "uploads or chat flow did not settle");

    let session = store.session(Department::Finanzas).await;
    assert!(session[1].text.contains("Q2-2024"));
    assert!(session[1].actions.is_empty());
}
