//! Seed data for workspace initialization.
//!
//! The store has no persistence; every process start re-initializes
//! from the synthetic data here. Content mirrors the shipped demo
//! dataset.

use std::collections::HashMap;

use crate::chat::{ChatMessage, Department, MessageAuthor};
use crate::document::{DocumentNode, DocumentTree};
use crate::metrics::{GpuMetrics, MetricsSnapshot, SystemMetrics};

/// Initial workspace contents handed to [`super::WorkspaceStore`].
#[derive(Debug, Clone)]
pub struct WorkspaceSeed {
    pub tree: DocumentTree,
    pub current_directory: String,
    pub selected_department: Department,
    pub sessions: HashMap<Department, Vec<ChatMessage>>,
    pub metrics: MetricsSnapshot,
}

impl WorkspaceSeed {
    /// The demo dataset every screen boots with.
    pub fn demo() -> Self {
        Self {
            tree: demo_tree(),
            current_directory: "/".to_string(),
            selected_department: Department::Legal,
            sessions: demo_sessions(),
            metrics: demo_metrics(),
        }
    }

    /// A minimal seed around a custom tree, for embedding and tests.
    pub fn empty(tree: DocumentTree) -> Self {
        Self {
            tree,
            current_directory: "/".to_string(),
            selected_department: Department::Legal,
            sessions: HashMap::new(),
            metrics: MetricsSnapshot::default(),
        }
    }
}

fn demo_tree() -> DocumentTree {
    let root = DocumentNode::folder(
        "root",
        "Documentos",
        vec![
            DocumentNode::folder(
                "legal",
                "Legal",
                vec![
                    DocumentNode::file(
                        "contract1",
                        "Contrato_Empresa_A.pdf",
                        "2.5MB",
                        "2024-01-15",
                    ),
                    DocumentNode::file(
                        "contract2",
                        "Contrato_Empresa_B.pdf",
                        "1.8MB",
                        "2024-01-20",
                    ),
                ],
            ),
            DocumentNode::folder(
                "rh",
                "Recursos Humanos",
                vec![
                    DocumentNode::file(
                        "employee1",
                        "Expediente_Juan_Perez.pdf",
                        "3.2MB",
                        "2024-01-10",
                    ),
                    DocumentNode::file("policy1", "Politicas_RH_2024.docx", "1.1MB", "2024-01-05"),
                ],
            ),
            DocumentNode::folder(
                "finanzas",
                "Finanzas",
                vec![
                    DocumentNode::file("report1", "Reporte_Q1_2024.xlsx", "4.5MB", "2024-01-25"),
                    DocumentNode::file("budget1", "Presupuesto_2024.pdf", "2.1MB", "2024-01-12"),
                ],
            ),
        ],
    );
    // Safe to expect: the demo tree is static and its ids are unique.
    DocumentTree::new(root).expect("demo tree ids are unique")
}

fn demo_sessions() -> HashMap<Department, Vec<ChatMessage>> {
    let now = chrono::Utc::now().to_rfc3339();
    let mut sessions = HashMap::new();
    sessions.insert(
        Department::Legal,
        vec![
            ChatMessage {
                id: 1,
                author: MessageAuthor::User,
                text: "Busca el contrato con Empresa A".to_string(),
                timestamp: now.clone(),
                actions: Vec::new(),
            },
            ChatMessage {
                id: 2,
                author: MessageAuthor::Assistant,
                text: "He encontrado el contrato con Empresa A. Las fechas clave son: \
                       Inicio: 15/01/2024, Vencimiento: 15/01/2025, Renovación automática: Sí"
                    .to_string(),
                timestamp: now,
                actions: Vec::new(),
            },
        ],
    );
    sessions.insert(Department::RecursosHumanos, Vec::new());
    sessions.insert(Department::Finanzas, Vec::new());
    sessions
}

fn demo_metrics() -> MetricsSnapshot {
    let mut gpus = HashMap::new();
    gpus.insert(
        "RTX 6000 Ada".to_string(),
        GpuMetrics {
            id: "gpu1".to_string(),
            name: "RTX 6000 Ada".to_string(),
            memory_usage: 75.0,
            temperature: 68.0,
            workload: 82.0,
            throughput: 1250.0,
        },
    );
    gpus.insert(
        "NVIDIA DGX H200".to_string(),
        GpuMetrics {
            id: "gpu2".to_string(),
            name: "NVIDIA DGX H200".to_string(),
            memory_usage: 45.0,
            temperature: 62.0,
            workload: 55.0,
            throughput: 2100.0,
        },
    );

    let mut model_usage = HashMap::new();
    model_usage.insert(Department::Legal, 35.0);
    model_usage.insert(Department::RecursosHumanos, 28.0);
    model_usage.insert(Department::Finanzas, 37.0);

    MetricsSnapshot {
        gpus,
        system: SystemMetrics {
            avg_processing_time: 2.3,
            job_queue: 12,
            model_usage,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_seed_shape() {
        let seed = WorkspaceSeed::demo();
        assert_eq!(seed.tree.file_count(), 6);
        assert_eq!(seed.current_directory, "/");
        assert_eq!(seed.selected_department, Department::Legal);
        assert_eq!(seed.sessions[&Department::Legal].len(), 2);
        assert!(seed.sessions[&Department::Finanzas].is_empty());
        assert_eq!(seed.metrics.gpus.len(), 2);
        assert_eq!(seed.metrics.system.job_queue, 12);
    }
}
