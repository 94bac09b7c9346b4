//! The shared workspace store.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use tokio::sync::{Mutex, RwLock, broadcast};
use tokio_util::sync::CancellationToken;

use super::event::WorkspaceEvent;
use super::seed::WorkspaceSeed;
use crate::chat::{ChatMessage, Department, MessageDraft};
use crate::config::SimulationConfig;
use crate::document::DocumentTree;
use crate::metrics::{GpuMetrics, GpuMetricsPatch, MetricsSnapshot, SystemMetrics};
use crate::upload::{UploadRequest, UploadStatus, UploadTask};

/// Mutable workspace state guarded by the store's lock.
struct WorkspaceState {
    selection: HashSet<String>,
    current_directory: String,
    selected_department: Department,
    sessions: HashMap<Department, Vec<ChatMessage>>,
    uploads: Vec<UploadTask>,
    metrics: MetricsSnapshot,
}

/// State and plumbing shared by all handles to one store.
struct Shared {
    tree: Arc<DocumentTree>,
    state: RwLock<WorkspaceState>,
    events: broadcast::Sender<WorkspaceEvent>,
    /// Next global chat message id; strictly increasing across sessions.
    message_seq: AtomicU64,
    /// Cancellation handles for in-flight upload timelines.
    upload_guards: Mutex<HashMap<String, CancellationToken>>,
    config: SimulationConfig,
}

/// The composition root owning all shared dashboard state.
///
/// `WorkspaceStore` is responsible for:
/// - Document selection consistent with the immutable document tree
/// - Per-department chat sessions with globally ordered message ids
/// - The simulated upload pipeline and its per-task timelines
/// - The infrastructure metrics snapshot
/// - Fanning out change notifications to subscribers
///
/// Operations are total over their input domains: invalid references
/// (unknown file ids, unknown departments, unknown upload ids) are
/// absorbed as no-ops rather than surfaced as errors. UI consumers
/// receive cloned snapshots from the read accessors and must go through
/// the operation set to mutate.
///
/// The store is a cheap handle; clones share the same underlying state,
/// so every screen of the dashboard can hold its own copy.
#[derive(Clone)]
pub struct WorkspaceStore {
    shared: Arc<Shared>,
}

impl WorkspaceStore {
    /// Creates a store seeded with the demo dataset.
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a demo-seeded store with custom simulation pacing.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self::with_seed(WorkspaceSeed::demo(), config)
    }

    /// Creates a store from explicit seed data.
    ///
    /// Message-id sequencing continues above the highest seeded id.
    pub fn with_seed(seed: WorkspaceSeed, config: SimulationConfig) -> Self {
        let next_message_id = seed
            .sessions
            .values()
            .flatten()
            .map(|message| message.id)
            .max()
            .unwrap_or(0)
            + 1;
        let (events, _) = broadcast::channel(64);
        Self {
            shared: Arc::new(Shared {
                tree: Arc::new(seed.tree),
                state: RwLock::new(WorkspaceState {
                    selection: HashSet::new(),
                    current_directory: seed.current_directory,
                    selected_department: seed.selected_department,
                    sessions: seed.sessions,
                    uploads: Vec::new(),
                    metrics: seed.metrics,
                }),
                events,
                message_seq: AtomicU64::new(next_message_id),
                upload_guards: Mutex::new(HashMap::new()),
                config,
            }),
        }
    }

    /// Subscribes to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<WorkspaceEvent> {
        self.shared.events.subscribe()
    }

    // ========================================================================
    // Documents & selection
    // ========================================================================

    /// The immutable document tree.
    pub fn document_tree(&self) -> Arc<DocumentTree> {
        Arc::clone(&self.shared.tree)
    }

    /// Adds a file to the selection.
    ///
    /// Ids that do not resolve to a file leaf are ignored; selection is
    /// a low-stakes UI operation and never fails.
    pub async fn select_file(&self, file_id: &str) {
        if !self.shared.tree.contains_file(file_id) {
            tracing::debug!(file_id, "ignoring selection of unknown file");
            return;
        }
        let changed = {
            let mut state = self.shared.state.write().await;
            state.selection.insert(file_id.to_string())
        };
        if changed {
            self.shared.emit(WorkspaceEvent::SelectionChanged);
        }
    }

    /// Removes a file from the selection, if present.
    pub async fn deselect_file(&self, file_id: &str) {
        let changed = {
            let mut state = self.shared.state.write().await;
            state.selection.remove(file_id)
        };
        if changed {
            self.shared.emit(WorkspaceEvent::SelectionChanged);
        }
    }

    /// Replaces the selection with the given ids.
    ///
    /// Ids that do not resolve to file leaves are silently dropped.
    pub async fn set_selection<I>(&self, file_ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let next: HashSet<String> = file_ids
            .into_iter()
            .map(Into::into)
            .filter(|id| self.shared.tree.contains_file(id))
            .collect();
        {
            let mut state = self.shared.state.write().await;
            state.selection = next;
        }
        self.shared.emit(WorkspaceEvent::SelectionChanged);
    }

    /// The currently selected file ids.
    pub async fn selection(&self) -> HashSet<String> {
        self.shared.state.read().await.selection.clone()
    }

    /// Membership test for a single file id.
    pub async fn is_selected(&self, file_id: &str) -> bool {
        self.shared.state.read().await.selection.contains(file_id)
    }

    /// Stores the breadcrumb path. Opaque; not validated against the tree.
    pub async fn set_current_directory(&self, path: impl Into<String>) {
        let path = path.into();
        let changed = {
            let mut state = self.shared.state.write().await;
            if state.current_directory == path {
                false
            } else {
                state.current_directory = path.clone();
                true
            }
        };
        if changed {
            self.shared.emit(WorkspaceEvent::DirectoryChanged { path });
        }
    }

    /// The breadcrumb path.
    pub async fn current_directory(&self) -> String {
        self.shared.state.read().await.current_directory.clone()
    }

    // ========================================================================
    // Chat sessions
    // ========================================================================

    /// Switches the active chat department.
    pub async fn set_selected_department(&self, department: Department) {
        let changed = {
            let mut state = self.shared.state.write().await;
            if state.selected_department == department {
                false
            } else {
                state.selected_department = department;
                true
            }
        };
        if changed {
            self.shared
                .emit(WorkspaceEvent::DepartmentChanged { department });
        }
    }

    /// Switches the active chat department by display name.
    ///
    /// Unknown names are absorbed as no-ops; the UI only offers valid
    /// choices, so this is a defensive seam, not an error path.
    pub async fn set_selected_department_by_name(&self, name: &str) {
        match name.parse::<Department>() {
            Ok(department) => self.set_selected_department(department).await,
            Err(_) => {
                tracing::debug!(name, "ignoring unknown department");
            }
        }
    }

    /// The active chat department.
    pub async fn selected_department(&self) -> Department {
        self.shared.state.read().await.selected_department
    }

    /// Appends a message to a department's session and returns its id.
    ///
    /// The store assigns the id from a global sequence, so ids are
    /// strictly increasing across all sessions regardless of department
    /// interleaving. The session is created on first append.
    pub async fn append_chat_message(&self, department: Department, draft: MessageDraft) -> u64 {
        let id = self.shared.message_seq.fetch_add(1, Ordering::SeqCst);
        let message = ChatMessage {
            id,
            author: draft.author,
            text: draft.text,
            timestamp: chrono::Utc::now().to_rfc3339(),
            actions: draft.actions,
        };
        {
            let mut state = self.shared.state.write().await;
            state.sessions.entry(department).or_default().push(message);
        }
        tracing::debug!(%department, message_id = id, "chat message appended");
        self.shared
            .emit(WorkspaceEvent::ChatUpdated { department });
        id
    }

    /// The ordered message sequence for a department.
    ///
    /// Returns an empty sequence if the session does not exist yet.
    pub async fn session(&self, department: Department) -> Vec<ChatMessage> {
        self.shared
            .state
            .read()
            .await
            .sessions
            .get(&department)
            .cloned()
            .unwrap_or_default()
    }

    // ========================================================================
    // Upload pipeline
    // ========================================================================

    /// Submits files to the simulated upload pipeline.
    ///
    /// Each request becomes an [`UploadTask`] in `Uploading` state with
    /// zero progress, and gets an independent timer-driven timeline:
    /// progress advances by a bounded random increment per tick, clamps
    /// at 100, lingers briefly in `Completed`, then the task expires out
    /// of the active collection. Tasks submitted together share no
    /// mutable timer state and may complete in any order.
    ///
    /// # Returns
    ///
    /// The ids of the created tasks, in request order.
    pub async fn submit_uploads(&self, requests: Vec<UploadRequest>) -> Vec<String> {
        if requests.is_empty() {
            return Vec::new();
        }
        let mut ids = Vec::with_capacity(requests.len());
        {
            let mut state = self.shared.state.write().await;
            for request in &requests {
                let task = UploadTask::new(request);
                tracing::debug!(task_id = %task.id, file_name = %task.file_name, "upload submitted");
                ids.push(task.id.clone());
                state.uploads.push(task);
            }
        }
        {
            let mut guards = self.shared.upload_guards.lock().await;
            for id in &ids {
                let token = CancellationToken::new();
                guards.insert(id.clone(), token.clone());
                spawn_timeline(Arc::clone(&self.shared), id.clone(), token);
            }
        }
        self.shared.emit(WorkspaceEvent::UploadsChanged);
        ids
    }

    /// Removes an upload from the active collection and cancels its
    /// timeline.
    ///
    /// Works at any point in the task's lifecycle; a dismissed task's
    /// timer never runs orphaned. Unknown ids are no-ops.
    pub async fn dismiss_upload(&self, task_id: &str) {
        if let Some(token) = self.shared.upload_guards.lock().await.remove(task_id) {
            token.cancel();
        }
        self.shared.remove_upload(task_id).await;
    }

    /// The tasks not yet expired from the store, in submission order.
    pub async fn active_uploads(&self) -> Vec<UploadTask> {
        self.shared.state.read().await.uploads.clone()
    }

    /// Looks up a single active task by id.
    pub async fn upload(&self, task_id: &str) -> Option<UploadTask> {
        self.shared
            .state
            .read()
            .await
            .uploads
            .iter()
            .find(|task| task.id == task_id)
            .cloned()
    }

    // ========================================================================
    // Metrics
    // ========================================================================

    /// Merges a partial GPU reading into the entry for `resource`.
    ///
    /// Creates a zeroed entry if the resource is unknown. Values are
    /// accepted without bounds validation and propagate to display
    /// as-is.
    pub async fn update_gpu_metrics(&self, resource: &str, patch: GpuMetricsPatch) {
        {
            let mut state = self.shared.state.write().await;
            let entry = state
                .metrics
                .gpus
                .entry(resource.to_string())
                .or_insert_with(|| GpuMetrics::named(resource));
            patch.apply(entry);
        }
        self.shared.emit(WorkspaceEvent::MetricsUpdated {
            resource: resource.to_string(),
        });
    }

    /// Replaces the global processing record.
    pub async fn update_system_metrics(&self, system: SystemMetrics) {
        {
            let mut state = self.shared.state.write().await;
            state.metrics.system = system;
        }
        self.shared.emit(WorkspaceEvent::MetricsUpdated {
            resource: "system".to_string(),
        });
    }

    /// A snapshot of all infrastructure readings.
    pub async fn metrics(&self) -> MetricsSnapshot {
        self.shared.state.read().await.metrics.clone()
    }
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one task's independent progress timeline to expiry.
fn spawn_timeline(shared: Arc<Shared>, task_id: String, token: CancellationToken) {
    tokio::spawn(async move {
        let tick = shared.config.upload.tick_interval();
        loop {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(tick) => {
                    match shared.advance_upload(&task_id).await {
                        Some(UploadStatus::Uploading) => {}
                        Some(UploadStatus::Completed) => break,
                        // Task already removed; nothing left to drive.
                        None => return,
                    }
                }
            }
        }
        // Keep the completed task visible briefly before expiry.
        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(shared.config.upload.completed_linger()) => {}
        }
        tracing::debug!(task_id = %task_id, "upload expired");
        shared.remove_upload(&task_id).await;
    });
}

impl Shared {
    /// Advances one task's progress by a bounded random increment.
    async fn advance_upload(&self, task_id: &str) -> Option<UploadStatus> {
        // Draw outside the lock and away from await points.
        let increment = {
            let mut rng = rand::thread_rng();
            rng.gen_range(self.config.upload.min_increment..=self.config.upload.max_increment)
        };
        let status = {
            let mut state = self.state.write().await;
            let task = state.uploads.iter_mut().find(|task| task.id == task_id)?;
            let status = task.advance(increment);
            if status == UploadStatus::Completed {
                tracing::debug!(task_id = %task_id, "upload completed");
            }
            status
        };
        self.emit(WorkspaceEvent::UploadsChanged);
        Some(status)
    }

    async fn remove_upload(&self, task_id: &str) {
        let removed = {
            let mut state = self.state.write().await;
            let before = state.uploads.len();
            state.uploads.retain(|task| task.id != task_id);
            state.uploads.len() != before
        };
        if removed {
            self.upload_guards.lock().await.remove(task_id);
            self.emit(WorkspaceEvent::UploadsChanged);
        }
    }

    fn emit(&self, event: WorkspaceEvent) {
        // Send fails only when no subscriber is listening.
        let _ = self.events.send(event);
    }
}
