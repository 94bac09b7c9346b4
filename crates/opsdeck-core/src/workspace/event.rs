//! Change notifications fanned out to store subscribers.

use serde::{Deserialize, Serialize};

use crate::chat::Department;

/// High-level notification that some slice of workspace state changed.
///
/// Events carry the key needed to re-read the affected slice, not the
/// data itself; subscribers pull fresh snapshots through the store's
/// read accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkspaceEvent {
    /// The file selection set was replaced or toggled.
    SelectionChanged,
    /// The breadcrumb directory string changed.
    DirectoryChanged { path: String },
    /// The active chat department switched.
    DepartmentChanged { department: Department },
    /// A message was appended to a department's session.
    ChatUpdated { department: Department },
    /// The active upload collection or a task's progress changed.
    UploadsChanged,
    /// A metrics entry was merged or replaced.
    MetricsUpdated { resource: String },
}
