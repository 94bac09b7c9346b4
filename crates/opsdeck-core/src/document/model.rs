//! Document node domain model.

use serde::{Deserialize, Serialize};

/// A single node in the document tree.
///
/// The variant encodes the node kind: folders carry children and nothing
/// else, files carry the display metadata and no children. UI consumers
/// receive this shape serialized with a `kind` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentNode {
    /// A folder with an ordered sequence of child nodes.
    Folder {
        id: String,
        name: String,
        children: Vec<DocumentNode>,
    },
    /// A file leaf with display metadata.
    #[serde(rename_all = "camelCase")]
    File {
        id: String,
        name: String,
        /// Human-readable size, e.g. "2.5MB".
        size_label: String,
        /// Human-readable modification date, e.g. "2024-01-15".
        modified_at: String,
    },
}

impl DocumentNode {
    /// Creates a folder node.
    pub fn folder(
        id: impl Into<String>,
        name: impl Into<String>,
        children: Vec<DocumentNode>,
    ) -> Self {
        Self::Folder {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    /// Creates a file leaf.
    pub fn file(
        id: impl Into<String>,
        name: impl Into<String>,
        size_label: impl Into<String>,
        modified_at: impl Into<String>,
    ) -> Self {
        Self::File {
            id: id.into(),
            name: name.into(),
            size_label: size_label.into(),
            modified_at: modified_at.into(),
        }
    }

    /// The node's unique id.
    pub fn id(&self) -> &str {
        match self {
            Self::Folder { id, .. } | Self::File { id, .. } => id,
        }
    }

    /// The node's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Returns true for file leaves.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Child nodes, empty for files.
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            Self::Folder { children, .. } => children,
            Self::File { .. } => &[],
        }
    }
}
