//! Document workspace domain module.
//!
//! The document tree is constructed once at workspace initialization and
//! is read-only afterwards; folder expand/collapse is display state owned
//! by rendering collaborators and never lives here.

mod model;
mod tree;

pub use model::DocumentNode;
pub use tree::{DocumentTree, DocumentTreeIter};
