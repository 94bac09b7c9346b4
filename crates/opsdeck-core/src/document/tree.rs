//! Immutable document tree with an indexed file membership test.

use std::collections::HashSet;

use super::model::DocumentNode;
use crate::error::{OpsDeckError, Result};

/// The workspace's hierarchical document structure.
///
/// Construction validates that node ids are unique across the whole tree
/// and builds an index of file-leaf ids so selection validation is an
/// O(1) lookup. The tree never changes after construction; move/delete
/// of real documents is outside this core.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    root: DocumentNode,
    file_ids: HashSet<String>,
}

impl DocumentTree {
    /// Builds a tree from its root node.
    ///
    /// # Errors
    ///
    /// Returns [`OpsDeckError::DuplicateNodeId`] if any two nodes share
    /// an id.
    pub fn new(root: DocumentNode) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut file_ids = HashSet::new();
        for node in iter_nodes(&root) {
            if !seen.insert(node.id().to_string()) {
                return Err(OpsDeckError::duplicate_node(node.id()));
            }
            if node.is_file() {
                file_ids.insert(node.id().to_string());
            }
        }
        Ok(Self { root, file_ids })
    }

    /// The root node.
    pub fn root(&self) -> &DocumentNode {
        &self.root
    }

    /// Depth-first, parent-before-children enumeration of all nodes.
    pub fn iter(&self) -> DocumentTreeIter<'_> {
        DocumentTreeIter {
            stack: vec![&self.root],
        }
    }

    /// Returns true if `id` names a file leaf in this tree.
    pub fn contains_file(&self, id: &str) -> bool {
        self.file_ids.contains(id)
    }

    /// Finds a file leaf by id.
    pub fn find_file(&self, id: &str) -> Option<&DocumentNode> {
        if !self.contains_file(id) {
            return None;
        }
        self.iter().find(|node| node.is_file() && node.id() == id)
    }

    /// Number of file leaves in the tree.
    pub fn file_count(&self) -> usize {
        self.file_ids.len()
    }
}

/// Iterator over tree nodes in depth-first pre-order.
pub struct DocumentTreeIter<'a> {
    stack: Vec<&'a DocumentNode>,
}

impl<'a> Iterator for DocumentTreeIter<'a> {
    type Item = &'a DocumentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse push keeps children in document order when popping.
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

fn iter_nodes(root: &DocumentNode) -> DocumentTreeIter<'_> {
    DocumentTreeIter { stack: vec![root] }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DocumentTree {
        let root = DocumentNode::folder(
            "root",
            "Documentos",
            vec![
                DocumentNode::folder(
                    "legal",
                    "Legal",
                    vec![DocumentNode::file(
                        "contract1",
                        "Contrato_Empresa_A.pdf",
                        "2.5MB",
                        "2024-01-15",
                    )],
                ),
                DocumentNode::file("report1", "Reporte_Q1_2024.xlsx", "4.5MB", "2024-01-25"),
            ],
        );
        DocumentTree::new(root).unwrap()
    }

    #[test]
    fn test_iteration_is_depth_first_parent_before_children() {
        let tree = sample_tree();
        let order: Vec<&str> = tree.iter().map(|node| node.id()).collect();
        assert_eq!(order, vec!["root", "legal", "contract1", "report1"]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let root = DocumentNode::folder(
            "root",
            "Documentos",
            vec![
                DocumentNode::file("dup", "a.pdf", "1MB", "2024-01-01"),
                DocumentNode::file("dup", "b.pdf", "1MB", "2024-01-02"),
            ],
        );
        let err = DocumentTree::new(root).unwrap_err();
        assert!(matches!(err, OpsDeckError::DuplicateNodeId { id } if id == "dup"));
    }

    #[test]
    fn test_file_membership_is_files_only() {
        let tree = sample_tree();
        assert!(tree.contains_file("contract1"));
        assert!(tree.contains_file("report1"));
        // Folders are not selectable leaves.
        assert!(!tree.contains_file("legal"));
        assert!(!tree.contains_file("missing"));
        assert_eq!(tree.file_count(), 2);
    }

    #[test]
    fn test_find_file() {
        let tree = sample_tree();
        let file = tree.find_file("contract1").unwrap();
        assert_eq!(file.name(), "Contrato_Empresa_A.pdf");
        assert!(tree.find_file("legal").is_none());
    }
}
