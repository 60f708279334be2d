//! Virtual File System Types
//!
//! Core types for the in-memory directory/file tree the shell and its
//! scripts operate on.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

/// Name of the fixed root directory. Every path in the tree starts here.
pub const ROOT_NAME: &str = "C:";

/// Separator used when displaying paths (`C:\a\b`). Both `\` and `/` are
/// accepted on input.
pub const PATH_SEPARATOR: char = '\\';

/// Virtual file system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("no such file or directory: '{path}'")]
    NotFound { path: String },

    #[error("a subdirectory or file '{path}' already exists")]
    AlreadyExists { path: String },

    #[error("not a directory: '{path}'")]
    NotDirectory { path: String },

    #[error("is a directory: '{path}'")]
    IsDirectory { path: String },
}

/// Node kind, for listings and stat-style checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A node in the virtual file system tree.
///
/// Closed tagged union: a node is either a directory (children keyed by
/// name, unique among siblings, insertion-ordered) or a file with text
/// content. Each child is exclusively owned by its parent, so the tree can
/// have no cycles or orphans.
#[derive(Debug, Clone)]
pub enum VfsNode {
    Directory { children: IndexMap<String, VfsNode> },
    File { content: String },
}

impl VfsNode {
    /// Create an empty directory node.
    pub fn dir() -> Self {
        VfsNode::Directory { children: IndexMap::new() }
    }

    /// Create a file node with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        VfsNode::File { content: content.into() }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            VfsNode::Directory { .. } => NodeKind::Directory,
            VfsNode::File { .. } => NodeKind::File,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, VfsNode::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, VfsNode::File { .. })
    }
}

/// A directory entry returned by listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}

/// An ordered sequence of node names below the root.
///
/// The empty path is the root itself. A committed current path must always
/// name an existing directory; `Vfs::resolve` is the only way to build one
/// from user input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VfsPath {
    segments: Vec<String>,
}

impl VfsPath {
    /// The root directory path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Descend into a child.
    pub fn push(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    /// Pop one segment. At the root this is a no-op, not an error.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Child path of this one.
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push(name);
        child
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ROOT_NAME)?;
        for segment in &self.segments {
            write!(f, "{}{}", PATH_SEPARATOR, segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind() {
        assert!(VfsNode::dir().is_directory());
        assert!(!VfsNode::dir().is_file());
        assert_eq!(VfsNode::dir().kind(), NodeKind::Directory);

        let file = VfsNode::file("hello");
        assert!(file.is_file());
        assert!(!file.is_directory());
        assert_eq!(file.kind(), NodeKind::File);
    }

    #[test]
    fn test_path_display() {
        let mut path = VfsPath::root();
        assert_eq!(path.to_string(), "C:");
        path.push("scripts");
        path.push("demo");
        assert_eq!(path.to_string(), "C:\\scripts\\demo");
    }

    #[test]
    fn test_path_pop_at_root_is_noop() {
        let mut path = VfsPath::root();
        path.pop();
        assert!(path.is_root());
        path.push("a");
        path.pop();
        assert!(path.is_root());
    }

    #[test]
    fn test_path_join() {
        let base = VfsPath::root().join("a");
        let child = base.join("b");
        assert_eq!(base.to_string(), "C:\\a");
        assert_eq!(child.to_string(), "C:\\a\\b");
    }
}
