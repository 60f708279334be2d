//! In-Memory Virtual File System
//!
//! A strictly owned tree of named nodes behind a `tokio` read-write lock,
//! shared between the interactive dispatcher and the script engine. Only
//! one instruction stream mutates it at a time; the lock is what a host
//! running concurrent scripts would lean on.

use tokio::sync::RwLock;

use super::types::*;

/// The virtual file system. The root directory is fixed and always present.
pub struct Vfs {
    root: RwLock<VfsNode>,
}

impl Vfs {
    /// Create a file system containing only the empty root directory.
    pub fn new() -> Self {
        Self { root: RwLock::new(VfsNode::dir()) }
    }

    /// Resolve a path specification against a base directory.
    ///
    /// Pure with respect to the tree: splits on `/` and `\`, discards empty
    /// segments, a leading `C:` (or separator) restarts from the root, `..`
    /// pops one segment unless already at the root, and any other segment
    /// descends into an existing child directory or fails with `NotFound`.
    /// Descending through a file is also `NotFound`.
    pub async fn resolve(&self, base: &VfsPath, spec: &str) -> Result<VfsPath, VfsError> {
        let root = self.root.read().await;
        resolve_in(&root, base, spec)
    }

    /// Kind of the node at a path, or `None` if absent.
    pub async fn node_kind(&self, path: &VfsPath) -> Option<NodeKind> {
        let root = self.root.read().await;
        node_at(&root, path).map(VfsNode::kind)
    }

    /// Create an empty directory under `parent`.
    pub async fn create_dir(&self, parent: &VfsPath, name: &str) -> Result<(), VfsError> {
        let mut root = self.root.write().await;
        let children = children_mut(&mut root, parent)?;
        if children.contains_key(name) {
            return Err(VfsError::AlreadyExists { path: name.to_string() });
        }
        children.insert(name.to_string(), VfsNode::dir());
        Ok(())
    }

    /// Create an empty file under `parent`. Fails if the name is taken.
    pub async fn create_file(&self, parent: &VfsPath, name: &str) -> Result<(), VfsError> {
        let mut root = self.root.write().await;
        let children = children_mut(&mut root, parent)?;
        if children.contains_key(name) {
            return Err(VfsError::AlreadyExists { path: name.to_string() });
        }
        children.insert(name.to_string(), VfsNode::file(""));
        Ok(())
    }

    /// Create-or-overwrite a file under `parent`. This is the primitive
    /// save operations use; overwriting a directory is refused.
    pub async fn write_file(
        &self,
        parent: &VfsPath,
        name: &str,
        content: &str,
    ) -> Result<(), VfsError> {
        let mut root = self.root.write().await;
        let children = children_mut(&mut root, parent)?;
        if let Some(existing) = children.get(name) {
            if existing.is_directory() {
                return Err(VfsError::IsDirectory { path: name.to_string() });
            }
        }
        children.insert(name.to_string(), VfsNode::file(content));
        Ok(())
    }

    /// Read the content of a file under `parent`.
    pub async fn read_file(&self, parent: &VfsPath, name: &str) -> Result<String, VfsError> {
        let root = self.root.read().await;
        let dir = node_at(&root, parent).ok_or_else(|| VfsError::NotFound {
            path: parent.to_string(),
        })?;
        let children = match dir {
            VfsNode::Directory { children } => children,
            VfsNode::File { .. } => {
                return Err(VfsError::NotDirectory { path: parent.to_string() })
            }
        };
        match children.get(name) {
            Some(VfsNode::File { content }) => Ok(content.clone()),
            Some(VfsNode::Directory { .. }) => {
                Err(VfsError::IsDirectory { path: name.to_string() })
            }
            None => Err(VfsError::NotFound { path: name.to_string() }),
        }
    }

    /// List the children of a directory in insertion order.
    pub async fn list_children(&self, path: &VfsPath) -> Result<Vec<DirEntry>, VfsError> {
        let root = self.root.read().await;
        match node_at(&root, path) {
            Some(VfsNode::Directory { children }) => Ok(children
                .iter()
                .map(|(name, node)| DirEntry { name: name.clone(), kind: node.kind() })
                .collect()),
            Some(VfsNode::File { .. }) => {
                Err(VfsError::NotDirectory { path: path.to_string() })
            }
            None => Err(VfsError::NotFound { path: path.to_string() }),
        }
    }

    /// Render the whole tree with box-drawing connectors, one line per
    /// entry, root line included. Backs the `tree` builtin.
    pub async fn render_tree(&self) -> Vec<String> {
        let root = self.root.read().await;
        let mut lines = vec![ROOT_NAME.to_string()];
        render_subtree(&root, "", &mut lines);
        lines
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tree helpers (free functions over the locked root)
// ============================================================================

fn resolve_in(root: &VfsNode, base: &VfsPath, spec: &str) -> Result<VfsPath, VfsError> {
    let trimmed = spec.trim();
    let mut current;
    let rest;
    let lower = trimmed.to_ascii_lowercase();
    if lower == ROOT_NAME.to_ascii_lowercase() || lower.starts_with(&format!("{}\\", ROOT_NAME.to_ascii_lowercase())) || lower.starts_with(&format!("{}/", ROOT_NAME.to_ascii_lowercase())) {
        current = VfsPath::root();
        rest = &trimmed[ROOT_NAME.len()..];
    } else if trimmed.starts_with('\\') || trimmed.starts_with('/') {
        current = VfsPath::root();
        rest = trimmed;
    } else {
        current = base.clone();
        rest = trimmed;
    }

    for segment in rest.split(['\\', '/']).filter(|s| !s.is_empty()) {
        if segment == "." {
            continue;
        }
        if segment == ".." {
            current.pop();
            continue;
        }
        match node_at(root, &current) {
            Some(VfsNode::Directory { children }) => match children.get(segment) {
                Some(VfsNode::Directory { .. }) => current.push(segment),
                _ => return Err(VfsError::NotFound { path: spec.to_string() }),
            },
            _ => return Err(VfsError::NotFound { path: spec.to_string() }),
        }
    }
    Ok(current)
}

fn node_at<'a>(root: &'a VfsNode, path: &VfsPath) -> Option<&'a VfsNode> {
    let mut node = root;
    for segment in path.segments() {
        match node {
            VfsNode::Directory { children } => node = children.get(segment)?,
            VfsNode::File { .. } => return None,
        }
    }
    Some(node)
}

fn children_mut<'a>(
    root: &'a mut VfsNode,
    path: &VfsPath,
) -> Result<&'a mut indexmap::IndexMap<String, VfsNode>, VfsError> {
    let mut node = root;
    for segment in path.segments() {
        match node {
            VfsNode::Directory { children } => {
                node = children.get_mut(segment).ok_or_else(|| VfsError::NotFound {
                    path: path.to_string(),
                })?;
            }
            VfsNode::File { .. } => {
                return Err(VfsError::NotDirectory { path: path.to_string() })
            }
        }
    }
    match node {
        VfsNode::Directory { children } => Ok(children),
        VfsNode::File { .. } => Err(VfsError::NotDirectory { path: path.to_string() }),
    }
}

fn render_subtree(node: &VfsNode, prefix: &str, lines: &mut Vec<String>) {
    let children = match node {
        VfsNode::Directory { children } => children,
        VfsNode::File { .. } => return,
    };
    let count = children.len();
    for (index, (name, child)) in children.iter().enumerate() {
        let is_last = index == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, connector, name));
        if child.is_directory() {
            let next_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            render_subtree(child, &next_prefix, lines);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
