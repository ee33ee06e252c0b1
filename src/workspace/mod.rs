use crate::error::WorkspaceError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod sample;
pub mod tree;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File {
        #[serde(default)]
        content: String,
    },
    Folder {
        /// Only set once a write targets the folder's own path.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default)]
        children: Vec<FileNode>,
    },
}

impl FileNode {
    #[cfg(test)]
    pub fn file(name: impl Into<String>, path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
        }
    }

    #[cfg(test)]
    pub fn folder(name: impl Into<String>, path: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Folder {
                content: None,
                children,
            },
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// Node content; a folder that was never written has none.
    pub fn content(&self) -> &str {
        match &self.kind {
            NodeKind::File { content } => content.as_str(),
            NodeKind::Folder { content, .. } => content.as_deref().unwrap_or(""),
        }
    }

    pub fn children(&self) -> &[FileNode] {
        match &self.kind {
            NodeKind::Folder { children, .. } => children.as_slice(),
            NodeKind::File { .. } => &[],
        }
    }

    /// Copy of this node with `text` as its content. Children are kept.
    pub fn with_content(&self, text: &str) -> FileNode {
        let kind = match &self.kind {
            NodeKind::File { .. } => NodeKind::File {
                content: text.to_string(),
            },
            NodeKind::Folder { children, .. } => NodeKind::Folder {
                content: Some(text.to_string()),
                children: children.clone(),
            },
        };
        FileNode {
            name: self.name.clone(),
            path: self.path.clone(),
            kind,
        }
    }
}

/// The in-memory project. Owned by the composition root; every mutation goes
/// through [`Workspace::replace_content`] or [`Workspace::try_replace_content`].
///
/// The tree sits behind an `Arc` whose identity changes exactly when some
/// content changed, so consumers can memoize on it.
#[derive(Debug, Clone)]
pub struct Workspace {
    files: Arc<Vec<FileNode>>,
    revision: u64,
}

impl Workspace {
    pub fn new(files: Vec<FileNode>) -> Self {
        Self {
            files: Arc::new(files),
            revision: 0,
        }
    }

    pub fn seeded() -> Result<Self, WorkspaceError> {
        Ok(Self::new(sample::sample_project()?))
    }

    pub fn files(&self) -> &Arc<Vec<FileNode>> {
        &self.files
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn content(&self, path: &str) -> &str {
        tree::find_content(&self.files, path)
    }

    pub fn node(&self, path: &str) -> Option<&FileNode> {
        tree::find_node(&self.files, path)
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.node(path).is_some_and(|node| !node.is_folder())
    }

    pub fn file_paths(&self) -> Vec<&str> {
        tree::file_paths(&self.files)
    }

    /// Replaces the content of every node at `path`. Unknown paths are a
    /// silent no-op that keeps the current tree identity.
    pub fn replace_content(&mut self, path: &str, text: &str) -> bool {
        if self.node(path).is_none() {
            tracing::debug!(path, "replace_content: no node at path");
            return false;
        }

        self.files = Arc::new(tree::replace_content(&self.files, path, text));
        self.revision += 1;
        tracing::trace!(path, bytes = text.len(), revision = self.revision, "content replaced");
        true
    }

    pub fn try_replace_content(&mut self, path: &str, text: &str) -> Result<(), WorkspaceError> {
        match self.node(path) {
            None => Err(WorkspaceError::PathNotFound(path.to_string())),
            Some(node) if node.is_folder() => Err(WorkspaceError::NotAFile(path.to_string())),
            Some(_) => {
                self.replace_content(path, text);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_workspace_exposes_sample_files() {
        let workspace = Workspace::seeded().expect("seed project should parse");
        assert!(workspace.is_file("src/App.tsx"));
        assert!(workspace.is_file("index.html"));
        assert!(!workspace.is_file("src"));
        assert!(workspace.content("src/App.tsx").contains("function App()"));
    }

    #[test]
    fn replace_content_swaps_identity_and_bumps_revision() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");
        let before = Arc::clone(workspace.files());

        assert!(workspace.replace_content("src/main.tsx", "// edited"));
        assert!(!Arc::ptr_eq(&before, workspace.files()));
        assert_eq!(workspace.revision(), 1);
        assert_eq!(workspace.content("src/main.tsx"), "// edited");
    }

    #[test]
    fn replace_content_miss_keeps_identity() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");
        let before = Arc::clone(workspace.files());

        assert!(!workspace.replace_content("src/missing.tsx", "x"));
        assert!(Arc::ptr_eq(&before, workspace.files()));
        assert_eq!(workspace.revision(), 0);
        assert_eq!(workspace.content("src/missing.tsx"), "");
    }

    #[test]
    fn try_replace_content_signals_missing_path_and_folders() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");

        let missing = workspace
            .try_replace_content("src/missing.tsx", "x")
            .expect_err("missing path should fail");
        assert!(matches!(missing, WorkspaceError::PathNotFound(path) if path == "src/missing.tsx"));

        let folder = workspace
            .try_replace_content("src/components", "x")
            .expect_err("folder path should fail");
        assert!(matches!(folder, WorkspaceError::NotAFile(_)));
        assert_eq!(workspace.revision(), 0);

        workspace
            .try_replace_content("package.json", "{}")
            .expect("existing file should be replaced");
        assert_eq!(workspace.content("package.json"), "{}");
    }

    #[test]
    fn file_node_serializes_with_type_tag() {
        let node = FileNode::folder("src", "src", vec![FileNode::file("a.ts", "src/a.ts", "x")]);
        let value = serde_json::to_value(&node).expect("node should serialize");
        assert_eq!(value["type"], "folder");
        assert_eq!(value["children"][0]["type"], "file");
        assert_eq!(value["children"][0]["content"], "x");
        assert!(value.get("content").is_none());
    }

    #[test]
    fn replace_content_on_folder_path_is_readable_back() {
        let mut workspace = Workspace::seeded().expect("seed project should parse");

        assert!(workspace.replace_content("src/components", "X"));
        assert_eq!(workspace.content("src/components"), "X");
        assert!(workspace.is_file("src/components/Button.tsx"));
        assert_eq!(workspace.file_paths().len(), 6);
    }
}
