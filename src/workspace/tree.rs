//! Path-addressed traversal over a project tree.
//!
//! Every lookup in the application goes through [`find_content`] so the
//! editor and the preview always agree on which node a path resolves to.

use super::{FileNode, NodeKind};

/// Content of the first node whose path equals `path`, in depth-first
/// pre-order.
///
/// A matching node returns immediately, even when it has no content (a folder
/// that was never written resolves to `""`). A folder's subtree only ends the search when it yields a
/// non-empty result; otherwise the walk moves on to the next sibling.
pub fn find_content<'a>(nodes: &'a [FileNode], path: &str) -> &'a str {
    for node in nodes {
        if node.path == path {
            return node.content();
        }
        if let NodeKind::Folder { children, .. } = &node.kind {
            let found = find_content(children, path);
            if !found.is_empty() {
                return found;
            }
        }
    }
    ""
}

/// First node in pre-order whose path equals `path`.
pub fn find_node<'a>(nodes: &'a [FileNode], path: &str) -> Option<&'a FileNode> {
    for node in nodes {
        if node.path == path {
            return Some(node);
        }
        if let NodeKind::Folder { children, .. } = &node.kind {
            if let Some(found) = find_node(children, path) {
                return Some(found);
            }
        }
    }
    None
}

/// New tree with the content of every node at `path` replaced by `text`.
///
/// Shape and child order are preserved, and a matching folder keeps its
/// children as they are. Unknown paths yield an equal tree.
pub fn replace_content(nodes: &[FileNode], path: &str, text: &str) -> Vec<FileNode> {
    nodes
        .iter()
        .map(|node| {
            if node.path == path {
                // A matching node is never descended.
                return node.with_content(text);
            }
            match &node.kind {
                NodeKind::Folder { content, children } => FileNode {
                    name: node.name.clone(),
                    path: node.path.clone(),
                    kind: NodeKind::Folder {
                        content: content.clone(),
                        children: replace_content(children, path, text),
                    },
                },
                NodeKind::File { .. } => node.clone(),
            }
        })
        .collect()
}

/// Paths of every file, in display order.
pub fn file_paths(nodes: &[FileNode]) -> Vec<&str> {
    let mut paths = Vec::new();
    collect_file_paths(nodes, &mut paths);
    paths
}

fn collect_file_paths<'a>(nodes: &'a [FileNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        match &node.kind {
            NodeKind::File { .. } => out.push(node.path.as_str()),
            NodeKind::Folder { children, .. } => collect_file_paths(children, out),
        }
    }
}
