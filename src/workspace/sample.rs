use super::FileNode;
use crate::error::WorkspaceError;

const SAMPLE_PROJECT: &str = include_str!("sample_project.json");

/// The starter project every session opens with.
pub fn sample_project() -> Result<Vec<FileNode>, WorkspaceError> {
    Ok(serde_json::from_str(SAMPLE_PROJECT)?)
}
