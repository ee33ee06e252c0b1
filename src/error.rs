use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("no node at path: {0}")]
    PathNotFound(String),
    #[error("not a file: {0}")]
    NotAFile(String),
    #[error("failed to parse seed project: {0}")]
    Seed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "split ratio {0} is outside [{}, {}]",
        crate::layout::MIN_SPLIT_RATIO,
        crate::layout::MAX_SPLIT_RATIO
    )]
    SplitRatio(f32),
    #[error("invalid window size: {0}x{1}")]
    WindowSize(f32, f32),
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}
