use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("window operation failed: {0}")]
    WindowOperation(String),

    #[error("activation hook error: {0}")]
    HookInstall(String),

    #[error("grouping identity error: {0}")]
    Identity(String),

    #[error("platform query failed: {0}")]
    Query(String),

    #[error("path error: {0}")]
    PathError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read group store {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to parse group store: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TaskdockError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("popout error: {0}")]
    Popout(String),
}
