use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structural wiring bug: a component read or wrote the title context
    /// before the provider was mounted (or after teardown).
    #[error("title context used outside of a mounted TitleProvider")]
    TitleProviderMissing,

    #[error("unknown resource kind: {0}")]
    UnknownKind(String),

    #[error("failed to create log file in {dir}: {source}")]
    LogSetup {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize rows: {0}")]
    Serialize(#[from] serde_json::Error),
}
