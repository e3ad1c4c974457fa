use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[source] serde_json::Error),

    #[error("already initialized: found existing {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("this program must be run in a terminal for interactive mode")]
    NotATerminal,
}

pub type Result<T> = std::result::Result<T, Error>;
