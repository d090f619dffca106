use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExplorerError>;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("failed to access the specified path {}: {source}", .path.display())]
    PathAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
    #[error("failed to determine the file explorer binary: {0}")]
    Resolve(#[source] anyhow::Error),
    #[error("failed to start the file explorer process `{program}`: {source}")]
    Start {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("file explorer process `{program}` failed: {status}")]
    Exit { program: String, status: ExitStatus },
    #[error("file explorer process `{program}` failed: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
