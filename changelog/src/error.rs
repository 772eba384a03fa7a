use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when extracting release notes from a changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write release notes to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid version format: {0}")]
    InvalidVersion(String),
}

impl ChangelogError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Read { path, source } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                format!("Could not write {}: {source}", path.display())
            }
            Self::InvalidVersion(ver) => format!("Invalid version format: {ver}"),
        }
    }
}
