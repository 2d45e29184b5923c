//! Error taxonomy for the table regeneration pipeline.
//!
//! Every variant is terminal: the first failure aborts the run before any
//! later stage executes, and in particular before the target is written.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Connection or protocol failure before a response arrived.
    #[error("download of {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("download of {url} returned status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body could not be drained completely.
    #[error("reading response body from {url} failed: {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("reading {} failed: {source}", path.display())]
    ReadTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing taxonomy document failed: {0}")]
    MalformedData(#[from] serde_json::Error),

    #[error("cannot build anchor pattern for `{var_name}`: {source}")]
    InvalidAnchor {
        var_name: String,
        #[source]
        source: regex::Error,
    },

    #[error("no `var {var_name} = map[string]map[string]string{{` line in {}", path.display())]
    AnchorNotFound { path: PathBuf, var_name: String },

    #[error("writing {} failed: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Pipeline stage that produced the error, for the fatal message.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Transport { .. } | Self::UnexpectedStatus { .. } | Self::ReadBody { .. } => {
                "fetch"
            }
            Self::MalformedData(_) => "decode",
            Self::InvalidAnchor { .. }
            | Self::ReadTarget { .. }
            | Self::AnchorNotFound { .. }
            | Self::Write { .. } => "patch",
        }
    }
}
