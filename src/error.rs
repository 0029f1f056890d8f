use reqwest::StatusCode;
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while fetching a pack.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("GET {url} failed")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("response body of {url} was interrupted")]
    Stream {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        FetchError::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Renders `err` followed by each of its sources, separated by `: `.
pub fn error_chain(err: &dyn StdError) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}
