use crate::error::FetchError;
use crate::models::PackEntry;
use crate::pack;
use std::path::PathBuf;

/// What the fetch loop does when one download fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure; later URLs are never requested.
    #[default]
    Abort,
    /// Try every URL and collect failures in the report.
    Continue,
}

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// URLs to download, in order.
    pub urls: Vec<String>,
    /// Directory the files are written to.
    pub dest_dir: PathBuf,
    pub policy: FailurePolicy,
    /// Draw a progress bar per file on stderr.
    pub show_progress: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            urls: pack::default_urls(),
            dest_dir: PathBuf::from("."),
            policy: FailurePolicy::Abort,
            show_progress: true,
        }
    }
}

impl FetcherConfig {
    /// Validates every URL before anything is downloaded.
    pub fn entries(&self) -> Result<Vec<PackEntry>, FetchError> {
        self.urls.iter().map(|url| PackEntry::from_url(url)).collect()
    }
}
