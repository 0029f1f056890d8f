use crate::error::{FetchError, error_chain};
use reqwest::Url;
use std::path::PathBuf;

/// One URL from the download list together with the name it is saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackEntry {
    pub url: String,
    pub file_name: String,
}

impl PackEntry {
    /// Validates `url` and derives the file name from the text after its last `/`.
    pub fn from_url(url: &str) -> Result<Self, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::invalid_url(url, e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(FetchError::invalid_url(
                    url,
                    format!("unsupported scheme {}", other),
                ));
            }
        }

        let has_path = parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .is_some_and(|last| !last.is_empty());
        if !has_path {
            return Err(FetchError::invalid_url(url, "URL path has no file segment"));
        }

        let file_name = url.rsplit('/').next().unwrap_or_default();
        if file_name.is_empty() || file_name == "." || file_name == ".." {
            return Err(FetchError::invalid_url(url, "no file name after last '/'"));
        }
        if file_name.contains(['\\', '\0']) {
            return Err(FetchError::invalid_url(
                url,
                format!("file name {:?} is not a plain file name", file_name),
            ));
        }

        Ok(Self {
            url: url.to_string(),
            file_name: file_name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Outcome of a full pass over the download list.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub fetched: Vec<FetchedFile>,
    pub failed: Vec<(PackEntry, FetchError)>,
}

impl FetchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.fetched.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// `Done: <n> success, <m> failed`, then one indented line per failure.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Done: {} success, {} failed",
            self.success_count(),
            self.failure_count()
        )];
        for (entry, err) in &self.failed {
            lines.push(format!("  {}: {}", entry.file_name, error_chain(err)));
        }
        lines
    }
}
