use crate::config::{FailurePolicy, FetcherConfig};
use crate::error::FetchError;
use crate::models::{FetchReport, FetchedFile, PackEntry};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Response};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Sequential downloader sharing one pooled HTTP client across all files.
pub struct Fetcher {
    client: Client,
    dest_dir: PathBuf,
    policy: FailurePolicy,
    show_progress: bool,
}

impl Fetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            dest_dir: config.dest_dir.clone(),
            policy: config.policy,
            show_progress: config.show_progress,
        })
    }

    /// Downloads every entry in order, one at a time.
    ///
    /// Under [`FailurePolicy::Abort`] the first error is returned and the
    /// remaining entries are skipped. Under [`FailurePolicy::Continue`] every
    /// entry is attempted and failures end up in the report.
    pub async fn fetch_all(&self, entries: &[PackEntry]) -> Result<FetchReport, FetchError> {
        let mut report = FetchReport::default();

        for entry in entries {
            match self.fetch_one(entry).await {
                Ok(fetched) => report.fetched.push(fetched),
                Err(e) => match self.policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Continue => {
                        warn!(url = %entry.url, error = %e, "download failed, continuing");
                        report.failed.push((entry.clone(), e));
                    }
                },
            }
        }

        Ok(report)
    }

    /// Streams one URL into `dest_dir/<file_name>`, replacing any existing file.
    ///
    /// A non-success status fails before the file is created.
    pub async fn fetch_one(&self, entry: &PackEntry) -> Result<FetchedFile, FetchError> {
        let output_path = self.dest_dir.join(&entry.file_name);
        info!(url = %entry.url, file = %entry.file_name, "downloading");

        let response = self
            .client
            .get(&entry.url)
            .send()
            .await
            .map_err(|source| FetchError::Connect {
                url: entry.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: entry.url.clone(),
                status,
            });
        }

        let total_bytes = response.content_length();
        debug!(url = %entry.url, %status, ?total_bytes, "response headers received");

        let pb = self.progress_bar(&entry.file_name, total_bytes);

        let result = write_body(entry, response, &output_path, &pb).await;
        settle_progress(&pb, &entry.file_name, result.is_ok());
        let downloaded = result?;

        info!(file = %output_path.display(), bytes = downloaded, "saved");

        Ok(FetchedFile {
            file_name: entry.file_name.clone(),
            path: output_path,
            bytes: downloaded,
        })
    }

    fn progress_bar(&self, file_name: &str, total_bytes: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let (pb, template) = match total_bytes {
            Some(total) => (
                ProgressBar::new(total),
                "{msg:20} {bar:40} {bytes}/{total_bytes} ({bytes_per_sec})",
            ),
            None => (
                ProgressBar::new_spinner(),
                "{msg:20} {spinner} {bytes} ({bytes_per_sec})",
            ),
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template(template)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message(file_name.to_string());
        pb
    }
}

/// Leaves the bar on screen with a final message, whether the transfer finished or not.
fn settle_progress(pb: &ProgressBar, file_name: &str, succeeded: bool) {
    if succeeded {
        pb.finish_with_message(format!("{} done", file_name));
    } else {
        pb.abandon_with_message(format!("{} failed", file_name));
    }
}

/// Creates (or truncates) `path` and copies the response body into it chunk by chunk.
async fn write_body(
    entry: &PackEntry,
    response: Response,
    path: &Path,
    pb: &ProgressBar,
) -> Result<u64, FetchError> {
    let write_err = |source: std::io::Error| FetchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    let mut stream = response.bytes_stream();
    let mut downloaded = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|source| FetchError::Stream {
            url: entry.url.clone(),
            source,
        })?;
        file.write_all(&chunk).map_err(write_err)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush().map_err(write_err)?;
    Ok(downloaded)
}
