//! Downloads the krfoss mirror pack scripts into a directory, one file at a time.

pub mod config;
pub mod downloader;
pub mod error;
pub mod logging;
pub mod models;
pub mod pack;

pub use config::{FailurePolicy, FetcherConfig};
pub use downloader::Fetcher;
pub use error::FetchError;
pub use models::{FetchReport, FetchedFile, PackEntry};
