use clap::{Parser, ValueEnum};
use mirror_pack_dl::FailurePolicy;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OnError {
    /// Stop at the first failed download
    Abort,
    /// Download the rest and list failures at the end
    Continue,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => FailurePolicy::Abort,
            OnError::Continue => FailurePolicy::Continue,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mirror-pack-dl")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What to do when a download fails
    #[arg(long, value_enum, default_value = "abort")]
    pub on_error: OnError,

    /// Hide progress bars
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
