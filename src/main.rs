mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::Args;
use mirror_pack_dl::{FailurePolicy, Fetcher, FetcherConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let config = FetcherConfig {
        policy: args.on_error.into(),
        show_progress: !args.quiet,
        ..FetcherConfig::default()
    };

    let entries = config.entries().context("Invalid download list")?;
    let fetcher = Fetcher::new(&config).context("Failed to set up downloader")?;

    tracing::info!(count = entries.len(), dest = %config.dest_dir.display(), "starting downloads");

    let report = fetcher.fetch_all(&entries).await?;

    if config.policy == FailurePolicy::Continue {
        println!();
        for line in report.summary_lines() {
            println!("{}", line);
        }
    }

    if !report.is_success() {
        bail!("{} of {} downloads failed", report.failure_count(), entries.len());
    }

    Ok(())
}
