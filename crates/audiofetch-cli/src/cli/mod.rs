//! CLI for audiofetch.

use anyhow::{Context, Result};
use audiofetch_core::config::{self, FetchOptions};
use audiofetch_core::fetcher::BatchFetcher;
use audiofetch_core::manifest;
use clap::Parser;
use std::path::PathBuf;

/// Download the game's sound effects into the assets directory.
#[derive(Debug, Parser)]
#[command(name = "audiofetch")]
#[command(about = "Download the built-in set of game audio assets", long_about = None)]
pub struct Cli {
    /// Directory the audio files are written to (created if missing).
    #[arg(long, value_name = "DIR", default_value = manifest::DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// TOML file with HTTP options (user_agent, follow_redirects, timeouts).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    /// Runs the built-in batch. Per-file failures are printed, not returned.
    pub fn run(self) -> Result<()> {
        let options = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => FetchOptions::default(),
        };
        tracing::debug!("fetch options: {:?}", options);

        let batch = manifest::builtin_batch().context("built-in audio manifest is invalid")?;
        tracing::info!(
            "downloading {} audio file(s) into {}",
            batch.len(),
            self.output_dir.display()
        );

        BatchFetcher::new(self.output_dir, options).run(&batch);
        Ok(())
    }
}
