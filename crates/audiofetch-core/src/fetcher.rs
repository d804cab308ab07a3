//! Sequential batch fetcher: one GET per task, body written to the output
//! directory, failures reported per task and never propagated.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::FetchOptions;
use crate::error::FetchError;
use crate::http;
use crate::storage;
use crate::task::{Batch, DownloadTask};

/// Result of one task.
#[derive(Debug)]
pub enum TaskOutcome {
    Saved { path: PathBuf, bytes: u64 },
    Failed(FetchError),
}

impl TaskOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, TaskOutcome::Saved { .. })
    }
}

#[derive(Debug)]
pub struct TaskReport {
    pub filename: String,
    pub outcome: TaskOutcome,
}

/// Per-task results of one run, in batch order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub tasks: Vec<TaskReport>,
}

impl BatchReport {
    pub fn saved(&self) -> usize {
        self.tasks.iter().filter(|t| t.outcome.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.tasks.len() - self.saved()
    }

    pub fn get(&self, filename: &str) -> Option<&TaskOutcome> {
        self.tasks
            .iter()
            .find(|t| t.filename == filename)
            .map(|t| &t.outcome)
    }
}

pub struct BatchFetcher {
    output_dir: PathBuf,
    options: FetchOptions,
}

impl BatchFetcher {
    pub fn new(output_dir: impl Into<PathBuf>, options: FetchOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
        }
    }

    /// Runs the batch, printing progress notices to stdout.
    pub fn run(&self, batch: &Batch) -> BatchReport {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_notices(batch, &mut out)
    }

    /// Runs the batch, writing one notice line per event to `notices`.
    /// Notice write failures are ignored.
    pub fn run_with_notices<W: Write>(&self, batch: &Batch, notices: &mut W) -> BatchReport {
        if let Err(e) = storage::ensure_dir(&self.output_dir) {
            tracing::error!("cannot create output directory: {}", e);
            let _ = writeln!(
                notices,
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            );
        }

        let mut report = BatchReport {
            tasks: Vec::with_capacity(batch.len()),
        };
        for task in batch.tasks() {
            let _ = writeln!(notices, "Downloading {}...", task.target_filename);
            let outcome = match self.fetch_one(task) {
                Ok((path, bytes)) => {
                    tracing::info!("saved {} ({} bytes)", path.display(), bytes);
                    let _ = writeln!(notices, "Successfully downloaded {}", task.target_filename);
                    TaskOutcome::Saved { path, bytes }
                }
                Err(e) => {
                    tracing::warn!(
                        "download of {} from {} failed ({:?}): {}",
                        task.target_filename,
                        task.source_url,
                        e.kind(),
                        e
                    );
                    let _ = writeln!(
                        notices,
                        "Failed to download {}: {}",
                        task.target_filename, e
                    );
                    TaskOutcome::Failed(e)
                }
            };
            report.tasks.push(TaskReport {
                filename: task.target_filename.clone(),
                outcome,
            });
        }
        let _ = notices.flush();

        tracing::info!(
            "batch finished: {} saved, {} failed",
            report.saved(),
            report.failed()
        );
        report
    }

    fn fetch_one(&self, task: &DownloadTask) -> Result<(PathBuf, u64), FetchError> {
        tracing::debug!("GET {} -> {}", task.source_url, task.target_filename);
        let body = http::get(&task.source_url, &self.options)?;
        let path = self.output_dir.join(&task.target_filename);
        storage::write_replace(&path, &body)?;
        Ok((path, body.len() as u64))
    }
}
