//! Download tasks and validated batches.

use std::collections::HashSet;
use std::path::{Component, Path};

use crate::error::BatchError;

/// One (filename, URL) pair to fetch and persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    /// Relative path under the output directory.
    pub target_filename: String,
    /// HTTP or HTTPS source URL.
    pub source_url: String,
}

impl DownloadTask {
    pub fn new(target_filename: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            target_filename: target_filename.into(),
            source_url: source_url.into(),
        }
    }
}

/// Ordered set of tasks processed in one run. Filenames are unique and stay
/// inside the output directory; URLs are http(s).
#[derive(Debug, Clone, Default)]
pub struct Batch {
    tasks: Vec<DownloadTask>,
}

impl Batch {
    pub fn new(tasks: Vec<DownloadTask>) -> Result<Self, BatchError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            validate_filename(&task.target_filename)?;
            validate_url(task)?;
            if !seen.insert(task.target_filename.as_str()) {
                return Err(BatchError::DuplicateFilename(task.target_filename.clone()));
            }
        }
        Ok(Self { tasks })
    }

    /// Builds a batch from `(filename, url)` pairs, keeping their order.
    pub fn from_pairs<I, F, U>(pairs: I) -> Result<Self, BatchError>
    where
        I: IntoIterator<Item = (F, U)>,
        F: Into<String>,
        U: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(f, u)| DownloadTask::new(f, u))
                .collect(),
        )
    }

    pub fn tasks(&self) -> &[DownloadTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Accepts only non-empty relative paths made of normal components
/// (no `..`, no root, no drive prefix).
fn validate_filename(name: &str) -> Result<(), BatchError> {
    let path = Path::new(name);
    let mut components = 0;
    for c in path.components() {
        match c {
            Component::Normal(_) => components += 1,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(BatchError::InvalidFilename(name.to_string()));
            }
        }
    }
    if components == 0 || name.ends_with('/') || name.contains('\0') {
        return Err(BatchError::InvalidFilename(name.to_string()));
    }
    Ok(())
}

fn validate_url(task: &DownloadTask) -> Result<(), BatchError> {
    let parsed = url::Url::parse(&task.source_url).map_err(|e| BatchError::InvalidUrl {
        filename: task.target_filename.clone(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(BatchError::UnsupportedScheme {
            filename: task.target_filename.clone(),
            scheme: other.to_string(),
        }),
    }
}
