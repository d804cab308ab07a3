//! Output directory and file persistence.
//!
//! Bodies are written to a uniquely named temp file in the target's directory
//! and persisted over the target, so a failed write never clobbers an
//! existing file and never touches another task's file.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::FetchError;

/// Prefix of in-flight temp files in the output directory.
pub const TEMP_PREFIX: &str = ".audiofetch-";

/// Create `dir` and all missing parents. An existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    fs::create_dir_all(dir).map_err(|e| FetchError::storage(dir, e))
}

/// Write `data` to `final_path`, replacing any existing file. Creates missing
/// parent directories (for nested filenames). The temp file is removed if
/// anything fails.
pub fn write_replace(final_path: &Path, data: &[u8]) -> Result<(), FetchError> {
    let parent = match final_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(parent)
        .map_err(|e| FetchError::storage(parent, e))?;
    temp.write_all(data)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| FetchError::storage(temp.path(), e))?;
    temp.persist(final_path)
        .map_err(|e| FetchError::storage(final_path, e.error))?;
    Ok(())
}
