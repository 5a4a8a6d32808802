//! Output file handling
//!
//! Generated files are written to a temporary sibling first and moved into
//! place only after the whole output was written, so a failed run never leaves
//! a truncated file behind under the final name.

use std::fs;
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Create a temporary file next to `path`
pub fn create_staging_file(path: impl AsRef<Path>) -> io::Result<NamedTempFile> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => NamedTempFile::new_in(parent),
        _ => NamedTempFile::new_in("."),
    }
}

/// Move a completed staging file to `path`, replacing any existing file
pub fn commit_staging_file(staging: NamedTempFile, path: impl AsRef<Path>) -> io::Result<()> {
    staging.persist(path).map_err(|e| e.error)?;
    Ok(())
}
