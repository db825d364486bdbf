//! Input file discovery.

use crate::domain::error::TourneyError;
use crate::domain::settings::Mode;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve the input path to a list of files.
///
/// A file path is returned as-is. A directory is walked recursively, in
/// file-name order, collecting files whose lowercased name ends with the
/// mode's extension.
pub fn discover_files(path: &Path, mode: Mode) -> Result<Vec<PathBuf>, TourneyError> {
    if !path.exists() {
        return Err(TourneyError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let extension = mode.extension();
    let mut files = Vec::new();

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping directory entry: {}", err);
                continue;
            }
        };
        if entry.file_type().is_file() && matches_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(extension))
        .unwrap_or(false)
}
