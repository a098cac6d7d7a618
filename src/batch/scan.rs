//! Input directory enumeration

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{LetterboxError, Result};
use crate::processing::has_supported_extension;

/// Files found directly under an input directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Regular files with a supported extension, sorted by file name
    pub candidates: Vec<PathBuf>,
    /// Entries rejected by the extension filter
    pub skipped: usize,
}

/// List supported images directly under `input_dir`; no recursion.
///
/// A missing directory yields an empty result.
pub fn scan_input_dir(input_dir: &Path) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 && is_not_found(&err) => {
                warn!("Input directory {:?} does not exist", input_dir);
                return Ok(result);
            }
            Err(err) => {
                let path = err.path().unwrap_or(input_dir).to_path_buf();
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed"));
                return Err(LetterboxError::filesystem(path, source));
            }
        };

        // follows symlinks, so a linked image counts as a regular file
        if entry.path().is_file() && has_supported_extension(entry.path()) {
            result.candidates.push(entry.into_path());
        } else {
            debug!("Skipping {:?}", entry.path());
            result.skipped += 1;
        }
    }

    Ok(result)
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}
