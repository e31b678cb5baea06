// ---------------------------------------------------------------------------
// Directory scan and extractor dispatch
// ---------------------------------------------------------------------------

use crate::extract::{classify_extension, extract_blocks};
use crate::types::{FileRecord, MAX_FILE_READ};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scan the direct children of `dir` and extract blocks from every recognized
/// source file.
///
/// Non-recursive: subdirectories are not descended into. Files with an
/// unrecognized extension are silently skipped. Unreadable or oversized files
/// are logged and skipped without aborting the scan. Records preserve
/// directory-listing order.
pub fn scan_dir(dir: &Path) -> Result<Vec<FileRecord>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list directory {}", dir.display()))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Failed to read directory entry");
                continue;
            }
        };

        let path = entry.path();
        let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let Some(syntax) = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(classify_extension)
        else {
            debug!(path = %path.display(), "Skipping unrecognized extension");
            continue;
        };

        if let Ok(meta) = fs::metadata(&path) {
            if meta.len() as usize > MAX_FILE_READ {
                warn!(
                    path = %path.display(),
                    bytes = meta.len(),
                    "Skipping file larger than {MAX_FILE_READ} bytes"
                );
                continue;
            }
        }

        // Lossy UTF-8 so encoding noise in one file cannot abort the scan.
        let content = match fs::read(&path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable file");
                continue;
            }
        };

        let blocks = extract_blocks(&content, syntax);
        debug!(path = %path.display(), blocks = blocks.len(), "Extracted blocks");

        records.push(FileRecord {
            filename: entry.file_name().to_string_lossy().into_owned(),
            filepath: path,
            blocks,
        });
    }

    info!(dir = %dir.display(), files = records.len(), "Scan complete");
    Ok(records)
}
