#![forbid(unsafe_code)]

use crate::SyncError;
use dm_core::{DocKey, key_matches_managed_extension};
use std::path::Path;

/// Eligible source files in `dir`: regular files whose name ends in the
/// managed extension (case-insensitive). Order carries no meaning.
///
/// Any listing failure is fatal; a partial enumeration must never feed the
/// reconciler, because the keys it misses would look like deletions. Names
/// that are not valid UTF-8 or fail key validation cannot be represented as
/// keys and are not eligible (they can never have a managed row either way).
pub fn list_source_files(dir: &Path) -> Result<Vec<DocKey>, SyncError> {
    let enumerate_err = |source: std::io::Error| SyncError::Enumerate {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(enumerate_err)? {
        let entry = entry.map_err(enumerate_err)?;
        let metadata = std::fs::metadata(entry.path()).map_err(enumerate_err)?;
        if !metadata.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !key_matches_managed_extension(&name) {
            continue;
        }
        let Ok(key) = DocKey::try_new(name) else {
            continue;
        };
        files.push(key);
    }
    Ok(files)
}

pub fn read_source_file(dir: &Path, key: &DocKey) -> Result<String, SyncError> {
    let file = dir.join(key.as_str());
    std::fs::read_to_string(&file).map_err(|source| SyncError::Read { file, source })
}
