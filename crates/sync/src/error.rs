#![forbid(unsafe_code)]

use dm_storage::StoreError;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SyncError {
    /// The source directory could not be listed. Raised before any write: an
    /// incomplete enumeration would be indistinguishable from mass deletion.
    Enumerate {
        dir: PathBuf,
        source: std::io::Error,
    },
    /// A file vanished or became unreadable between enumeration and
    /// processing. Fatal for the run, never skipped.
    Read {
        file: PathBuf,
        source: std::io::Error,
    },
    Store(StoreError),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enumerate { dir, source } => {
                write!(f, "cannot list source directory {}: {source}", dir.display())
            }
            Self::Read { file, source } => {
                write!(f, "cannot read source file {}: {source}", file.display())
            }
            Self::Store(err) => write!(f, "store: {err}"),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Enumerate { source, .. } | Self::Read { source, .. } => Some(source),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SyncError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
