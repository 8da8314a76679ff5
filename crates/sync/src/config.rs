#![forbid(unsafe_code)]

use std::path::PathBuf;

pub const DEFAULT_DOCS_DIR: &str = "./docs";
pub const DEFAULT_STORAGE_DIR: &str = "./storage";

/// Process-wide configuration for one run. Resolved from the environment, not
/// from command-line flags; the invoking scheduler owns both knobs.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    pub docs_dir: PathBuf,
    pub storage_dir: PathBuf,
}

impl SyncConfig {
    pub fn from_env() -> Self {
        Self {
            docs_dir: env_path("DOCMIRROR_DOCS_DIR", DEFAULT_DOCS_DIR),
            storage_dir: env_path("DOCMIRROR_STORAGE_DIR", DEFAULT_STORAGE_DIR),
        }
    }
}

fn env_path(name: &str, default: &str) -> PathBuf {
    let value = std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    PathBuf::from(value.unwrap_or_else(|| default.to_string()))
}
