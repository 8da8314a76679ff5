#![forbid(unsafe_code)]

mod config;
mod error;
mod reconcile;
mod report;
mod source;

pub use config::{DEFAULT_DOCS_DIR, DEFAULT_STORAGE_DIR, SyncConfig};
pub use error::SyncError;
pub use reconcile::Reconciler;
pub use report::{RunReport, failure_json};
pub use source::{list_source_files, read_source_file};
