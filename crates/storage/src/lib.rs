#![forbid(unsafe_code)]

mod store;

pub use store::error::StoreError;
pub use store::{DocumentPatch, DocumentRow, DocumentStore, NewDocument, SqliteStore};
