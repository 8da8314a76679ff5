#![forbid(unsafe_code)]

use crate::report::RunReport;
use crate::{SyncError, source};
use dm_core::{
    CategoryRule, DEFAULT_CATEGORY_RULES, MANAGED_CATEGORY, derive_meta,
    key_matches_managed_extension,
};
use dm_storage::{DocumentPatch, DocumentStore, NewDocument};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Converges the managed partition of the documents table onto the current
/// contents of one source directory.
///
/// A run is stateless: the only ground truth is what is on disk now versus
/// what is in the partition now. Phases are strictly ordered — every upsert
/// completes before pruning starts, so a key that failed to upsert aborts the
/// run instead of being mistaken for an absent file.
pub struct Reconciler {
    docs_dir: PathBuf,
    rules: &'static [CategoryRule],
}

impl Reconciler {
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            rules: DEFAULT_CATEGORY_RULES,
        }
    }

    pub fn with_rules(docs_dir: impl Into<PathBuf>, rules: &'static [CategoryRule]) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            rules,
        }
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub fn run(&self, store: &mut impl DocumentStore) -> Result<RunReport, SyncError> {
        let files = source::list_source_files(&self.docs_dir)?;

        let mut upserts = 0u64;
        for key in &files {
            let content = source::read_source_file(&self.docs_dir, key)?;
            let meta = derive_meta(&content, key.as_str(), self.rules);
            match store.find_by_key(key)? {
                None => {
                    store.insert(&NewDocument {
                        key,
                        title: &meta.title,
                        content: &content,
                        category: meta.category,
                        size: meta.size,
                    })?;
                }
                Some(existing) => {
                    store.update(
                        existing.id,
                        &DocumentPatch {
                            title: &meta.title,
                            content: &content,
                            category: meta.category,
                            size: meta.size,
                        },
                    )?;
                }
            }
            upserts += 1;
        }

        let deletes = self.prune(store, &files)?;

        Ok(RunReport {
            ok: true,
            files_seen: files.len() as u64,
            upserts,
            deletes,
        })
    }

    /// Delete managed-partition rows whose key no longer exists on disk.
    ///
    /// Only rows carrying the managed category AND a key ending in the
    /// managed extension are candidates; anything else in the table belongs
    /// to another producer and is out of bounds.
    fn prune(
        &self,
        store: &mut impl DocumentStore,
        files: &[dm_core::DocKey],
    ) -> Result<u64, SyncError> {
        let current: HashSet<&str> = files.iter().map(|key| key.as_str()).collect();

        let mut deletes = 0u64;
        for row in store.list_by_partition(MANAGED_CATEGORY)? {
            let Some(filename) = row.filename.as_deref() else {
                continue;
            };
            if current.contains(filename) {
                continue;
            }
            if !key_matches_managed_extension(filename) {
                continue;
            }
            store.delete(row.id)?;
            deletes += 1;
        }
        Ok(deletes)
    }
}
