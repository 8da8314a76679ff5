#![forbid(unsafe_code)]

mod rules;
#[cfg(test)]
mod tests;

pub use rules::{CategoryRule, DEFAULT_CATEGORY_RULES, assign_category};

/// Category owned by the reconciler. Rows carrying any other label belong to
/// other producers and are never deleted.
pub const MANAGED_CATEGORY: &str = "Docs";

/// Extension (including the dot) that makes a file eligible for mirroring.
pub const MANAGED_EXTENSION: &str = ".md";

/// Canonical metadata derived from one source file. Pure function of
/// `(content, filename)`; recomputed in full on every run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocMeta {
    pub title: String,
    pub category: &'static str,
    pub size: u64,
}

pub fn derive_meta(content: &str, filename: &str, rules: &[CategoryRule]) -> DocMeta {
    DocMeta {
        title: derive_title(content, filename),
        category: assign_category(filename, rules),
        size: content_size_bytes(content),
    }
}

/// First top-level heading wins: a single leading `#`, whitespace, then text.
/// `##` and deeper headings do not match. Without any such line the title
/// falls back to the filename with its extension stripped.
pub fn derive_title(content: &str, filename: &str) -> String {
    for line in content.lines() {
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        if rest.starts_with('#') {
            continue;
        }
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let heading = rest.trim();
        if !heading.is_empty() {
            return heading.to_string();
        }
    }
    strip_managed_extension(filename).to_string()
}

/// Byte length of the content under UTF-8, not a character count. The stored
/// `size` must round-trip against the on-disk file exactly.
pub fn content_size_bytes(content: &str) -> u64 {
    content.len() as u64
}

/// True when `key` ends in the managed extension, case-insensitively. Pruning
/// is restricted to such keys so rows migrated into the partition under a
/// different naming convention are left alone.
pub fn key_matches_managed_extension(key: &str) -> bool {
    let len = key.len();
    let ext = MANAGED_EXTENSION.len();
    len >= ext && key.is_char_boundary(len - ext) && key[len - ext..].eq_ignore_ascii_case(MANAGED_EXTENSION)
}

fn strip_managed_extension(filename: &str) -> &str {
    if key_matches_managed_extension(filename) {
        &filename[..filename.len() - MANAGED_EXTENSION.len()]
    } else {
        filename
    }
}
