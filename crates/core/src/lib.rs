#![forbid(unsafe_code)]

pub mod keys;
pub mod meta;

pub use keys::{DocKey, DocKeyError};
pub use meta::{
    CategoryRule, DEFAULT_CATEGORY_RULES, DocMeta, MANAGED_CATEGORY, MANAGED_EXTENSION,
    assign_category, content_size_bytes, derive_meta, derive_title, key_matches_managed_extension,
};
