use super::*;

#[test]
fn title_from_first_top_level_heading() {
    let content = "# Getting Started\n\nSome body text.\n";
    assert_eq!(derive_title(content, "guide.md"), "Getting Started");
}

#[test]
fn title_skips_deeper_headings() {
    let content = "## Not a title\n### Neither\n# Real Title\n";
    assert_eq!(derive_title(content, "notes.md"), "Real Title");
}

#[test]
fn title_requires_whitespace_after_hash() {
    assert_eq!(derive_title("#NoSpace\n", "notes.md"), "notes");
    assert_eq!(derive_title("# Spaced\n", "notes.md"), "Spaced");
}

#[test]
fn title_heading_is_trimmed() {
    assert_eq!(derive_title("#   Padded Title   \n", "notes.md"), "Padded Title");
}

#[test]
fn title_falls_back_to_filename_without_extension() {
    assert_eq!(derive_title("no heading here", "watchlist-q1.md"), "watchlist-q1");
    assert_eq!(derive_title("", "empty.MD"), "empty");
    assert_eq!(derive_title("plain", "no-extension"), "no-extension");
}

#[test]
fn empty_heading_line_does_not_win() {
    assert_eq!(derive_title("#   \n# Actual\n", "notes.md"), "Actual");
}

#[test]
fn category_rules_in_order() {
    assert_eq!(assign_category("guide.md", DEFAULT_CATEGORY_RULES), "Docs");
    assert_eq!(
        assign_category("watchlist-q1.md", DEFAULT_CATEGORY_RULES),
        "Research"
    );
    assert_eq!(
        assign_category("Strategic-Plan.md", DEFAULT_CATEGORY_RULES),
        "Research"
    );
    assert_eq!(
        assign_category("db-backup-notes.md", DEFAULT_CATEGORY_RULES),
        "System"
    );
}

#[test]
fn category_tie_break_is_rule_order() {
    // Contains both trigger substrings; the earlier rule wins.
    assert_eq!(
        assign_category("watchlist-backup.md", DEFAULT_CATEGORY_RULES),
        "Research"
    );
}

#[test]
fn category_matching_is_case_insensitive() {
    assert_eq!(
        assign_category("WATCHLIST.md", DEFAULT_CATEGORY_RULES),
        "Research"
    );
    assert_eq!(
        assign_category("Backup-2024.MD", DEFAULT_CATEGORY_RULES),
        "System"
    );
}

#[test]
fn empty_rule_slice_yields_managed_default() {
    assert_eq!(assign_category("watchlist.md", &[]), MANAGED_CATEGORY);
}

#[test]
fn size_counts_utf8_bytes_not_chars() {
    assert_eq!(content_size_bytes(""), 0);
    assert_eq!(content_size_bytes("abc"), 3);
    // U+00E9 is two bytes, U+1F98A is four.
    assert_eq!(content_size_bytes("café"), 5);
    assert_eq!(content_size_bytes("🦊"), 4);
}

#[test]
fn managed_extension_matching() {
    assert!(key_matches_managed_extension("a.md"));
    assert!(key_matches_managed_extension("A.MD"));
    assert!(key_matches_managed_extension("weird.Md"));
    assert!(!key_matches_managed_extension("a.txt"));
    assert!(!key_matches_managed_extension("md"));
    assert!(!key_matches_managed_extension(""));
}

#[test]
fn derive_meta_combines_fields() {
    let meta = derive_meta("# Getting Started\nbody", "guide.md", DEFAULT_CATEGORY_RULES);
    assert_eq!(meta.title, "Getting Started");
    assert_eq!(meta.category, "Docs");
    assert_eq!(meta.size, 22);
}
