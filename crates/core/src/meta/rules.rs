#![forbid(unsafe_code)]

use super::MANAGED_CATEGORY;

/// One category assignment rule: if the lower-cased filename contains any of
/// the needles, the label applies. Rules are evaluated in slice order and the
/// first hit wins, so overlaps resolve by position, not by meaning.
#[derive(Clone, Copy, Debug)]
pub struct CategoryRule {
    pub needles: &'static [&'static str],
    pub label: &'static str,
}

/// Rule order is a contract: a name containing both `watchlist` and `backup`
/// resolves to `Research` because that rule comes first.
pub const DEFAULT_CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        needles: &["watchlist", "strategic"],
        label: "Research",
    },
    CategoryRule {
        needles: &["backup"],
        label: "System",
    },
];

pub fn assign_category(filename: &str, rules: &[CategoryRule]) -> &'static str {
    let lower = filename.to_lowercase();
    for rule in rules {
        if rule.needles.iter().any(|needle| lower.contains(needle)) {
            return rule.label;
        }
    }
    MANAGED_CATEGORY
}
