//! Unit catalog - read-only unit records and the search filter
//!
//! Entries are seeded once and never mutated. Filtering is a stable,
//! case-insensitive substring match over a joined haystack; there is no fuzzy
//! matching or relevance ranking.

mod filter;

pub use filter::CatalogFilter;

use crate::types::{Choice, Rarity, UnitRole};
use serde::{Deserialize, Serialize};

/// One unit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub role: UnitRole,
    pub rarity: Rarity,
    pub obtain_method: String,
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogEntry {
    /// Lowercased `name role rarity obtain notes tags...` used for search
    pub fn haystack(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.name.as_str(),
            self.role.label(),
            self.rarity.label(),
            self.obtain_method.as_str(),
            self.notes.as_str(),
        ];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Whether this entry passes the role/rarity selection and the normalized query
    fn matches(&self, query: &str, role: Choice<UnitRole>, rarity: Choice<Rarity>) -> bool {
        if !role.admits(self.role) || !rarity.admits(self.rarity) {
            return false;
        }
        query.is_empty() || self.haystack().contains(query)
    }
}

/// Normalize a raw search query (trim, lowercase)
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Lazily filter `entries`, preserving catalog order
pub fn filter<'a>(
    entries: &'a [CatalogEntry],
    query: &str,
    role: Choice<UnitRole>,
    rarity: Choice<Rarity>,
) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
    let query = normalize_query(query);
    entries
        .iter()
        .filter(move |entry| entry.matches(&query, role, rarity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_catalog;
    use proptest::prelude::*;

    fn names<'a>(entries: impl Iterator<Item = &'a CatalogEntry>) -> Vec<&'a str> {
        entries.map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = default_catalog();
        let all = names(filter(&catalog, "", Choice::All, Choice::All));
        assert_eq!(all.len(), catalog.len());
    }

    #[test]
    fn test_role_filter_keeps_order() {
        let catalog = default_catalog();
        let dps: Vec<&CatalogEntry> =
            filter(&catalog, "", Choice::Only(UnitRole::Dps), Choice::All).collect();

        assert!(!dps.is_empty());
        assert!(dps.iter().all(|e| e.role == UnitRole::Dps));
        assert_eq!(
            names(dps.into_iter()),
            vec!["Kenpachi", "Kirito", "Sasuke", "Jinwoo", "Ragna"]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = default_catalog();
        let first: Vec<_> = filter(&catalog, "", Choice::Only(UnitRole::Dps), Choice::All).collect();
        let second: Vec<_> = filter(&catalog, "", Choice::Only(UnitRole::Dps), Choice::All).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_case_insensitive_over_rarity() {
        let catalog = default_catalog();
        let mythic = names(filter(&catalog, "MYTHIC", Choice::All, Choice::All));
        assert_eq!(mythic, vec!["Kenpachi", "Kirito", "Sasuke"]);
    }

    #[test]
    fn test_query_matches_tags_and_obtain() {
        let catalog = default_catalog();
        assert_eq!(names(filter(&catalog, "  quest ", Choice::All, Choice::All)), vec!["Lelouch"]);
        assert_eq!(
            names(filter(&catalog, "virtual shop", Choice::All, Choice::All)),
            vec!["Sakiya (Scarlet Maid)"]
        );
        // "crowd control" is the role label, not a tag
        assert_eq!(
            names(filter(&catalog, "crowd", Choice::All, Choice::All)),
            vec!["Sakiya (Scarlet Maid)"]
        );
    }

    #[test]
    fn test_rarity_and_query_combined() {
        let catalog = default_catalog();
        let hits = names(filter(&catalog, "banner", Choice::All, Choice::Only(Rarity::Secret)));
        assert_eq!(hits, vec!["Jinwoo"]);
    }

    #[test]
    fn test_no_match() {
        let catalog = default_catalog();
        assert_eq!(filter(&catalog, "zzz", Choice::All, Choice::All).count(), 0);
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subsequence(query in "[a-zA-Z ]{0,6}", role_idx in 0usize..6, rarity_idx in 0usize..7) {
            let catalog = default_catalog();
            let role = if role_idx == 0 { Choice::All } else { Choice::Only(UnitRole::all()[role_idx - 1]) };
            let rarity = if rarity_idx == 0 { Choice::All } else { Choice::Only(Rarity::all()[rarity_idx - 1]) };

            let result: Vec<&CatalogEntry> = filter(&catalog, &query, role, rarity).collect();
            let mut cursor = catalog.iter();
            for entry in &result {
                prop_assert!(role.admits(entry.role));
                prop_assert!(rarity.admits(entry.rarity));
                prop_assert!(cursor.any(|e| e == *entry));
            }
        }
    }
}
