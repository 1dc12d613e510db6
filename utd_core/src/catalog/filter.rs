//! Browser state for the catalog: active query, role and rarity selection

use super::{filter, CatalogEntry};
use crate::types::{Choice, Rarity, UnitRole};

/// Search selection owned by the unit browser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Raw query as typed
    pub query: String,
    pub role: Choice<UnitRole>,
    pub rarity: Choice<Rarity>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the query and select every role and rarity
    pub fn reset(&mut self) {
        *self = CatalogFilter::default();
    }

    pub fn next_role(&mut self) {
        self.role = self.role.next(UnitRole::all());
    }

    pub fn prev_role(&mut self) {
        self.role = self.role.prev(UnitRole::all());
    }

    pub fn next_rarity(&mut self) {
        self.rarity = self.rarity.next(Rarity::all());
    }

    pub fn prev_rarity(&mut self) {
        self.rarity = self.rarity.prev(Rarity::all());
    }

    /// Entries passing the current selection, in catalog order
    pub fn apply<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        filter(entries, &self.query, self.role, self.rarity).collect()
    }

    /// "Showing N of M units" summary
    pub fn summary(&self, entries: &[CatalogEntry]) -> String {
        let shown = filter(entries, &self.query, self.role, self.rarity).count();
        format!("Showing {} of {} units", shown, entries.len())
    }
}
