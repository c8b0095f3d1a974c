use crate::definition::ListDefinition;
use crate::traits::ImportList;

/// Owns the configured list providers and answers definition lookups.
pub struct ListRegistry {
    lists: Vec<Box<dyn ImportList>>,
}

impl ListRegistry {
    pub fn new(lists: Vec<Box<dyn ImportList>>) -> Self {
        Self { lists }
    }

    /// Enabled providers, in configuration order. Order matters: it decides
    /// which provider's data wins when dedup collapses duplicates.
    pub fn available_providers(&self) -> impl Iterator<Item = &dyn ImportList> {
        self.lists
            .iter()
            .filter(|list| list.enabled())
            .map(|list| list.as_ref())
    }

    pub fn get(&self, id: i32) -> Option<&ListDefinition> {
        self.lists
            .iter()
            .map(|list| list.definition())
            .find(|definition| definition.id == id)
    }

    pub fn any_auto_enabled(&self) -> bool {
        self.available_providers().any(|list| list.enable_auto())
    }
}
