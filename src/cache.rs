//! Local List Cache
//!
//! The last list fetched from the backend. Replaced wholesale on every
//! fetch; name lookups scan it and the last match wins.

use std::cell::Cell;

use crate::error::ClientError;
use crate::models::Named;

/// A name lookup hit: position in the list and backend id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub index: usize,
    pub id: u32,
}

#[derive(Debug, Clone)]
pub struct EntityCache<T> {
    entries: Vec<T>,
}

impl<T> Default for EntityCache<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: Named + Clone> EntityCache<T> {
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.entries().to_vec()
    }

    pub fn replace(&mut self, entries: Vec<T>) {
        self.entries = entries;
    }

    /// Last entry whose name equals `name`, ignoring surrounding whitespace
    pub fn resolve(&self, name: &str) -> Result<Resolved, ClientError> {
        let name = name.trim();
        self.entries
            .iter()
            .enumerate()
            .rev()
            .find(|(_, entry)| entry.name().trim() == name)
            .map(|(index, entry)| Resolved { index, id: entry.id() })
            .ok_or_else(|| ClientError::UnknownName {
                kind: T::KIND,
                name: name.to_string(),
            })
    }

    /// Drop the entry at `index`, but only if it still carries `id`
    pub fn remove_resolved(&mut self, resolved: Resolved) -> Option<T> {
        match self.entries.get(resolved.index) {
            Some(entry) if entry.id() == resolved.id => Some(self.entries.remove(resolved.index)),
            _ => self.remove_id(resolved.id),
        }
    }

    pub fn remove_id(&mut self, id: u32) -> Option<T> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(index))
    }
}

/// Monotonic tickets for list fetches.
///
/// Only the response to the newest ticket may replace the cache.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn begin(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }

    /// Retire every outstanding ticket, e.g. after the list was patched locally
    pub fn invalidate(&self) {
        self.begin();
    }
}

/// Whether a finished fetch was applied to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Applied,
    /// A newer fetch started while this one was in flight
    Superseded,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn ingredient(id: u32, name: &str) -> Ingredient {
        Ingredient { id, name: name.to_string() }
    }

    fn cache_of(entries: Vec<Ingredient>) -> EntityCache<Ingredient> {
        let mut cache = EntityCache::default();
        cache.replace(entries);
        cache
    }

    #[test]
    fn test_resolve_takes_last_duplicate() {
        let cache = cache_of(vec![
            ingredient(1, "Salt"),
            ingredient(2, "Salt"),
            ingredient(3, "Pepper"),
        ]);
        assert_eq!(cache.resolve("Salt").unwrap(), Resolved { index: 1, id: 2 });
        assert_eq!(cache.resolve("Pepper").unwrap(), Resolved { index: 2, id: 3 });
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let cache = cache_of(vec![ingredient(1, "Salt")]);
        let err = cache.resolve("salt").unwrap_err();
        assert!(matches!(err, ClientError::UnknownName { kind: "ingredient", .. }));
    }

    #[test]
    fn test_resolve_ignores_padding_on_stored_names() {
        let cache = cache_of(vec![ingredient(4, " Basil "), ingredient(5, "Mint")]);
        assert_eq!(cache.resolve("Basil").unwrap(), Resolved { index: 0, id: 4 });
        assert_eq!(cache.resolve("  Mint").unwrap(), Resolved { index: 1, id: 5 });
    }

    #[test]
    fn test_remove_resolved_keeps_other_duplicates() {
        let mut cache = cache_of(vec![ingredient(1, "Salt"), ingredient(2, "Salt")]);
        let resolved = cache.resolve("Salt").unwrap();
        let removed = cache.remove_resolved(resolved).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(cache.entries(), &[ingredient(1, "Salt")]);
    }

    #[test]
    fn test_remove_resolved_falls_back_to_id_when_list_moved() {
        let mut cache = cache_of(vec![ingredient(1, "Salt"), ingredient(2, "Salt")]);
        let resolved = cache.resolve("Salt").unwrap();
        cache.replace(vec![ingredient(2, "Salt"), ingredient(5, "Sugar")]);
        assert_eq!(cache.remove_resolved(resolved).map(|i| i.id), Some(2));
        assert_eq!(cache.entries(), &[ingredient(5, "Sugar")]);
    }

    #[test]
    fn test_sequence_only_latest_ticket_wins() {
        let sequence = RequestSequence::default();
        let first = sequence.begin();
        let second = sequence.begin();
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
    }

    #[test]
    fn test_invalidate_retires_pending_ticket() {
        let sequence = RequestSequence::default();
        let pending = sequence.begin();
        sequence.invalidate();
        assert!(!sequence.is_latest(pending));
    }
}
