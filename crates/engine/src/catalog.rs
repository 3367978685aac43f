//! The ordered collection of committed menu entries.

use carte_types::{EntryId, MenuEntry};
use indexmap::IndexMap;

/// Session catalog keyed by entry id, iterated in insertion order.
///
/// `append` and `remove` are the only mutators; entries are never edited in
/// place and there is no sorting.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<EntryId, MenuEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry after every existing one. The id must be new.
    pub(crate) fn append(&mut self, entry: MenuEntry) {
        debug_assert!(!self.entries.contains_key(&entry.id), "duplicate entry id {}", entry.id);
        self.entries.insert(entry.id, entry);
    }

    /// Removes the entry with `id`, keeping the relative order of the rest.
    pub(crate) fn remove(&mut self, id: EntryId) -> Option<MenuEntry> {
        self.entries.shift_remove(&id)
    }

    pub fn get(&self, id: EntryId) -> Option<&MenuEntry> {
        self.entries.get(&id)
    }

    /// Entry at a display position.
    pub fn get_index(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.entries.keys().copied()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuEntry;
    type IntoIter = indexmap::map::Values<'a, EntryId, MenuEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carte_types::Course;
    use chrono::Utc;

    fn entry(raw: u64, name: &str) -> MenuEntry {
        MenuEntry {
            id: EntryId::new(raw),
            dish_name: name.to_string(),
            description: "desc".to_string(),
            course: Course::Starters,
            price: 10.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn remove_preserves_order_of_remaining_entries() {
        let mut catalog = Catalog::new();
        catalog.append(entry(1, "a"));
        catalog.append(entry(2, "b"));
        catalog.append(entry(3, "c"));

        let removed = catalog.remove(EntryId::new(2)).expect("entry 2 present");
        assert_eq!(removed.dish_name, "b");

        let names: Vec<&str> = catalog.iter().map(|entry| entry.dish_name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(catalog.get_index(1).map(|entry| entry.id), Some(EntryId::new(3)));
        assert!(catalog.remove(EntryId::new(2)).is_none());
    }
}
