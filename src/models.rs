//! Data models for scraped AS assignments.
//!
//! - [`AsEntry`]: one AS number paired with the organization it belongs to
//! - [`AsMap`]: the full table, keyed by AS number, in table row order

use std::collections::HashMap;

/// A single row of the assignment table.
///
/// Both fields are trimmed and non-empty; rows that would violate this are
/// dropped during extraction and never become an `AsEntry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsEntry {
    /// The AS number as it appears in the table. Usually decimal digits,
    /// but treated as an opaque key.
    pub as_number: String,
    /// Organization name, free text.
    pub org_name: String,
}

/// Insertion-ordered mapping from AS number to organization name.
///
/// Re-inserting an existing AS number replaces its organization name but
/// keeps the position of the first insertion.
#[derive(Debug, Default, Clone)]
pub struct AsMap {
    entries: Vec<AsEntry>,
    index: HashMap<String, usize>,
}

impl AsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the organization for `as_number`.
    ///
    /// Returns the previous organization name if the key was already present.
    pub fn insert(&mut self, as_number: String, org_name: String) -> Option<String> {
        if let Some(&pos) = self.index.get(&as_number) {
            return Some(std::mem::replace(&mut self.entries[pos].org_name, org_name));
        }
        self.index.insert(as_number.clone(), self.entries.len());
        self.entries.push(AsEntry {
            as_number,
            org_name,
        });
        None
    }

    pub fn get(&self, as_number: &str) -> Option<&str> {
        self.index
            .get(as_number)
            .map(|&pos| self.entries[pos].org_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AsEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_row_order() {
        let mut map = AsMap::new();
        map.insert("64512".to_string(), "Org Two".to_string());
        map.insert("1".to_string(), "Org One".to_string());

        let keys: Vec<&str> = map.iter().map(|e| e.as_number.as_str()).collect();
        assert_eq!(keys, vec!["64512", "1"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_duplicate_key_last_value_wins_in_first_position() {
        let mut map = AsMap::new();
        map.insert("1".to_string(), "First".to_string());
        map.insert("2".to_string(), "Two".to_string());
        let prev = map.insert("1".to_string(), "Second".to_string());

        assert_eq!(prev.as_deref(), Some("First"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("1"), Some("Second"));
        assert_eq!(map.iter().next().map(|e| e.as_number.as_str()), Some("1"));
    }

    #[test]
    fn test_empty_map() {
        let map = AsMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get("1"), None);
    }
}
