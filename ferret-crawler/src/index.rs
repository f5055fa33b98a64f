use std::collections::HashMap;

/// Insertion-ordered mapping from visited address to its extracted text.
///
/// An entry exists only for addresses that were successfully fetched and
/// parsed; a failed fetch leaves the address in the visited set but absent
/// here. Addresses are compared by exact string match, no normalization.
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl SiteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the text for an address. A re-inserted address
    /// keeps its first-insertion position; only the value is replaced.
    pub fn put(&mut self, address: &str, text: String) {
        match self.positions.get(address) {
            Some(&pos) => self.entries[pos].1 = text,
            None => {
                self.positions.insert(address.to_string(), self.entries.len());
                self.entries.push((address.to_string(), text));
            }
        }
    }

    pub fn get(&self, address: &str) -> Option<&str> {
        self.positions
            .get(address)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, address: &str) -> bool {
        self.positions.contains_key(address)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(address, text)| (address.as_str(), text.as_str()))
    }

    /// Addresses in insertion order.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(address, _)| address.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut index = SiteIndex::new();
        index.put("https://example.com", "hello".to_string());

        assert_eq!(index.get("https://example.com"), Some("hello"));
        assert_eq!(index.get("https://example.com/"), None); // exact match only
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut index = SiteIndex::new();
        index.put("c", "3".to_string());
        index.put("a", "1".to_string());
        index.put("b", "2".to_string());

        let addresses: Vec<&str> = index.addresses().collect();
        assert_eq!(addresses, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reinsert_keeps_position_replaces_value() {
        let mut index = SiteIndex::new();
        index.put("a", "old".to_string());
        index.put("b", "2".to_string());
        index.put("a", "new".to_string());

        let addresses: Vec<&str> = index.addresses().collect();
        assert_eq!(addresses, vec!["a", "b"]);
        assert_eq!(index.get("a"), Some("new"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_empty() {
        let index = SiteIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.entries().count(), 0);
    }
}
