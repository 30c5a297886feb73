//! Ordered parameter storage

use hashbrown::HashMap;

/// Ordered mapping from parameter key to value.
///
/// Entries keep insertion order so the serialized query string follows call
/// order. `set` overwrites in place (the key keeps its first position),
/// `append` adds a repeated pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
    /// key -> position of its first entry
    positions: HashMap<String, usize>,
}

impl ParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. Last write wins.
    pub fn set(&mut self, key: String, value: String) {
        match self.positions.get(&key).copied() {
            Some(position) => {
                self.entries[position].1 = value;
                if self.entries[position + 1..].iter().any(|(k, _)| *k == key) {
                    let mut seen = false;
                    self.entries.retain(|(k, _)| {
                        if *k != key {
                            return true;
                        }
                        let keep = !seen;
                        seen = true;
                        keep
                    });
                    self.reindex();
                }
            }
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Add another `key=value` pair, keeping any existing ones.
    pub fn append(&mut self, key: String, value: String) {
        let position = self.entries.len();
        self.positions.entry(key.clone()).or_insert(position);
        self.entries.push((key, value));
    }

    /// First value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.positions
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Every value stored for `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Number of pairs, repeated keys counted once per pair.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    fn reindex(&mut self) {
        self.positions.clear();
        for (position, (key, _)) in self.entries.iter().enumerate() {
            self.positions.entry(key.clone()).or_insert(position);
        }
    }
}
