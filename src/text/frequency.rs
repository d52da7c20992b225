// Word frequency table that remembers first-seen order.
//
// Ranking ties are resolved by the order in which words first appeared in
// the text, so the table keeps its entries in insertion order alongside a
// lookup index.

use std::collections::HashMap;

/// Word -> occurrence count, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        self.add_count(word, 1);
    }

    /// Add `count` occurrences of `word`, inserting it if new.
    pub fn add_count(&mut self, word: &str, count: u64) {
        match self.index.get(word) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), count));
            }
        }
    }

    /// Count for `word`, 0 when absent.
    pub fn get(&self, word: &str) -> u64 {
        self.index.get(word).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Words in first-seen order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(w, _)| w.as_str())
    }

    /// The `n` most frequent words, count descending, ties by first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        // sort_by is stable, so equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, count) in iter {
            table.add_count(word.as_ref(), count);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut table = FrequencyTable::new();
        for w in ["rose", "oak", "rose"] {
            table.add(w);
        }
        assert_eq!(table.get("rose"), 2);
        assert_eq!(table.get("oak"), 1);
        assert_eq!(table.get("fern"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let table: FrequencyTable = [("yew", 1), ("ash", 2), ("elm", 1), ("oak", 2)]
            .into_iter()
            .collect();
        let top = table.most_common(10);
        let words: Vec<&str> = top.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["ash", "oak", "yew", "elm"]);
    }

    #[test]
    fn test_most_common_truncates() {
        let table: FrequencyTable = [("a", 3), ("b", 2), ("c", 1)].into_iter().collect();
        assert_eq!(table.most_common(2).len(), 2);
        assert!(FrequencyTable::new().most_common(5).is_empty());
    }
}
