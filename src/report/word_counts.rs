// Ordered word -> count mapping for JSON output.
//
// serde_json maps built from HashMap lose rank order. This keeps the entries
// as a list and (de)serializes them as a JSON object in list order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordCounts(pub Vec<(String, u64)>);

impl WordCounts {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.0.iter().find(|(w, _)| w == word).map(|(_, c)| *c)
    }
}

impl Serialize for WordCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (word, count) in &self.0 {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

struct WordCountsVisitor;

impl<'de> Visitor<'de> for WordCountsVisitor {
    type Value = WordCounts;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of word to count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((word, count)) = access.next_entry::<String, u64>()? {
            entries.push((word, count));
        }
        Ok(WordCounts(entries))
    }
}

impl<'de> Deserialize<'de> for WordCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WordCountsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keeps_rank_order() {
        let counts = WordCounts(vec![
            ("yew".to_string(), 9),
            ("ash".to_string(), 4),
            ("oak".to_string(), 1),
        ]);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"yew":9,"ash":4,"oak":1}"#);

        let back: WordCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
        assert_eq!(back.get("ash"), Some(4));
    }
}
