use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Last observed price per product key.
///
/// Entries keep insertion order so the saved file lists products in the
/// order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceRecord {
    entries: Vec<(String, u64)>,
}

impl PriceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, price)| *price)
    }

    /// Sets the price for `key`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, price: u64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = price,
            None => self.entries.push((key, price)),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, price)| (k.as_str(), *price))
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for PriceRecord {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut record = PriceRecord::new();
        for (key, price) in iter {
            record.insert(key, price);
        }
        record
    }
}

impl Serialize for PriceRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, price) in &self.entries {
            map.serialize_entry(key, price)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PriceRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = PriceRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat object of product keys to integer prices")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = PriceRecord::new();
                while let Some((key, price)) = access.next_entry::<String, u64>()? {
                    record.insert(key, price);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
