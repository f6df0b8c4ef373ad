use indexmap::IndexMap;
use serde::Serialize;

/// Ordered key -> URL collection produced by the mapping generator.
///
/// Keys keep their first-insertion position; inserting an existing key
/// replaces the value (last-visited file wins). Serializes as a plain JSON
/// object in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping(IndexMap<String, String>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting the value of any prior entry with the
    /// same key. Returns the replaced URL, if any.
    pub fn insert(&mut self, key: String, url: String) -> Option<String> {
        self.0.insert(key, url)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
