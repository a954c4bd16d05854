use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// A flat mapping of field name to submitted value, as produced by an HTTP
/// form decoder. Key presence is meaningful on its own: a key mapped to an
/// empty string still counts as answered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: AHashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load submitted data from a JSON file of string key/value pairs.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Strict membership test, independent of the value itself.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The ordered list of valid target groups, supplied by external
/// configuration. Consumed only by the render path to populate the
/// group selector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupConfig {
    pub groups: Vec<String>,
}

impl GroupConfig {
    /// Load the group list from a JSON configuration file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
