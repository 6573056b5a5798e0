//! The plugin's persisted state

use serde::{Deserialize, Serialize};

/// The blob the host persists on the plugin's behalf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginStorage {
    /// Counter driven by the `decrement` command
    #[serde(default)]
    pub count: i64,

    /// Saved clipboard snippets, in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snippets: Vec<Snippet>,
}

/// A named piece of text that can be copied to the clipboard later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub name: String,
    pub value: String,
}

impl PluginStorage {
    pub fn snippet(&self, name: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.name == name)
    }

    /// Insert `snippet`, replacing any existing snippet of the same name in place.
    pub fn upsert_snippet(&mut self, snippet: Snippet) {
        match self.snippets.iter_mut().find(|s| s.name == snippet.name) {
            Some(existing) => existing.value = snippet.value,
            None => self.snippets.push(snippet),
        }
    }

    /// Returns the removed snippet, if there was one.
    pub fn remove_snippet(&mut self, name: &str) -> Option<Snippet> {
        let index = self.snippets.iter().position(|s| s.name == name)?;
        Some(self.snippets.remove(index))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(name: &str, value: &str) -> Snippet {
        Snippet {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn missing_fields_default() {
        let storage = PluginStorage::from_json("{}").unwrap();
        assert_eq!(storage, PluginStorage::default());
    }

    #[test]
    fn count_only_blob_parses() {
        let storage = PluginStorage::from_json(r#"{"count": -3}"#).unwrap();
        assert_eq!(storage.count, -3);
        assert!(storage.snippets.is_empty());
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut storage = PluginStorage::default();
        storage.upsert_snippet(snippet("a", "1"));
        storage.upsert_snippet(snippet("b", "2"));
        storage.upsert_snippet(snippet("a", "3"));

        assert_eq!(storage.snippets, vec![snippet("a", "3"), snippet("b", "2")]);
    }

    #[test]
    fn remove_returns_snippet() {
        let mut storage = PluginStorage::default();
        storage.upsert_snippet(snippet("a", "1"));

        assert_eq!(storage.remove_snippet("a"), Some(snippet("a", "1")));
        assert_eq!(storage.remove_snippet("a"), None);
    }

    #[test]
    fn json_roundtrip() {
        let mut storage = PluginStorage {
            count: 7,
            ..Default::default()
        };
        storage.upsert_snippet(snippet("xss", "<script>alert(1)</script>"));

        let json = storage.to_json().unwrap();
        assert_eq!(PluginStorage::from_json(&json).unwrap(), storage);
    }
}
