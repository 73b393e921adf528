//! Normalized attribute map
//!
//!     Attributes are stored as an insertion-ordered list of key/value pairs.
//!     Keys are normalized on the way in: surrounding whitespace is trimmed
//!     and an `xml:` namespace prefix is stripped, so `xml:id` and `id` are
//!     the same attribute. Values keep their exact text.
//!
//!     A node may carry attributes outside its kind's serialization table;
//!     they are preserved on the node but never rendered.

use std::fmt;

/// An insertion-ordered attribute map with normalized keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for fluent construction:
    ///
    /// ```rust,ignore
    /// let attrs = Attributes::new().set("begin", "0s").set("xml:id", "m1");
    /// ```
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace an attribute. The key is normalized.
    pub fn insert(&mut self, key: &str, value: &str) {
        let key = normalize_key(key);
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key, value.to_string()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = normalize_key(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_key(key: &str) -> String {
    let key = key.trim();
    key.strip_prefix("xml:").unwrap_or(key).to_string()
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}=\"{}\"", key, value)?;
            first = false;
        }
        Ok(())
    }
}
