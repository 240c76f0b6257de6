//! Locale dictionaries and dotted-path lookup.
//!
//! A dictionary is a JSON object keyed by locale code. Every locale maps to
//! a message tree: nested objects whose string leaves are message templates.
//!
//! ```json
//! {
//!   "en": { "menu": { "start": "Start", "quit": "Quit" } },
//!   "fr": { "menu": { "start": "Commencer", "quit": "Quitter" } }
//! }
//! ```

use serde::{ Deserialize, Serialize };
use serde_json::{ Map, Value };

use crate::error::I18nError;

/// All message trees, keyed by locale code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Dictionary {
    locales: Map<String, Value>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from a single JSON tree keyed by locale.
    ///
    /// Fails if the root, or any locale entry, is not a JSON object.
    pub fn from_tree(tree: Value) -> Result<Self, I18nError> {
        let Value::Object(locales) = tree else {
            return Err(I18nError::NotAnObject { what: "dictionary root".to_string() });
        };

        for (locale, messages) in &locales {
            if !messages.is_object() {
                return Err(I18nError::NotAnObject { what: format!("locale \"{}\"", locale) });
            }
        }

        Ok(Self { locales })
    }

    /// Builds a dictionary by deep-merging an ordered list of trees.
    ///
    /// Later trees win on leaf collisions.
    ///
    /// ```rust
    /// use bevy_i18n_messages::Dictionary;
    /// use serde_json::json;
    ///
    /// let dictionary = Dictionary::from_trees([
    ///     json!({ "en": { "greeting": "Hello" } }),
    ///     json!({ "en": { "farewell": "Bye" } }),
    /// ]).unwrap();
    ///
    /// assert_eq!(dictionary.resolve("en", "greeting"), Some("Hello"));
    /// assert_eq!(dictionary.resolve("en", "farewell"), Some("Bye"));
    /// ```
    pub fn from_trees<I>(trees: I) -> Result<Self, I18nError> where I: IntoIterator<Item = Value> {
        let mut dictionary = Self::new();
        for tree in trees {
            dictionary.merge(Self::from_tree(tree)?);
        }
        Ok(dictionary)
    }

    /// Parses a dictionary from JSON text, e.g. a file embedded with `include_str!`.
    pub fn from_json_str(json: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_tree(value)
    }

    /// Deep-merges `other` into this dictionary.
    ///
    /// Objects combine key by key, arrays concatenate, anything else is
    /// replaced by the value from `other`.
    pub fn merge(&mut self, other: Dictionary) {
        for (locale, messages) in other.locales {
            match self.locales.get_mut(&locale) {
                Some(existing) => deep_merge(existing, messages),
                None => {
                    self.locales.insert(locale, messages);
                }
            }
        }
    }

    /// Looks up the message at `path` in the tree of `locale`.
    pub fn resolve(&self, locale: &str, path: &str) -> Option<&str> {
        self.locales.get(locale).and_then(|tree| resolve_path(tree, path))
    }

    /// Returns whether `locale` has a message tree.
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locale codes present in the dictionary, sorted.
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.locales.keys().cloned().collect();
        locales.sort();
        locales
    }

    /// The message tree of a single locale.
    pub fn tree(&self, locale: &str) -> Option<&Value> {
        self.locales.get(locale)
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl TryFrom<Value> for Dictionary {
    type Error = I18nError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_tree(value)
    }
}

impl From<Dictionary> for Value {
    fn from(dictionary: Dictionary) -> Self {
        Value::Object(dictionary.locales)
    }
}

/// Walks `tree` along the dot-separated `path` and returns the string leaf.
///
/// Returns `None` when a segment is missing, an intermediate value is not
/// an object, or the final value is not a string.
pub fn resolve_path<'a>(tree: &'a Value, path: &str) -> Option<&'a str> {
    path.split('.')
        .try_fold(tree, |node, key| node.as_object()?.get(key))?
        .as_str()
}

fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) => target.extend(source),
        (target, source) => *target = source,
    }
}
