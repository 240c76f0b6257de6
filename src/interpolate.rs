//! `{name}` placeholder substitution.

use std::collections::HashMap;
use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{ Map, Value };

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid")
});

/// Values substituted into message placeholders, keyed by token name.
///
/// Anything implementing `Display` can be stored; it is rendered once on insert.
///
/// ```rust
/// use bevy_i18n_messages::Interpolations;
///
/// let values = Interpolations::new().with("name", "Ada").with("count", 3);
/// assert_eq!(values.get("count"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Interpolations {
    values: HashMap<String, String>,
}

impl Interpolations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional values, addressed as `{0}`, `{1}`, ...
    pub fn from_list<I, T>(values: I) -> Self where I: IntoIterator<Item = T>, T: Display {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value))
            .collect()
    }

    /// Builder form of [`Interpolations::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Interpolations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut interpolations = Self::new();
        for (name, value) in iter {
            interpolations.insert(name, value);
        }
        interpolations
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Interpolations {
    fn from(values: [(K, V); N]) -> Self {
        values.into_iter().collect()
    }
}

// JSON strings are inserted bare; other scalars use their JSON rendering.
impl From<Map<String, Value>> for Interpolations {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(name, value)| {
                let rendered = match value {
                    Value::String(text) => text,
                    other => other.to_string(),
                };
                (name, rendered)
            })
            .collect()
    }
}

/// Splits `template` into literal and substituted segments, in order.
///
/// A placeholder whose name has no value is kept as literal `{name}` text.
/// Joining the segments with `""` gives the final string.
pub fn interpolate<'a>(template: &'a str, values: &'a Interpolations) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut last = 0;

    for token in PLACEHOLDER_RE.find_iter(template) {
        if token.start() > last {
            segments.push(&template[last..token.start()]);
        }

        let name = &template[token.start() + 1..token.end() - 1];
        segments.push(values.get(name).unwrap_or(token.as_str()));
        last = token.end();
    }

    if last < template.len() {
        segments.push(&template[last..]);
    }

    segments
}

/// [`interpolate`] joined into a single string.
pub fn format(template: &str, values: &Interpolations) -> String {
    interpolate(template, values).concat()
}
