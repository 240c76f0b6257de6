use thiserror::Error;

/// Errors reported by dictionary construction and locale switching.
///
/// Message lookups never fail; a missing message falls back to its path.
#[derive(Debug, Error)]
pub enum I18nError {
    /// `set_locale` was asked for a locale the dictionary does not contain.
    #[error("couldn't find the \"{0}\" locale")]
    UnknownLocale(String),
    /// Dictionary source text was not valid JSON.
    #[error("failed to parse dictionary: {0}")]
    Parse(#[from] serde_json::Error),
    /// A dictionary root or locale entry was not a JSON object.
    #[error("{what} must be a JSON object")]
    NotAnObject { what: String },
}
