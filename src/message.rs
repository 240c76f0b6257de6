//! The message resolution pipeline.
//!
//! `path -> lookup -> transformers -> interpolation -> trim`
//!
//! A lookup that finds nothing yields the path itself, so a missing
//! translation shows up as its key instead of failing.

use bevy::log::debug;

use crate::dictionary::Dictionary;
use crate::interpolate::{ interpolate, Interpolations };

/// A `&str -> String` step applied to a resolved message before interpolation.
pub trait Transformer {
    fn transform(&self, message: &str) -> String;
}

impl<F> Transformer for F where F: Fn(&str) -> String {
    fn transform(&self, message: &str) -> String {
        self(message)
    }
}

/// Resolves `path` in `locale` and renders it.
///
/// An empty message counts as missing. `log_missing` reports misses at
/// debug level.
pub fn resolve_message(
    dictionary: &Dictionary,
    locale: Option<&str>,
    path: &str,
    interpolations: Option<&Interpolations>,
    transformers: &[&dyn Transformer],
    log_missing: bool
) -> String {
    let found = locale
        .and_then(|locale| dictionary.resolve(locale, path))
        .filter(|message| !message.is_empty());

    let Some(message) = found else {
        if log_missing {
            debug!("No message for '{}' in locale {:?}", path, locale);
        }
        return path.to_string();
    };

    let mut message = message.to_string();
    for transformer in transformers {
        message = transformer.transform(&message);
    }

    if let Some(values) = interpolations {
        message = interpolate(&message, values).concat();
    }

    message.trim().to_string()
}
