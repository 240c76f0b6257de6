//! Variant selection for `singular|plural` and `zero|one|multiple` messages.
//!
//! A plural message lists its variants separated by `|`:
//!
//! - two variants are read as `singular|plural`: a count of 1 picks the
//!   first, larger counts the second. Zero picks the first too.
//! - any other number of variants is read as `zero|one|multiple`: the
//!   count indexes the list directly and saturates at the last entry.

use crate::message::Transformer;

/// The number driving plural selection.
///
/// Built from any primitive number. [`Counter::NONE`] stands for a missing
/// or non-numeric counter, which selects the default variant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Counter(Option<f64>);

impl Counter {
    pub const NONE: Counter = Counter(None);

    pub fn new(value: f64) -> Self {
        Self(Some(value))
    }

    /// The numeric value, if any. `NaN` counts as non-numeric.
    pub fn value(self) -> Option<f64> {
        self.0.filter(|value| !value.is_nan())
    }
}

macro_rules! counter_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Counter {
                fn from(value: $ty) -> Self {
                    Counter(Some(value as f64))
                }
            }
        )*
    };
}

counter_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Option<f64>> for Counter {
    fn from(value: Option<f64>) -> Self {
        Counter(value)
    }
}

/// Picks the variant of `message` matching `counter`.
///
/// Fractional counters are truncated toward zero and the sign is ignored.
///
/// ```rust
/// use bevy_i18n_messages::plural::pluralize;
///
/// assert_eq!(pluralize("apple|apples", 1), "apple");
/// assert_eq!(pluralize("apple|apples", 4), "apples");
/// assert_eq!(pluralize("no apples|one apple|many apples", 0), "no apples");
/// ```
pub fn pluralize(message: &str, counter: impl Into<Counter>) -> &str {
    let parts: Vec<&str> = message.split('|').collect();
    let last = parts.len() - 1;
    let is_simple = parts.len() == 2;

    let choice = match counter.into().value() {
        Some(count) => {
            let offset = if is_simple { 1.0 } else { 0.0 };
            let index = count.abs().trunc() - offset;
            // Saturating float-to-int cast: infinity lands on `last`.
            (index.max(0.0) as usize).min(last)
        }
        None if is_simple => 1,
        None => 0,
    };

    parts[choice]
}

/// Pipeline transformer selecting a plural variant.
#[derive(Debug, Clone, Copy)]
pub struct Plural(pub Counter);

impl Transformer for Plural {
    fn transform(&self, message: &str) -> String {
        pluralize(message, self.0).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SIMPLE: &str = "singular|plural";
    const MULTI: &str = "zero|one|multiple";

    #[test]
    fn simple_form() {
        assert_eq!(pluralize(SIMPLE, 1), "singular");
        assert_eq!(pluralize(SIMPLE, 2), "plural");
        assert_eq!(pluralize(SIMPLE, 5), "plural");
    }

    #[test]
    fn simple_form_with_zero_picks_singular() {
        assert_eq!(pluralize(SIMPLE, 0), "singular");
    }

    #[test]
    fn multi_form() {
        assert_eq!(pluralize(MULTI, 0), "zero");
        assert_eq!(pluralize(MULTI, 1), "one");
        assert_eq!(pluralize(MULTI, 2), "multiple");
        assert_eq!(pluralize(MULTI, 7), "multiple");
    }

    #[test]
    fn negative_counts_use_magnitude() {
        assert_eq!(pluralize(SIMPLE, -1), "singular");
        assert_eq!(pluralize(MULTI, -1), "one");
    }

    #[test]
    fn fractions_truncate_toward_zero() {
        assert_eq!(pluralize(SIMPLE, 1.9), "singular");
        assert_eq!(pluralize(MULTI, 0.5), "zero");
        assert_eq!(pluralize(MULTI, -1.5), "one");
    }

    #[test]
    fn missing_counter_picks_default() {
        assert_eq!(pluralize(SIMPLE, Counter::NONE), "plural");
        assert_eq!(pluralize(MULTI, Counter::NONE), "zero");
        assert_eq!(pluralize(SIMPLE, f64::NAN), "plural");
    }

    #[test]
    fn infinite_counter_saturates() {
        assert_eq!(pluralize(MULTI, f64::INFINITY), "multiple");
        assert_eq!(pluralize(SIMPLE, f64::NEG_INFINITY), "plural");
    }

    #[test]
    fn single_variant_is_always_returned() {
        assert_eq!(pluralize("only", 0), "only");
        assert_eq!(pluralize("only", 42), "only");
        assert_eq!(pluralize("", 3), "");
    }

    #[test]
    fn transformer_wraps_pluralize() {
        assert_eq!(Plural(Counter::from(3u32)).transform(SIMPLE), "plural");
    }

    proptest! {
        #[test]
        fn choice_is_always_a_variant(
            parts in prop::collection::vec("[a-z]{0,5}", 1..6),
            count in any::<i64>(),
        ) {
            let message = parts.join("|");
            let picked = pluralize(&message, count);
            prop_assert!(parts.iter().any(|part| part == picked));
        }
    }
}
