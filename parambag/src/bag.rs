//! Parameter bag storage and typed accessors.
//!
//! `ParameterBag` owns a flat, insertion-ordered mapping from string keys to
//! [`ParamValue`]s. Mutations are synchronous and immediately consistent;
//! missing keys are handled by per-accessor defaults, never by errors.

use indexmap::IndexMap;
use tracing::debug;

use crate::filter::{FilterKind, FilterOptions, FilterRule, Filtered};
use crate::value::ParamValue;

/// An ordered mapping from string keys to typed values, with convenience
/// accessors that normalize on read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterBag {
    parameters: IndexMap<String, ParamValue>,
}

impl ParameterBag {
    /// Create a bag from an initial mapping. No validation is performed.
    pub fn new(initial: IndexMap<String, ParamValue>) -> Self {
        Self {
            parameters: initial,
        }
    }

    /// The complete current mapping, in insertion order, original value
    /// types intact.
    pub fn all(&self) -> &IndexMap<String, ParamValue> {
        &self.parameters
    }

    /// All keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    /// Merge a mapping into this one. Shared keys are overwritten in place
    /// and keep their position; new keys are appended in the given order.
    pub fn add(&mut self, parameters: IndexMap<String, ParamValue>) {
        for (key, value) in parameters {
            self.parameters.insert(key, value);
        }
    }

    /// Discard the entire mapping and replace it with the given one.
    pub fn replace(&mut self, parameters: IndexMap<String, ParamValue>) {
        self.parameters = parameters;
    }

    /// Delete the entry for `key`. No-op when absent; the order of the
    /// remaining entries is preserved.
    pub fn remove(&mut self, key: &str) {
        self.parameters.shift_remove(key);
    }

    /// The stored value for `key`, `None` only when the key is absent.
    /// A stored [`ParamValue::Null`] yields `Some(&Null)`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.parameters.get(key)
    }

    /// The stored value when the key is present (even if it is `Null`),
    /// otherwise `default`. Presence, not value-nullness, selects the
    /// default.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a ParamValue) -> &'a ParamValue {
        self.parameters.get(key).unwrap_or(default)
    }

    /// Insert or overwrite the entry for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.parameters.insert(key.into(), value.into());
    }

    /// Whether `key` is present, regardless of its value.
    pub fn has(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    /// The stored value as text with everything except ASCII letters
    /// removed. Empty string when the key is absent.
    pub fn get_alpha(&self, key: &str) -> String {
        self.filtered_chars(key, |c| c.is_ascii_alphabetic())
    }

    /// Like [`get_alpha`](Self::get_alpha), retaining ASCII letters and
    /// digits.
    pub fn get_alnum(&self, key: &str) -> String {
        self.filtered_chars(key, |c| c.is_ascii_alphanumeric())
    }

    /// Like [`get_alpha`](Self::get_alpha), retaining only ASCII digits.
    /// This is character-class filtering, not numeric parsing: digits are
    /// kept wherever they appear, in order.
    pub fn get_digits(&self, key: &str) -> String {
        self.filtered_chars(key, |c| c.is_ascii_digit())
    }

    /// The stored value's digits parsed as a base-10 integer. Zero when the
    /// key is absent, when no digits remain after filtering, or when the
    /// digit run does not fit an `i64`.
    pub fn get_int(&self, key: &str) -> i64 {
        self.get_digits(key).parse().unwrap_or(0)
    }

    /// The stored value interpreted by a fixed truthy set: a `true` bool,
    /// the integer 1, or the strings `1`/`true`/`on`/`yes` (ASCII
    /// case-insensitive, surrounding whitespace ignored). Everything else,
    /// including an absent key, is false.
    pub fn get_bool(&self, key: &str) -> bool {
        match self.parameters.get(key) {
            Some(ParamValue::Bool(v)) => *v,
            Some(ParamValue::Integer(v)) => *v == 1,
            Some(value) => matches!(
                value.to_text().trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            ),
            None => false,
        }
    }

    /// Run the stored value through a [`FilterRule`].
    ///
    /// - Absent key: `default` is returned and the rule is not invoked.
    /// - Stored array: returned unchanged, the rule is not invoked.
    /// - Otherwise the rule sees the value coerced to text; a failing rule
    ///   yields [`Filtered::Rejected`], which is never replaced by
    ///   `default`.
    pub fn filter<R>(
        &self,
        key: &str,
        default: ParamValue,
        kind: FilterKind,
        options: &FilterOptions,
        rule: &R,
    ) -> Filtered
    where
        R: FilterRule + ?Sized,
    {
        let Some(value) = self.parameters.get(key) else {
            return Filtered::Value(default);
        };
        if value.is_array() {
            return Filtered::Value(value.clone());
        }
        match rule.apply(&value.to_text(), kind, options) {
            Some(filtered) => Filtered::Value(filtered),
            None => {
                debug!(key, %kind, "filter rejected value");
                Filtered::Rejected
            }
        }
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ParamValue> {
        self.parameters.iter()
    }

    /// Number of entries currently in the mapping.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    fn filtered_chars(&self, key: &str, keep: impl Fn(char) -> bool) -> String {
        self.parameters
            .get(key)
            .map(|v| v.to_text().chars().filter(|c| keep(*c)).collect())
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a ParameterBag {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = indexmap::map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterBag
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            parameters: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for ParameterBag
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.parameters.insert(key.into(), value.into());
        }
    }
}
