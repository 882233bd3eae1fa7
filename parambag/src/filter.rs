//! Filter configuration and the pluggable rule boundary.
//!
//! `ParameterBag::filter` delegates the actual validation/sanitization work
//! to a [`FilterRule`] implementation. The bag only decides *whether* the
//! rule runs (missing keys and array values short-circuit) and wraps the
//! outcome in [`Filtered`], whose `Rejected` variant is a dedicated failure
//! sentinel distinct from every legitimate filtered value.

use bitflags::bitflags;

use crate::value::ParamValue;

/// Identifies which validation/sanitization rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
pub enum FilterKind {
    /// Strip everything except digits and sign characters.
    #[strum(serialize = "sanitize_numeric")]
    SanitizeNumeric,
    /// Accept conventional truthy/falsy spellings.
    #[strum(serialize = "validate_boolean")]
    ValidateBoolean,
    /// Structural email validation.
    #[strum(serialize = "validate_email")]
    ValidateEmail,
    /// Structural URL validation.
    #[strum(serialize = "validate_url")]
    ValidateUrl,
    /// Integer parsing with optional radix flags and range bounds.
    #[strum(serialize = "validate_int")]
    ValidateInt,
}

bitflags! {
    /// Flags modifying how a [`FilterKind`] behaves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FilterFlags: u32 {
        /// `ValidateInt` also accepts `0x`-prefixed hexadecimal input.
        const ALLOW_HEX = 1;
        /// `ValidateInt` also accepts `0o`-prefixed octal input.
        const ALLOW_OCTAL = 1 << 1;
        /// `ValidateUrl` requires a non-empty path component.
        const PATH_REQUIRED = 1 << 2;
        /// `ValidateUrl` requires a non-empty query string.
        const QUERY_REQUIRED = 1 << 3;
    }
}

/// Configuration passed to a [`FilterRule`] alongside the value.
///
/// Either built up field by field or converted from a bare [`FilterFlags`]
/// value when no rule-specific parameters are needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub flags: FilterFlags,
    pub min_range: Option<i64>,
    pub max_range: Option<i64>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(mut self, flags: FilterFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min_range = Some(min);
        self.max_range = Some(max);
        self
    }
}

impl From<FilterFlags> for FilterOptions {
    fn from(flags: FilterFlags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }
}

/// The validation/sanitization collaborator invoked by `ParameterBag::filter`.
///
/// Implementations receive the stored value already coerced to text. `None`
/// signals validation failure; the bag reports it as [`Filtered::Rejected`].
pub trait FilterRule {
    fn apply(&self, value: &str, kind: FilterKind, options: &FilterOptions) -> Option<ParamValue>;
}

/// Outcome of `ParameterBag::filter`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filtered {
    /// The filtered (or passed-through) value.
    Value(ParamValue),
    /// The rule rejected the stored value.
    Rejected,
}

impl Filtered {
    pub fn into_value(self) -> Option<ParamValue> {
        match self {
            Self::Value(v) => Some(v),
            Self::Rejected => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_flags_conversion() {
        let options = FilterOptions::from(FilterFlags::PATH_REQUIRED);
        assert_eq!(options.flags, FilterFlags::PATH_REQUIRED);
        assert_eq!(options.min_range, None);
        assert_eq!(options.max_range, None);
    }

    #[test]
    fn test_options_builder() {
        let options = FilterOptions::new()
            .with_flags(FilterFlags::ALLOW_HEX)
            .with_range(1, 255);
        assert!(options.flags.contains(FilterFlags::ALLOW_HEX));
        assert_eq!(options.min_range, Some(1));
        assert_eq!(options.max_range, Some(255));
    }

    #[test]
    fn test_kind_round_trip() {
        use std::str::FromStr;
        assert_eq!(FilterKind::ValidateEmail.to_string(), "validate_email");
        assert_eq!(
            FilterKind::from_str("sanitize_numeric").unwrap(),
            FilterKind::SanitizeNumeric
        );
    }

    #[test]
    fn test_rejected_sentinel() {
        assert!(Filtered::Rejected.is_rejected());
        assert_eq!(Filtered::Rejected.into_value(), None);
        // A legitimate boolean-false result is not the failure sentinel.
        let passed = Filtered::Value(ParamValue::Bool(false));
        assert!(!passed.is_rejected());
        assert_eq!(passed.into_value(), Some(ParamValue::Bool(false)));
    }
}
