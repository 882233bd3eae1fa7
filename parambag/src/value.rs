//! Parameter value types.
//!
//! [`ParamValue`] is the closed set of values a bag can store. The bag's read
//! accessors never fail on a type mismatch: [`ParamValue::to_text`] is total,
//! so every stored value has a string form the character-class filters can
//! operate on.

use serde::{Deserialize, Serialize};

/// The type of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Null,
    Bool,
    Integer,
    String,
    Array,
}

/// A value stored in a [`ParameterBag`](crate::bag::ParameterBag).
///
/// Serializes untagged, so values round-trip through YAML/JSON in their
/// natural scalar/sequence forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    String(std::string::String),
    Array(Vec<ParamValue>),
}

impl ParamValue {
    /// Returns the type of this value.
    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Null => ParamType::Null,
            Self::Bool(_) => ParamType::Bool,
            Self::Integer(_) => ParamType::Integer,
            Self::String(_) => ParamType::String,
            Self::Array(_) => ParamType::Array,
        }
    }

    /// Total string coercion covering every variant.
    ///
    /// Arrays coerce to the empty string: `filter` returns them unchanged
    /// before any coercion happens, and the character-class accessors treat
    /// them as having no filterable text.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(v) => v.to_string(),
            Self::Integer(v) => v.to_string(),
            Self::String(v) => v.clone(),
            Self::Array(_) => String::new(),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<ParamValue>> for ParamValue {
    fn from(value: Vec<ParamValue>) -> Self {
        Self::Array(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_is_total() {
        assert_eq!(ParamValue::Null.to_text(), "");
        assert_eq!(ParamValue::Bool(true).to_text(), "true");
        assert_eq!(ParamValue::Bool(false).to_text(), "false");
        assert_eq!(ParamValue::Integer(-42).to_text(), "-42");
        assert_eq!(ParamValue::from("hello").to_text(), "hello");
        assert_eq!(ParamValue::Array(vec![ParamValue::Integer(1)]).to_text(), "");
    }

    #[test]
    fn test_param_type() {
        assert_eq!(ParamValue::Null.param_type(), ParamType::Null);
        assert_eq!(ParamValue::from(3i64).param_type(), ParamType::Integer);
        assert_eq!(ParamValue::from("x").param_type(), ParamType::String);
        assert_eq!(ParamValue::Array(vec![]).param_type(), ParamType::Array);
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(ParamValue::default(), ParamValue::Null);
    }
}
