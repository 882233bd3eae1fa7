//! Loading a parameter bag from a YAML mapping.
//!
//! The document root must be a mapping with string keys:
//!
//! ```yaml
//! name: "sensor_front"
//! retries: 3
//! enabled: true
//! tags: ["lidar", "front"]
//! ```
//!
//! Scalar and sequence values convert per the [`ParamValue`] model; entry
//! order in the document is preserved in the bag. Values with no bag
//! representation (nested mappings, floats) are skipped with a warning
//! rather than failing the whole load.

use std::path::Path;

use serde_yaml::Value;
use tracing::{debug, warn};

use crate::bag::ParameterBag;
use crate::error::BagError;
use crate::value::ParamValue;

/// Load a parameter bag from a YAML file.
pub fn from_file(path: &Path) -> Result<ParameterBag, BagError> {
    let content = std::fs::read_to_string(path)?;
    from_str(&content)
}

/// Parse a YAML string into a parameter bag.
pub fn from_str(yaml: &str) -> Result<ParameterBag, BagError> {
    let doc: Value = serde_yaml::from_str(yaml).map_err(|e| BagError::Yaml(e.to_string()))?;
    let mapping = doc.as_mapping().ok_or(BagError::NotAMapping)?;

    let mut bag = ParameterBag::default();
    for (key, val) in mapping {
        let name = key
            .as_str()
            .ok_or_else(|| BagError::NonStringKey(format!("{:?}", key)))?;
        match yaml_to_value(val) {
            Some(value) => bag.set(name, value),
            None => warn!(key = name, "skipping value with no bag representation"),
        }
    }

    debug!(entries = bag.len(), "loaded parameter bag from YAML");
    Ok(bag)
}

/// Convert a YAML value to a [`ParamValue`].
///
/// - Booleans, integers, strings and null map directly
/// - Sequences convert element-wise
/// - Floats and mappings are not storable and yield `None`
fn yaml_to_value(val: &Value) -> Option<ParamValue> {
    match val {
        Value::Null => Some(ParamValue::Null),
        Value::Bool(b) => Some(ParamValue::Bool(*b)),
        Value::Number(n) => n.as_i64().map(ParamValue::Integer),
        Value::String(s) => Some(ParamValue::String(s.clone())),
        Value::Sequence(seq) => {
            let items: Option<Vec<ParamValue>> = seq.iter().map(yaml_to_value).collect();
            items.map(ParamValue::Array)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML_SAMPLE: &str = r#"
name: "sensor_front"
retries: 3
enabled: true
empty:
tags: ["lidar", "front"]
"#;

    #[test]
    fn test_scalars() {
        let bag = from_str(YAML_SAMPLE).unwrap();
        assert_eq!(bag.get("name"), Some(&ParamValue::from("sensor_front")));
        assert_eq!(bag.get("retries"), Some(&ParamValue::Integer(3)));
        assert_eq!(bag.get("enabled"), Some(&ParamValue::Bool(true)));
        // Explicit null is present, not missing.
        assert_eq!(bag.get("empty"), Some(&ParamValue::Null));
    }

    #[test]
    fn test_sequence() {
        let bag = from_str(YAML_SAMPLE).unwrap();
        assert_eq!(
            bag.get("tags"),
            Some(&ParamValue::Array(vec![
                ParamValue::from("lidar"),
                ParamValue::from("front"),
            ]))
        );
    }

    #[test]
    fn test_document_order_preserved() {
        let bag = from_str(YAML_SAMPLE).unwrap();
        assert_eq!(
            bag.keys().collect::<Vec<_>>(),
            vec!["name", "retries", "enabled", "empty", "tags"]
        );
    }

    #[test]
    fn test_unsupported_values_skipped() {
        let bag = from_str("nested:\n  a: 1\nkept: 2\n").unwrap();
        assert!(!bag.has("nested"));
        assert_eq!(bag.get("kept"), Some(&ParamValue::Integer(2)));
    }

    #[test]
    fn test_root_must_be_mapping() {
        assert!(matches!(from_str("- 1\n- 2"), Err(BagError::NotAMapping)));
        assert!(matches!(from_str(""), Err(BagError::NotAMapping)));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(from_str("a: [unclosed"), Err(BagError::Yaml(_))));
    }
}
