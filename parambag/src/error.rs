//! Error types for the fallible crate surfaces.
//!
//! Bag accessors never fail; only loading a bag from external input can.

use std::fmt;

/// Errors that can occur while loading a parameter bag.
#[derive(Debug)]
pub enum BagError {
    /// Input could not be parsed as YAML.
    Yaml(String),

    /// The document root is not a mapping.
    NotAMapping,

    /// A mapping key is not a string.
    NonStringKey(String),

    /// Reading a parameter file failed.
    Io(std::io::Error),
}

impl fmt::Display for BagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BagError::Yaml(msg) => write!(f, "Failed to parse YAML: {}", msg),
            BagError::NotAMapping => write!(f, "Document root must be a mapping"),
            BagError::NonStringKey(key) => {
                write!(f, "Mapping keys must be strings, got {}", key)
            }
            BagError::Io(e) => write!(f, "Failed to read parameter file: {}", e),
        }
    }
}

impl std::error::Error for BagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BagError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BagError {
    fn from(e: std::io::Error) -> Self {
        BagError::Io(e)
    }
}
