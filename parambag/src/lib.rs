//! Typed parameter bag for request-like input data.
//!
//! A [`ParameterBag`] wraps a flat, insertion-ordered mapping from string keys
//! to [`ParamValue`]s and layers typed accessors on top of the raw storage:
//!
//! - **Character-class accessors** (`get_alpha`, `get_alnum`, `get_digits`)
//!   that coerce the stored value to text and keep only the requested class
//! - **Numeric and boolean accessors** (`get_int`, `get_bool`) with fixed
//!   missing-key defaults
//! - **Generic filtering** through a pluggable [`FilterRule`] collaborator,
//!   with [`StandardRules`] as the built-in implementation
//!
//! Missing keys never raise an error: every accessor has a documented
//! fallback (empty string, zero, false, or a caller-supplied default).
//!
//! ```
//! use parambag::{ParamValue, ParameterBag};
//!
//! let mut bag: ParameterBag = [("word", ParamValue::from("foo_BAR_012"))]
//!     .into_iter()
//!     .collect();
//! bag.set("count", 7i64);
//!
//! assert_eq!(bag.get_alpha("word"), "fooBAR");
//! assert_eq!(bag.get_digits("word"), "012");
//! assert_eq!(bag.get_int("count"), 7);
//! assert!(!bag.has("missing"));
//! ```

pub mod bag;
pub mod error;
pub mod filter;
pub mod rules;
pub mod value;
pub mod yaml;

pub use bag::ParameterBag;
pub use error::BagError;
pub use filter::{FilterFlags, FilterKind, FilterOptions, FilterRule, Filtered};
pub use rules::StandardRules;
pub use value::{ParamType, ParamValue};
