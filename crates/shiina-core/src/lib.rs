//! # shiina-core
//!
//! A minimal dynamically-typed value tree and a small recursive-descent parser
//! for a JSON-like text format.
//!
//! The format is intentionally narrow: no escape sequences, no signs or
//! exponents on numbers, and a lenient separator rule where any character
//! other than `,` closes an array or object. Objects keep their keys sorted and
//! the first occurrence of a duplicate key wins.
//!
//! ## Quick start
//!
//! ```rust
//! use shiina_core::{parse, Value};
//!
//! let value = parse(r#"{"b": [1, 2], "a": "x"}"#).unwrap();
//! assert_eq!(value["a"], Value::from("x"));
//! assert_eq!(value.get("b").unwrap().as_array().unwrap().len(), 2);
//!
//! // Display keeps the minimal rendering: sorted keys, no entry separator.
//! assert_eq!(value.to_string(), r#"{a: "x"b: [1,2,]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — text → [`Value`] (`parse`, `parse_partial`, `load`)
//! - [`value`] — the [`Value`] tree, checked accessors, rendering
//! - [`error`] — error types for parse, access and load failures

pub mod error;
pub mod parser;
pub mod value;

pub use error::{Result, ShiinaError};
pub use parser::{load, parse, parse_partial, MAX_DEPTH};
pub use value::{Array, Object, Type, Value};
