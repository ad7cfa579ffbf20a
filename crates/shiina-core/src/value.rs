//! The shiina value tree.
//!
//! A [`Value`] holds exactly one of six payloads and exclusively owns every
//! value reachable through it. Copying is a deep [`Clone`]; moving is an
//! ordinary Rust move, and [`Value::take`] moves out of a place while leaving
//! `Null` behind.
//!
//! Accessors are checked at run time: asking for the wrong variant returns
//! [`ShiinaError::TypeMismatch`] instead of reading some other payload.
//!
//! # Rendering
//!
//! The [`Display`](fmt::Display) form is deliberately minimal and is not
//! guaranteed to parse back:
//!
//! - strings are quoted but never escaped
//! - every array element is followed by `,` (`[1,2,]`)
//! - object entries are written as `key: value` with unquoted keys and no
//!   separator between entries (`{a: 1b: 2}`)
//!
//! Use the [`Serialize`] impl with `serde_json` when real JSON is needed.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::{Result, ShiinaError};

/// Ordered elements of an array value.
pub type Array = Vec<Value>;

/// Entries of an object value, iterated in key sort order.
pub type Object = BTreeMap<String, Value>;

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Type {
    /// Lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Type::Null => "null",
            Type::Boolean => "boolean",
            Type::Number => "number",
            Type::String => "string",
            Type::Array => "array",
            Type::Object => "object",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    /// Numbers are always `f64`; integers are not kept apart.
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Build the default payload for `ty`: `null`, `false`, `0`, `""`, `[]` or `{}`.
    pub fn from_type(ty: Type) -> Self {
        match ty {
            Type::Null => Value::Null,
            Type::Boolean => Value::Boolean(false),
            Type::Number => Value::Number(0.0),
            Type::String => Value::String(String::new()),
            Type::Array => Value::Array(Array::new()),
            Type::Object => Value::Object(Object::new()),
        }
    }

    /// Parse a value from text. See [`crate::parse`].
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::parse(text)
    }

    /// Read and parse a file. See [`crate::load`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        crate::parser::load(path)
    }

    /// The tag of the active payload.
    pub fn value_type(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Boolean(_) => Type::Boolean,
            Value::Number(_) => Type::Number,
            Value::String(_) => Type::String,
            Value::Array(_) => Type::Array,
            Value::Object(_) => Type::Object,
        }
    }

    /// Move the payload out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    fn mismatch(&self, expected: Type) -> ShiinaError {
        ShiinaError::TypeMismatch {
            expected,
            found: self.value_type(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Succeeds only for `Null`.
    pub fn as_null(&self) -> Result<()> {
        match self {
            Value::Null => Ok(()),
            _ => Err(self.mismatch(Type::Null)),
        }
    }

    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(Type::Boolean)),
        }
    }

    pub fn as_boolean_mut(&mut self) -> Result<&mut bool> {
        match self {
            Value::Boolean(b) => Ok(b),
            _ => Err(self.mismatch(Type::Boolean)),
        }
    }

    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(self.mismatch(Type::Number)),
        }
    }

    pub fn as_number_mut(&mut self) -> Result<&mut f64> {
        match self {
            Value::Number(n) => Ok(n),
            _ => Err(self.mismatch(Type::Number)),
        }
    }

    pub fn as_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Type::String)),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Type::String)),
        }
    }

    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            _ => Err(self.mismatch(Type::Array)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(arr) => Ok(arr),
            _ => Err(self.mismatch(Type::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            _ => Err(self.mismatch(Type::Object)),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(obj) => Ok(obj),
            _ => Err(self.mismatch(Type::Object)),
        }
    }

    /// Look up `key` in an object.
    ///
    /// Fails with [`ShiinaError::MissingKey`] when the key is absent and with
    /// [`ShiinaError::TypeMismatch`] when `self` is not an object.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| ShiinaError::MissingKey {
                key: key.to_string(),
            })
    }

    /// Mutable counterpart of [`Value::get`].
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.as_object_mut()?
            .get_mut(key)
            .ok_or_else(|| ShiinaError::MissingKey {
                key: key.to_string(),
            })
    }

    /// Follow a path of object keys, e.g. `["items", "name"]`.
    ///
    /// An empty path returns `self`.
    pub fn pointer<S: AsRef<str>>(&self, path: &[S]) -> Result<&Value> {
        path.iter()
            .try_fold(self, |current, key| current.get(key.as_ref()))
    }
}

/// Panics with the [`ShiinaError`] message when the lookup fails, like map
/// indexing in `std`. Use [`Value::get`] for a fallible lookup.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.get_mut(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Array(arr) => {
                f.write_str("[")?;
                for item in arr {
                    write!(f, "{item},")?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => {
                f.write_str("{")?;
                for (key, val) in obj {
                    write!(f, "{key}: {val}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Array> for Value {
    fn from(arr: Array) -> Self {
        Value::Array(arr)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Type> for Value {
    fn from(ty: Type) -> Self {
        Value::from_type(ty)
    }
}
