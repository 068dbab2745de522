//! # Literal Values and Argument Records
//!
//! The DSL only has literal values: numbers, booleans, strings and
//! (nested) vectors. Arguments are collected into a generic record before
//! being mapped onto the typed argument shape of a construct.
//!
//! ## Example
//!
//! ```rust
//! use scad_ast::{Arguments, Value};
//!
//! let mut args = Arguments::default();
//! args.positional.push(Value::Number(10.0));
//! args.named.insert("center".to_string(), Value::Bool(true));
//!
//! assert_eq!(args.positional(0).and_then(Value::as_number), Some(10.0));
//! assert_eq!(args.get("center").and_then(Value::as_bool), Some(true));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// VALUE
// =============================================================================

/// A literal value appearing in an argument list or special-variable assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Numeric literal, already negated when written as `-n`.
    Number(f64),
    /// `true` or `false`.
    Bool(bool),
    /// String literal contents (backslashes kept verbatim).
    String(String),
    /// Bracketed list of values, possibly nested.
    Vector(Vec<Value>),
}

impl Value {
    /// Returns the number if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string contents if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a `Vector`.
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Self::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the elements as numbers if this is a vector of numbers only.
    ///
    /// ```rust
    /// use scad_ast::Value;
    ///
    /// let v = Value::Vector(vec![Value::Number(1.0), Value::Number(2.0)]);
    /// assert_eq!(v.as_numbers(), Some(vec![1.0, 2.0]));
    /// assert_eq!(Value::Number(1.0).as_numbers(), None);
    /// ```
    pub fn as_numbers(&self) -> Option<Vec<f64>> {
        self.as_vector()?.iter().map(Value::as_number).collect()
    }

    /// Human-readable name of the value form, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::String(_) => "string",
            Self::Vector(_) => "vector",
        }
    }
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Generic argument record built by the parser for every call.
///
/// Named arguments are kept in a sorted map so iteration order never depends
/// on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arguments {
    /// Positional arguments in source order.
    pub positional: Vec<Value>,
    /// Named arguments keyed by name (including `$fn`-style names).
    pub named: BTreeMap<String, Value>,
}

impl Arguments {
    /// Returns the positional argument at `index`.
    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Returns the named argument `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Returns true when no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}
