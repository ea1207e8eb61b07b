//! Runtime type tags and values.
//!
//! This module defines the closed set of runtime types in the language:
//!
//! - `Type` - the tag attached to every value, compared by kind only
//! - `Value` - a dynamically-typed scalar which always knows its own tag
//!
//! There is no subtyping and no implicit coercion between tags.

use std::fmt::Display;

/// Represents the runtime type tag of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Unit,
    Integer,
    FloatingPoint,
    String,
    Boolean,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Type::Unit => "Unit",
            Type::Integer => "Integer",
            Type::FloatingPoint => "FloatingPoint",
            Type::String => "String",
            Type::Boolean => "Boolean",
        };
        write!(f, "{}", name)
    }
}

/// A dynamically-typed scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Unit,
    Integer(i64),
    FloatingPoint(f64),
    String(String),
    Boolean(bool),
}

impl Value {
    /// Construct a string value.
    pub fn string<A: AsRef<str>>(s: A) -> Value {
        Value::String(s.as_ref().to_owned())
    }

    /// Returns the type tag of the value.
    pub fn ty(&self) -> Type {
        match self {
            Value::Unit => Type::Unit,
            Value::Integer(_) => Type::Integer,
            Value::FloatingPoint(_) => Type::FloatingPoint,
            Value::String(_) => Type::String,
            Value::Boolean(_) => Type::Boolean,
        }
    }

    /// Returns whether the value equals zero.
    ///
    /// `-0.0` counts as zero and `false` is the zero of Boolean. Strings
    /// and Unit are never zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Integer(i) => *i == 0,
            Value::FloatingPoint(r) => *r == 0.0,
            Value::Boolean(b) => !b,
            Value::String(_) | Value::Unit => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Unit => write!(f, "Unit"),
            Value::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part, so `2.0` doesn't print as `2`
            Value::FloatingPoint(r) => write!(f, "{:?}", r),
            Value::String(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::FloatingPoint(r)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
