//! Decoded argument values.
//!
//! Containers are stored in `Arc<[_]>`: once built they cannot be mutated, and
//! cloning a value shares it instead of copying.

use std::ops::Deref;
use std::sync::Arc;

/// A single decoded argument (or an element nested inside one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
    /// Pointer value as printed, `0x` prefix included. Never converted to a number.
    Address(String),
    Null,
    /// `NAME|NAME|...` exactly as printed.
    FlagExpr(String),
    List(Arc<[Value]>),
    Object(Arc<[Property]>),
}

/// One `key=value...` entry of a struct-like argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    /// Every value printed after `key=`, in order. May be empty.
    pub values: Arc<[Value]>,
}

impl Property {
    pub fn new(key: impl Into<String>, values: Vec<Value>) -> Self {
        Property { key: key.into(), values: values.into() }
    }

    /// The single value of the property, if it has exactly one.
    pub fn value(&self) -> Option<&Value> {
        match &*self.values {
            [v] => Some(v),
            _ => None,
        }
    }
}

impl Value {
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items.into())
    }

    pub fn object(properties: Vec<Property>) -> Self {
        Value::Object(properties.into())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<&str> {
        match self {
            Value::Address(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flags(&self) -> Option<&str> {
        match self {
            Value::FlagExpr(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Property]> {
        match self {
            Value::Object(p) => Some(p),
            _ => None,
        }
    }

    /// Individual names of a flag expression. The stored token is left as is.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.as_flags()
            .unwrap_or("")
            .split('|')
            .filter(|name| !name.is_empty())
    }

    /// First property with the given key, for object values.
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.as_object()?.iter().find(|p| p.key == key)
    }
}

/// Decoded arguments of one call, in order. Never empty once produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList(Arc<[Value]>);

impl ArgumentList {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        ArgumentList(values.into())
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl Deref for ArgumentList {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[Value]> for ArgumentList {
    fn eq(&self, other: &[Value]) -> bool {
        *self.0 == *other
    }
}

impl PartialEq<Vec<Value>> for ArgumentList {
    fn eq(&self, other: &Vec<Value>) -> bool {
        *self.0 == **other
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Integer(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
