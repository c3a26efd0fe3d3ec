// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::ParseError;

/// The discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

/// A parsed JSON value.
///
/// Strings are kept as owned bytes with an explicit length, so embedded NUL
/// bytes are ordinary content. `Array` and `Object` exist for completeness but
/// are never produced by the parser.
///
/// Typed getters (`get_number`, `get_string`, `get_boolean`) require the
/// matching discriminant and panic otherwise; check [`Value::value_type`] first
/// or use the `as_*` views, which return `None` instead.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    False,
    True,
    Number(f64),
    String(Vec<u8>),
    Array,
    Object,
}

#[cold]
#[track_caller]
fn type_mismatch(expected: &str, actual: ValueType) -> ! {
    panic!("expected {expected} value, found {actual:?}")
}

impl Value {
    /// A fresh `Null` value.
    pub const fn new() -> Self {
        Value::Null
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array => ValueType::Array,
            Value::Object => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Release any owned payload and become `Null`.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Same as [`Value::set_null`]; calling it on a `Null` value does nothing.
    pub fn release(&mut self) {
        self.set_null();
    }

    /// # Panics
    /// If the value is neither `True` nor `False`.
    #[track_caller]
    pub fn get_boolean(&self) -> bool {
        match self {
            Value::True => true,
            Value::False => false,
            other => type_mismatch("boolean", other.value_type()),
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::from(b);
    }

    /// # Panics
    /// If the value is not a `Number`.
    #[track_caller]
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => type_mismatch("Number", other.value_type()),
        }
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// The decoded string bytes.
    ///
    /// # Panics
    /// If the value is not a `String`.
    #[track_caller]
    pub fn get_string(&self) -> &[u8] {
        match self {
            Value::String(bytes) => bytes,
            other => type_mismatch("String", other.value_type()),
        }
    }

    /// Length in bytes of the decoded string.
    ///
    /// # Panics
    /// If the value is not a `String`.
    #[track_caller]
    pub fn get_string_len(&self) -> usize {
        self.get_string().len()
    }

    /// The decoded string as `&str`.
    ///
    /// Content parsed from a `&str` is always valid UTF-8; content from
    /// [`parse_slice`](crate::parse_slice) or [`Value::set_string`] may not be.
    ///
    /// # Panics
    /// If the value is not a `String`.
    #[track_caller]
    pub fn get_str(&self) -> Result<&str, ParseError> {
        Ok(core::str::from_utf8(self.get_string())?)
    }

    /// Replace the current content with a copy of `bytes`.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = Value::String(bytes.to_vec());
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::String(bytes.to_vec())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from(s.as_bytes())
    }
}
