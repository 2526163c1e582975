//! JSON value types.
//!
//! This module defines the [`Value`] enum, which holds exactly one parsed JSON
//! scalar, and the accessors used to inspect or replace it.

use bstr::{BString, ByteSlice};

/// A parsed JSON scalar.
///
/// String payloads are kept as raw bytes: escapes are decoded to UTF-8, but
/// any other byte of the input is copied through unchanged.
///
/// # Examples
///
/// ```
/// use leptjson::{Value, ValueKind};
///
/// let mut v = Value::default();
/// assert!(v.is_null());
///
/// v.set_string(b"hello");
/// assert_eq!(v.kind(), ValueKind::String);
/// assert_eq!(v.as_str(), Some("hello"));
///
/// v.release();
/// assert!(v.is_null());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// A finite number.
    Number(f64),
    /// A decoded string.
    String(BString),
}

/// The type tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::False`]
    False,
    /// [`Value::True`]
    True,
    /// [`Value::Number`]
    Number,
    /// [`Value::String`]
    String,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::String(BString::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(BString::from(v))
    }
}

impl Value {
    /// Returns the type tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::False => ValueKind::False,
            Self::True => ValueKind::True,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns the boolean held by this value, if any.
    ///
    /// ```
    /// use leptjson::Value;
    ///
    /// assert_eq!(Value::True.as_bool(), Some(true));
    /// assert_eq!(Value::Null.as_bool(), None);
    /// ```
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// Replaces this value with `true` or `false`.
    pub fn set_bool(&mut self, b: bool) {
        *self = Self::from(b);
    }

    /// Returns the number held by this value, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Replaces this value with a number.
    pub fn set_number(&mut self, n: f64) {
        *self = Self::Number(n);
    }

    /// Returns the string payload as raw bytes, if this is a string.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(s) => Some(s.as_slice()),
            _ => None,
        }
    }

    /// Returns the string payload if this is a string holding valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => s.to_str().ok(),
            _ => None,
        }
    }

    /// Length in bytes of the string payload, if this is a string.
    #[must_use]
    pub fn string_len(&self) -> Option<usize> {
        self.as_bytes().map(<[u8]>::len)
    }

    /// Replaces this value with an owned copy of `bytes`.
    ///
    /// Any payload held before is dropped first.
    pub fn set_string(&mut self, bytes: &[u8]) {
        self.release();
        *self = Self::String(BString::from(bytes));
    }

    /// Drops any owned payload and resets the value to [`Null`].
    ///
    /// Calling this on a value that is already [`Null`] does nothing.
    ///
    /// [`Null`]: Value::Null
    pub fn release(&mut self) {
        *self = Self::Null;
    }

    /// Alias for [`release`](Self::release).
    pub fn set_null(&mut self) {
        self.release();
    }
}

impl core::str::FromStr for Value {
    type Err = crate::ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
