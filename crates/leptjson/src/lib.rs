//! A small JSON parser for scalar documents.
//!
//! `leptjson` turns a JSON text holding a single scalar (`null`, `true`,
//! `false`, a number or a string) into a [`Value`], and reports precisely why
//! an input was rejected through [`ErrorKind`].
//!
//! ```rust
//! use leptjson::{ErrorKind, Value};
//!
//! let v = leptjson::parse("  123.5e2  ").unwrap();
//! assert_eq!(v, Value::Number(12350.0));
//!
//! let s = leptjson::parse(r#""café""#).unwrap();
//! assert_eq!(s.as_str(), Some("café"));
//!
//! let err = leptjson::parse("123 456").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::RootNotSingular);
//! ```
//!
//! Each parse call owns its scratch buffer, so a [`Parser`] can be shared
//! freely between threads.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParserError};
pub use options::ParserOptions;
pub use parser::Parser;
pub use value::{Value, ValueKind};

/// Parses `input` with the default [`ParserOptions`].
///
/// # Errors
///
/// Returns a [`ParserError`] describing the first violation found in `input`.
pub fn parse(input: impl AsRef<[u8]>) -> Result<Value, ParserError> {
    Parser::default().parse(input)
}
