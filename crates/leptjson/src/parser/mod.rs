//! Single-pass parser for scalar JSON documents.
//!
//! Overview
//! - [`Parser`] is a cheap, shareable handle holding [`ParserOptions`]. Every
//!   call to [`Parser::parse`] builds a fresh [`Context`] that owns its own
//!   scratch stack, so parses never interfere with each other.
//! - [`Context::parse_value`] peeks one byte and dispatches to the literal
//!   matcher, the number lexer (`numbers`) or the string decoder (`string`).
//! - The top-level driver skips whitespace around the value and rejects any
//!   trailing content.
//!
//! Invariants
//! - The input is never modified; the context only moves a cursor over it.
//! - The scratch stack is empty whenever a parse call returns, successfully
//!   or not.

mod escape_buffer;
mod literal_buffer;
mod numbers;
mod stack;
mod string;

use literal_buffer::ExpectedLiteralValue;
use stack::ScratchStack;

use crate::{
    error::{ErrorKind, ParserError},
    options::ParserOptions,
    value::Value,
};

/// Per-call parse state: the input, a cursor into it and the scratch stack.
#[derive(Debug)]
pub(crate) struct Context<'src> {
    input: &'src [u8],
    pos: usize,
    stack: ScratchStack,
}

impl<'src> Context<'src> {
    pub(crate) fn new(input: &'src [u8], initial_stack_capacity: usize) -> Self {
        Self {
            input,
            pos: 0,
            stack: ScratchStack::new(initial_stack_capacity),
        }
    }

    /// The next unread byte; `None` at end of input.
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    #[inline]
    fn rest(&self) -> &'src [u8] {
        &self.input[self.pos..]
    }

    #[cfg(test)]
    pub(crate) fn stack_len(&self) -> usize {
        self.stack.len()
    }

    fn error_at(&self, kind: ErrorKind, offset: usize) -> ParserError {
        ParserError::new(kind, self.input, offset)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn parse_literal(
        &mut self,
        v: &mut Value,
        literal: ExpectedLiteralValue,
    ) -> Result<(), ParserError> {
        let len = literal
            .matched_len(self.rest())
            .ok_or_else(|| self.error_at(ErrorKind::InvalidValue, self.pos))?;
        self.pos += len;
        *v = literal.into_value();
        Ok(())
    }

    fn parse_number(&mut self, v: &mut Value) -> Result<(), ParserError> {
        let (n, len) =
            numbers::parse_number(self.rest()).map_err(|kind| self.error_at(kind, self.pos))?;
        self.pos += len;
        v.set_number(n);
        Ok(())
    }

    /// Parses the value starting at the cursor into `v`.
    pub(crate) fn parse_value(&mut self, v: &mut Value) -> Result<(), ParserError> {
        match self.peek() {
            None => Err(self.error_at(ErrorKind::ExpectValue, self.pos)),
            Some(b'"') => self.parse_string(v),
            Some(b) => match ExpectedLiteralValue::from_first(b) {
                Some(literal) => self.parse_literal(v, literal),
                None => self.parse_number(v),
            },
        }
    }

    /// Parses a whole document: optional whitespace, one value, optional
    /// whitespace, end of input.
    pub(crate) fn parse_document(&mut self, v: &mut Value) -> Result<(), ParserError> {
        self.skip_whitespace();
        self.parse_value(v)?;
        self.skip_whitespace();
        if self.pos != self.input.len() {
            v.release();
            return Err(self.error_at(ErrorKind::RootNotSingular, self.pos));
        }
        Ok(())
    }
}

/// A JSON parser for documents holding a single scalar value.
///
/// The parser itself is stateless apart from its options; it can be reused
/// and shared across threads.
///
/// # Examples
///
/// ```rust
/// use leptjson::{ErrorKind, Parser, ParserOptions, Value};
///
/// let parser = Parser::new(ParserOptions::default());
/// assert_eq!(parser.parse("true").unwrap(), Value::True);
///
/// let mut v = Value::from("stale");
/// let err = parser.parse_into(&mut v, r#""é"#).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissQuotationMark);
/// assert!(v.is_null());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was created with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `input` into a new [`Value`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParserError`] describing the first violation found.
    pub fn parse(&self, input: impl AsRef<[u8]>) -> Result<Value, ParserError> {
        let mut v = Value::Null;
        self.parse_into(&mut v, input)?;
        Ok(v)
    }

    /// Parses `input` into `value`.
    ///
    /// `value` is released first. On success it holds the parsed scalar; on
    /// failure it is left as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParserError`] describing the first violation found.
    pub fn parse_into(
        &self,
        value: &mut Value,
        input: impl AsRef<[u8]>,
    ) -> Result<(), ParserError> {
        value.release();
        let mut ctx = Context::new(input.as_ref(), self.options.initial_stack_capacity);
        let result = ctx.parse_document(value);
        debug_assert_eq!(ctx.stack.len(), 0, "scratch stack not empty after parse");
        if let Err(err) = &result {
            value.release();
            log::debug!("parse failed: {} at byte {}", err.kind(), err.offset());
        }
        result
    }
}
