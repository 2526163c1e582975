//! Number literals.
//!
//! A number is validated against the JSON grammar
//! `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?` before anything is
//! converted, so `str::parse` only ever sees well-formed text.

use crate::error::ErrorKind;

#[inline]
fn skip_digits(input: &[u8], mut p: usize) -> usize {
    while input.get(p).is_some_and(u8::is_ascii_digit) {
        p += 1;
    }
    p
}

#[inline]
fn at(input: &[u8], p: usize) -> Option<u8> {
    input.get(p).copied()
}

/// Returns the length of the number literal at the start of `input`.
pub(crate) fn lex_number(input: &[u8]) -> Result<usize, ErrorKind> {
    let mut p = 0;
    if at(input, p) == Some(b'-') {
        p += 1;
    }

    match at(input, p) {
        Some(b'0') => {
            p += 1;
            // leading zeros
            if at(input, p).is_some_and(|b| b.is_ascii_digit()) {
                return Err(ErrorKind::InvalidValue);
            }
        }
        Some(b'1'..=b'9') => p = skip_digits(input, p + 1),
        _ => return Err(ErrorKind::InvalidValue),
    }

    if at(input, p) == Some(b'.') {
        p += 1;
        if !at(input, p).is_some_and(|b| b.is_ascii_digit()) {
            return Err(ErrorKind::InvalidValue);
        }
        p = skip_digits(input, p + 1);
    }

    if matches!(at(input, p), Some(b'e' | b'E')) {
        p += 1;
        if matches!(at(input, p), Some(b'+' | b'-')) {
            p += 1;
        }
        if !at(input, p).is_some_and(|b| b.is_ascii_digit()) {
            return Err(ErrorKind::InvalidValue);
        }
        p = skip_digits(input, p + 1);
    }

    Ok(p)
}

/// Lexes and converts the number at the start of `input`.
///
/// Returns the value and the number of bytes it spans.
pub(crate) fn parse_number(input: &[u8]) -> Result<(f64, usize), ErrorKind> {
    let len = lex_number(input)?;
    // The lexer only accepts ASCII, so this cannot fail.
    let text = core::str::from_utf8(&input[..len]).map_err(|_| ErrorKind::InvalidValue)?;
    let n: f64 = text.parse().map_err(|_| ErrorKind::InvalidValue)?;
    if n.is_infinite() {
        return Err(ErrorKind::NumberTooBig);
    }
    Ok((n, len))
}
