//! String literals.
//!
//! Decoding runs a small state machine over the bytes following the opening
//! quote. Decoded bytes go onto the context's scratch stack; when the closing
//! quote is reached they are popped off again and copied into the output
//! [`Value`]. Every failure truncates the stack back to where the string
//! started.

use super::{
    Context,
    escape_buffer::{
        HIGH_SURROGATES, LOW_SURROGATES, UnicodeEscapeBuffer, combine_surrogates, encode_utf8,
    },
};
use crate::{
    error::{ErrorKind, ParserError},
    value::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    Normal,
    /// After a backslash.
    Escape,
    /// Reading the four digits of a `\u` escape. `high` holds the first half
    /// of a surrogate pair when this is the second escape.
    Unicode { high: Option<u16> },
    /// A high surrogate was decoded; expecting the `\` of its partner.
    LowSurrogateBackslash { high: u16 },
    /// Expecting the `u` of the low surrogate escape.
    LowSurrogateU { high: u16 },
}

/// Maps the character after a backslash to the byte it stands for.
#[inline]
fn unescape(b: u8) -> Option<u8> {
    Some(match b {
        b'"' => b'"',
        b'\\' => b'\\',
        b'/' => b'/',
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        _ => return None,
    })
}

type Failure = (ErrorKind, usize);

impl Context<'_> {
    /// Parses the string starting at the cursor (which must be on the opening
    /// quote) into `v`.
    pub(super) fn parse_string(&mut self, v: &mut Value) -> Result<(), ParserError> {
        let head = self.stack.len();
        match self.decode_string() {
            Ok(()) => {
                let len = self.stack.len() - head;
                v.set_string(self.stack.pop(len));
                Ok(())
            }
            Err((kind, offset)) => {
                self.stack.truncate(head);
                Err(self.error_at(kind, offset))
            }
        }
    }

    fn put(&mut self, b: u8, at: usize) -> Result<(), Failure> {
        self.stack.push_byte(b).map_err(|_| (ErrorKind::OutOfMemory, at))
    }

    fn put_code_point(&mut self, cp: u32, at: usize) -> Result<(), Failure> {
        encode_utf8(&mut self.stack, cp).map_err(|_| (ErrorKind::OutOfMemory, at))
    }

    fn decode_string(&mut self) -> Result<(), Failure> {
        use StringState::{Escape, LowSurrogateBackslash, LowSurrogateU, Normal, Unicode};

        debug_assert_eq!(self.peek(), Some(b'"'));
        self.pos += 1;

        let mut state = Normal;
        let mut hex = UnicodeEscapeBuffer::new();
        loop {
            let at = self.pos;
            let next = self.bump();
            state = match (state, next) {
                (Normal, None) => return Err((ErrorKind::MissQuotationMark, at)),
                (Normal, Some(b'"')) => return Ok(()),
                (Normal, Some(b'\\')) => Escape,
                (Normal, Some(b)) if b < 0x20 => return Err((ErrorKind::InvalidStringChar, at)),
                (Normal, Some(b)) => {
                    self.put(b, at)?;
                    Normal
                }

                (Escape, Some(b'u')) => {
                    hex.reset();
                    Unicode { high: None }
                }
                (Escape, Some(b)) => {
                    let decoded = unescape(b).ok_or((ErrorKind::InvalidStringEscape, at))?;
                    self.put(decoded, at)?;
                    Normal
                }
                (Escape, None) => return Err((ErrorKind::InvalidStringEscape, at)),

                (Unicode { high }, b) => {
                    let unit = b
                        .ok_or(ErrorKind::InvalidUnicodeHex)
                        .and_then(|b| hex.feed(b))
                        .map_err(|kind| (kind, at))?;
                    match (high, unit) {
                        (_, None) => Unicode { high },
                        (None, Some(u)) if HIGH_SURROGATES.contains(&u) => {
                            LowSurrogateBackslash { high: u }
                        }
                        (None, Some(u)) if LOW_SURROGATES.contains(&u) => {
                            return Err((ErrorKind::InvalidUnicodeSurrogate, at));
                        }
                        (None, Some(u)) => {
                            self.put_code_point(u32::from(u), at)?;
                            Normal
                        }
                        (Some(h), Some(u)) if LOW_SURROGATES.contains(&u) => {
                            self.put_code_point(combine_surrogates(h, u), at)?;
                            Normal
                        }
                        (Some(_), Some(_)) => {
                            return Err((ErrorKind::InvalidUnicodeSurrogate, at));
                        }
                    }
                }

                (LowSurrogateBackslash { high }, Some(b'\\')) => LowSurrogateU { high },
                (LowSurrogateU { high }, Some(b'u')) => {
                    hex.reset();
                    Unicode { high: Some(high) }
                }
                (LowSurrogateBackslash { .. } | LowSurrogateU { .. }, _) => {
                    return Err((ErrorKind::InvalidUnicodeSurrogate, at));
                }
            };
        }
    }
}
