//! Helpers for `\uXXXX` escapes.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit, one input byte at a
//! time. After the fourth digit it hands the unit back and resets itself.
//!
//! Pairing surrogates is left to the string decoder; [`encode_utf8`] turns the
//! resulting code point into bytes on the scratch stack.

use alloc::collections::TryReserveError;

use super::stack::ScratchStack;
use crate::error::ErrorKind;

pub(crate) const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
pub(crate) const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    pub(crate) fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(b: u8) -> Option<u16> {
        match b {
            b'0'..=b'9' => Some(u16::from(b - b'0')),
            b'a'..=b'f' => Some(u16::from(b - b'a') + 10),
            b'A'..=b'F' => Some(u16::from(b - b'A') + 10),
            _ => None,
        }
    }

    /// Feeds one input byte.
    ///
    /// Returns `Ok(None)` while fewer than four digits have been seen and
    /// `Ok(Some(unit))` on the fourth, after which the buffer is reset.
    pub(crate) fn feed(&mut self, b: u8) -> Result<Option<u16>, ErrorKind> {
        let d = Self::hex_val(b).ok_or(ErrorKind::InvalidUnicodeHex)?;
        debug_assert!(self.len < 4);

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.reset();
        Ok(Some(unit))
    }
}

/// Combines a high and a low surrogate into the code point they encode.
#[inline]
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
    debug_assert!(HIGH_SURROGATES.contains(&high) && LOW_SURROGATES.contains(&low));
    0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
}

/// Pushes the UTF-8 encoding of `cp` onto `stack`, one byte at a time.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_utf8(stack: &mut ScratchStack, cp: u32) -> Result<(), TryReserveError> {
    debug_assert!(cp <= 0x10FFFF);
    match cp {
        0..=0x7F => stack.push_byte(cp as u8),
        0x80..=0x7FF => {
            stack.push_byte(0xC0 | (cp >> 6) as u8)?;
            stack.push_byte(0x80 | (cp & 0x3F) as u8)
        }
        0x800..=0xFFFF => {
            stack.push_byte(0xE0 | (cp >> 12) as u8)?;
            stack.push_byte(0x80 | ((cp >> 6) & 0x3F) as u8)?;
            stack.push_byte(0x80 | (cp & 0x3F) as u8)
        }
        _ => {
            stack.push_byte(0xF0 | (cp >> 18) as u8)?;
            stack.push_byte(0x80 | ((cp >> 12) & 0x3F) as u8)?;
            stack.push_byte(0x80 | ((cp >> 6) & 0x3F) as u8)?;
            stack.push_byte(0x80 | (cp & 0x3F) as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn feed_all(buf: &mut UnicodeEscapeBuffer, digits: &[u8]) -> Result<Option<u16>, ErrorKind> {
        let mut last = None;
        for &b in digits {
            last = buf.feed(b)?;
        }
        Ok(last)
    }

    fn encoded(cp: u32) -> Vec<u8> {
        let mut stack = ScratchStack::new(4);
        encode_utf8(&mut stack, cp).unwrap();
        let n = stack.len();
        stack.pop(n).to_vec()
    }

    #[test]
    fn basic_decoding() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(buf.feed(b'0').unwrap(), None);
        assert_eq!(buf.feed(b'0').unwrap(), None);
        assert_eq!(buf.feed(b'4').unwrap(), None);
        assert_eq!(buf.feed(b'1').unwrap(), Some(0x41));
    }

    #[test]
    fn mixed_case_hex() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(feed_all(&mut buf, b"AbCd"), Ok(Some(0xABCD)));
    }

    #[test]
    fn surrogates_are_returned_as_units() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(feed_all(&mut buf, b"D834"), Ok(Some(0xD834)));
    }

    #[test]
    fn resets_after_fourth_digit() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(feed_all(&mut buf, b"ffff"), Ok(Some(0xFFFF)));
        assert_eq!(feed_all(&mut buf, b"0020"), Ok(Some(0x20)));
    }

    #[test]
    fn reset_clears_buffer() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert!(buf.feed(b'F').unwrap().is_none());
        buf.reset();
        assert_eq!(feed_all(&mut buf, b"0001"), Ok(Some(1)));
    }

    #[test]
    fn invalid_hex_error() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert_eq!(buf.feed(b'G'), Err(ErrorKind::InvalidUnicodeHex));
        assert_eq!(buf.feed(b'"'), Err(ErrorKind::InvalidUnicodeHex));
    }

    #[test]
    fn combines_pair() {
        assert_eq!(combine_surrogates(0xD834, 0xDD1E), 0x1D11E);
        assert_eq!(combine_surrogates(0xD800, 0xDC00), 0x10000);
        assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), 0x10FFFF);
    }

    #[test]
    fn encodes_each_width() {
        assert_eq!(encoded(0x24), b"$");
        assert_eq!(encoded(0xA2), [0xC2, 0xA2]);
        assert_eq!(encoded(0xE9), "é".as_bytes());
        assert_eq!(encoded(0x20AC), [0xE2, 0x82, 0xAC]);
        assert_eq!(encoded(0x1D11E), [0xF0, 0x9D, 0x84, 0x9E]);
    }

    #[test]
    fn encodes_range_boundaries_like_core() {
        for cp in [0, 0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x10000, 0x10FFFF] {
            let ch = char::from_u32(cp).unwrap();
            let mut tmp = [0u8; 4];
            assert_eq!(encoded(cp), ch.encode_utf8(&mut tmp).as_bytes());
        }
    }
}
