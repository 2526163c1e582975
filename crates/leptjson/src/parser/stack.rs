//! Growable scratch stack used to assemble decoded string bytes.
//!
//! The stack keeps a logical `top` over an owned byte region whose `size`
//! grows by half of itself whenever a push would overflow it. Regions handed
//! out by [`ScratchStack::push`] and [`ScratchStack::pop`] borrow the stack, so
//! they cannot outlive the next push (which may move the storage).

use alloc::{collections::TryReserveError, vec::Vec};

#[derive(Debug)]
pub(crate) struct ScratchStack {
    /// Backing storage; `buf.len()` is the current `size`.
    buf: Vec<u8>,
    top: usize,
    initial_size: usize,
}

impl ScratchStack {
    pub(crate) fn new(initial_size: usize) -> Self {
        Self {
            buf: Vec::new(),
            top: 0,
            initial_size: initial_size.max(1),
        }
    }

    /// Number of bytes currently on the stack.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.top
    }

    /// Current capacity in bytes.
    #[cfg(test)]
    pub(crate) fn size(&self) -> usize {
        self.buf.len()
    }

    /// Makes sure `additional` more bytes fit above `top`.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let needed = self.top + additional;
        if needed <= self.buf.len() {
            return Ok(());
        }

        let old = self.buf.len();
        let mut size = if old == 0 { self.initial_size } else { old };
        while size < needed {
            size += (size >> 1).max(1);
        }

        self.buf.try_reserve_exact(size - old)?;
        self.buf.resize(size, 0);
        log::trace!("scratch stack grown from {old} to {size} bytes");
        Ok(())
    }

    /// Appends `n` bytes and returns the region to write them into.
    pub(crate) fn push(&mut self, n: usize) -> Result<&mut [u8], TryReserveError> {
        debug_assert!(n > 0, "pushing an empty region");
        self.reserve(n)?;
        let start = self.top;
        self.top += n;
        Ok(&mut self.buf[start..self.top])
    }

    #[inline]
    pub(crate) fn push_byte(&mut self, byte: u8) -> Result<(), TryReserveError> {
        self.push(1)?[0] = byte;
        Ok(())
    }

    /// Takes the last `n` bytes off the stack and returns them.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes are on the stack.
    pub(crate) fn pop(&mut self, n: usize) -> &[u8] {
        assert!(self.top >= n, "popping {n} bytes from a stack of {}", self.top);
        self.top -= n;
        &self.buf[self.top..self.top + n]
    }

    /// Drops everything above `top`.
    #[inline]
    pub(crate) fn truncate(&mut self, top: usize) {
        debug_assert!(top <= self.top);
        self.top = self.top.min(top);
    }
}
