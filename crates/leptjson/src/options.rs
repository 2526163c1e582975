/// Configuration options for [`Parser`](crate::Parser).
///
/// # Examples
///
/// ```rust
/// use leptjson::{Parser, ParserOptions};
///
/// let parser = Parser::new(ParserOptions {
///     initial_stack_capacity: 16,
/// });
/// assert!(parser.parse(r#""a string longer than sixteen bytes""#).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Capacity, in bytes, allocated for the scratch stack the first time a
    /// string needs it. The stack grows by half its size whenever it runs
    /// out of room.
    ///
    /// A value of `0` is treated as `1`.
    ///
    /// # Default
    ///
    /// `256`
    pub initial_stack_capacity: usize,
}

impl ParserOptions {
    pub(crate) const DEFAULT_STACK_CAPACITY: usize = 256;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            initial_stack_capacity: Self::DEFAULT_STACK_CAPACITY,
        }
    }
}
