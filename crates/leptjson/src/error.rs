use thiserror::Error;

/// A parse failure, located in the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParserError {
    pub(crate) kind: ErrorKind,
    pub(crate) offset: usize,
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure, counted in bytes.
    pub column: usize,
}

impl ParserError {
    pub(crate) fn new(kind: ErrorKind, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let before = &input[..offset];
        let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let column = 1 + before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(offset, |nl| offset - nl - 1);
        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    /// The reason the input was rejected.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input where the failure was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Why an input was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is empty or holds only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// The input starts with something that is neither a literal, a number
    /// nor a string, or a literal or number is malformed.
    #[error("invalid value")]
    InvalidValue,
    /// A valid value is followed by something other than whitespace.
    #[error("root is not singular")]
    RootNotSingular,
    /// A well-formed number does not fit in an `f64`.
    #[error("number too big")]
    NumberTooBig,
    /// A string is not closed before the end of the input.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A backslash is followed by a character that is not a valid escape.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// A string contains an unescaped control character.
    #[error("invalid string char")]
    InvalidStringChar,
    /// A `\u` escape is not followed by four hexadecimal digits.
    #[error("invalid unicode hex")]
    InvalidUnicodeHex,
    /// A `\u` escape encodes an unpaired or misordered surrogate.
    #[error("invalid unicode surrogate")]
    InvalidUnicodeSurrogate,
    /// The scratch buffer could not grow.
    #[error("out of memory")]
    OutOfMemory,
}
