use crate::value::Value;

/// The three keyword literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedLiteralValue {
    Null,
    True,
    False,
}

impl ExpectedLiteralValue {
    /// Picks the literal that starts with `first`, if any.
    pub(crate) fn from_first(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Self::Null),
            b't' => Some(Self::True),
            b'f' => Some(Self::False),
            _ => None,
        }
    }

    pub(crate) fn spelling(self) -> &'static [u8] {
        match self {
            Self::Null => b"null",
            Self::True => b"true",
            Self::False => b"false",
        }
    }

    /// Number of leading bytes of `input` that spell this literal, or `None`
    /// on the first mismatch.
    pub(crate) fn matched_len(self, input: &[u8]) -> Option<usize> {
        let spelling = self.spelling();
        input.starts_with(spelling).then_some(spelling.len())
    }

    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::True,
            Self::False => Value::False,
        }
    }
}
