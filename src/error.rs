use alloc::string::String;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseErrorKind {
    /// Line terminator outside of the authority.
    ///
    /// The error index points to the first byte of the character.
    UnexpectedChar,
    /// Percent character not followed by two hexadecimal digits.
    ///
    /// The error index points to the percent character "%".
    InvalidOctet,
    /// Percent-encoded octets that do not form valid UTF-8.
    ///
    /// The error index points to the percent character "%" of the
    /// first octet of the invalid sequence.
    InvalidUtf8,
}

/// An error occurred when parsing a URI path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
    pub(crate) input: String,
}

impl ParseError {
    pub(crate) fn new(index: usize, kind: ParseErrorKind) -> Self {
        Self {
            index,
            kind,
            input: String::new(),
        }
    }

    /// Shifts the error index by `offset` and attaches the whole input.
    pub(crate) fn within(mut self, offset: usize, input: &str) -> Self {
        self.index += offset;
        self.input = input.into();
        self
    }

    /// Returns the index at which the error occurred.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Recovers the input that failed to parse.
    #[must_use]
    pub fn into_input(self) -> String {
        self.input
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for ParseError {}
