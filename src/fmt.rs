use crate::{
    error::{ParseError, ParseErrorKind},
    ParsedUriPath,
};
use core::fmt;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::UnexpectedChar => "unexpected line terminator",
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet",
            ParseErrorKind::InvalidUtf8 => "percent-encoded octets are not valid UTF-8",
        };
        write!(f, "{msg} at index {} of {:?}", self.index, self.input)
    }
}

impl fmt::Display for ParsedUriPath {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
