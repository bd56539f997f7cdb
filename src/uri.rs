//! Splitting a URI into its five components and joining them back.

use crate::{
    error::{ParseError, ParseErrorKind},
    pct_enc::{self, encoder::*},
    path::PathStr,
};
use alloc::{borrow::Cow, string::String};

type Result<T> = core::result::Result<T, ParseError>;

/// A URI split into its components, with all but the scheme percent-decoded.
///
/// Components without any percent-encoded octet borrow from the input.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ParsedUri<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) authority: Option<Cow<'a, str>>,
    pub(crate) path: Cow<'a, str>,
    pub(crate) query: Option<Cow<'a, str>>,
    pub(crate) fragment: Option<Cow<'a, str>>,
}

/// Borrowed, decoded components to be formatted into a URI.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Components<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) authority: Option<&'a str>,
    pub(crate) path: &'a str,
    pub(crate) query: Option<&'a str>,
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> ParsedUri<'a> {
    /// Parses a URI into its components.
    ///
    /// The scheme is taken only if it consists of two or more word characters,
    /// so that a drive letter such as `C:` is kept in the path.
    pub(crate) fn parse(input: &'a str) -> Result<Self> {
        let mut reader = Reader::new(input);

        let scheme = reader.read_scheme();

        let authority = if reader.read_str("//") {
            let start = reader.pos;
            let s = reader.read_until(|x| matches!(x, b'/' | b'?' | b'#'));
            Some((start, s))
        } else {
            None
        };

        if let Some(i) = find_line_terminator(&input[reader.pos..]) {
            return Err(ParseError::new(reader.pos + i, ParseErrorKind::UnexpectedChar)
                .within(0, input));
        }

        let path_start = reader.pos;
        let path = reader.read_until(|x| matches!(x, b'?' | b'#'));

        let query = if reader.read_str("?") {
            let start = reader.pos;
            Some((start, reader.read_until(|x| x == b'#')))
        } else {
            None
        };

        let fragment = if reader.read_str("#") {
            let start = reader.pos;
            Some((start, reader.read_rest()))
        } else {
            None
        };

        let decode = |(start, s): (usize, &'a str)| {
            pct_enc::decode_at(s).map_err(|e| e.within(start, input))
        };

        Ok(ParsedUri {
            scheme,
            authority: authority.map(decode).transpose()?,
            path: decode((path_start, path))?,
            query: query.map(decode).transpose()?,
            fragment: fragment.map(decode).transpose()?,
        })
    }

    pub(crate) fn components(&self) -> Components<'_> {
        Components {
            scheme: self.scheme,
            authority: self.authority.as_deref(),
            path: &self.path,
            query: self.query.as_deref(),
            fragment: self.fragment.as_deref(),
        }
    }

    pub(crate) fn path(&self) -> &PathStr {
        PathStr::new(&self.path)
    }
}

impl Components<'_> {
    /// Formats the components into a URI, percent-encoding the path,
    /// query and fragment with their respective tables.
    ///
    /// The authority is written as is. A slash is inserted between the
    /// authority and a path that does not start with one.
    pub(crate) fn format(&self) -> String {
        let mut len = self.scheme.len() + 1 + self.path.len();
        if let Some(authority) = self.authority {
            len += authority.len() + 3;
        }
        if let Some(query) = self.query {
            len += query.len() + 1;
        }
        if let Some(fragment) = self.fragment {
            len += fragment.len() + 1;
        }

        let mut buf = String::with_capacity(len);

        if !self.scheme.is_empty() {
            buf.push_str(self.scheme);
            buf.push(':');
        }

        if let Some(authority) = self.authority {
            buf.push_str("//");
            buf.push_str(authority);
            if !self.path.is_empty() && !self.path.starts_with('/') {
                buf.push('/');
            }
        }

        pct_enc::encode_to::<Path>(self.path, &mut buf);

        if let Some(query) = self.query {
            buf.push('?');
            pct_enc::encode_to::<Query>(query, &mut buf);
        }

        if let Some(fragment) = self.fragment {
            buf.push('#');
            pct_enc::encode_to::<Fragment>(fragment, &mut buf);
        }

        buf
    }
}

/// Returns the index of the first character that ends a line.
fn find_line_terminator(s: &str) -> Option<usize> {
    s.find(|ch: char| matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}

/// Byte reader over the input.
///
/// # Invariants
///
/// `pos <= s.len()`, `pos` is non-decreasing and on the boundary of a UTF-8 code point.
struct Reader<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(s: &'a str) -> Self {
        Reader { s, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.s[self.pos..]
    }

    // All delimiters are ASCII, so the new position stays on a code point boundary.
    fn skip(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.pos <= self.s.len());
    }

    /// Skips the given string if the remaining input starts with it.
    fn read_str(&mut self, prefix: &str) -> bool {
        let matched = self.rest().starts_with(prefix);
        if matched {
            self.skip(prefix.len());
        }
        matched
    }

    fn read_until(&mut self, is_delim: impl Fn(u8) -> bool) -> &'a str {
        let rest = self.rest();
        let n = rest.bytes().position(is_delim).unwrap_or(rest.len());
        self.skip(n);
        &rest[..n]
    }

    fn read_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.skip(rest.len());
        rest
    }

    /// Reads `scheme ":"` where `scheme = 2*( ALPHA / DIGIT / "_" )`.
    ///
    /// Returns the scheme, or an empty string if none is present.
    fn read_scheme(&mut self) -> &'a str {
        let rest = self.rest();
        let n = rest
            .bytes()
            .take_while(|&x| x.is_ascii_alphanumeric() || x == b'_')
            .count();
        if n >= 2 && rest.as_bytes().get(n) == Some(&b':') {
            self.skip(n + 1);
            &rest[..n]
        } else {
            ""
        }
    }
}
