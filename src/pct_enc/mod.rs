//! Percent-encoding utilities.
//!
//! Each URI component is encoded with its own [`Table`], selected through a
//! marker type implementing [`Encoder`]:
//!
//! ```
//! use uri_path::pct_enc::{self, encoder::{Fragment, Path, Query}};
//!
//! assert_eq!(pct_enc::encode::<Path>("a b?#`"), "a%20b%3F%23%60");
//! assert_eq!(pct_enc::encode::<Query>("a b?#`"), "a%20b?%23`");
//! assert_eq!(pct_enc::encode::<Fragment>("a b?#`"), "a%20b?#%60");
//! ```

pub mod encoder;
pub mod table;

pub use table::Table;

use crate::error::{ParseError, ParseErrorKind};
use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{iter::FusedIterator, str};

/// A trait used to specify the table used for encoding a component.
pub trait Encoder: 'static {
    /// The table used for encoding.
    const TABLE: Table;
}

/// Percent-encodes a string with the table of `E`.
///
/// Characters not allowed by the table are written as the percent-encoded
/// octets of their UTF-8 representation, with uppercase hexadecimal digits.
///
/// This function allocates only when the string contains any character
/// not allowed by the table.
#[must_use]
pub fn encode<E: Encoder>(s: &str) -> Cow<'_, str> {
    if s.chars().all(|ch| E::TABLE.allows(ch)) {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len() * 2);
    encode_to::<E>(s, &mut buf);
    Cow::Owned(buf)
}

/// Percent-encodes a string with the table of `E`, appending the result
/// to a buffer.
pub fn encode_to<E: Encoder>(s: &str, buf: &mut String) {
    for chunk in Encode::new(E::TABLE, s) {
        buf.push_str(chunk.as_str());
    }
}

/// Decodes a percent-encoded string.
///
/// Every percent-encoded octet is decoded, reserved characters included.
/// This function allocates only when the string contains any `'%'`.
///
/// # Errors
///
/// Returns `Err` if a `'%'` is not followed by two hexadecimal digits,
/// or if the decoded octets are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use uri_path::{pct_enc, ParseErrorKind};
///
/// assert_eq!(pct_enc::decode("%E5%BC%A0%2F3")?, "张/3");
/// assert_eq!(pct_enc::decode("50%").unwrap_err().kind(), ParseErrorKind::InvalidOctet);
/// assert_eq!(pct_enc::decode("%FF").unwrap_err().kind(), ParseErrorKind::InvalidUtf8);
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn decode(s: &str) -> Result<Cow<'_, str>, ParseError> {
    decode_at(s).map_err(|e| e.within(0, s))
}

/// Like [`decode`], but leaves the input of the error unset so that the caller
/// can attach the whole string the component was taken from.
pub(crate) fn decode_at(s: &str) -> Result<Cow<'_, str>, ParseError> {
    let bytes = s.as_bytes();
    let Some(first) = bytes.iter().position(|&x| x == b'%') else {
        return Ok(Cow::Borrowed(s));
    };

    let mut buf = String::with_capacity(s.len());
    buf.push_str(&s[..first]);

    let mut octets = Vec::new();
    let mut i = first;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            let end = bytes[i..]
                .iter()
                .position(|&x| x == b'%')
                .map_or(bytes.len(), |n| i + n);
            buf.push_str(&s[i..end]);
            i = end;
            continue;
        }

        // An unencoded character never continues a multi-byte sequence,
        // so each run of octets has to be valid UTF-8 on its own.
        let run_start = i;
        octets.clear();
        while bytes.get(i) == Some(&b'%') {
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(&hi), Some(&lo)) if is_hexdig_pair(hi, lo) => {
                    octets.push(decode_octet(hi, lo));
                }
                _ => return Err(ParseError::new(i, ParseErrorKind::InvalidOctet)),
            }
            i += 3;
        }
        match str::from_utf8(&octets) {
            Ok(decoded) => buf.push_str(decoded),
            Err(e) => {
                return Err(ParseError::new(
                    run_start + e.valid_up_to() * 3,
                    ParseErrorKind::InvalidUtf8,
                ))
            }
        }
    }
    Ok(Cow::Owned(buf))
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

pub(crate) const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    OCTET_TABLE_LO[hi as usize] | OCTET_TABLE_LO[lo as usize] < 128
}

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// An iterator used to percent-encode a string slice.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
struct Encode<'s> {
    table: Table,
    source: &'s str,
    to_enc: &'s [u8],
}

impl<'s> Encode<'s> {
    fn new(table: Table, source: &'s str) -> Self {
        Self {
            table,
            source,
            to_enc: &[],
        }
    }
}

/// An item returned by the [`Encode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EncodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a str),
    /// A byte, percent-encoded (for example, `0x20` encoded as `"%20"`).
    PctEncoded(&'static str),
}

impl<'a> EncodedChunk<'a> {
    fn as_str(self) -> &'a str {
        match self {
            Self::Unencoded(s) | Self::PctEncoded(s) => s,
        }
    }
}

impl<'a> Iterator for Encode<'a> {
    type Item = EncodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let [x, rem @ ..] = self.to_enc {
            self.to_enc = rem;
            return Some(EncodedChunk::PctEncoded(encode_byte(*x)));
        }

        if self.source.is_empty() {
            return None;
        }

        let mut iter = self.source.char_indices();

        let first_unallowed_i = iter
            .find_map(|(i, ch)| (!self.table.allows(ch)).then_some(i))
            .unwrap_or(self.source.len());

        let next_allowed_i = iter
            .find_map(|(i, ch)| self.table.allows(ch).then_some(i))
            .unwrap_or(self.source.len());

        if first_unallowed_i == 0 {
            let (unallowed, rem) = self.source.split_at(next_allowed_i);
            self.source = rem;

            // `unallowed` holds at least one character here.
            let (x, rem) = unallowed.as_bytes().split_first()?;
            self.to_enc = rem;

            Some(EncodedChunk::PctEncoded(encode_byte(*x)))
        } else {
            let allowed = &self.source[..first_unallowed_i];
            self.to_enc = &self.source.as_bytes()[first_unallowed_i..next_allowed_i];
            self.source = &self.source[next_allowed_i..];

            Some(EncodedChunk::Unencoded(allowed))
        }
    }
}

impl FusedIterator for Encode<'_> {}
