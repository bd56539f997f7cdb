//! Byte pattern tables for the path, query and fragment components.
//!
//! Alphanumerics are allowed in every table. The percent character `'%'`
//! is allowed in none.

/// A table specifying the ASCII characters allowed unencoded in a string.
#[derive(Clone, Copy, Debug)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, b'%' | 128..),
                "cannot allow non-ASCII byte or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the characters allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the characters allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the given unencoded character is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        let x = ch as u32;
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            return false;
        };
        table & 1u64.wrapping_shl(x) != 0
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `mark = "!" / "*" / "'" / "(" / ")"`, left alone by component encoders.
pub const MARK: Table = new(b"!*'()");

/// Characters allowed unencoded in a path.
///
/// `'%'` is left out so that a decoded `'%'` is written back as `"%25"`
/// and reparsing yields the same path.
///
/// `unreserved / mark / "$" / "&" / "+" / "," / "/" / ":" / ";" / "=" / "@" / "[" / "]"`
pub const PATH: Table = UNRESERVED.or(MARK).or(new(b"$&+,/:;=@[]"));

/// Characters allowed unencoded in a query.
///
/// `` PATH / "?" / "\" / "^" / "`" / "{" / "|" / "}" ``
pub const QUERY: Table = PATH.or(new(b"?\\^`{|}"));

/// Characters allowed unencoded in a fragment.
///
/// `PATH / "#" / "?" / "\" / "^" / "{" / "|" / "}"`
pub const FRAGMENT: Table = PATH.or(new(b"#?\\^{|}"));
