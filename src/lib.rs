#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Path operations over URI strings.
//!
//! This crate treats a URI as a generalized filesystem path. A URI is split
//! into scheme, authority, path, query and fragment, and its path further
//! into root, directory, base name and extension. On top of this come the
//! familiar path operations: [`join`], [`normalize`], [`resolve`],
//! [`relative`], [`dirname`], [`basename`] and [`extname`].
//!
//! Plain paths are URIs too, so the same functions serve `/usr/lib`,
//! `C:/Windows`, `file:///C:/Windows` and `http://example.com/dir/`:
//!
//! ```
//! use uri_path::{join, relative, resolve};
//!
//! assert_eq!(join(["d:/foo", "../../bar"])?, "d:/bar");
//! assert_eq!(resolve(["http://example.com/dir", "../file"])?, "http://example.com/file");
//! assert_eq!(relative("/dir/hoge/foo/bar/file", "/dir/hoge/baz/qux/file")?, "../../../baz/qux/file");
//! # Ok::<_, uri_path::ParseError>(())
//! ```
//!
//! # Roots
//!
//! The root of a path is `"/"` or a drive letter followed by `":/"`, such as
//! `"C:/"`. A drive root may follow one extra slash, as in `file:///C:/`.
//! Normalization never climbs above a root, and [`relative`] never crosses
//! one: paths under different roots, schemes or authorities have no relative
//! path between them.
//!
//! # Percent-encoding
//!
//! All components but the scheme are percent-decoded when parsed, and the
//! path, query and fragment are percent-encoded again when formatted, each
//! with its own [table](pct_enc::table). The authority is written as is.
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support, which includes `impl-error`.
//!   The crate is `no_std` and depends on `alloc` otherwise.
//!
//! - `impl-error`: Implements [`Error`] for [`ParseError`].
//!
//! - `serde`: Implements `Serialize` and `Deserialize` for [`ParsedUriPath`],
//!   which is (de)serialized as a formatted URI string.
//!
//! [`Error`]: core::error::Error

extern crate alloc;

mod error;
mod fmt;
mod normalize;
mod parsed;
mod path;
pub mod pct_enc;
mod resolve;
mod uri;

pub use error::{ParseError, ParseErrorKind};
pub use normalize::{join, normalize};
pub use parsed::ParsedUriPath;
pub use path::PathStr;
pub use resolve::{relative, resolve};

#[cfg(feature = "impl-error")]
use core::error::Error;

use alloc::string::String;
use uri::ParsedUri;

/// Parses a URI and its path.
///
/// This is an alias of [`ParsedUriPath::parse`].
///
/// # Errors
///
/// Returns `Err` if the URI contains a line terminator (`'\n'`, `'\r'`,
/// U+2028 or U+2029) outside of the authority, a `'%'` not followed by two
/// hexadecimal digits, or percent-encoded octets that are not valid UTF-8.
///
/// # Examples
///
/// ```
/// let parsed = uri_path::parse("uri://user@example.com:123/one/two.three?q=a%20b#body")?;
/// assert_eq!(parsed.scheme, "uri");
/// assert_eq!(parsed.authority.as_deref(), Some("user@example.com:123"));
/// assert_eq!(parsed.path, "/one/two.three");
/// assert_eq!(parsed.query.as_deref(), Some("q=a b"));
/// assert_eq!(parsed.fragment.as_deref(), Some("body"));
/// assert_eq!(parsed.dir, "/one");
/// assert_eq!(parsed.ext, ".three");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn parse(uri: &str) -> Result<ParsedUriPath, ParseError> {
    ParsedUriPath::parse(uri)
}

/// Formats a (possibly partial) [`ParsedUriPath`] into a URI.
///
/// This is an alias of [`ParsedUriPath::format`].
#[must_use]
pub fn format(parsed: &ParsedUriPath) -> String {
    parsed.format()
}

/// Returns the last segment of the path of a URI.
///
/// If `ext` is given and equals the extension of the segment, the segment
/// is returned without it. If `ext` equals the whole segment of a path
/// without directory, an empty string is returned.
///
/// # Errors
///
/// Returns `Err` if the URI fails to [parse].
///
/// # Examples
///
/// ```
/// use uri_path::basename;
///
/// assert_eq!(basename("http://example.com/dir/file.ext?q", None)?, "file.ext");
/// assert_eq!(basename("/dir/file.ext", Some(".ext"))?, "file");
/// assert_eq!(basename(".ext", Some(".ext"))?, "");
/// assert_eq!(basename("file:///", None)?, "");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn basename(uri: &str, ext: Option<&str>) -> Result<String, ParseError> {
    let parsed = ParsedUri::parse(uri)?;
    let parts = parsed.path().parts();
    let base = match ext.filter(|ext| !ext.is_empty()) {
        Some(ext) if parts.ext == ext => parts.name,
        Some(ext) if parts.dir.is_empty() && parts.base == ext => "",
        _ => parts.base,
    };
    Ok(base.into())
}

/// Returns the URI with the last segment of its path removed.
///
/// Query and fragment are dropped. A path left empty falls back to its root,
/// or to `"."` when the URI has neither root, scheme nor authority.
///
/// # Errors
///
/// Returns `Err` if the URI fails to [parse].
///
/// # Examples
///
/// ```
/// use uri_path::dirname;
///
/// assert_eq!(dirname("/foo/bar/baz/")?, "/foo/bar");
/// assert_eq!(dirname("http://example.com/dir/file?q")?, "http://example.com/dir");
/// assert_eq!(dirname("C:/")?, "C:/");
/// assert_eq!(dirname("C:/file")?, "C:");
/// assert_eq!(dirname("file.ext")?, ".");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn dirname(uri: &str) -> Result<String, ParseError> {
    let parsed = ParsedUri::parse(uri)?;
    let root = parsed.path().root();
    let dir = strip_last_segment(&parsed.path);

    let mut components = parsed.components();
    components.query = None;
    components.fragment = None;
    if dir.is_empty() && components.scheme.is_empty() && components.authority.is_none() {
        components.path = if root.is_empty() { "." } else { root };
    } else {
        components.path = dir;
    }
    Ok(components.format())
}

/// Returns the extension of the last segment of the path of a URI.
///
/// # Errors
///
/// Returns `Err` if the URI fails to [parse].
///
/// # Examples
///
/// ```
/// use uri_path::extname;
///
/// assert_eq!(extname("http://example.com/archive.tar.gz#top")?, ".gz");
/// assert_eq!(extname("/dir/.hidden")?, "");
/// assert_eq!(extname("file.")?, ".");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn extname(uri: &str) -> Result<String, ParseError> {
    let parsed = ParsedUri::parse(uri)?;
    Ok(parsed.path().ext().into())
}

/// Checks whether a URI is absolute, i.e., has a scheme, an authority,
/// or a path starting with `'/'` or a drive-letter root.
///
/// # Errors
///
/// Returns `Err` if the URI fails to [parse].
///
/// # Examples
///
/// ```
/// use uri_path::is_absolute;
///
/// assert!(is_absolute("http://example.com")?);
/// assert!(is_absolute("z:/")?);
/// assert!(is_absolute("/baz/..")?);
/// assert!(!is_absolute("qux/")?);
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn is_absolute(uri: &str) -> Result<bool, ParseError> {
    let parsed = ParsedUri::parse(uri)?;
    Ok(!parsed.scheme.is_empty() || parsed.authority.is_some() || parsed.path().is_absolute())
}

/// Removes the last non-empty segment of a path together with the slash
/// before it and any slashes after it.
///
/// A path without such a segment is returned unchanged.
fn strip_last_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    let seg_start = trimmed.rfind('/').map_or(0, |i| i + 1);
    if seg_start == trimmed.len() {
        return path;
    }
    &path[..seg_start.saturating_sub(1)]
}
