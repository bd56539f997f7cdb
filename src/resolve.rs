//! Module for resolution and relative paths.

use crate::{error::ParseError, normalize::normalize, uri::ParsedUri, ParsedUriPath};
use alloc::{borrow::Cow, string::String, vec::Vec};
use core::iter;

/// Resolves a sequence of URIs from left to right into a single URI.
///
/// Starting from the first URI, each following one is applied by the first
/// rule that matches it:
///
/// 1. With a scheme, it replaces the scheme, authority, path and query.
/// 2. With an authority, it replaces the authority, path and query.
/// 3. With a rooted path, it replaces the path and query.
/// 4. With a non-empty path, the path is appended after a `'/'`
///    (unless the current path already ends with one) and the query
///    is replaced.
/// 5. With a query, the query is replaced.
///
/// The fragment is always that of the last URI. The result is
/// [normalized](normalize).
///
/// # Errors
///
/// Returns `Err` if any of the URIs fails to [parse](crate::parse).
///
/// # Examples
///
/// ```
/// use uri_path::resolve;
///
/// assert_eq!(resolve(["http://example.com/dir", "../file"])?, "http://example.com/file");
/// assert_eq!(resolve(["/foo/bar", "./baz", "../qux"])?, "/foo/bar/qux");
/// assert_eq!(resolve(["c:/foo/bar", "d:/baz", "qux"])?, "d:/baz/qux");
/// assert_eq!(resolve(["file:///", "c:/foo/bar"])?, "file:///c:/foo/bar");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn resolve<I>(uris: I) -> Result<String, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut t = ParsedUriPath::default();

    for (i, uri) in uris.into_iter().enumerate() {
        let r = ParsedUri::parse(uri.as_ref())?;
        let r_has_root = !r.path().root().is_empty();

        if i == 0 || !r.scheme.is_empty() {
            t.scheme = r.scheme.into();
            t.authority = r.authority.map(Cow::into_owned);
            t.path = r.path.into_owned();
            t.query = r.query.map(Cow::into_owned);
        } else if r.authority.is_some() {
            t.authority = r.authority.map(Cow::into_owned);
            t.path = r.path.into_owned();
            t.query = r.query.map(Cow::into_owned);
        } else if r_has_root {
            t.path = r.path.into_owned();
            t.query = r.query.map(Cow::into_owned);
        } else if !r.path.is_empty() {
            // A doubled slash would start an authority when reparsed.
            if !t.path.ends_with('/') {
                t.path.push('/');
            }
            t.path.push_str(&r.path);
            t.query = r.query.map(Cow::into_owned);
        } else if r.query.is_some() {
            t.query = r.query.map(Cow::into_owned);
        }
        t.fragment = r.fragment.map(Cow::into_owned);
    }

    normalize(&t.format())
}

/// Returns the relative path from `from` to `to`.
///
/// If the two URIs differ in scheme, authority or root, no relative path
/// exists and `to` is returned unchanged. Otherwise both are resolved
/// against their common root, and the result climbs out of the segments
/// of `from` not shared with `to` before descending into the rest of `to`.
/// Identical resolved URIs yield an empty string.
///
/// # Errors
///
/// Returns `Err` if either URI fails to [parse](crate::parse).
///
/// # Examples
///
/// ```
/// use uri_path::relative;
///
/// assert_eq!(
///     relative("/dir/hoge/foo/bar/file", "/dir/hoge/baz/qux/file")?,
///     "../../../baz/qux/file"
/// );
/// assert_eq!(relative("http://example.com/dir", "http://example.com/dir/file")?, "file");
/// assert_eq!(relative("c:/dir", "d:/dir/file")?, "d:/dir/file");
/// assert_eq!(relative("/file", "/file")?, "");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn relative(from: &str, to: &str) -> Result<String, ParseError> {
    let from_parsed = ParsedUri::parse(from)?;
    let to_parsed = ParsedUri::parse(to)?;
    let root = to_parsed.path().root();

    if from_parsed.scheme != to_parsed.scheme
        || from_parsed.authority != to_parsed.authority
        || from_parsed.path().root() != root
    {
        return Ok(to.into());
    }

    let mut root_components = to_parsed.components();
    root_components.path = root;
    root_components.query = None;
    root_components.fragment = None;
    let mut root_path = root_components.format();
    if root_path.is_empty() {
        root_path.push('/');
    }

    let from_resolved = resolve([&root_path[..], from])?;
    let to_resolved = resolve([&root_path[..], to])?;
    if from_resolved == to_resolved {
        return Ok(String::new());
    }

    let from_segs = segments_after(&from_resolved, root_path.len());
    let to_segs = segments_after(&to_resolved, root_path.len());
    let common = from_segs
        .iter()
        .zip(&to_segs)
        .take_while(|(a, b)| a == b)
        .count();

    let parts: Vec<&str> = iter::repeat("..")
        .take(from_segs.len() - common)
        .chain(to_segs[common..].iter().copied())
        .collect();
    Ok(parts.join("/"))
}

/// Splits what follows the first `start` bytes into segments,
/// skipping empty ones and the `"."` a normalized path may start with.
fn segments_after(s: &str, start: usize) -> Vec<&str> {
    s.get(start..)
        .unwrap_or_default()
        .split('/')
        .filter(|&seg| !seg.is_empty() && seg != ".")
        .collect()
}
