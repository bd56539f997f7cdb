//! Module for normalization.

use crate::{error::ParseError, uri::ParsedUri};
use alloc::{string::String, vec::Vec};

/// Normalizes the path of a URI, resolving `"."` and `".."` segments.
///
/// The path is normalized as follows:
///
/// - Runs of `'/'` and `'\'` are collapsed into a single `'/'`.
/// - A `"."` segment is removed, unless it is the first segment after the
///   root, in which case it is kept until another non-empty segment follows.
/// - A `".."` segment removes the preceding segment. With nothing left to
///   remove, it is kept if the path has no root and dropped otherwise,
///   so a rooted path never goes above its root.
/// - A path left empty becomes `"."` when the URI has neither scheme nor
///   authority.
///
/// Scheme, authority, query and fragment are kept. Components are
/// percent-encoded again on output.
///
/// # Errors
///
/// Returns `Err` if the URI fails to [parse](crate::parse).
///
/// # Examples
///
/// ```
/// use uri_path::normalize;
///
/// assert_eq!(normalize("/foo/../bar/baz/qux/../../quux/.")?, "/bar/quux");
/// assert_eq!(normalize("foo/../../bar")?, "../bar");
/// assert_eq!(normalize("c:/../dir/../file")?, "c:/file");
/// assert_eq!(normalize("http://example.com//a/./b?q#f")?, "http://example.com/a/b?q#f");
/// assert_eq!(normalize("foo/..")?, ".");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn normalize(uri: &str) -> Result<String, ParseError> {
    let parsed = ParsedUri::parse(uri)?;
    let root = parsed.path().root();

    // A root after an extra slash leaves a leading slash here,
    // which is stripped below.
    let rootless = parsed.path.get(root.len()..).unwrap_or_default();
    let collapsed = collapse_separators(rootless);
    let rest = if root.is_empty() {
        &collapsed[..]
    } else {
        strip_leading_dot_segments(&collapsed)
    };

    let segs = remove_dot_segments(rest, !root.is_empty());

    let mut path = String::with_capacity(root.len() + rest.len());
    path.push_str(root);
    for (i, seg) in segs.iter().enumerate() {
        if i > 0 {
            path.push('/');
        }
        path.push_str(seg);
    }

    let mut components = parsed.components();
    components.path =
        if path.is_empty() && components.scheme.is_empty() && components.authority.is_none() {
            "."
        } else {
            &path
        };
    Ok(components.format())
}

/// Joins paths with `'/'` and [normalizes](normalize) the result.
///
/// Joining no path at all yields `"."`.
///
/// # Errors
///
/// Returns `Err` if the joined URI fails to [parse](crate::parse).
///
/// # Examples
///
/// ```
/// use uri_path::join;
///
/// assert_eq!(join(["d:/foo", "../../bar"])?, "d:/bar");
/// assert_eq!(join(["http://example.com/dir/", "/file"])?, "http://example.com/dir/file");
/// assert_eq!(join(["foo//", "//bar//baz//", "//qux//"])?, "foo/bar/baz/qux/");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
pub fn join<I>(paths: I) -> Result<String, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for (i, path) in paths.into_iter().enumerate() {
        if i > 0 {
            joined.push('/');
        }
        joined.push_str(path.as_ref());
    }
    normalize(&joined)
}

/// Replaces each run of `'/'` and `'\'` with a single `'/'`.
fn collapse_separators(path: &str) -> String {
    let mut buf = String::with_capacity(path.len());
    let mut in_run = false;
    for ch in path.chars() {
        if ch == '/' || ch == '\\' {
            if !in_run {
                buf.push('/');
            }
            in_run = true;
        } else {
            buf.push(ch);
            in_run = false;
        }
    }
    buf
}

/// Strips leading `"/"`, `"/."` and `"/.."` segments.
fn strip_leading_dot_segments(mut path: &str) -> &str {
    while let Some(rem) = path.strip_prefix('/') {
        path = rem;
        for dots in ["..", "."] {
            match path.strip_prefix(dots) {
                Some(after) if after.is_empty() || after.starts_with('/') => {
                    path = after;
                    break;
                }
                _ => {}
            }
        }
    }
    path
}

fn remove_dot_segments(path: &str, has_root: bool) -> Vec<&str> {
    let mut stack: Vec<&str> = Vec::new();
    for seg in path.split('/') {
        match seg {
            "." => {
                if stack.is_empty() {
                    stack.push(seg);
                }
            }
            ".." => {
                if stack.last().is_some_and(|&top| top != "..") {
                    stack.pop();
                } else if !has_root {
                    stack.push(seg);
                }
            }
            _ => {
                // A leading "." only stands in until a real segment shows up.
                if !seg.is_empty() && stack.last() == Some(&".") {
                    stack.pop();
                }
                stack.push(seg);
            }
        }
    }
    stack
}
