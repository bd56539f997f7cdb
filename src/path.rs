//! Module for the hierarchical path component.

use alloc::string::String;
use core::fmt;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A percent-decoded path, viewed as a filesystem-like path.
///
/// A path may start with a *root*: either `"/"` or a drive letter followed
/// by `":/"` (such as `"C:/"`). A drive-letter root may be preceded by one
/// extra slash, as in the path of `file:///C:/dir`. Likewise, a path starting
/// with `"//"` has the root `"/"`.
///
/// # Examples
///
/// ```
/// use uri_path::PathStr;
///
/// let path = PathStr::new("/C:/dir/file.tar.gz");
/// assert_eq!(path.root(), "C:/");
/// assert_eq!(path.dir(), "C:/dir");
/// assert_eq!(path.base(), "file.tar.gz");
/// assert_eq!(path.ext(), ".gz");
/// assert_eq!(path.name(), "file.tar");
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct PathStr {
    inner: str,
}

/// The fields of a path split at its root, last segment and extension.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct PathParts<'a> {
    pub(crate) root: &'a str,
    pub(crate) dir: &'a str,
    pub(crate) base: &'a str,
    pub(crate) ext: &'a str,
    pub(crate) name: &'a str,
}

impl PathStr {
    /// Converts a string slice to a `PathStr` slice.
    #[ref_cast_custom]
    pub const fn new(s: &str) -> &Self;

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the root of the path, or an empty string if it has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_path::PathStr;
    ///
    /// assert_eq!(PathStr::new("/foo").root(), "/");
    /// assert_eq!(PathStr::new("//foo").root(), "/");
    /// assert_eq!(PathStr::new("c:/foo").root(), "c:/");
    /// assert_eq!(PathStr::new("/c:/foo").root(), "c:/");
    /// assert_eq!(PathStr::new("c:foo").root(), "");
    /// assert_eq!(PathStr::new("foo").root(), "");
    /// ```
    #[must_use]
    pub fn root(&self) -> &str {
        match root_bounds(self.inner.as_bytes()) {
            Some((start, end)) => &self.inner[start..end],
            None => "",
        }
    }

    /// Checks whether the path starts with `'/'` or a drive-letter root.
    ///
    /// Unlike [`root`](Self::root), no extra slash is allowed
    /// before a drive letter.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        let bytes = self.inner.as_bytes();
        bytes.first() == Some(&b'/') || is_drive_root_at(bytes, 0)
    }

    /// Returns the directory part of the path: the root followed by all
    /// segments but the last, without a trailing slash.
    #[must_use]
    pub fn dir(&self) -> &str {
        self.parts().dir
    }

    /// Returns the last segment of the path, ignoring one trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.parts().base
    }

    /// Returns the extension of the last segment, starting with its last `'.'`.
    ///
    /// The extension is empty if the segment has no `'.'` other than a leading
    /// one, or if the segment is `".."`.
    #[must_use]
    pub fn ext(&self) -> &str {
        self.parts().ext
    }

    /// Returns the last segment with its extension removed.
    #[must_use]
    pub fn name(&self) -> &str {
        self.parts().name
    }

    pub(crate) fn parts(&self) -> PathParts<'_> {
        let s = &self.inner;
        let (root_start, root_end) = root_bounds(s.as_bytes()).unwrap_or((0, 0));
        let rest = &s[root_end..];

        // `[^/]*` preceded and followed by at most one slash, anchored at the end.
        let trimmed = rest.strip_suffix('/').unwrap_or(rest);
        let base_start = trimmed.rfind('/').map_or(0, |i| i + 1);
        let base = &trimmed[base_start..];
        let suffix_start = if base_start > 0 {
            base_start - 1
        } else {
            base_start
        };

        let ext = match base.rfind('.') {
            Some(i) if i > 0 && base != ".." => &base[i..],
            _ => "",
        };

        PathParts {
            root: &s[root_start..root_end],
            // Root and rest are adjacent, so the directory is one slice.
            dir: &s[root_start..root_end + suffix_start],
            base,
            ext,
            name: &base[..base.len() - ext.len()],
        }
    }
}

impl PathParts<'_> {
    /// Formats the fields back into a path.
    ///
    /// An empty `dir` falls back to `root`, and an empty `base`
    /// to `name` followed by `ext`.
    pub(crate) fn format(&self) -> String {
        let dir = if self.dir.is_empty() {
            self.root
        } else {
            self.dir
        };

        let mut buf = String::with_capacity(
            dir.len() + 1 + self.base.len() + self.name.len() + self.ext.len(),
        );
        buf.push_str(dir);
        if !dir.is_empty() && dir != self.root {
            buf.push('/');
        }
        if self.base.is_empty() {
            buf.push_str(self.name);
            buf.push_str(self.ext);
        } else {
            buf.push_str(self.base);
        }
        buf
    }
}

impl AsRef<str> for PathStr {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq<str> for PathStr {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl fmt::Debug for PathStr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for PathStr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// `\w`, as in ASCII regular expressions.
const fn is_word(x: u8) -> bool {
    x.is_ascii_alphanumeric() || x == b'_'
}

fn is_drive_root_at(bytes: &[u8], i: usize) -> bool {
    matches!(bytes.get(i..i + 3), Some(&[letter, b':', b'/']) if is_word(letter))
}

/// Returns the bounds of the root. The prefix before the root,
/// if any, is a single slash.
fn root_bounds(bytes: &[u8]) -> Option<(usize, usize)> {
    if bytes.first() == Some(&b'/') {
        if is_drive_root_at(bytes, 1) {
            return Some((1, 4));
        }
        if bytes.get(1) == Some(&b'/') {
            return Some((1, 2));
        }
    }
    if is_drive_root_at(bytes, 0) {
        Some((0, 3))
    } else if bytes.first() == Some(&b'/') {
        Some((0, 1))
    } else {
        None
    }
}
