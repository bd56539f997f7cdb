use crate::{
    error::ParseError,
    path::PathParts,
    uri::{Components, ParsedUri},
};
use alloc::{borrow::Cow, string::String};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A URI split into its components, with its path further split
/// into root, directory, base name and extension.
///
/// All components but the scheme are percent-decoded.
///
/// A value may also be filled in partially and passed to [`format`](Self::format):
/// when `path` is empty, it is built from `root`, `dir`, `base`, `ext` and `name`.
///
/// # Examples
///
/// ```
/// use uri_path::ParsedUriPath;
///
/// let parsed = ParsedUriPath::parse("file:///C:/path/dir/file.txt")?;
/// assert_eq!(parsed.scheme, "file");
/// assert_eq!(parsed.authority.as_deref(), Some(""));
/// assert_eq!(parsed.root, "C:/");
/// assert_eq!(parsed.dir, "C:/path/dir");
/// assert_eq!(parsed.base, "file.txt");
/// assert_eq!(parsed.ext, ".txt");
/// assert_eq!(parsed.name, "file");
///
/// let uri = ParsedUriPath {
///     scheme: "http".into(),
///     authority: Some("example.com".into()),
///     root: "/".into(),
///     dir: "/docs".into(),
///     name: "read me".into(),
///     ext: ".md".into(),
///     fragment: Some("usage".into()),
///     ..Default::default()
/// };
/// assert_eq!(uri.format(), "http://example.com/docs/read%20me.md#usage");
/// # Ok::<_, uri_path::ParseError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ParsedUriPath {
    /// The scheme, or an empty string if absent.
    pub scheme: String,
    /// The authority, or `None` if the URI has no `"//"`.
    pub authority: Option<String>,
    /// The whole path.
    pub path: String,
    /// The query, or `None` if the URI has no `'?'`.
    pub query: Option<String>,
    /// The fragment, or `None` if the URI has no `'#'`.
    pub fragment: Option<String>,
    /// The root of the path: `""`, `"/"` or a drive root such as `"C:/"`.
    pub root: String,
    /// The root followed by all segments but the last.
    pub dir: String,
    /// The last segment.
    pub base: String,
    /// The extension of the last segment, including its leading `'.'`.
    pub ext: String,
    /// The last segment without its extension.
    pub name: String,
}

impl ParsedUriPath {
    /// Parses a URI and its path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the URI contains a line terminator outside
    /// of the authority or an invalid percent-encoded octet.
    pub fn parse(uri: &str) -> Result<Self, ParseError> {
        let parsed = ParsedUri::parse(uri)?;
        let PathParts {
            root,
            dir,
            base,
            ext,
            name,
        } = parsed.path().parts();
        let (root, dir, base, ext, name) = (
            root.into(),
            dir.into(),
            base.into(),
            ext.into(),
            name.into(),
        );

        Ok(Self {
            scheme: parsed.scheme.into(),
            authority: parsed.authority.map(Cow::into_owned),
            path: parsed.path.into_owned(),
            query: parsed.query.map(Cow::into_owned),
            fragment: parsed.fragment.map(Cow::into_owned),
            root,
            dir,
            base,
            ext,
            name,
        })
    }

    /// Formats the components into a URI.
    ///
    /// A non-empty `path` is used as is; otherwise the path is built
    /// from `root`, `dir`, `base`, `ext` and `name`.
    #[must_use]
    pub fn format(&self) -> String {
        let built;
        let path = if self.path.is_empty() {
            built = self.path_parts().format();
            &built
        } else {
            &self.path
        };
        self.components(path).format()
    }

    pub(crate) fn components<'a>(&'a self, path: &'a str) -> Components<'a> {
        Components {
            scheme: &self.scheme,
            authority: self.authority.as_deref(),
            path,
            query: self.query.as_deref(),
            fragment: self.fragment.as_deref(),
        }
    }

    fn path_parts(&self) -> PathParts<'_> {
        PathParts {
            root: &self.root,
            dir: &self.dir,
            base: &self.base,
            ext: &self.ext,
            name: &self.name,
        }
    }
}

impl FromStr for ParsedUriPath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for ParsedUriPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ParsedUriPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(|e| {
            de::Error::custom(format_args!("failed to parse {s:?} as URI path: {e}"))
        })
    }
}
