//! URI components.

use crate::{authority::Authority, port::DefaultPorts};
use alloc::string::String;
use ref_cast::{ref_cast_custom, RefCastCustom};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Whether a reference is required to carry a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// An absolute URI: a scheme is required and the path is rooted.
    Absolute,
    /// A URI reference: the scheme is optional and the path is kept verbatim.
    Relative,
}

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use uri_parts::component::Scheme;
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// assert_eq!(Scheme::new("HTTP"), Some(SCHEME_HTTP));
/// assert_eq!(Scheme::new("HTTP").unwrap().as_str(), "HTTP");
/// assert!(Scheme::new("1http").is_none());
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

const WELL_KNOWN_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("gopher", 70),
    ("http", 80),
    ("https", 443),
    ("ldap", 389),
    ("nntp", 119),
    ("telnet", 23),
    ("ws", 80),
    ("wss", 443),
];

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the conversion fails.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if is_scheme(s.as_bytes()) {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the well-known default port of the scheme, if any.
    ///
    /// This is the table consulted by [`WellKnownPorts`](crate::port::WellKnownPorts).
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::component::Scheme;
    ///
    /// assert_eq!(Scheme::new_or_panic("HTTPS").default_port(), Some(443));
    /// assert_eq!(Scheme::new_or_panic("mailto").default_port(), None);
    /// ```
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        WELL_KNOWN_PORTS
            .iter()
            .find(|(name, _)| self.inner.eq_ignore_ascii_case(name))
            .map(|&(_, port)| port)
    }

    pub(crate) fn well_known_ports() -> impl Iterator<Item = (&'static str, u16)> {
        WELL_KNOWN_PORTS.iter().copied()
    }
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
const fn is_scheme(bytes: &[u8]) -> bool {
    let [first, rem @ ..] = bytes else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    let mut i = 0;
    while i < rem.len() {
        let x = rem[i];
        if !(x.is_ascii_alphanumeric() || x == b'+' || x == b'-' || x == b'.') {
            return false;
        }
        i += 1;
    }
    true
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// The components of a parsed or resolved URI reference.
///
/// Every component is a string; an empty string means "not present".
/// The query and the fragment keep their leading `'?'` and `'#'`
/// so that an empty-but-present component stays distinguishable.
///
/// A `Components` is never modified once produced. Splitting and resolution
/// always return a fresh value.
///
/// # Examples
///
/// ```
/// use uri_parts::parse;
///
/// let c = parse("https://user:pw@example.com:443/a/b?x=1#top", true, None)?;
/// assert_eq!(c.scheme(), "https");
/// assert_eq!(c.authority(), "user:pw@example.com:443");
/// assert_eq!(c.username(), "user");
/// assert_eq!(c.password(), "pw");
/// assert_eq!(c.host(), "example.com");
/// // The default port of `https` is suppressed.
/// assert_eq!(c.port(), "");
/// assert_eq!(c.path(), "/a/b");
/// assert_eq!(c.query(), "?x=1");
/// assert_eq!(c.fragment(), "#top");
/// # Ok::<_, uri_parts::Diagnostic>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Components {
    pub(crate) scheme: String,
    pub(crate) has_authority: bool,
    pub(crate) authority: String,
    pub(crate) userinfo: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) host: String,
    pub(crate) port: String,
    pub(crate) path: String,
    pub(crate) query: String,
    pub(crate) fragment: String,
}

/// Borrowed, undecomposed components as produced by the splitter
/// or by the resolver before they are turned into a [`Components`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct Parts<'a> {
    pub scheme: &'a str,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

impl Components {
    /// Builds the final record, lowercasing the scheme and decomposing the authority.
    ///
    /// With `rooted`, a path not starting with `'/'` gets one prepended.
    pub(crate) fn from_parts<P: DefaultPorts + ?Sized>(
        parts: Parts<'_>,
        rooted: bool,
        ports: &P,
    ) -> Components {
        let scheme = parts.scheme.to_ascii_lowercase();

        let mut path = String::with_capacity(parts.path.len() + 1);
        if rooted && !parts.path.starts_with('/') {
            path.push('/');
        }
        path.push_str(parts.path);

        let mut out = Components {
            scheme,
            path,
            query: parts.query.into(),
            fragment: parts.fragment.into(),
            ..Components::default()
        };

        if let Some(val) = parts.authority {
            let auth = Authority::parse(val);
            out.has_authority = true;
            out.authority = val.into();
            out.userinfo = auth.userinfo().unwrap_or_default().into();
            out.username = auth.username().unwrap_or_default().into();
            out.password = auth.password().unwrap_or_default().into();
            out.host = auth.host().into();
            out.port = auth.display_port(&out.scheme, ports).into();
        }
        out
    }

    pub(crate) fn as_parts(&self) -> Parts<'_> {
        Parts {
            scheme: &self.scheme,
            authority: self.authority_opt(),
            path: &self.path,
            query: &self.query,
            fragment: &self.fragment,
        }
    }

    pub(crate) fn authority_opt(&self) -> Option<&str> {
        self.has_authority.then_some(self.authority.as_str())
    }

    /// Returns the lowercase scheme, or an empty string if absent.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the raw authority text following `"//"`.
    ///
    /// The text is kept verbatim, including a port equal to the scheme's default.
    /// Use [`has_authority`](Self::has_authority) to tell an empty authority
    /// from an absent one.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Checks whether the authority marker `"//"` was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::parse;
    ///
    /// assert!(parse("http://", true, None)?.has_authority());
    /// assert!(!parse("http:", true, None)?.has_authority());
    /// # Ok::<_, uri_parts::Diagnostic>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.has_authority
    }

    /// Returns the userinfo subcomponent, without the trailing `'@'`.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> &str {
        &self.userinfo
    }

    /// Returns the part of the userinfo before its first `':'`.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the part of the userinfo after its first `':'`.
    #[inline]
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the host subcomponent verbatim.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port subcomponent, or an empty string if it is absent
    /// or equal to the scheme's default port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Returns the path component.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query component including its leading `'?'`.
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the fragment component including its leading `'#'`.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns the nine named components as `(name, value)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::parse;
    ///
    /// let c = parse("http://authority/path1?query#fragment", true, None)?;
    /// let entries = c.entries();
    /// assert_eq!(entries[0], ("scheme", "http"));
    /// assert_eq!(entries[1], ("authority", "authority"));
    /// assert_eq!(entries[2], ("path", "/path1"));
    /// assert_eq!(entries[3], ("query", "?query"));
    /// assert_eq!(entries[4], ("fragment", "#fragment"));
    /// # Ok::<_, uri_parts::Diagnostic>(())
    /// ```
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("scheme", self.scheme()),
            ("authority", self.authority()),
            ("path", self.path()),
            ("query", self.query()),
            ("fragment", self.fragment()),
            ("username", self.username()),
            ("password", self.password()),
            ("host", self.host()),
            ("port", self.port()),
        ]
    }
}

#[cfg(feature = "serde")]
impl Serialize for Components {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self.entries();
        let mut state = serializer.serialize_struct("Components", entries.len())?;
        for (name, value) in entries {
            state.serialize_field(name, value)?;
        }
        state.end()
    }
}
