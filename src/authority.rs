//! Authority decomposition.

use crate::{component::Scheme, port::DefaultPorts};
use core::num::ParseIntError;

/// An [authority] component split into its subcomponents.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
///
/// Splitting never fails: any text is accepted as an authority. A host
/// enclosed in square brackets is treated as opaque, so colons inside
/// the brackets are never taken as the port delimiter.
///
/// # Examples
///
/// ```
/// use uri_parts::authority::Authority;
///
/// let auth = Authority::parse("username:1234@host.com:123");
/// assert_eq!(auth.userinfo(), Some("username:1234"));
/// assert_eq!(auth.username(), Some("username"));
/// assert_eq!(auth.password(), Some("1234"));
/// assert_eq!(auth.host(), "host.com");
/// assert_eq!(auth.port(), Some("123"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Authority<'a> {
    val: &'a str,
    userinfo: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
}

impl<'a> Authority<'a> {
    /// An empty authority component.
    pub const EMPTY: Authority<'static> = Authority {
        val: "",
        userinfo: None,
        host: "",
        port: None,
    };

    /// Splits an authority into userinfo, host and port.
    ///
    /// The userinfo ends at the **last** `'@'` and the port starts after
    /// the **last** `':'` that follows the host.
    #[must_use]
    pub fn parse(val: &'a str) -> Self {
        let (userinfo, host_port) = match val.rfind('@') {
            Some(i) => (Some(&val[..i]), &val[i + 1..]),
            None => (None, val),
        };

        let port_colon = if host_port.starts_with('[') {
            // Opaque bracketed host: a port may only follow the closing bracket.
            host_port
                .find(']')
                .and_then(|close| host_port[close + 1..].starts_with(':').then_some(close + 1))
        } else {
            host_port.rfind(':')
        };

        let (host, port) = match port_colon {
            Some(i) => (&host_port[..i], Some(&host_port[i + 1..])),
            None => (host_port, None),
        };

        Authority {
            val,
            userinfo,
            host,
            port,
        }
    }

    /// Returns the authority component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.val
    }

    /// Returns the optional [userinfo] subcomponent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Returns the part of the userinfo before its first `':'`,
    /// or the whole userinfo if it has no `':'`.
    #[must_use]
    pub fn username(&self) -> Option<&'a str> {
        self.userinfo
            .map(|s| s.split_once(':').map_or(s, |(name, _)| name))
    }

    /// Returns the part of the userinfo after its first `':'`,
    /// or an empty string if it has no `':'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::authority::Authority;
    ///
    /// assert_eq!(Authority::parse("user@host").password(), Some(""));
    /// assert_eq!(Authority::parse("user:a:b@host").password(), Some("a:b"));
    /// assert_eq!(Authority::parse("host").password(), None);
    /// ```
    #[must_use]
    pub fn password(&self) -> Option<&'a str> {
        self.userinfo
            .map(|s| s.split_once(':').map_or("", |(_, pass)| pass))
    }

    /// Returns the [host] subcomponent as a string slice.
    ///
    /// The host subcomponent is always present, although it may be empty.
    /// Square brackets enclosing an IP literal are included.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    #[inline]
    #[must_use]
    pub fn host(&self) -> &'a str {
        self.host
    }

    /// Returns the optional [port] subcomponent.
    ///
    /// Note that the port may be empty, non-numeric, with leading zeros,
    /// or larger than [`u16::MAX`].
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<&'a str> {
        self.port
    }

    /// Converts the port subcomponent to `u16`, if present and nonempty.
    ///
    /// Returns `Ok(None)` if the port is not present or is empty. Leading zeros are ignored.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the port cannot be parsed into `u16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::authority::Authority;
    ///
    /// assert_eq!(Authority::parse("localhost:4673").port_to_u16(), Ok(Some(4673)));
    /// assert_eq!(Authority::parse("localhost:").port_to_u16(), Ok(None));
    /// assert_eq!(Authority::parse("localhost").port_to_u16(), Ok(None));
    /// assert!(Authority::parse("localhost:123456").port_to_u16().is_err());
    /// ```
    pub fn port_to_u16(&self) -> Result<Option<u16>, ParseIntError> {
        self.port
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }

    /// Checks whether a userinfo subcomponent is present.
    #[inline]
    #[must_use]
    pub fn has_userinfo(&self) -> bool {
        self.userinfo.is_some()
    }

    /// Checks whether a port subcomponent is present, possibly empty.
    #[inline]
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// Returns the port for display: empty if absent or equal to
    /// the default port of `scheme` according to `ports`.
    #[must_use]
    pub fn display_port<P: DefaultPorts + ?Sized>(&self, scheme: &str, ports: &P) -> &'a str {
        let port = self.port.unwrap_or_default();
        let default = Scheme::new(scheme).and_then(|s| ports.default_port(s));
        match (default, self.port_to_u16()) {
            (Some(default), Ok(Some(port))) if port == default => "",
            _ => port,
        }
    }
}

/// Decomposes an authority into `(userinfo, host, port)`, each empty if absent.
///
/// The port is suppressed to an empty string when it equals the default port
/// of `scheme` (compared case-insensitively) in `ports`. The authority text
/// itself is left untouched.
///
/// # Examples
///
/// ```
/// use uri_parts::{authority::decompose, port::WellKnownPorts};
///
/// assert_eq!(
///     decompose("username:1234@host.com:123", "http", &WellKnownPorts),
///     ("username:1234", "host.com", "123"),
/// );
/// assert_eq!(decompose("host.com:80", "HTTP", &WellKnownPorts), ("", "host.com", ""));
/// assert_eq!(decompose("host.com:80", "foo", &WellKnownPorts), ("", "host.com", "80"));
/// ```
pub fn decompose<'a, P: DefaultPorts + ?Sized>(
    authority: &'a str,
    scheme: &str,
    ports: &P,
) -> (&'a str, &'a str, &'a str) {
    let auth = Authority::parse(authority);
    (
        auth.userinfo().unwrap_or_default(),
        auth.host(),
        auth.display_port(scheme, ports),
    )
}
