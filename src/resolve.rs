//! Module for reference resolution.

use crate::{
    component::{Components, Parts, RefKind},
    error::Diagnostic,
    port::{DefaultPorts, WellKnownPorts},
    Parser,
};
use alloc::string::{String, ToString};
use borrow_or_share::{BorrowOrShare, Bos};

/// A URI reference resolver against a fixed base.
///
/// The base may be borrowed or owned (`&str`, `String`, ...). It is checked
/// to be an absolute URI when the resolver is created.
///
/// # Examples
///
/// ```
/// use uri_parts::resolve::Resolver;
///
/// let resolver = Resolver::with_base("http://example.com/foo/bar")?;
///
/// assert_eq!(resolver.resolve("baz")?.to_string(), "http://example.com/foo/baz");
/// assert_eq!(resolver.resolve("../baz")?.to_string(), "http://example.com/baz");
/// assert_eq!(resolver.resolve("?baz")?.to_string(), "http://example.com/foo/bar?baz");
/// # Ok::<_, uri_parts::Diagnostic>(())
/// ```
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Resolver<B, P = WellKnownPorts> {
    base: B,
    parser: Parser<P>,
}

impl<B: Bos<str>> Resolver<B> {
    /// Creates a new `Resolver` with the given base and the well-known default ports.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the base is not a valid absolute URI.
    pub fn with_base(base: B) -> Result<Self, Diagnostic> {
        Parser::new().resolver(base)
    }
}

impl<'i, 'o, B: BorrowOrShare<'i, 'o, str>, P> Resolver<B, P> {
    /// Returns the base as a string slice.
    #[must_use]
    pub fn base(&'i self) -> &'o str {
        self.base.borrow_or_share()
    }
}

impl<B: Bos<str>, P: DefaultPorts> Resolver<B, P> {
    pub(crate) fn new(base: B, parser: Parser<P>) -> Result<Self, Diagnostic> {
        let resolver = Resolver { base, parser };
        split_base(resolver.base())?;
        Ok(resolver)
    }

    /// Sets the source of default ports used to decompose resolved authorities.
    pub fn default_ports<Q: DefaultPorts>(self, ports: Q) -> Resolver<B, Q> {
        Resolver {
            base: self.base,
            parser: self.parser.default_ports(ports),
        }
    }

    /// Resolves the given reference against the configured base.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the reference cannot be split as a URI reference.
    pub fn resolve(&self, reference: &str) -> Result<Components, Diagnostic> {
        let base = split_base(self.base())?;
        let r = crate::split::split(reference, RefKind::Relative)?;
        Ok(resolve_parts(base, r, self.parser.ports()))
    }

    /// Resolves already split reference components against the configured base.
    ///
    /// # Errors
    ///
    /// Returns `Err` on the same conditions as [`resolve`](crate::resolve()).
    pub fn resolve_components(&self, reference: &Components) -> Result<Components, Diagnostic> {
        let base = split_base(self.base())?;
        Ok(resolve_parts(base, reference.as_parts(), self.parser.ports()))
    }
}

pub(crate) fn split_base(base: &str) -> Result<Parts<'_>, Diagnostic> {
    crate::split::split(base, RefKind::Absolute)
}

pub(crate) fn resolve<P: DefaultPorts + ?Sized>(
    base: &Components,
    reference: &Components,
    ports: &P,
) -> Result<Components, Diagnostic> {
    if base.scheme().is_empty() && reference.scheme().is_empty() {
        return Err(Diagnostic::UnresolvableReference {
            reference: reference.to_string(),
        });
    }
    Ok(resolve_parts(base.as_parts(), reference.as_parts(), ports))
}

/// Applies Section 5.2.2 of RFC 3986.
///
/// The base is only consulted for a reference without a scheme,
/// and must then have one.
pub(crate) fn resolve_parts<P: DefaultPorts + ?Sized>(
    base: Parts<'_>,
    /* reference */ r: Parts<'_>,
    ports: &P,
) -> Components {
    debug_assert!(!base.scheme.is_empty() || !r.scheme.is_empty());

    let (t_scheme, t_authority, t_query);
    let t_path: String;

    if !r.scheme.is_empty() {
        trace!(reference.scheme = r.scheme, "reference is absolute");
        t_scheme = r.scheme;
        t_authority = r.authority;
        t_path = remove_dot_segments(r.path);
        t_query = r.query;
    } else {
        if r.authority.is_some() {
            trace!("reference is network-path");
            t_authority = r.authority;
            t_path = remove_dot_segments(r.path);
            t_query = r.query;
        } else {
            if r.path.is_empty() {
                trace!("reference has an empty path");
                t_path = base.path.into();
                t_query = if r.query.is_empty() {
                    base.query
                } else {
                    r.query
                };
            } else {
                if r.path.starts_with('/') {
                    trace!("reference is absolute-path");
                    t_path = remove_dot_segments(r.path);
                } else {
                    trace!("reference is relative-path");
                    t_path = remove_dot_segments(&merge(base, r.path));
                }
                t_query = r.query;
            }
            t_authority = base.authority;
        }
        t_scheme = base.scheme;
    }

    let target = Parts {
        scheme: t_scheme,
        authority: t_authority,
        path: &t_path,
        query: t_query,
        fragment: r.fragment,
    };
    Components::from_parts(target, true, ports)
}

/// Merges a relative-path reference with the path of the base,
/// as in Section 5.2.3 of RFC 3986.
fn merge(base: Parts<'_>, r_path: &str) -> String {
    let mut buf = String::with_capacity(base.path.len() + r_path.len() + 1);
    if base.authority.is_some() && base.path.is_empty() {
        buf.push('/');
    } else if let Some(i) = base.path.rfind('/') {
        buf.push_str(&base.path[..=i]);
    }
    buf.push_str(r_path);
    buf
}

/// Removes the dot segments `"."` and `".."` from a path, as in
/// [Section 5.2.4 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4).
///
/// The result is a fixed point: removing dot segments again does not change it.
///
/// # Examples
///
/// ```
/// use uri_parts::resolve::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("/b/c/.."), "/b/");
/// assert_eq!(remove_dot_segments("/../g"), "/g");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rem) = input.strip_prefix("../") {
            input = rem;
        } else if let Some(rem) = input.strip_prefix("./") {
            input = rem;
        } else if input.starts_with("/./") {
            // Keep the second slash.
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_last_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_last_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // Move the first segment, with its leading slash if any, to the output.
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| start + i);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    trace!(path, output = output.as_str(), "removed dot segments");
    output
}

// Removes the last segment and its preceding '/', if any.
fn pop_last_segment(output: &mut String) {
    let i = output.rfind('/').unwrap_or(0);
    output.truncate(i);
}
