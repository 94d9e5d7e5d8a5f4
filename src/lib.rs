#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A URI reference splitter and resolver following IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! The crate turns a URI string into a flat [`Components`] record (scheme,
//! authority, userinfo, host, port, path, query and fragment, each a string
//! that is empty when absent) and resolves relative references against a
//! base as described in [Section 5 of RFC 3986].
//!
//! [Section 5 of RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5
//!
//! # Examples
//!
//! ```
//! use uri_parts::{parse, validate, ValidationMode};
//!
//! let c = parse("http://authority/path1?query#fragment", true, None)?;
//! assert_eq!(c.path(), "/path1");
//! assert_eq!(c.query(), "?query");
//!
//! let c = parse("../../g", false, Some("http://a/b/c/d;p?q"))?;
//! assert_eq!(c.to_string(), "http://a/g");
//!
//! assert!(validate("http:///path", ValidationMode::Absolute, None).is_err());
//! # Ok::<_, uri_parts::Diagnostic>(())
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. This includes the [`Error`]
//!   implementation for [`Diagnostic`].
//!
//! - `serde`: Implements `Serialize` for [`Components`], and `Serialize`
//!   and `Deserialize` for [`PortTable`](port::PortTable).
//!
//! - `tracing`: Emits `trace`-level events from reference resolution.
//!
//! [`Error`]: std::error::Error

extern crate alloc;

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)+);
    };
}

pub mod authority;
pub mod component;
pub mod port;
pub mod resolve;
pub mod validate;

mod error;
mod fmt;
mod parser;
mod split;

pub use component::{Components, RefKind};
pub use error::{Diagnostic, DiagnosticKind};
pub use parser::Parser;
pub use validate::ValidationMode;

/// Splits a URI reference into its components without resolving it.
///
/// With [`RefKind::Absolute`], a scheme is required and the path is rooted:
/// a path not starting with `'/'` gets one prepended, so an empty path becomes `"/"`.
/// With [`RefKind::Relative`], the scheme is optional and the path is kept verbatim.
///
/// In both modes, a `':'` before any `'/'`, `'?'` or `'#'` ends the scheme,
/// which must then be nonempty and valid.
///
/// # Errors
///
/// Returns `Err` with
///
/// - [`Diagnostic::MissingScheme`] if `kind` is `Absolute` and there is no scheme,
/// - [`Diagnostic::EmptyScheme`] if the input starts with `':'`,
/// - [`Diagnostic::InvalidScheme`] if the text before the first `':'` is not a scheme,
/// - [`Diagnostic::EmptyAuthorityWithSlash`] if `"//"` is immediately followed by `'/'`
///   and the path goes on past that slash.
///
/// # Examples
///
/// ```
/// use uri_parts::{split, RefKind};
///
/// let c = split("http:path?query#fragment", RefKind::Absolute)?;
/// assert_eq!(c.authority(), "");
/// assert_eq!(c.path(), "/path");
///
/// let c = split("g;x?y#s", RefKind::Relative)?;
/// assert_eq!(c.scheme(), "");
/// assert_eq!(c.path(), "g;x");
/// # Ok::<_, uri_parts::Diagnostic>(())
/// ```
pub fn split(uri: &str, kind: RefKind) -> Result<Components, Diagnostic> {
    Parser::new().split(uri, kind)
}

/// Parses an absolute URI, or resolves a relative reference against `base`.
///
/// When `absolute` is `true`, this is [`split`] with [`RefKind::Absolute`]
/// and `base` is ignored. Otherwise `uri` is split as a URI reference,
/// `base` as an absolute URI, and the reference is resolved against the base.
///
/// # Errors
///
/// Returns `Err` if splitting fails, or [`Diagnostic::UnresolvableReference`]
/// if `absolute` is `false` and `base` is `None`.
///
/// There is no fallback base. To resolve many references against one base,
/// create a [`Resolver`](resolve::Resolver) with [`Resolver::with_base`]
/// or [`Parser::resolver`], which checks the base once and needs no base
/// per call.
///
/// [`Resolver::with_base`]: resolve::Resolver::with_base
///
/// # Examples
///
/// ```
/// use uri_parts::{parse, DiagnosticKind};
///
/// let c = parse("http:", true, None)?;
/// assert_eq!((c.scheme(), c.authority(), c.path()), ("http", "", "/"));
///
/// let c = parse("//g", false, Some("http://a/b/c/d;p?q"))?;
/// assert_eq!((c.authority(), c.path()), ("g", "/"));
///
/// let err = parse("g", false, None).unwrap_err();
/// assert_eq!(err.kind(), DiagnosticKind::UnresolvableReference);
/// # Ok::<_, uri_parts::Diagnostic>(())
/// ```
pub fn parse(uri: &str, absolute: bool, base: Option<&str>) -> Result<Components, Diagnostic> {
    Parser::new().parse(uri, absolute, base)
}

/// Resolves reference components against base components.
///
/// This applies the algorithm of [Section 5.2 of RFC 3986] to `reference`,
/// which is usually split with [`RefKind::Relative`]. The fragment always
/// comes from the reference. The path of the target is rooted as with
/// [`RefKind::Absolute`].
///
/// [Section 5.2 of RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2
///
/// # Errors
///
/// Returns [`Diagnostic::UnresolvableReference`] if neither `base` nor
/// `reference` has a scheme. A reference with a scheme never consults
/// the base.
///
/// # Examples
///
/// ```
/// use uri_parts::{resolve, split, RefKind};
///
/// let base = split("http://a/b/c/d;p?q", RefKind::Absolute)?;
/// let r = split("g?y#s", RefKind::Relative)?;
/// assert_eq!(resolve(&base, &r)?.to_string(), "http://a/b/c/g?y#s");
/// # Ok::<_, uri_parts::Diagnostic>(())
/// ```
pub fn resolve(base: &Components, reference: &Components) -> Result<Components, Diagnostic> {
    Parser::new().resolve(base, reference)
}

/// Checks a URI reference against a validation mode.
///
/// - [`ValidationMode::Absolute`] succeeds if `uri` splits as an absolute URI.
/// - [`ValidationMode::Relative`] succeeds if `uri` splits as a URI reference
///   and, when `base` is given, resolves against it.
/// - [`ValidationMode::Either`] tries `Absolute` and then `Relative`.
///
/// # Errors
///
/// Returns the diagnostic of the failed mode. When both modes of `Either`
/// fail, returns a [`Diagnostic::CompositeFailure`] whose message is the
/// relative failure, `"; "`, then the absolute failure.
///
/// # Examples
///
/// ```
/// use uri_parts::{validate, DiagnosticKind, ValidationMode};
///
/// assert!(validate("a/b?c", ValidationMode::Either, None).is_ok());
///
/// let err = validate("1http://authority/path", ValidationMode::Either, None).unwrap_err();
/// assert!(err.contains(DiagnosticKind::InvalidScheme));
/// assert_eq!(err.to_string(), r#"invalid scheme "1http"; invalid scheme "1http""#);
/// ```
pub fn validate(uri: &str, mode: ValidationMode, base: Option<&str>) -> Result<(), Diagnostic> {
    Parser::new().validate(uri, mode, base)
}
