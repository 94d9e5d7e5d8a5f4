use crate::{
    component::{Components, RefKind},
    error::Diagnostic,
    port::{DefaultPorts, WellKnownPorts},
    resolve::{self, Resolver},
    split,
    validate::{self, ValidationMode},
};
use borrow_or_share::Bos;

/// A configurable entry point to splitting, resolution and validation.
///
/// A `Parser` binds a [`DefaultPorts`] source to every operation. The free
/// functions of this crate use `Parser::new()`, which suppresses the
/// well-known default ports.
///
/// # Examples
///
/// ```
/// use uri_parts::{port::PortTable, Parser};
///
/// // Suppress no default port at all.
/// let parser = Parser::new().default_ports(PortTable::new());
/// let c = parser.parse("http://example.com:80/", true, None)?;
/// assert_eq!(c.port(), "80");
///
/// let c = Parser::new().parse("http://example.com:80/", true, None)?;
/// assert_eq!(c.port(), "");
/// # Ok::<_, uri_parts::Diagnostic>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[must_use]
pub struct Parser<P = WellKnownPorts> {
    ports: P,
}

impl Parser {
    /// Creates a new `Parser` with the well-known default ports.
    pub const fn new() -> Self {
        Parser {
            ports: WellKnownPorts,
        }
    }
}

impl<P: DefaultPorts> Parser<P> {
    /// Sets the source of default ports.
    pub fn default_ports<Q: DefaultPorts>(self, ports: Q) -> Parser<Q> {
        Parser { ports }
    }

    pub(crate) fn ports(&self) -> &P {
        &self.ports
    }

    /// Splits a URI reference into its components without resolving it.
    ///
    /// See [`split`](crate::split()) for the exact behavior of this method.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input is not a valid URI reference of the given kind.
    pub fn split(&self, uri: &str, kind: RefKind) -> Result<Components, Diagnostic> {
        let parts = split::split(uri, kind)?;
        Ok(Components::from_parts(
            parts,
            kind == RefKind::Absolute,
            &self.ports,
        ))
    }

    /// Parses an absolute URI, or resolves a relative reference against `base`.
    ///
    /// See [`parse`](crate::parse()) for the exact behavior of this method.
    ///
    /// # Errors
    ///
    /// Returns `Err` if splitting `uri` or `base` fails, or if `absolute`
    /// is `false` and no base is given.
    ///
    /// A `Parser` holds no base of its own. Use [`resolver`](Self::resolver)
    /// to bind a base together with this parser's default ports.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::{port::PortTable, DiagnosticKind, Parser};
    ///
    /// let parser = Parser::new().default_ports(PortTable::new());
    /// let err = parser.parse("g", false, None).unwrap_err();
    /// assert_eq!(err.kind(), DiagnosticKind::UnresolvableReference);
    ///
    /// let resolver = parser.resolver("http://a:80/b/c")?;
    /// let c = resolver.resolve("g")?;
    /// assert_eq!(c.to_string(), "http://a:80/b/g");
    /// assert_eq!(c.port(), "80");
    /// # Ok::<_, uri_parts::Diagnostic>(())
    /// ```
    pub fn parse(
        &self,
        uri: &str,
        absolute: bool,
        base: Option<&str>,
    ) -> Result<Components, Diagnostic> {
        if absolute {
            return self.split(uri, RefKind::Absolute);
        }
        let Some(base) = base else {
            return Err(Diagnostic::UnresolvableReference {
                reference: uri.into(),
            });
        };
        let base = resolve::split_base(base)?;
        let r = split::split(uri, RefKind::Relative)?;
        Ok(resolve::resolve_parts(base, r, &self.ports))
    }

    /// Resolves reference components against base components.
    ///
    /// See [`resolve`](crate::resolve()) for the exact behavior of this method.
    ///
    /// # Errors
    ///
    /// Returns `Err` if neither the base nor the reference has a scheme.
    pub fn resolve(
        &self,
        base: &Components,
        reference: &Components,
    ) -> Result<Components, Diagnostic> {
        resolve::resolve(base, reference, &self.ports)
    }

    /// Checks a URI reference against a validation mode.
    ///
    /// See [`validate`](crate::validate()) for the exact behavior of this method.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input is not valid in the given mode.
    pub fn validate(
        &self,
        uri: &str,
        mode: ValidationMode,
        base: Option<&str>,
    ) -> Result<(), Diagnostic> {
        validate::validate(self, uri, mode, base)
    }

    /// Creates a [`Resolver`] with the given base and this parser's default ports.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the base is not a valid absolute URI.
    pub fn resolver<B: Bos<str>>(self, base: B) -> Result<Resolver<B, P>, Diagnostic> {
        Resolver::new(base, self)
    }
}
