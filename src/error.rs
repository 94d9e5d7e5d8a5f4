use alloc::{boxed::Box, string::String, vec::Vec};

/// The tag of a [`Diagnostic`], without its contextual text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// See [`Diagnostic::MissingScheme`].
    MissingScheme,
    /// See [`Diagnostic::EmptyScheme`].
    EmptyScheme,
    /// See [`Diagnostic::InvalidScheme`].
    InvalidScheme,
    /// See [`Diagnostic::EmptyAuthorityWithSlash`].
    EmptyAuthorityWithSlash,
    /// See [`Diagnostic::UnresolvableReference`].
    UnresolvableReference,
    /// See [`Diagnostic::CompositeFailure`].
    CompositeFailure,
}

/// An error occurred when splitting, resolving or validating a URI reference.
///
/// Every variant carries the offending text so that the message can be
/// reported without access to the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// An absolute URI was required but no `':'` precedes the first
    /// `'/'`, `'?'` or `'#'`.
    MissingScheme {
        /// The whole input.
        input: String,
    },
    /// The input starts with `':'`.
    EmptyScheme {
        /// The whole input.
        input: String,
    },
    /// The text before the first `':'` does not match the scheme grammar
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    InvalidScheme {
        /// The rejected scheme candidate.
        scheme: String,
    },
    /// The authority marker `"//"` is immediately followed by `'/'` and
    /// more path text, as in `http:///path`.
    ///
    /// A lone `'/'` after an empty authority, as in `http:///?q`, is accepted
    /// as the root path.
    EmptyAuthorityWithSlash {
        /// The whole input.
        input: String,
    },
    /// A relative reference was given without a usable base.
    UnresolvableReference {
        /// The reference that could not be resolved.
        reference: String,
    },
    /// Both the relative and the absolute interpretation failed.
    CompositeFailure {
        /// Why the input is not a valid relative reference.
        relative: Box<Diagnostic>,
        /// Why the input is not a valid absolute URI.
        absolute: Box<Diagnostic>,
    },
}

impl Diagnostic {
    /// Returns the tag of this diagnostic.
    #[must_use]
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Self::MissingScheme { .. } => DiagnosticKind::MissingScheme,
            Self::EmptyScheme { .. } => DiagnosticKind::EmptyScheme,
            Self::InvalidScheme { .. } => DiagnosticKind::InvalidScheme,
            Self::EmptyAuthorityWithSlash { .. } => DiagnosticKind::EmptyAuthorityWithSlash,
            Self::UnresolvableReference { .. } => DiagnosticKind::UnresolvableReference,
            Self::CompositeFailure { .. } => DiagnosticKind::CompositeFailure,
        }
    }

    /// Returns the non-composite diagnostics wrapped by this one,
    /// in the same order as they appear in the message.
    ///
    /// A non-composite diagnostic yields only itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::{validate, DiagnosticKind, ValidationMode};
    ///
    /// let err = validate(":foo", ValidationMode::Either, None).unwrap_err();
    /// let kinds: Vec<_> = err.causes().iter().map(|d| d.kind()).collect();
    /// assert_eq!(kinds, [DiagnosticKind::EmptyScheme, DiagnosticKind::EmptyScheme]);
    /// ```
    #[must_use]
    pub fn causes(&self) -> Vec<&Diagnostic> {
        let mut out = Vec::new();
        self.collect_causes(&mut out);
        out
    }

    fn collect_causes<'a>(&'a self, out: &mut Vec<&'a Diagnostic>) {
        match self {
            Self::CompositeFailure { relative, absolute } => {
                relative.collect_causes(out);
                absolute.collect_causes(out);
            }
            _ => out.push(self),
        }
    }

    /// Checks whether this diagnostic is, or wraps, one of the given kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::{validate, DiagnosticKind, ValidationMode};
    ///
    /// let err = validate("1http://authority/path", ValidationMode::Either, None).unwrap_err();
    /// assert_eq!(err.kind(), DiagnosticKind::CompositeFailure);
    /// assert!(err.contains(DiagnosticKind::InvalidScheme));
    /// ```
    #[must_use]
    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        if self.kind() == kind {
            return true;
        }
        match self {
            Self::CompositeFailure { relative, absolute } => {
                relative.contains(kind) || absolute.contains(kind)
            }
            _ => false,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Diagnostic {}
