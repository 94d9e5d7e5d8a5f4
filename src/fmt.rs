use crate::{
    authority::Authority,
    component::{Components, Scheme},
    error::Diagnostic,
};
use core::fmt;

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScheme { input } => {
                write!(f, "missing scheme in absolute URI {input:?}")
            }
            Self::EmptyScheme { input } => {
                write!(f, "empty scheme in {input:?}")
            }
            Self::InvalidScheme { scheme } => write!(f, "invalid scheme {scheme:?}"),
            Self::EmptyAuthorityWithSlash { input } => write!(
                f,
                "empty authority followed by a path in {input:?}, remove the double slash"
            ),
            Self::UnresolvableReference { reference } => {
                write!(f, "no base URI to resolve {reference:?} against")
            }
            Self::CompositeFailure { relative, absolute } => {
                write!(f, "{relative}; {absolute}")
            }
        }
    }
}

impl fmt::Debug for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Components");
        for (name, value) in self.entries() {
            s.field(name, &value);
        }
        s.finish()
    }
}

/// Reassembles the components into a URI reference.
///
/// The port is written as found in the authority, even when it is suppressed
/// in [`Components::port`].
impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if self.has_authority {
            write!(f, "//{}", self.authority)?;
        } else if self.path.starts_with("//") {
            // Keep the path from being read back as an authority.
            f.write_str("/.")?;
        }
        write!(f, "{}{}{}", self.path, self.query, self.fragment)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("port", &self.port())
            .finish()
    }
}

impl fmt::Display for Authority<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}
