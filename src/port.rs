//! Default port lookup.
//!
//! A [`DefaultPorts`] source decides which port is suppressed from the
//! decomposed output of an authority. Sources are always passed in by value
//! or by reference; there is no global table to mutate.

use crate::component::Scheme;
use alloc::{collections::BTreeMap, string::String};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A source of default ports for schemes.
pub trait DefaultPorts {
    /// Returns the default port of `scheme`, or `None` if it has none.
    fn default_port(&self, scheme: &Scheme) -> Option<u16>;
}

impl<T: DefaultPorts + ?Sized> DefaultPorts for &T {
    #[inline]
    fn default_port(&self, scheme: &Scheme) -> Option<u16> {
        (**self).default_port(scheme)
    }
}

/// The built-in read-only table of well-known default ports.
///
/// See [`Scheme::default_port`] for its contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WellKnownPorts;

impl DefaultPorts for WellKnownPorts {
    #[inline]
    fn default_port(&self, scheme: &Scheme) -> Option<u16> {
        scheme.default_port()
    }
}

/// An owned scheme to default port map.
///
/// Keys are stored lowercase and looked up case-insensitively.
///
/// # Examples
///
/// ```
/// use uri_parts::{port::PortTable, Parser};
///
/// let ports = PortTable::well_known().with("foo", 4673);
/// let parser = Parser::new().default_ports(&ports);
///
/// let c = parser.parse("FOO://localhost:4673/", true, None)?;
/// assert_eq!(c.port(), "");
/// assert_eq!(c.authority(), "localhost:4673");
/// # Ok::<_, uri_parts::Diagnostic>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "BTreeMap<String, u16>", into = "BTreeMap<String, u16>")
)]
pub struct PortTable {
    map: BTreeMap<String, u16>,
}

impl PortTable {
    /// Creates an empty table, which suppresses no port.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table filled with the well-known default ports.
    #[must_use]
    pub fn well_known() -> Self {
        Scheme::well_known_ports().collect()
    }

    /// Inserts an entry, returning the port previously set for the scheme.
    pub fn insert(&mut self, scheme: &str, port: u16) -> Option<u16> {
        self.map.insert(scheme.to_ascii_lowercase(), port)
    }

    /// Removes an entry, returning its port.
    pub fn remove(&mut self, scheme: &str) -> Option<u16> {
        self.map.remove(&scheme.to_ascii_lowercase())
    }

    /// Adds an entry and returns the table, for use in builder chains.
    #[must_use]
    pub fn with(mut self, scheme: &str, port: u16) -> Self {
        self.insert(scheme, port);
        self
    }

    /// Returns the port registered for the scheme name.
    #[must_use]
    pub fn get(&self, scheme: &str) -> Option<u16> {
        self.map.get(&scheme.to_ascii_lowercase()).copied()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Checks whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(scheme, port)` entries in scheme order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u16)> + '_ {
        self.map.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl DefaultPorts for PortTable {
    #[inline]
    fn default_port(&self, scheme: &Scheme) -> Option<u16> {
        self.get(scheme.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<(S, u16)> for PortTable {
    fn from_iter<I: IntoIterator<Item = (S, u16)>>(iter: I) -> Self {
        let mut table = PortTable::new();
        for (scheme, port) in iter {
            table.insert(scheme.as_ref(), port);
        }
        table
    }
}

impl From<BTreeMap<String, u16>> for PortTable {
    fn from(map: BTreeMap<String, u16>) -> Self {
        map.into_iter().collect()
    }
}

impl From<PortTable> for BTreeMap<String, u16> {
    fn from(table: PortTable) -> Self {
        table.map
    }
}
