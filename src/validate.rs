//! Module for validation.

use crate::{component::RefKind, error::Diagnostic, port::DefaultPorts, Parser};
use alloc::boxed::Box;

/// What form of URI reference an input is expected to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationMode {
    /// An absolute URI with a scheme.
    Absolute,
    /// A URI reference, resolved against the base when one is given.
    Relative,
    /// Either of the above, tried in the order `Absolute`, `Relative`.
    Either,
}

pub(crate) fn validate<P: DefaultPorts>(
    parser: &Parser<P>,
    uri: &str,
    mode: ValidationMode,
    base: Option<&str>,
) -> Result<(), Diagnostic> {
    match mode {
        ValidationMode::Absolute => validate_absolute(parser, uri),
        ValidationMode::Relative => validate_relative(parser, uri, base),
        ValidationMode::Either => {
            let Err(absolute) = validate_absolute(parser, uri) else {
                return Ok(());
            };
            validate_relative(parser, uri, base).map_err(|relative| {
                Diagnostic::CompositeFailure {
                    relative: Box::new(relative),
                    absolute: Box::new(absolute),
                }
            })
        }
    }
}

fn validate_absolute<P: DefaultPorts>(parser: &Parser<P>, uri: &str) -> Result<(), Diagnostic> {
    parser.split(uri, RefKind::Absolute).map(drop)
}

fn validate_relative<P: DefaultPorts>(
    parser: &Parser<P>,
    uri: &str,
    base: Option<&str>,
) -> Result<(), Diagnostic> {
    match base {
        Some(_) => parser.parse(uri, false, base).map(drop),
        None => parser.split(uri, RefKind::Relative).map(drop),
    }
}
