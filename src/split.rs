use crate::{
    component::{Parts, RefKind, Scheme},
    error::Diagnostic,
};

/// Returns immediately with a diagnostic carrying `input`.
macro_rules! err {
    ($kind:ident, $field:ident = $val:expr) => {
        return Err(Diagnostic::$kind {
            $field: $val.into(),
        })
    };
}

fn is_gen_delim(c: char) -> bool {
    matches!(c, ':' | '/' | '?' | '#')
}

fn find_or_end(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.find(pred).unwrap_or(s.len())
}

/// Splits a URI reference into its five components.
///
/// The returned path is the raw path; rooting it is up to the caller.
///
/// # Invariants
///
/// On success the input is exactly the concatenation of
/// `scheme ":"` (if any), `"//" authority` (if any), path, query and fragment.
pub(crate) fn split(uri: &str, kind: RefKind) -> Result<Parts<'_>, Diagnostic> {
    let mut rest = uri;

    // The scheme ends at the first ':' that precedes any other delimiter.
    let scheme = match uri.find(is_gen_delim) {
        Some(0) if uri.starts_with(':') => err!(EmptyScheme, input = uri),
        Some(i) if uri[i..].starts_with(':') => {
            let candidate = &uri[..i];
            if Scheme::new(candidate).is_none() {
                err!(InvalidScheme, scheme = candidate);
            }
            rest = &uri[i + 1..];
            candidate
        }
        _ if kind == RefKind::Absolute => err!(MissingScheme, input = uri),
        _ => "",
    };

    let mut authority = None;
    if let Some(after) = rest.strip_prefix("//") {
        let end = find_or_end(after, |c| matches!(c, '/' | '?' | '#'));
        if end == 0 && after.starts_with('/') {
            // A lone '/' before the query or fragment is the root path.
            let path_end = find_or_end(after, |c| matches!(c, '?' | '#'));
            if path_end > 1 {
                err!(EmptyAuthorityWithSlash, input = uri);
            }
        }
        authority = Some(&after[..end]);
        rest = &after[end..];
    }

    let end = find_or_end(rest, |c| matches!(c, '?' | '#'));
    let path = &rest[..end];
    rest = &rest[end..];

    let end = if rest.starts_with('?') {
        find_or_end(rest, |c| c == '#')
    } else {
        0
    };
    let query = &rest[..end];
    let fragment = &rest[end..];

    Ok(Parts {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}
