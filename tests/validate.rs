use uri_parts::{
    port::PortTable, validate, Diagnostic, DiagnosticKind, Parser, ValidationMode,
};

#[test]
fn validate_absolute() {
    let ok = |s| validate(s, ValidationMode::Absolute, None);

    assert!(ok("http://authority/path1?query#fragment").is_ok());
    assert!(ok("http:").is_ok());
    assert!(ok("http:///?q").is_ok());
    assert!(ok("mailto:John.Doe@example.com").is_ok());

    assert_eq!(ok("a/b").unwrap_err().kind(), DiagnosticKind::MissingScheme);
    assert_eq!(ok(":a").unwrap_err().kind(), DiagnosticKind::EmptyScheme);
    assert_eq!(ok("1a:b").unwrap_err().kind(), DiagnosticKind::InvalidScheme);
    assert_eq!(
        ok("http:///path").unwrap_err().kind(),
        DiagnosticKind::EmptyAuthorityWithSlash
    );
}

#[test]
fn validate_relative() {
    let ok = |s, base| validate(s, ValidationMode::Relative, base);

    assert!(ok("", None).is_ok());
    assert!(ok("../g?y#s", None).is_ok());
    assert!(ok("//g", None).is_ok());
    assert!(ok("///", None).is_ok());
    assert!(ok("http://a/b", None).is_ok());
    assert!(ok("../g", Some("http://a/b/c")).is_ok());

    assert_eq!(ok(":g", None).unwrap_err().kind(), DiagnosticKind::EmptyScheme);
    assert_eq!(ok("1g:h", None).unwrap_err().kind(), DiagnosticKind::InvalidScheme);
    assert_eq!(
        ok("///g", None).unwrap_err().kind(),
        DiagnosticKind::EmptyAuthorityWithSlash
    );

    // A base is checked when given.
    assert_eq!(
        ok("g", Some("not/absolute")).unwrap_err().kind(),
        DiagnosticKind::MissingScheme
    );
}

#[test]
fn validate_either() {
    let ok = |s| validate(s, ValidationMode::Either, None);

    assert!(ok("http://a/b").is_ok());
    assert!(ok("a/b?c").is_ok());
    assert!(ok("#f").is_ok());

    let err = ok("1http://authority/path").unwrap_err();
    assert_eq!(err.kind(), DiagnosticKind::CompositeFailure);
    assert!(err.contains(DiagnosticKind::InvalidScheme));
    assert!(!err.contains(DiagnosticKind::MissingScheme));
    assert_eq!(
        err.to_string(),
        r#"invalid scheme "1http"; invalid scheme "1http""#
    );

    let err = ok("x:///y").unwrap_err();
    let causes = err.causes();
    assert_eq!(causes.len(), 2);
    assert!(causes
        .iter()
        .all(|d| d.kind() == DiagnosticKind::EmptyAuthorityWithSlash));
}

#[test]
fn validate_either_with_base() {
    let err = validate("g", ValidationMode::Either, Some("relative/base")).unwrap_err();
    assert_eq!(
        err,
        Diagnostic::CompositeFailure {
            relative: Box::new(Diagnostic::MissingScheme {
                input: "relative/base".into()
            }),
            absolute: Box::new(Diagnostic::MissingScheme { input: "g".into() }),
        }
    );
    assert_eq!(
        err.to_string(),
        r#"missing scheme in absolute URI "relative/base"; missing scheme in absolute URI "g""#
    );

    assert!(validate("g", ValidationMode::Either, Some("http://a/")).is_ok());
}

#[test]
fn validate_ignores_default_ports() {
    let parser = Parser::new().default_ports(PortTable::new());
    assert!(parser
        .validate("http://h:80/", ValidationMode::Absolute, None)
        .is_ok());
}

#[cfg(feature = "std")]
#[test]
fn diagnostic_is_error() {
    fn check(_: &dyn std::error::Error) {}

    let err = validate(":x", ValidationMode::Either, None).unwrap_err();
    check(&err);
}
