use uri_parts::{
    parse, port::PortTable, resolve, resolve::Resolver, split, Components, Diagnostic,
    DiagnosticKind, Parser, RefKind,
};

trait Test {
    fn pass(&self, r: &str, expected: &str);
}

impl Test for &str {
    #[track_caller]
    fn pass(&self, r: &str, expected: &str) {
        let target = parse(r, false, Some(*self)).unwrap();
        assert_eq!(target.to_string(), expected, "reference: {r:?}");

        // Resolving split components gives the same target.
        let base = split(self, RefKind::Absolute).unwrap();
        let reference = split(r, RefKind::Relative).unwrap();
        assert_eq!(resolve(&base, &reference).unwrap(), target, "reference: {r:?}");

        let resolver = Resolver::with_base(*self).unwrap();
        assert_eq!(resolver.resolve(r).unwrap(), target, "reference: {r:?}");
    }
}

#[test_log::test]
fn resolve_normal() {
    // Examples from Section 5.4.1 of RFC 3986, with rooted paths.
    let base = "http://a/b/c/d;p?q";

    base.pass("g:h", "g:/h");
    base.pass("g", "http://a/b/c/g");
    base.pass("./g", "http://a/b/c/g");
    base.pass("g/", "http://a/b/c/g/");
    base.pass("/g", "http://a/g");
    base.pass("//g", "http://g/");
    base.pass("?y", "http://a/b/c/d;p?y");
    base.pass("g?y", "http://a/b/c/g?y");
    base.pass("#s", "http://a/b/c/d;p?q#s");
    base.pass("g#s", "http://a/b/c/g#s");
    base.pass("g?y#s", "http://a/b/c/g?y#s");
    base.pass(";x", "http://a/b/c/;x");
    base.pass("g;x", "http://a/b/c/g;x");
    base.pass("g;x?y#s", "http://a/b/c/g;x?y#s");
    base.pass("", "http://a/b/c/d;p?q");
    base.pass(".", "http://a/b/c/");
    base.pass("./", "http://a/b/c/");
    base.pass("..", "http://a/b/");
    base.pass("../", "http://a/b/");
    base.pass("../g", "http://a/b/g");
    base.pass("../..", "http://a/");
    base.pass("../../", "http://a/");
    base.pass("../../g", "http://a/g");
}

#[test_log::test]
fn resolve_abnormal() {
    // Examples from Section 5.4.2 of RFC 3986.
    let base = "http://a/b/c/d;p?q";

    base.pass("../../../g", "http://a/g");
    base.pass("../../../../g", "http://a/g");

    base.pass("/./g", "http://a/g");
    base.pass("/../g", "http://a/g");
    base.pass("g.", "http://a/b/c/g.");
    base.pass(".g", "http://a/b/c/.g");
    base.pass("g..", "http://a/b/c/g..");
    base.pass("..g", "http://a/b/c/..g");

    base.pass("./../g", "http://a/b/g");
    base.pass("./g/.", "http://a/b/c/g/");
    base.pass("g/./h", "http://a/b/c/g/h");
    base.pass("g/../h", "http://a/b/c/h");
    base.pass("g;x=1/./y", "http://a/b/c/g;x=1/y");
    base.pass("g;x=1/../y", "http://a/b/c/y");

    base.pass("g?y/./x", "http://a/b/c/g?y/./x");
    base.pass("g?y/../x", "http://a/b/c/g?y/../x");
    base.pass("g#s/./x", "http://a/b/c/g#s/./x");
    base.pass("g#s/../x", "http://a/b/c/g#s/../x");

    // Strict parsers take the scheme of the reference.
    base.pass("http:g", "http:/g");
}

#[test]
fn resolve_components() {
    let base = "http://a/b/c/d;p?q";
    let path = |r: &str| parse(r, false, Some(base)).unwrap().path().to_owned();

    assert_eq!(path("g"), "/b/c/g");
    assert_eq!(path("./g"), "/b/c/g");
    assert_eq!(path(".."), "/b/");
    assert_eq!(path("../.."), "/");
    assert_eq!(path("../../g"), "/g");

    let c = parse("//g", false, Some(base)).unwrap();
    assert_eq!(c.scheme(), "http");
    assert_eq!(c.authority(), "g");
    assert_eq!(c.path(), "/");

    let c = parse("//user:pw@g:8080/x", false, Some(base)).unwrap();
    assert_eq!(c.username(), "user");
    assert_eq!(c.password(), "pw");
    assert_eq!(c.host(), "g");
    assert_eq!(c.port(), "8080");

    // The default port of the inherited scheme is suppressed.
    let c = parse("//g:80/x", false, Some(base)).unwrap();
    assert_eq!(c.authority(), "g:80");
    assert_eq!(c.port(), "");
}

#[test]
fn resolve_absolute_reference_is_unchanged() {
    for base in ["http://a/b/c/d;p?q", "foo:bar", "https://x.org:8443"] {
        for r in [
            "https://example.com:443/a/b?c#d",
            "ftp://user@ftp.example.com/pub/file.txt",
            "mailto:John.Doe@example.com",
            "urn:isbn:0451450523?q",
        ] {
            let target = parse(r, false, Some(base)).unwrap();
            assert_eq!(target, parse(r, true, None).unwrap(), "{base:?} {r:?}");
        }
    }
}

#[test]
fn resolve_absolute_reference_without_base_scheme() {
    let relative_base = split("b/c", RefKind::Relative).unwrap();
    for r in [
        "https://example.com/a",
        "HTTP://Example.com:80/./b/../c?q#f",
        "mailto:John.Doe@example.com",
    ] {
        let reference = split(r, RefKind::Relative).unwrap();
        let expected = parse(r, false, Some("http://unused/")).unwrap();

        assert_eq!(resolve(&Components::default(), &reference).unwrap(), expected, "{r:?}");
        assert_eq!(resolve(&relative_base, &reference).unwrap(), expected, "{r:?}");
    }

    let c = resolve(
        &Components::default(),
        &split("https://example.com/a", RefKind::Absolute).unwrap(),
    )
    .unwrap();
    assert_eq!(c.to_string(), "https://example.com/a");
}

#[test]
fn resolve_opaque_base() {
    let base = "foo:bar";

    base.pass("", "foo:/bar");
    base.pass("#baz", "foo:/bar#baz");
    base.pass("baz", "foo:/baz");
    base.pass("?q", "foo:/bar?q");
    base.pass("http://example.com/", "http://example.com/");
    base.pass("bar:baz", "bar:/baz");
}

#[test]
fn resolve_empty_base_path() {
    let base = "http://a";

    base.pass("g", "http://a/g");
    base.pass("", "http://a/");
    base.pass("?y", "http://a/?y");
    base.pass("../g", "http://a/g");

    let base = "http://a?q#f";
    // The fragment of the base is never inherited.
    base.pass("", "http://a/?q");
}

#[test]
fn resolve_double_slash_path() {
    let base = "foo:/";

    let c = parse(".//@@", false, Some(base)).unwrap();
    assert!(!c.has_authority());
    assert_eq!(c.path(), "//@@");
    assert_eq!(c.to_string(), "foo:/.//@@");
}

#[test]
fn resolver_owned_base() {
    let resolver = Resolver::with_base(String::from("http://example.com/foo/bar")).unwrap();
    assert_eq!(resolver.base(), "http://example.com/foo/bar");
    assert_eq!(
        resolver.resolve("baz#x").unwrap().to_string(),
        "http://example.com/foo/baz#x"
    );

    let r = split("../qux", RefKind::Relative).unwrap();
    assert_eq!(
        resolver.resolve_components(&r).unwrap().to_string(),
        "http://example.com/qux"
    );
}

#[test]
fn resolver_default_ports() {
    let ports = PortTable::new().with("foo", 4673);

    let resolver = Resolver::with_base("foo://h:4673/x").unwrap();
    assert_eq!(resolver.resolve("y").unwrap().port(), "4673");

    let resolver = resolver.default_ports(&ports);
    let c = resolver.resolve("y").unwrap();
    assert_eq!(c.port(), "");
    assert_eq!(c.authority(), "h:4673");
    assert_eq!(c.to_string(), "foo://h:4673/y");
}

#[test]
fn resolve_error() {
    let e = Resolver::with_base("/no/scheme").unwrap_err();
    assert_eq!(e.kind(), DiagnosticKind::MissingScheme);

    let resolver = Resolver::with_base("http://a/b").unwrap();
    assert_eq!(
        resolver.resolve("1g:h").unwrap_err(),
        Diagnostic::InvalidScheme {
            scheme: "1g".into()
        }
    );
    assert_eq!(
        resolver.resolve("///g").unwrap_err().kind(),
        DiagnosticKind::EmptyAuthorityWithSlash
    );

    // A base without a scheme cannot be resolved against.
    let base = split("b/c", RefKind::Relative).unwrap();
    let r = split("g", RefKind::Relative).unwrap();
    assert_eq!(
        resolve(&base, &r).unwrap_err(),
        Diagnostic::UnresolvableReference {
            reference: "g".into()
        }
    );
    assert_eq!(
        resolve(&Components::default(), &r).unwrap_err().kind(),
        DiagnosticKind::UnresolvableReference
    );
}

#[test]
fn parser_resolver_holds_the_base() {
    let parser = Parser::new().default_ports(PortTable::new().with("foo", 4673));
    assert_eq!(
        parser.parse("y", false, None).unwrap_err(),
        Diagnostic::UnresolvableReference {
            reference: "y".into()
        }
    );

    let resolver = parser.resolver("foo://h:4673/x/").unwrap();
    for (r, expected) in [("y", "/x/y"), ("../z", "/z"), ("", "/x/")] {
        let c = resolver.resolve(r).unwrap();
        assert_eq!(c.path(), expected, "{r:?}");
        assert_eq!(c.port(), "");
    }
}
