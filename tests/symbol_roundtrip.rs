//! Round-trip tests: a symbol built only from built-in mixins survives encode → decode unchanged.

use std::collections::BTreeMap;

use symgraph::mixin::builtins::{
    Availability, AvailabilityItem, ConstraintKind, DeclarationFragments, ExtensionContext, FunctionParameter,
    FunctionSignature, GenericConstraint, GenericParameter, GenericSignature, Location, Mutability,
    SemanticVersion, Snippet, Spi,
};
use symgraph::{
    AccessLevel, DocComment, Fragment, Identifier, Kind, KindIdentifier, LineEntry, Names, Position,
    RegistryContext, SourceRange, Symbol, decode_symbol, encode_symbol, encode_symbol_pretty,
};

fn fragments(parts: &[(&str, &str)]) -> Vec<Fragment> {
    parts.iter().map(|(kind, spelling)| Fragment::new(*kind, *spelling)).collect()
}

fn fully_loaded() -> Symbol {
    let names = Names {
        title: "map(_:)".to_string(),
        navigator: Some(fragments(&[("identifier", "map")])),
        sub_heading: Some(fragments(&[("keyword", "func"), ("text", " "), ("identifier", "map")])),
        prose: None,
    };
    let doc_comment = DocComment::new(vec![
        LineEntry::new("Transforms each element.")
            .with_range(SourceRange::new(Position::new(9, 8), Position::new(9, 32))),
        LineEntry::new(""),
    ])
    .with_module("Demo")
    .with_uri("file:///Sources/Demo/Box.swift");

    let mut slices = BTreeMap::new();
    slices.insert("call".to_string(), 1..2);

    Symbol::new(
        Identifier::new("s:4Demo3BoxV3mapyACyqd__Gqd__xXEs5ErrorRd__lF", "swift"),
        Kind::from(KindIdentifier::METHOD),
        vec!["Box".to_string(), "map(_:)".to_string()],
        names,
        AccessLevel::PUBLIC,
    )
    .with_type_reference("s:4Demo3BoxV")
    .with_doc_comment(doc_comment)
    .with_mixin(Availability {
        items: vec![
            AvailabilityItem {
                domain: Some("macOS".to_string()),
                introduced: Some(SemanticVersion::new(13, 0, 0)),
                ..Default::default()
            },
            AvailabilityItem {
                domain: Some("watchOS".to_string()),
                is_unconditionally_unavailable: true,
                message: Some("Not on the wrist.".to_string()),
                ..Default::default()
            },
        ],
    })
    .with_mixin(DeclarationFragments {
        fragments: fragments(&[("keyword", "func"), ("text", " "), ("identifier", "map")]),
    })
    .with_mixin(Mutability(false))
    .with_mixin(ExtensionContext {
        extended_module: "Demo".to_string(),
        type_kind: Some(KindIdentifier::STRUCT),
        constraints: vec![],
    })
    .with_mixin(GenericSignature {
        parameters: vec![GenericParameter {
            name: "U".to_string(),
            index: 0,
            depth: 1,
        }],
        constraints: vec![GenericConstraint {
            kind: ConstraintKind::Conformance,
            lhs: "U".to_string(),
            rhs: "Sendable".to_string(),
        }],
    })
    .with_mixin(Location {
        uri: "file:///Sources/Demo/Box.swift".to_string(),
        position: Position::new(10, 4),
    })
    .with_mixin(FunctionSignature {
        parameters: vec![FunctionParameter {
            name: "_".to_string(),
            internal_name: Some("transform".to_string()),
            declaration_fragments: fragments(&[("identifier", "transform")]),
        }],
        returns: fragments(&[("typeIdentifier", "Box")]),
    })
    .with_mixin(Spi(false))
    .with_mixin(Snippet {
        language: Some("swift".to_string()),
        lines: vec!["let b = Box(1)".to_string(), "b.map { $0 + 1 }".to_string()],
        slices,
    })
}

#[test]
fn builtin_only_symbol_round_trips() {
    let context = RegistryContext::new();
    let symbol = fully_loaded();
    assert_eq!(symbol.mixin_keys().count(), 9);

    let bytes = encode_symbol(&symbol, &context).unwrap();
    let decoded = decode_symbol(&bytes, &context).unwrap();
    assert_eq!(decoded, symbol);
}

#[test]
fn encoding_is_reproducible() {
    let context = RegistryContext::new();
    let symbol = fully_loaded();
    let first = encode_symbol(&symbol, &context).unwrap();
    let second = encode_symbol(&symbol.clone(), &context).unwrap();
    assert_eq!(first, second);

    let reencoded = encode_symbol(&decode_symbol(&first, &context).unwrap(), &context).unwrap();
    assert_eq!(first, reencoded);
}

#[test]
fn canonical_pretty_form() {
    let symbol = Symbol::new(
        Identifier::new("s:4Demo1CC1myyF", "swift"),
        Kind::from(KindIdentifier::parse("swift.method")),
        vec!["C".to_string(), "m()".to_string()],
        Names::titled("m()"),
        AccessLevel::PUBLIC,
    )
    .with_mixin(Spi(false))
    .with_mixin(Mutability(true));

    let pretty = encode_symbol_pretty(&symbol, &RegistryContext::new()).unwrap();
    insta::assert_snapshot!(String::from_utf8(pretty).unwrap(), @r###"
    {
      "accessLevel": "public",
      "identifier": {
        "interfaceLanguage": "swift",
        "precise": "s:4Demo1CC1myyF"
      },
      "isReadOnly": true,
      "kind": {
        "displayName": "Instance Method",
        "identifier": "method"
      },
      "names": {
        "title": "m()"
      },
      "pathComponents": [
        "C",
        "m()"
      ],
      "spi": false
    }
    "###);
}

#[test]
fn custom_kinds_round_trip() {
    let context = RegistryContext::new();
    for token in ["x.func", "lang.widget.thing", "dictionary"] {
        let symbol = Symbol::new(
            Identifier::precise("p"),
            Kind::from(KindIdentifier::custom(token)),
            vec!["W".to_string()],
            Names::titled("W"),
            AccessLevel::INTERNAL,
        );
        let bytes = encode_symbol(&symbol, &context).unwrap();
        let decoded = decode_symbol(&bytes, &context).unwrap();
        assert_eq!(decoded, symbol, "token {token}");
        assert_eq!(decoded.kind.identifier.is_custom(), symbol.kind.identifier.is_custom());
    }
}
