//! Transformation Tests - Attribute, getter and setter generation

use rstest::rstest;
use tsattr::{
    CodeBuilder, SymbolRecord, TransformError, TransformKind, TranspilerConfig, extract_symbols,
};

use crate::helpers::{clean_spaces, no_comments, transform};

// ============================================================================
// Attribute
// ============================================================================

#[rstest]
#[case("private foo: string = '5555';", "private __foo : string = '5555';")]
#[case("foo: string = '5555';", "private __foo : string = '5555';")]
#[case("private foo: any = '5555';", "private __foo : any = '5555';")]
#[case("public foo = '5555';", "private __foo : any = '5555';")]
#[case("public foo:string;", "private __foo : string;")]
#[case("protected static count = 0;", "private static __count : any = 0;")]
fn test_attribute(#[case] input: &str, #[case] expected: &str) {
    let out = transform(input, TransformKind::Attribute, no_comments());
    assert_eq!(clean_spaces(&out), clean_spaces(expected), "input: {input}");
}

#[test]
fn test_attribute_field_name_is_prefixed_identifier() {
    for name in ["foo", "bar_baz", "$el", "__already"] {
        let out = transform(&format!("{name}: string;"), TransformKind::Attribute, no_comments());
        assert_eq!(out, format!("private __{name}: string;"));
    }
}

#[test]
fn test_attribute_preserves_decorators() {
    let out = transform(
        "@foo() @bar() private foo: string = '5555';",
        TransformKind::Attribute,
        no_comments(),
    );
    assert_eq!(
        clean_spaces(&out),
        clean_spaces("@foo() @bar() private __foo:string='5555';")
    );
}

#[test]
fn test_greedy_value_rendering() {
    let out = transform("total: number = 1 + 2;", TransformKind::Attribute, no_comments());
    assert_eq!(out, "private __total: number = 1;+;2;");
}

// ============================================================================
// Getter
// ============================================================================

#[rstest]
#[case("private foo: string = '5555';", "public get foo(): string { return this.__foo; }")]
#[case("foo: string = '5555';", "public get foo(): string { return this.__foo; }")]
#[case("foo = '5555';", "public get foo() { return this.__foo; }")]
#[case("private foo = '5555';", "public get foo() { return this.__foo; }")]
#[case("static foo: Bar;", "public static get foo(): Bar { return this.__foo; }")]
fn test_getter(#[case] input: &str, #[case] expected: &str) {
    let out = transform(input, TransformKind::Getter, no_comments());
    assert_eq!(clean_spaces(&out), clean_spaces(expected), "input: {input}");
}

// ============================================================================
// Setter
// ============================================================================

#[rstest]
#[case("private foo: string = '5555';", "public set foo(foo: string) { this.__foo = foo; }")]
#[case("public foo = '5555';", "public set foo(foo) { this.__foo = foo; }")]
#[case("foo:string = '5555';", "public set foo(foo: string) { this.__foo = foo; }")]
#[case("foo;", "public set foo(foo) { this.__foo = foo; }")]
fn test_setter(#[case] input: &str, #[case] expected: &str) {
    let out = transform(input, TransformKind::Setter, no_comments());
    assert_eq!(clean_spaces(&out), clean_spaces(expected), "input: {input}");
}

#[test]
fn test_untyped_members_never_show_placeholder() {
    for kind in [TransformKind::Getter, TransformKind::Setter] {
        let out = transform("foo = 1;", kind, TranspilerConfig::default());
        assert!(!out.contains("any"), "{kind}: {out}");
    }
}

// ============================================================================
// Errors and degenerate records
// ============================================================================

#[test]
fn test_method_kind_is_invalid() {
    let record = extract_symbols("foo;");
    let err = CodeBuilder::new()
        .build(&record, TransformKind::Method, &TranspilerConfig::default())
        .unwrap_err();
    assert_eq!(err, TransformError::InvalidTransformationKind(TransformKind::Method));
    assert_eq!(err.to_string(), "unsupported transformation kind: method");
}

#[test]
fn test_builder_recovers_after_error() {
    let record = extract_symbols("foo: string;");
    let config = TranspilerConfig::default().with_comments(false);
    let mut builder = CodeBuilder::new();
    assert!(builder.build(&record, TransformKind::Method, &config).is_err());
    assert_eq!(
        builder.build(&record, TransformKind::Attribute, &config).unwrap(),
        "private __foo: string;"
    );
}

#[test]
fn test_default_record_still_generates() {
    let out = CodeBuilder::new()
        .build(&SymbolRecord::default(), TransformKind::Attribute, &no_comments())
        .unwrap();
    assert_eq!(out, "private __: any;");
}
