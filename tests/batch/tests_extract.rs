//! Batch Tests - Whole selections, grouping and ordering

use rstest::rstest;
use tsattr::batch::sort_by_group;
use tsattr::{
    CodeGen, LangCodeGen, LanguageStrategy, Result, TransformError, TransformKind,
    TranspiledResult, TranspilerConfig, TypeScriptCodeGen, extract_symbols, split_declarations,
};

use crate::helpers::{ALL_KINDS, clean_spaces, extract, no_comments, unsorted_transformations};

#[test]
fn test_multiline_selection() {
    let selected = " @foo()
        private data: string;
        private foo: string;
        public bar: string;";
    let expected = "
        @foo() private __data : string ;
        private __foo : string ;
        private __bar : string ;
        public get data() :string{return this.__data;}
        public get foo() :string{return this.__foo;}
        public get bar() :string{return this.__bar;}
        public set data(data : string){this.__data = data;}
        public set foo(foo : string){this.__foo = foo;}
        public set bar(bar : string){ this.__bar = bar; }";
    let result = extract(selected, &ALL_KINDS, no_comments());
    assert_eq!(clean_spaces(&result), clean_spaces(expected));
}

#[test]
fn test_exact_layout() {
    let result = extract(
        "private foo: string = 'x';",
        &ALL_KINDS,
        no_comments(),
    );
    assert_eq!(
        result,
        "private __foo: string = 'x';\n\
         public get foo(): string {\n    return this.__foo;\n}\n\
         public set foo(foo: string) {\n    this.__foo = foo;\n}"
    );
}

#[test]
fn test_initializers_survive_splitting() {
    let result = extract("a = 1; b: string = 'two';", &[TransformKind::Attribute], no_comments());
    assert_eq!(result, "private __a: any = 1;\nprivate __b: string = 'two';");
}

#[test]
fn test_nine_results_grouped_by_kind() {
    let declarations = ["first: string;", "second = 2;", "@x() third: Date;"];
    let transformations = {
        let mut list = unsorted_transformations(&declarations, &ALL_KINDS);
        sort_by_group(&mut list);
        list
    };
    assert_eq!(transformations.len(), 9);

    let kinds: Vec<_> = transformations.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TransformKind::Attribute,
            TransformKind::Attribute,
            TransformKind::Attribute,
            TransformKind::Getter,
            TransformKind::Getter,
            TransformKind::Getter,
            TransformKind::Setter,
            TransformKind::Setter,
            TransformKind::Setter,
        ]
    );

    for group in transformations.chunks(3) {
        let names: Vec<_> = group
            .iter()
            .map(|t| {
                ["first", "second", "third"]
                    .into_iter()
                    .find(|name| t.generated_text.contains(&format!("__{name}")))
                    .unwrap()
            })
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}

#[rstest]
#[case(&[TransformKind::Getter, TransformKind::Setter, TransformKind::Attribute])]
#[case(&[TransformKind::Setter, TransformKind::Attribute, TransformKind::Getter])]
#[case(&[TransformKind::Attribute, TransformKind::Getter, TransformKind::Setter])]
fn test_request_order_does_not_change_output(#[case] kinds: &[TransformKind]) {
    let selected = "a: string; b: number;";
    assert_eq!(
        extract(selected, kinds, no_comments()),
        extract(selected, &TransformKind::SUPPORTED, no_comments())
    );
}

#[rstest]
#[case("x = a < b; y = 2;", "private __x: any = a;<;b;\nprivate __y: any = 2;")]
#[case("x = a <= b; y = 2;", "private __x: any = a;<;=;b;\nprivate __y: any = 2;")]
#[case("x = a > b; y;", "private __x: any = a;>;b;\nprivate __y: any;")]
fn test_comparisons_do_not_merge_declarations(#[case] selected: &str, #[case] expected: &str) {
    assert_eq!(extract(selected, &[TransformKind::Attribute], no_comments()), expected);
}

#[test]
fn test_generic_type_keeps_its_commas() {
    let result = extract(
        "m: Map<string, number>, n",
        &[TransformKind::Attribute],
        no_comments(),
    );
    assert_eq!(result, "private __m: Map;\nprivate __n: any;");
}

#[test]
fn test_comma_separated_declarations() {
    let result = extract("foo, bar", &[TransformKind::Attribute], no_comments());
    assert_eq!(result, "private __foo: any;\nprivate __bar: any;");
}

#[test]
fn test_empty_selection() {
    assert_eq!(extract("", &ALL_KINDS, no_comments()), "");
    assert_eq!(extract("  \n ", &ALL_KINDS, no_comments()), "");
}

#[test]
fn test_no_requested_kinds() {
    assert_eq!(extract("foo; bar;", &[], no_comments()), "");
}

#[test]
fn test_invalid_kind_aborts_batch() {
    let err = TypeScriptCodeGen::generator(no_comments())
        .extract("foo; bar;", &[TransformKind::Getter, TransformKind::Method])
        .unwrap_err();
    assert_eq!(err, TransformError::InvalidTransformationKind(TransformKind::Method));
}

#[test]
fn test_comments_in_batch() {
    let result = extract("foo: string;", &[TransformKind::Getter], TranspilerConfig::default());
    assert!(result.starts_with("/**\n"));
    assert_eq!(split_declarations("foo: string; bar;").len(), 2);
}

/// A strategy that echoes each declaration back, to observe the orchestrator.
#[derive(Default)]
struct EchoStrategy {
    seen: Vec<String>,
}

impl LanguageStrategy for EchoStrategy {
    fn parse(&mut self, input: &str, kinds: &[TransformKind]) -> Result<TranspiledResult> {
        self.seen.push(input.to_string());
        Ok(TranspiledResult {
            symbols: extract_symbols(input),
            transformations: kinds
                .iter()
                .map(|&kind| tsattr::Transformation {
                    kind,
                    generated_text: format!("{kind}:{input}"),
                })
                .collect(),
        })
    }
}

#[test]
fn test_custom_strategy_sees_each_fragment() {
    let mut codegen = CodeGen::new(EchoStrategy::default());
    let out = codegen
        .extract("a; b;", &[TransformKind::Setter, TransformKind::Attribute])
        .unwrap();
    assert_eq!(codegen.strategy().seen, ["a;", "b;"]);
    assert_eq!(out, "attribute:a;\nattribute:b;\nsetter:a;\nsetter:b;");
}
