//! End-to-end generator runs on in-memory and on-disk sources.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use vouch_schemagen::{Generator, GeneratorConfig, SchemagenError, SourceModule, WriteOutcome};

const MODELS: &str = r#"
use vouch_validator::prelude::*;

pub struct Address {
    pub street: required::NonEmpty<String>,
    pub note: String,
}

pub struct Person {
    #[vouch(rename = "fullName")]
    pub name: required::NonEmptyPrintable<String>,
    pub nickname: String,
    pub home: Option<Address>,
    pub previous: Vec<Address>,
    pub scores: std::collections::BTreeMap<String, Vec<optional::Even<u32>>>,
}

pub enum Role { Admin }

pub type People = Vec<Person>;
"#;

fn run(types: &[&str]) -> Result<String, SchemagenError> {
    let module = SourceModule::parse(Path::new("models.rs"), MODELS)?;
    let types: Vec<String> = types.iter().map(|name| (*name).to_owned()).collect();
    Generator::new(GeneratorConfig::default()).generate(&module, &types)
}

#[test]
fn output_is_byte_identical_across_runs() {
    let first = run(&["Person"]).unwrap();
    let second = run(&["Person"]).unwrap();
    assert_eq!(first, second);
    syn::parse_file(&first).unwrap();
}

#[test]
fn header_names_the_requested_types_only() {
    let code = run(&["Person", "Person"]).unwrap();
    let first_line = code.lines().next().unwrap();
    assert_eq!(
        first_line,
        "// Code generated by \"schemagen --type Person\". DO NOT EDIT."
    );
}

#[test]
fn bearing_dependencies_are_generated_after_requested_types() {
    let code = run(&["Person"]).unwrap();
    let person = code.find("TypeValidate for Person").unwrap();
    let address = code.find("TypeValidate for Address").unwrap();
    assert!(person < address);
}

#[test]
fn fields_without_capability_produce_no_code() {
    let code = run(&["Person"]).unwrap();
    assert!(code.contains(r#".field("fullName")"#));
    assert!(!code.contains(r#".field("nickname")"#));
    assert!(!code.contains(r#".field("note")"#));
}

#[test]
fn nullable_fields_are_checked_before_descent() {
    let code = run(&["Person"]).unwrap();
    assert!(code.contains("if let ::core::option::Option::Some(p1) = &mut self.home {"));
}

#[test]
fn loop_variables_are_unique_within_a_run() {
    let code = run(&["Person"]).unwrap();
    for binding in ["(i1, v2)", "(k1, v3)", "(i2, v4)"] {
        assert_eq!(code.matches(binding).count(), 1, "{binding}");
    }
}

#[test]
fn shape_lock_lists_every_field() {
    let code = run(&["Address"]).unwrap();
    assert!(code.contains("let Address { street: f0, note: f1 } = value;"));
}

#[rstest]
#[case::unknown(&["Missing"], "unknown type: Missing")]
#[case::enumeration(&["Role"], "unsupported type `Role`: enums are not supported")]
#[case::alias(&["People"], "unsupported type `People`: type aliases are not supported; request the aliased struct")]
fn requested_name_must_be_a_struct(#[case] types: &[&str], #[case] expected: &str) {
    assert_eq!(run(types).unwrap_err().to_string(), expected);
}

#[test]
fn unparsable_source_is_fatal() {
    let err = SourceModule::parse(Path::new("broken.rs"), "pub struct {").unwrap_err();
    assert!(matches!(err, SchemagenError::Parse { .. }));
}

#[test]
fn write_then_check_detects_drift() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("models.rs");
    fs::write(&source, MODELS).unwrap();
    let generator = Generator::default();
    let types = ["Person".to_owned()];

    let artifact = generator.render(&source, &types, None).unwrap();
    assert_eq!(artifact.path, dir.path().join("models.schema.rs"));
    assert!(matches!(artifact.check(), Err(SchemagenError::Stale { .. })));

    assert_eq!(artifact.write().unwrap(), WriteOutcome::Written);
    assert_eq!(artifact.write().unwrap(), WriteOutcome::Unchanged);
    artifact.check().unwrap();

    fs::write(&source, MODELS.replace("pub note: String", "pub note: u32")).unwrap();
    let drifted = generator.render(&source, &types, None).unwrap();
    assert!(matches!(drifted.check(), Err(SchemagenError::Stale { .. })));
}

#[test]
fn failed_generation_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("models.rs");
    fs::write(&source, MODELS).unwrap();

    let err = Generator::default()
        .render(&source, &["Nope".to_owned()], Some(&dir.path().join("out")))
        .unwrap_err();
    assert!(matches!(err, SchemagenError::UnknownType { .. }));
    assert!(!dir.path().join("out").exists());
}
