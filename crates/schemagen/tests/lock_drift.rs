//! A stale artifact stops compiling once its struct's fields change.
//!
//! Each case builds a scratch crate against the real runtime: the artifact is
//! generated from the original `Account`, the module then declares a drifted
//! one and `include!`s the stale artifact.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;
use vouch_schemagen::{Generator, SourceModule};

const ACCOUNT: &str = r#"use vouch_validator::prelude::*;

pub struct Account {
    pub owner: String,
    pub name: required::NonEmpty<String>,
}
"#;

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn artifact() -> String {
    let module = SourceModule::parse(Path::new("models.rs"), ACCOUNT).unwrap();
    Generator::default()
        .generate(&module, &["Account".to_owned()])
        .unwrap()
}

fn scratch_crate(models: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let runtime = Path::new(env!("CARGO_MANIFEST_DIR")).join("../validator");
    let manifest = format!(
        "[package]\n\
         name = \"lock-drift\"\n\
         version = \"0.0.0\"\n\
         edition = \"2024\"\n\
         publish = false\n\n\
         [dependencies]\n\
         vouch-validator = {{ path = {:?} }}\n\n\
         [workspace]\n",
        runtime.display().to_string(),
    );
    fs::write(dir.path().join("Cargo.toml"), manifest).unwrap();
    let lockfile = workspace_root().join("Cargo.lock");
    if lockfile.is_file() {
        fs::copy(lockfile, dir.path().join("Cargo.lock")).unwrap();
    }

    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("lib.rs"), "#![allow(dead_code, unused_imports)]\nmod models;\n").unwrap();
    fs::write(
        src.join("models.rs"),
        format!("{models}\ninclude!(\"models.schema.rs\");\n"),
    )
    .unwrap();
    fs::write(src.join("models.schema.rs"), artifact()).unwrap();
    dir
}

fn cargo_check(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.current_dir(dir)
        .args(["check", "--offline", "--quiet", "--message-format", "short"])
        .env("CARGO_TARGET_DIR", workspace_root().join("target/lock-drift"))
        .env_remove("RUSTFLAGS");
    cmd
}

#[test]
fn current_artifact_compiles() {
    let dir = scratch_crate(ACCOUNT);
    cargo_check(dir.path()).assert().success();
}

#[rstest]
#[case::renamed("pub owner: String", "pub holder: String", "E0026")]
#[case::retyped("pub owner: String", "pub owner: u64", "E0277")]
#[case::added("pub owner: String,", "pub owner: String,\n    pub extra: u8,", "E0027")]
#[case::removed("pub owner: String,", "", "E0026")]
#[case::boxed(
    "pub name: required::NonEmpty<String>",
    "pub name: Box<required::NonEmpty<String>>",
    "E0277"
)]
fn drifted_struct_fails_to_compile(#[case] from: &str, #[case] to: &str, #[case] code: &str) {
    let drifted = ACCOUNT.replace(from, to);
    assert_ne!(drifted, ACCOUNT);

    let dir = scratch_crate(&drifted);
    cargo_check(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("error[{code}]")))
        .stderr(predicate::str::contains("models.schema.rs"));
}
