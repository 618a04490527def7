//! # vouch-schemagen
//!
//! Ahead-of-time twin of the `vouch-validator` Walker. Given a Rust source
//! file and the names of structs declared at its top level, it emits:
//!
//! - an `impl TypeValidate` per struct that visits the same fields in the
//!   same order as a walk would, type phase first, then cross-field hooks;
//! - a shape lock that stops compiling once the struct's fields change;
//! - optionally an opaque `impl Reflect`, so generated types still take part
//!   in dynamic walks.
//!
//! The artifact is meant to be `include!`d in the module that declares the
//! types:
//!
//! ```rust,ignore
//! // models.rs
//! pub struct User { pub name: required::NonEmpty<String> }
//!
//! include!("models.schema.rs");
//! ```
//!
//! ```rust
//! use std::path::Path;
//! use vouch_schemagen::{Generator, GeneratorConfig, SourceModule};
//!
//! let module = SourceModule::parse(
//!     Path::new("models.rs"),
//!     "pub struct User { pub name: required::NonEmpty<String>, pub age: u8 }",
//! )?;
//! let code = Generator::new(GeneratorConfig::default()).generate(&module, &["User".to_owned()])?;
//!
//! assert!(code.starts_with("// Code generated by \"schemagen --type User\". DO NOT EDIT."));
//! assert!(code.contains("impl ::vouch_validator::TypeValidate for User"));
//! # Ok::<(), vouch_schemagen::SchemagenError>(())
//! ```

mod config;
mod emit;
mod error;
mod generate;
mod ident;
mod lock;
mod schema;
mod source;

pub use config::GeneratorConfig;
pub use error::{Result, SchemagenError};
pub use generate::{ARTIFACT_SUFFIX, Artifact, Generator, WriteOutcome, output_path};
pub use schema::{Analysis, Capabilities, Declaration, Field, Shape};
pub use source::{Declared, SourceModule};
