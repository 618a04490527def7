//! # vouch-validator
//!
//! Declare what a valid value looks like in its type, then validate whole
//! decoded trees in one call.
//!
//! ## Quick Start
//!
//! ```rust
//! use vouch_validator::{json, optional, required, Reflect, Validate, ValidationError};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, Reflect)]
//! #[vouch(validate)]
//! struct Signup {
//!     name: required::NonEmptyPrintable<String>,
//!     age: optional::Positive<u8>,
//!     tags: Vec<required::Alphanumeric<String>>,
//! }
//!
//! impl Validate for Signup {
//!     fn validate(&self) -> Result<(), ValidationError> {
//!         // Every container is validated by now, so `get` is safe.
//!         if self.name.get() == "root" && self.age.get().is_none() {
//!             return Err(ValidationError::new("root_age", "root must state an age"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let ok: Signup = json::from_str(r#"{"name": "ada", "tags": ["math"]}"#).unwrap();
//! assert_eq!(ok.name.get(), "ada");
//!
//! let err = json::from_str::<Signup>(r#"{"name": "ada", "tags": ["a b"]}"#).unwrap_err();
//! assert_eq!(err.to_string(), "validate: .tags[0]: string contains non-alphanumeric character");
//! ```
//!
//! ## Pieces
//!
//! - [`Validator`]: stateless predicates, composed with
//!   [`And`](combinators::And), [`Or`](combinators::Or) and
//!   [`Not`](combinators::Not). Declare new ones with [`validator!`].
//! - [`Required`] / [`Optional`]: containers that pair a value with a
//!   validator and refuse to hand out unvalidated values.
//! - [`Reflect`] + [`validate`]: the Walker, which finds every container in a
//!   tree, runs the type phase, then the cross-field [`Validate`] hooks.
//! - [`json`]: decode-then-validate entry points.
//! - [`parse`]: copy a map, struct or sequence into a target type, then
//!   validate it.
//!
//! Trees can also be validated without the Walker by code generated ahead of
//! time by the `schemagen` tool; generated types implement [`TypeValidate`].

// Errors carry a path and a boxed cause; boxing them again buys nothing.
#![allow(clippy::result_large_err)]

// Lets `#[derive(Reflect)]` name `::vouch_validator` from inside this crate.
extern crate self as vouch_validator;

#[macro_use]
mod macros;

pub mod combinators;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
pub mod optional;
#[cfg(feature = "json")]
pub mod parse;
pub mod prelude;
pub mod reflect;
pub mod required;
pub mod validators;
mod walk;

pub use foundation::{
    ErrorKind, FieldPath, PathKey, Segment, TypeValidate, Validate, ValidationError, Validator,
    validate_with,
};
pub use optional::Optional;
pub use reflect::{Kind, Reflect, Visitor};
pub use required::Required;
pub use walk::validate;

/// Derives [`Reflect`] so the Walker can descend into a struct or enum.
///
/// Container attributes:
///
/// - `#[vouch(validate)]`: the type implements [`Validate`]; its hook runs in
///   the cross phase.
/// - `#[vouch(type_validate)]`: the type implements [`TypeValidate`] itself.
///   Combined with `validate`, the type becomes opaque: the Walker calls its
///   capabilities and does not visit its fields.
/// - `#[vouch(crate = "path")]`: path to this crate when it is renamed.
///
/// Field attributes:
///
/// - `#[vouch(skip)]`: never visit the field.
/// - `#[vouch(rename = "Name")]`: use `Name` in error paths.
#[cfg(feature = "derive")]
pub use vouch_validator_macros::Reflect;
