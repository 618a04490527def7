//! Core validation types and traits
//!
//! This module contains the fundamental building blocks shared by every other
//! part of the crate:
//!
//! - **Traits**: [`Validator`], [`TypeValidate`], [`Validate`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//! - **Paths**: [`FieldPath`], [`Segment`], [`PathKey`]
//!
//! # Two phases
//!
//! Validation of a tree happens in two phases. The *type phase* checks every
//! container against its declared validator and marks it validated. The
//! *cross phase* runs user hooks that relate fields to each other; it only
//! starts once the type phase of the whole tree succeeded, so hooks can read
//! any container safely.
//!
//! ```rust
//! use vouch_validator::foundation::{ErrorKind, FieldPath, ValidationError};
//!
//! let error = ValidationError::missing_value().within(&FieldPath::root().field("id"));
//! assert_eq!(error.kind, ErrorKind::MissingValue);
//! assert_eq!(error.to_string(), ".id: missing required value");
//! ```

pub mod error;
pub mod path;
pub mod traits;

pub use error::{ErrorKind, ValidationError};
pub use path::{FieldPath, PathKey, Segment};
pub use traits::{TypeValidate, Validate, Validator, validate_with};
