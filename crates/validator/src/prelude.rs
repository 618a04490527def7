//! Prelude module for convenient imports.
//!
//! ```rust
//! use vouch_validator::prelude::*;
//!
//! #[derive(Reflect, Default)]
//! struct Login {
//!     user: required::Alphanumeric<String>,
//!     otp: optional::Positive<u32>,
//! }
//!
//! let mut login = Login::default();
//! login.user.parse("neo").unwrap();
//! validate(&mut login).unwrap();
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    ErrorKind, FieldPath, PathKey, TypeValidate, Validate, ValidationError, Validator,
    validate_with,
};

// ============================================================================
// CONTAINERS AND WALKER
// ============================================================================

pub use crate::optional::{self, Optional};
pub use crate::reflect::{Kind, Reflect, Visitor};
pub use crate::required::{self, Required};
pub use crate::validate;

#[cfg(feature = "derive")]
pub use vouch_validator_macros::Reflect;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, Not, Or};
