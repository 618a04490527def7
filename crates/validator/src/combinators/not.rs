//! NOT combinator - logical negation of a validator
//!
//! # Examples
//!
//! ```rust
//! use vouch_validator::combinators::Not;
//! use vouch_validator::validators::Positive;
//! use vouch_validator::Validator;
//!
//! let validator = Not::<Positive>::default();
//! assert!(validator.validate(&0).is_ok());
//! assert!(validator.validate(&-14).is_ok());
//! assert!(validator.validate(&42).is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::traits::short_type_name;
use crate::foundation::{ValidationError, Validator};

/// Inverts a validator.
///
/// - If the inner validator fails, `Not` succeeds and the inner error is
///   discarded.
/// - If the inner validator succeeds, `Not` fails with a `not_failed` error
///   naming the inner validator.
pub struct Not<V> {
    _marker: PhantomData<fn() -> V>,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<V> Default for Not<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Not<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Not<V> {}

impl<V> fmt::Debug for Not<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_type_name::<Self>())
    }
}

impl<T, V> Validator<T> for Not<V>
where
    T: ?Sized,
    V: Validator<T>,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        match V::default().validate(value) {
            Err(_) => Ok(()),
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                format!("value satisfies {}", short_type_name::<V>()),
            )),
        }
    }
}
