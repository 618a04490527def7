//! OR combinator - logical disjunction of validators
//!
//! # Examples
//!
//! ```rust
//! use vouch_validator::combinators::Or;
//! use vouch_validator::validators::{Even, Negative};
//! use vouch_validator::Validator;
//!
//! let validator = Or::<Even, Negative>::default();
//! assert!(validator.validate(&4).is_ok()); // even
//! assert!(validator.validate(&-3).is_ok()); // negative
//!
//! let err = validator.validate(&3).unwrap_err();
//! assert_eq!(err.nested.len(), 2);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{ValidationError, Validator};

/// Combines two validators with logical OR.
///
/// If the left validator passes the right one is not evaluated. If both
/// fail, the combined error keeps both failures in
/// [`nested`](ValidationError::nested), left first.
pub struct Or<A, B> {
    _marker: PhantomData<fn() -> (A, B)>,
}

impl<A, B> Or<A, B> {
    /// Creates a new `Or` combinator.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A, B> Default for Or<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Clone for Or<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for Or<A, B> {}

impl<A, B> fmt::Debug for Or<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::foundation::traits::short_type_name::<Self>())
    }
}

impl<T, A, B> Validator<T> for Or<A, B>
where
    T: ?Sized,
    A: Validator<T>,
    B: Validator<T>,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        let Err(left) = A::default().validate(value) else {
            return Ok(());
        };
        let Err(right) = B::default().validate(value) else {
            return Ok(());
        };
        Err(
            ValidationError::new("or_failed", "all alternatives failed")
                .with_nested(vec![left, right]),
        )
    }
}
