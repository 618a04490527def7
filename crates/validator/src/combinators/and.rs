//! AND combinator - logical conjunction of validators
//!
//! [`And`] runs its left validator first and only consults the right one if
//! the left passed.
//!
//! # Examples
//!
//! ```rust
//! use vouch_validator::combinators::And;
//! use vouch_validator::validators::{Even, Positive};
//! use vouch_validator::Validator;
//!
//! let validator = And::<Positive, Even>::default();
//! assert!(validator.validate(&4).is_ok());
//! assert!(validator.validate(&-4).is_err()); // fails Positive
//! assert!(validator.validate(&3).is_err()); // fails Even
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{ValidationError, Validator};

/// Combines two validators with logical AND.
///
/// Short-circuits: the error of the first failing validator is returned
/// unchanged and the right validator is never built.
///
/// # Type Parameters
///
/// * `A` - The left (first) validator type
/// * `B` - The right (second) validator type
pub struct And<A, B> {
    _marker: PhantomData<fn() -> (A, B)>,
}

impl<A, B> And<A, B> {
    /// Creates a new `And` combinator.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A, B> Default for And<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Clone for And<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for And<A, B> {}

impl<A, B> fmt::Debug for And<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::foundation::traits::short_type_name::<Self>())
    }
}

impl<T, A, B> Validator<T> for And<A, B>
where
    T: ?Sized,
    A: Validator<T>,
    B: Validator<T>,
{
    fn validate(&self, value: &T) -> Result<(), ValidationError> {
        A::default().validate(value)?;
        B::default().validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{Ascii, Even, NonEmpty, Positive};

    #[test]
    fn both_pass() {
        assert!(And::<Positive, Even>::new().validate(&2).is_ok());
    }

    #[test]
    fn left_error_is_returned_unchanged() {
        let err = And::<Positive, Even>::new().validate(&-3).unwrap_err();
        assert_eq!(err.code, "positive");
    }

    #[test]
    fn right_error_when_left_passes() {
        let err = And::<Positive, Even>::new().validate(&3).unwrap_err();
        assert_eq!(err.code, "even");
    }

    #[test]
    fn works_on_unsized_input() {
        let validator = And::<NonEmpty, Ascii>::new();
        assert!(validator.validate("abc").is_ok());
        assert_eq!(validator.validate("").unwrap_err().code, "non_empty");
        assert_eq!(validator.validate("ü").unwrap_err().code, "ascii");
    }

    #[test]
    fn debug_names_children() {
        assert_eq!(format!("{:?}", And::<Positive, Even>::new()), "And<Positive, Even>");
    }
}
