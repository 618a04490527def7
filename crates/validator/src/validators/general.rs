//! Validators that apply to almost any type.

use super::constraint::Length;
use crate::ValidationError;

validator! {
    /// Accepts every value.
    pub Any for<T> T;
    rule(input) { true }
    error(input) { ValidationError::new("any", "unreachable") }
}

validator! {
    /// Accepts only the zero value (`T::default()`).
    pub Zero for<T: PartialEq + Default> T;
    rule(input) { *input == T::default() }
    error(input) { ValidationError::new("zero", "non-zero value") }
}

validator! {
    /// Rejects the zero value (`T::default()`): `0`, `""`, `false`, ...
    pub NonZero for<T: PartialEq + Default> T;
    rule(input) { *input != T::default() }
    error(input) { ValidationError::new("non_zero", "zero value") }
}

validator! {
    /// Accepts strings and collections with at least one element.
    pub NonEmpty for<T: Length> T;
    rule(input) { input.length() > 0 }
    error(input) { ValidationError::new("non_empty", "empty value") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Validator;
    use std::collections::HashMap;

    #[test]
    fn any_accepts_everything() {
        assert!(Any.validate("").is_ok());
        assert!(Any.validate(&f64::NAN).is_ok());
    }

    #[test]
    fn zero_and_non_zero() {
        assert!(Zero.validate(&0u8).is_ok());
        assert!(Zero.validate(&1u8).is_err());
        assert!(NonZero.validate(&String::from("a")).is_ok());
        assert_eq!(NonZero.validate(&String::new()).unwrap_err().message, "zero value");
        assert!(NonZero.validate(&false).is_err());
    }

    #[test]
    fn non_empty_over_lengths() {
        assert!(NonEmpty.validate("a").is_ok());
        assert!(NonEmpty.validate("").is_err());
        assert!(NonEmpty.validate(&vec![1]).is_ok());
        assert!(NonEmpty.validate(&Vec::<u8>::new()).is_err());
        assert!(NonEmpty.validate(&HashMap::<u8, u8>::new()).is_err());
        assert!(NonEmpty.validate(&[0u8; 0]).is_err());
    }
}
