//! Numeric property validators.

use super::constraint::{Integer, Real};
use crate::ValidationError;

fn sign_error<T: Real>(code: &'static str, input: T, otherwise: &'static str) -> ValidationError {
    if input == T::zero() {
        ValidationError::new(code, "zero value")
    } else {
        ValidationError::new(code, otherwise)
    }
}

validator! {
    /// Accepts numbers strictly above zero.
    pub Positive for<T: Real> T;
    rule(input) { *input > T::zero() }
    error(input) { sign_error("positive", *input, "negative value") }
}

validator! {
    /// Accepts numbers strictly below zero.
    pub Negative for<T: Real> T;
    rule(input) { *input < T::zero() }
    error(input) { sign_error("negative", *input, "positive value") }
}

validator! {
    /// Accepts zero and numbers above it.
    pub Positive0 for<T: Real> T;
    rule(input) { *input >= T::zero() }
    error(input) { ValidationError::new("positive0", "negative value") }
}

validator! {
    /// Accepts zero and numbers below it.
    pub Negative0 for<T: Real> T;
    rule(input) { *input <= T::zero() }
    error(input) { ValidationError::new("negative0", "positive value") }
}

validator! {
    /// Accepts integers divisible by two.
    pub Even for<T: Integer> T;
    rule(input) { input.is_even() }
    error(input) { ValidationError::new("even", "odd value") }
}

validator! {
    /// Accepts integers not divisible by two.
    pub Odd for<T: Integer> T;
    rule(input) { !input.is_even() }
    error(input) { ValidationError::new("odd", "even value") }
}

validator! {
    /// Accepts any number in `[-90, 90]`.
    pub Latitude for<T: Real> T;
    rule(input) { input.to_f64().abs() <= 90.0 }
    error(input) { ValidationError::new("latitude", "invalid latitude") }
}

validator! {
    /// Accepts any number in `[-180, 180]`.
    pub Longitude for<T: Real> T;
    rule(input) { input.to_f64().abs() <= 180.0 }
    error(input) { ValidationError::new("longitude", "invalid longitude") }
}
