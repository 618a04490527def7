//! Core traits for the validation system
//!
//! Three traits meet here:
//!
//! - [`Validator`]: a stateless predicate over one value, used as a type
//!   parameter of the `Required`/`Optional` containers.
//! - [`TypeValidate`]: the *type phase*. Implemented by containers and by
//!   generated code; checks that every contained value satisfies its
//!   declared validator.
//! - [`Validate`]: the *cross phase*. Implemented by users for checks that
//!   relate several fields; runs only after the whole type phase succeeded.

use super::error::ValidationError;

// ============================================================================
// VALIDATOR
// ============================================================================

/// A stateless predicate over values of `T`.
///
/// Validators are zero-sized markers. They are never stored: whoever needs
/// one builds it with `V::default()` right before the call, so a validator
/// must not depend on any field state.
///
/// # Examples
///
/// ```rust
/// use vouch_validator::{ValidationError, Validator};
///
/// #[derive(Debug, Default)]
/// struct Lowercase;
///
/// impl Validator<str> for Lowercase {
///     fn validate(&self, value: &str) -> Result<(), ValidationError> {
///         if value.chars().any(char::is_uppercase) {
///             return Err(ValidationError::new("lowercase", "uppercase character found"));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(Lowercase.validate("abc").is_ok());
/// assert!(Lowercase.validate("aBc").is_err());
/// ```
pub trait Validator<T: ?Sized>: Default {
    /// Checks `value`, returning an error describing the first violation.
    fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

/// Runs a fresh `V` against `value`.
///
/// ```rust
/// use vouch_validator::{validate_with, validators::Even};
///
/// assert!(validate_with::<Even, _>(&4).is_ok());
/// assert!(validate_with::<Even, _>(&5).is_err());
/// ```
pub fn validate_with<V, T>(value: &T) -> Result<(), ValidationError>
where
    V: Validator<T>,
    T: ?Sized,
{
    V::default().validate(value)
}

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Type-phase capability.
///
/// Containers implement this by running their validator against the held
/// value; generated code implements it by calling every nested container in
/// order. It takes `&mut self` because a successful call marks containers as
/// validated.
///
/// Do not call this directly unless you are writing traversal code; use
/// [`validate`](crate::validate) on the root instead.
pub trait TypeValidate {
    /// Validates every contained value against its declared validator.
    fn type_validate(&mut self) -> Result<(), ValidationError>;
}

/// Cross-phase capability: user-defined checks that relate several fields.
///
/// Hooks run after the type phase of the whole tree succeeded, so they may
/// read any container with `get` without panicking.
///
/// ```rust
/// use vouch_validator::{Validate, ValidationError};
///
/// struct Range {
///     low: i32,
///     high: i32,
/// }
///
/// impl Validate for Range {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.low > self.high {
///             return Err(ValidationError::new("range", "low is above high"));
///         }
///         Ok(())
///     }
/// }
///
/// assert!(Range { low: 3, high: 1 }.validate().is_err());
/// ```
pub trait Validate {
    /// Runs the hook.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: TypeValidate + ?Sized> TypeValidate for Box<T> {
    fn type_validate(&mut self) -> Result<(), ValidationError> {
        (**self).type_validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        (**self).validate()
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// `std::any::type_name` with every module path stripped.
///
/// `vouch_validator::combinators::And<vouch_validator::validators::Even, ..>`
/// becomes `And<Even, ..>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    full.split_inclusive(|c: char| {
        matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*')
    })
    .map(|part| part.rsplit("::").next().unwrap_or(part))
    .collect()
}
