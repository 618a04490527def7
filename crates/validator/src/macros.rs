//! Macros for declaring validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust
//! use vouch_validator::validators::constraint::Text;
//! use vouch_validator::{validator, Required, ValidationError, Validator};
//!
//! validator! {
//!     /// Accepts strings without whitespace.
//!     pub NoSpaces for<T: Text> T;
//!     rule(input) { !input.as_ref().contains(char::is_whitespace) }
//!     error(input) { ValidationError::new("no_spaces", "whitespace found") }
//! }
//!
//! assert!(NoSpaces.validate("abc").is_ok());
//!
//! let mut handle: Required<String, NoSpaces> = Required::default();
//! assert!(handle.parse("a b").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Declares a stateless validator: a zero-sized unit struct deriving
/// `Debug, Default, Clone, Copy, PartialEq, Eq, Hash` plus its
/// [`Validator`](crate::Validator) implementation.
///
/// # Variants
///
/// **Concrete input**:
/// ```rust
/// # use vouch_validator::{validator, ValidationError};
/// validator! {
///     pub Yes for bool;
///     rule(input) { *input }
///     error(input) { ValidationError::new("yes", "must be true") }
/// }
/// ```
///
/// **Generic input**. The parameter is always `?Sized`; add bounds as plain
/// identifiers joined by `+`:
/// ```rust
/// # use vouch_validator::{validator, ValidationError};
/// validator! {
///     pub Short for<T: ToString> T;
///     rule(input) { input.to_string().len() < 8 }
///     error(input) { ValidationError::new("short", "too long") }
/// }
/// ```
///
/// `rule` must evaluate to `bool`; `error` is only evaluated when the rule
/// returned `false`.
#[macro_export]
macro_rules! validator {
    // ── Internal: the unit struct itself ─────────────────────────────────
    (@struct $(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;
    };

    // ── Generic input ────────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for<$gen:ident $(: $first:ident $(+ $rest:ident)*)?> $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name);

        impl<$gen: ?Sized $(+ $first $(+ $rest)*)?> $crate::Validator<$input> for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &$input,
            ) -> ::std::result::Result<(), $crate::ValidationError> {
                if $rule {
                    ::std::result::Result::Ok(())
                } else {
                    let $einp = $inp;
                    ::std::result::Result::Err($err)
                }
            }
        }
    };

    // ── Concrete input ───────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $crate::validator!(@struct $(#[$meta])* $vis $name);

        impl $crate::Validator<$input> for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &$input,
            ) -> ::std::result::Result<(), $crate::ValidationError> {
                if $rule {
                    ::std::result::Result::Ok(())
                } else {
                    let $einp = $inp;
                    ::std::result::Result::Err($err)
                }
            }
        }
    };
}
