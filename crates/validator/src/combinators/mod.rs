//! Validator combinators
//!
//! Combinators compose validators at the type level. They hold no state and
//! are built with `Default` like any other validator, so they can be used
//! wherever a validator type parameter is expected:
//!
//! ```rust
//! use vouch_validator::combinators::{And, Not, Or};
//! use vouch_validator::validators::{Even, Negative, Positive};
//! use vouch_validator::Required;
//!
//! type EvenOrNegative = Or<Even, Negative>;
//! type NonPositiveEven = And<Not<Positive>, Even>;
//!
//! let mut value: Required<i64, NonPositiveEven> = Required::default();
//! assert!(value.parse(-2).is_ok());
//! assert!(value.parse(4).is_err());
//! # let _ = EvenOrNegative::default();
//! ```

mod and;
mod not;
mod or;

pub use and::And;
pub use not::Not;
pub use or::Or;
