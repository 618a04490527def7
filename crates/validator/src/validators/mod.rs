//! Built-in validators
//!
//! A representative set of stateless validators. Each one is a unit struct
//! usable as the `V` parameter of [`Required`](crate::Required) and
//! [`Optional`](crate::Optional), or composed with the
//! [combinators](crate::combinators).
//!
//! # Categories
//!
//! - **General**: [`Any`], [`Zero`], [`NonZero`], [`NonEmpty`]
//! - **Numeric**: [`Positive`], [`Negative`], [`Positive0`], [`Negative0`],
//!   [`Even`], [`Odd`], [`Latitude`], [`Longitude`]
//! - **Text**: [`Ascii`], [`Printable`], [`Alphanumeric`],
//!   [`NonEmptyPrintable`]
//! - **Collection**: [`Unique`]
//!
//! # Examples
//!
//! ```rust
//! use vouch_validator::validators::{Latitude, NonEmpty, Unique};
//! use vouch_validator::Validator;
//!
//! assert!(NonEmpty.validate("x").is_ok());
//! assert!(Latitude.validate(&91.0).is_err());
//! assert!(Unique.validate(&vec![1, 2, 2]).is_err());
//! ```

pub mod constraint;

mod elements;
mod general;
mod pattern;
mod properties;

pub use elements::Unique;
pub use general::{Any, NonEmpty, NonZero, Zero};
pub use pattern::{Alphanumeric, Ascii, NonEmptyPrintable, Printable};
pub use properties::{Even, Latitude, Longitude, Negative, Negative0, Odd, Positive, Positive0};
