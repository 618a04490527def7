//! Values that must be present and valid
//!
//! [`Required<T, V>`](Required) holds a value of `T` that must be present and
//! must satisfy the validator `V`. A container moves through three states:
//!
//! | State | Reached by |
//! |-------|------------|
//! | empty | `default()`, decoding `null` or a missing field, `load(None)` |
//! | present, unvalidated | decoding, `from_str`, `load(Some(_))` |
//! | validated | a successful `type_validate` or `parse` |
//!
//! Reading the value of a container that was never validated is a
//! programmer error and panics; validation failures are returned as errors.
//!
//! The aliases in this module pair `Required` with one built-in validator:
//!
//! ```rust
//! use vouch_validator::required;
//!
//! let mut port = required::Positive::<u16>::default();
//! port.parse(8080).unwrap();
//! assert_eq!(*port.get(), 8080);
//!
//! assert!(port.parse(0).is_err());
//! assert_eq!(*port.get(), 8080); // a failed parse leaves the value untouched
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::traits::short_type_name;
use crate::foundation::{TypeValidate, ValidationError, Validator};
use crate::reflect::{Kind, Reflect};
use crate::validators;

/// A value that must be present and satisfy `V`.
pub struct Required<T, V> {
    value: Option<T>,
    validated: bool,
    _validator: PhantomData<fn() -> V>,
}

impl<T, V> Required<T, V> {
    /// An empty container.
    pub const fn new() -> Self {
        Self {
            value: None,
            validated: false,
            _validator: PhantomData,
        }
    }

    /// Stores `value` without validating it, as decoding does.
    ///
    /// The container becomes unvalidated even if it was validated before.
    pub fn load(&mut self, value: Option<T>) {
        self.value = value;
        self.validated = false;
    }

    /// Returns `true` if a value is present, validated or not.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` once the type phase succeeded for the current value.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// The validated value.
    ///
    /// # Panics
    ///
    /// If the container was not validated since its value was last set.
    pub fn get(&self) -> &T {
        match (&self.value, self.validated) {
            (Some(value), true) => value,
            _ => panic!("called get() on unvalidated value"),
        }
    }

    /// Consumes the container, returning the validated value.
    ///
    /// # Panics
    ///
    /// If the container was not validated since its value was last set.
    pub fn into_inner(self) -> T {
        match (self.value, self.validated) {
            (Some(value), true) => value,
            _ => panic!("called into_inner() on unvalidated value"),
        }
    }
}

impl<T, V> Required<T, V>
where
    T: Reflect,
    V: Validator<T>,
{
    /// Converts `source`, validates it and, only on success, replaces the
    /// current value.
    ///
    /// ```rust
    /// use vouch_validator::{required, ErrorKind};
    ///
    /// let mut small = required::Even::<u8>::default();
    /// let err = small.parse(1000i64).unwrap_err();
    /// assert_eq!(err.kind, ErrorKind::Parse);
    /// assert!(err.to_string().starts_with("cannot convert i64 to u8"));
    /// assert!(!small.has_value());
    /// ```
    pub fn parse<S>(&mut self, source: S) -> Result<(), ValidationError>
    where
        S: TryInto<T>,
        S::Error: fmt::Display,
    {
        let value = convert::<S, T>(source)?;
        let mut scratch = Self::new();
        scratch.value = Some(value);
        scratch.type_validate()?;
        *self = scratch;
        Ok(())
    }

    /// Like [`parse`](Self::parse), but `None` is an error of kind
    /// [`Parse`](crate::ErrorKind::Parse).
    pub fn parse_option<S>(&mut self, source: Option<S>) -> Result<(), ValidationError>
    where
        S: TryInto<T>,
        S::Error: fmt::Display,
    {
        match source {
            Some(source) => self.parse(source),
            None => Err(ValidationError::parse_nil()),
        }
    }

    /// Builds a validated container from `source`.
    pub fn try_new<S>(source: S) -> Result<Self, ValidationError>
    where
        S: TryInto<T>,
        S::Error: fmt::Display,
    {
        let mut container = Self::new();
        container.parse(source)?;
        Ok(container)
    }

    /// [`parse`](Self::parse) that panics on error.
    ///
    /// # Panics
    ///
    /// If conversion or validation fails.
    pub fn must_parse<S>(&mut self, source: S)
    where
        S: TryInto<T>,
        S::Error: fmt::Display,
    {
        if let Err(error) = self.parse(source) {
            panic!("must_parse failed: {error}");
        }
    }
}

pub(crate) fn convert<S, T>(source: S) -> Result<T, ValidationError>
where
    S: TryInto<T>,
    S::Error: fmt::Display,
{
    source.try_into().map_err(|error| {
        ValidationError::unconvertible(&short_type_name::<S>(), &short_type_name::<T>(), error)
    })
}

impl<T, V> TypeValidate for Required<T, V>
where
    T: Reflect,
    V: Validator<T>,
{
    fn type_validate(&mut self) -> Result<(), ValidationError> {
        let Some(value) = self.value.as_mut() else {
            return Err(ValidationError::missing_value());
        };
        V::default().validate(value)?;
        crate::walk::validate_nested(value)?;
        self.validated = true;
        Ok(())
    }
}

impl<T, V> Reflect for Required<T, V>
where
    T: Reflect,
    V: Validator<T>,
{
    fn kind(&self) -> Kind {
        Kind::Leaf
    }

    fn as_type_validate(&mut self) -> Option<&mut dyn TypeValidate> {
        Some(self)
    }
}

// ============================================================================
// STANDARD TRAITS
// ============================================================================

impl<T, V> Default for Required<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, V> Clone for Required<T, V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            validated: self.validated,
            _validator: PhantomData,
        }
    }
}

impl<T: fmt::Debug, V> fmt::Debug for Required<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Required")
            .field("value", &self.value)
            .field("validated", &self.validated)
            .finish()
    }
}

impl<T: PartialEq, V> PartialEq for Required<T, V> {
    /// Compares the held values only.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, V> Eq for Required<T, V> {}

impl<T: FromStr, V> FromStr for Required<T, V> {
    type Err = T::Err;

    /// Decodes without validating.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut container = Self::new();
        container.load(Some(s.parse()?));
        Ok(container)
    }
}

impl<T: Serialize, V> Serialize for Required<T, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, V> Deserialize<'de> for Required<T, V> {
    /// Decodes without validating; `null` and a missing field decode as
    /// empty.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut container = Self::new();
        container.load(Option::<T>::deserialize(deserializer)?);
        Ok(container)
    }
}

// ============================================================================
// ALIASES
// ============================================================================

macro_rules! aliases {
    ($container:ident: $($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($container), "` checked by [`validators::", stringify!($name), "`].")]
            pub type $name<T> = $container<T, validators::$name>;
        )*
    };
}
pub(crate) use aliases;

aliases!(
    Required: Any, Zero, NonZero, NonEmpty, Positive, Negative, Positive0, Negative0, Even, Odd,
    Latitude, Longitude, Ascii, Printable, Alphanumeric, NonEmptyPrintable, Unique,
);
