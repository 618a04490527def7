//! Values that may be absent but must be valid when present
//!
//! [`Optional<T, V>`](Optional) mirrors [`Required`](crate::Required) except
//! that an empty container is vacuously valid.
//!
//! ```rust
//! use vouch_validator::{optional, TypeValidate};
//!
//! let mut nickname = optional::Printable::<String>::default();
//! nickname.type_validate().unwrap();
//! assert_eq!(nickname.get(), None);
//!
//! nickname.parse("neo").unwrap();
//! assert_eq!(nickname.get().map(String::as_str), Some("neo"));
//!
//! nickname.parse_option(None::<&str>).unwrap();
//! assert!(!nickname.has_value());
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::{TypeValidate, ValidationError, Validator};
use crate::reflect::{Kind, Reflect};
use crate::required::{aliases, convert};
use crate::validators;

/// A value that may be absent and, when present, must satisfy `V`.
pub struct Optional<T, V> {
    value: Option<T>,
    validated: bool,
    _validator: PhantomData<fn() -> V>,
}

impl<T, V> Optional<T, V> {
    /// An empty container.
    pub const fn new() -> Self {
        Self {
            value: None,
            validated: false,
            _validator: PhantomData,
        }
    }

    /// Stores `value` without validating it, as decoding does.
    pub fn load(&mut self, value: Option<T>) {
        self.value = value;
        self.validated = false;
    }

    /// Returns `true` if a value is present.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` once the type phase succeeded for the current state.
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    fn checked(&self, method: &str) -> Option<&T> {
        match &self.value {
            Some(_) if !self.validated => panic!("called {method}() on unvalidated value"),
            value => value.as_ref(),
        }
    }

    /// The validated value, or `None` when empty.
    ///
    /// # Panics
    ///
    /// If a value is present but was not validated since it was last set.
    pub fn get(&self) -> Option<&T> {
        self.checked("get")
    }

    /// The validated value.
    ///
    /// # Panics
    ///
    /// If the container is empty, or holds a value that was not validated.
    pub fn must(&self) -> &T {
        match self.checked("must") {
            Some(value) => value,
            None => panic!("called must() on empty value"),
        }
    }

    /// Consumes the container.
    ///
    /// # Panics
    ///
    /// If a value is present but was not validated since it was last set.
    pub fn into_option(self) -> Option<T> {
        if self.value.is_some() && !self.validated {
            panic!("called into_option() on unvalidated value");
        }
        self.value
    }
}

impl<T, V> Optional<T, V>
where
    T: Reflect,
    V: Validator<T>,
{
    /// Converts `source`, validates it and, only on success, replaces the
    /// current value.
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

    /// Like [`parse`](Self::parse); `None` empties the container.
    pub fn parse_option<S>(&mut self, source: Option<S>) -> Result<(), ValidationError>
    where
        S: TryInto<T>,
        S::Error: fmt::Display,
    {
        match source {
            Some(source) => self.parse(source),
            None => {
                *self = Self::new();
                Ok(())
            }
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

impl<T, V> TypeValidate for Optional<T, V>
where
    T: Reflect,
    V: Validator<T>,
{
    fn type_validate(&mut self) -> Result<(), ValidationError> {
        if let Some(value) = self.value.as_mut() {
            V::default().validate(value)?;
            crate::walk::validate_nested(value)?;
        }
        self.validated = true;
        Ok(())
    }
}

impl<T, V> Reflect for Optional<T, V>
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

impl<T, V> Default for Optional<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, V> Clone for Optional<T, V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            validated: self.validated,
            _validator: PhantomData,
        }
    }
}

impl<T: fmt::Debug, V> fmt::Debug for Optional<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optional")
            .field("value", &self.value)
            .field("validated", &self.validated)
            .finish()
    }
}

impl<T: PartialEq, V> PartialEq for Optional<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, V> Eq for Optional<T, V> {}

impl<T: FromStr, V> FromStr for Optional<T, V> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut container = Self::new();
        container.load(Some(s.parse()?));
        Ok(container)
    }
}

impl<T: Serialize, V> Serialize for Optional<T, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, V> Deserialize<'de> for Optional<T, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut container = Self::new();
        container.load(Option::<T>::deserialize(deserializer)?);
        Ok(container)
    }
}

aliases!(
    Optional: Any, Zero, NonZero, NonEmpty, Positive, Negative, Positive0, Negative0, Even, Odd,
    Latitude, Longitude, Ascii, Printable, Alphanumeric, NonEmptyPrintable, Unique,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn empty_is_vacuously_valid() {
        let mut value = Positive::<i32>::default();
        value.type_validate().unwrap();
        assert!(value.is_validated());
        assert_eq!(value.get(), None);
        assert_eq!(value.into_option(), None);
    }

    #[test]
    fn present_value_is_checked() {
        let mut value = Positive::<i32>::default();
        value.load(Some(-2));
        let err = value.type_validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeValidation);
        assert!(!value.is_validated());
    }

    #[test]
    fn get_on_empty_never_panics() {
        let value = Even::<u8>::default();
        assert_eq!(value.get(), None);
    }

    #[test]
    #[should_panic(expected = "called get() on unvalidated value")]
    fn get_on_unvalidated_value_panics() {
        let mut value = Even::<u8>::default();
        value.load(Some(2));
        let _ = value.get();
    }

    #[test]
    #[should_panic(expected = "called must() on empty value")]
    fn must_on_empty_panics() {
        let mut value = Even::<u8>::default();
        value.type_validate().unwrap();
        let _ = value.must();
    }

    #[test]
    fn parse_option_none_resets() {
        let mut value = Even::<u8>::try_new(4).unwrap();
        value.parse_option(None::<u8>).unwrap();
        assert!(!value.has_value());
        assert_eq!(value.get(), None);
    }

    #[test]
    fn parse_converts_then_validates() {
        let mut value = Even::<u8>::default();
        assert_eq!(value.parse(300i32).unwrap_err().kind, ErrorKind::Parse);
        assert_eq!(value.parse(3u8).unwrap_err().kind, ErrorKind::TypeValidation);
        value.parse(4u64).unwrap();
        assert_eq!(*value.must(), 4);
    }
}
