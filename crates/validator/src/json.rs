//! JSON decoding with validation.
//!
//! Each function decodes with `serde_json` (containers load lazily, so a
//! missing field or `null` becomes an empty container) and then runs one
//! [`validate`](crate::validate) walk over the result.
//!
//! # Examples
//!
//! ```
//! use vouch_validator::{json, required, ErrorKind, Reflect};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, Reflect)]
//! struct Config {
//!     name: required::NonEmpty<String>,
//!     port: required::Positive<u16>,
//! }
//!
//! let config: Config = json::from_str(r#"{"name": "api", "port": 8080}"#).unwrap();
//! assert_eq!(config.name.get(), "api");
//!
//! let err = json::from_str::<Config>(r#"{"name": "api"}"#).unwrap_err();
//! let json::DecodeError::Validation(err) = err else { panic!("expected a validation error") };
//! assert_eq!(err.kind, ErrorKind::MissingValue);
//! assert_eq!(err.path().to_string(), ".port");
//! ```

use std::io;
use std::ops::Deref;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::{TypeValidate, Validate, ValidationError};
use crate::reflect::{Kind, Reflect, Visitor};

/// Failure of a decode-then-validate call.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input is not valid JSON for the target type.
    #[error("decode: {0}")]
    Json(#[from] serde_json::Error),

    /// The input decoded, but the value tree is invalid.
    #[error("validate: {0}")]
    Validation(#[from] ValidationError),
}

impl DecodeError {
    /// The validation error, if decoding itself succeeded.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Json(_) => None,
        }
    }
}

fn checked<T: Reflect>(mut value: T) -> Result<T, DecodeError> {
    crate::validate(&mut value)?;
    Ok(value)
}

/// Decodes `T` from a string and validates it.
pub fn from_str<T>(input: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Reflect,
{
    checked(serde_json::from_str(input)?)
}

/// Decodes `T` from bytes and validates it.
pub fn from_slice<T>(input: &[u8]) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Reflect,
{
    checked(serde_json::from_slice(input)?)
}

/// Decodes `T` from a reader and validates it.
pub fn from_reader<R, T>(reader: R) -> Result<T, DecodeError>
where
    R: io::Read,
    T: DeserializeOwned + Reflect,
{
    checked(serde_json::from_reader(reader)?)
}

/// Decodes `T` from an already parsed [`serde_json::Value`] and validates it.
pub fn from_value<T>(value: serde_json::Value) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Reflect,
{
    checked(serde_json::from_value(value)?)
}

// ============================================================================
// VALIDATED
// ============================================================================

/// A value that validates itself as part of deserialization.
///
/// Useful where the caller does not control the decode call, such as a
/// field of a larger document or a web framework extractor.
///
/// ```
/// use vouch_validator::{json::Validated, optional};
///
/// let ok: Validated<Vec<optional::Even<i32>>> = serde_json::from_str("[2, null, 4]").unwrap();
/// assert_eq!(ok.len(), 3);
///
/// let err = serde_json::from_str::<Validated<Vec<optional::Even<i32>>>>("[2, 3]").unwrap_err();
/// assert!(err.to_string().starts_with("validate: [1]: odd value"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    /// Returns the validated value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<'de, T> Deserialize<'de> for Validated<T>
where
    T: Deserialize<'de> + Reflect,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = T::deserialize(deserializer)?;
        crate::validate(&mut value).map_err(|error| D::Error::custom(format!("validate: {error}")))?;
        Ok(Self(value))
    }
}

// Transparent to walks, so a `Validated` field is checked again when its
// parent is validated after mutation.
impl<T: Reflect> Reflect for Validated<T> {
    fn kind(&self) -> Kind {
        self.0.kind()
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        self.0.reflect(visitor)
    }

    fn is_null(&self) -> bool {
        self.0.is_null()
    }

    fn as_type_validate(&mut self) -> Option<&mut dyn TypeValidate> {
        self.0.as_type_validate()
    }

    fn as_validate(&self) -> Option<&dyn Validate> {
        self.0.as_validate()
    }
}

impl<T: Serialize> Serialize for Validated<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
