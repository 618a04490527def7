//! Tree-level parsing: copy any serializable source into a target type, then
//! validate the result.
//!
//! The source goes through a [`serde_json::Value`] tree, so a map can fill a
//! struct, one struct can fill another with matching field names, and a
//! sequence fills a sequence element by element. Scalars convert the way
//! `serde_json` converts them: integers narrow with a range check and widen
//! into floats.
//!
//! ```
//! use std::collections::BTreeMap;
//! use serde::{Deserialize, Serialize};
//! use vouch_validator::{parse, required, Reflect};
//!
//! #[derive(Debug, Deserialize, Serialize, Reflect)]
//! struct Login {
//!     user: required::NonEmpty<String>,
//! }
//!
//! let source = BTreeMap::from([("USER", "neo")]);
//! let login: Login = parse::Parser::new()
//!     .rename_with(str::to_lowercase)
//!     .parse(&source)
//!     .unwrap();
//! assert_eq!(login.user.get(), "neo");
//!
//! let source = BTreeMap::from([("user", "neo"), ("otp", "1")]);
//! let err = parse::Parser::new()
//!     .deny_unknown_fields()
//!     .parse::<Login, _>(&source)
//!     .unwrap_err();
//! assert_eq!(err.to_string(), ".otp: unknown field");
//! ```

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::foundation::{FieldPath, ValidationError};
use crate::reflect::Reflect;

/// Failure of a parse-then-validate call.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The source could not be represented as a value tree.
    #[error("source: {0}")]
    Source(#[source] serde_json::Error),

    /// A source value does not convert into the target type.
    #[error("convert: {0}")]
    Convert(#[source] serde_json::Error),

    /// The source names a field the target does not have.
    #[error("{path}: unknown field")]
    UnknownField { path: FieldPath },

    /// The value was copied, but the tree is invalid.
    #[error("validate: {0}")]
    Validation(#[from] ValidationError),
}

impl ParseError {
    /// Where the failure happened, for unknown fields and validation errors.
    pub fn path(&self) -> Option<FieldPath> {
        match self {
            Self::UnknownField { path } => Some(path.clone()),
            Self::Validation(error) => Some(error.path()),
            Self::Source(_) | Self::Convert(_) => None,
        }
    }

    /// The validation error, if copying itself succeeded.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            _ => None,
        }
    }
}

type Rename = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Parse options.
///
/// The default ignores source fields the target lacks and matches field
/// names as they are.
#[derive(Default)]
pub struct Parser {
    deny_unknown_fields: bool,
    rename: Option<Rename>,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("deny_unknown_fields", &self.deny_unknown_fields)
            .field("rename", &self.rename.is_some())
            .finish()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with [`ParseError::UnknownField`] when a source object has a key
    /// the target does not serialize back.
    ///
    /// A target field that skips serialization counts as unknown.
    pub fn deny_unknown_fields(mut self) -> Self {
        self.deny_unknown_fields = true;
        self
    }

    /// Renames every object key of the source before matching.
    pub fn rename_with<F>(mut self, rename: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.rename = Some(Box::new(rename));
        self
    }

    /// Copies `source` into a new `T` and validates it.
    pub fn parse<T, S>(&self, source: &S) -> Result<T, ParseError>
    where
        T: DeserializeOwned + Serialize + Reflect,
        S: Serialize + ?Sized,
    {
        self.parse_value(serde_json::to_value(source).map_err(ParseError::Source)?)
    }

    /// Like [`parse`](Self::parse), from an already built value tree.
    pub fn parse_value<T>(&self, source: Value) -> Result<T, ParseError>
    where
        T: DeserializeOwned + Serialize + Reflect,
    {
        let source = match &self.rename {
            Some(rename) => rename_keys(source, rename.as_ref()),
            None => source,
        };

        let mut target: T = if self.deny_unknown_fields {
            let target = T::deserialize(&source).map_err(ParseError::Convert)?;
            let known = serde_json::to_value(&target).map_err(ParseError::Source)?;
            if let Some(path) = unknown_field(&source, &known, &FieldPath::root()) {
                return Err(ParseError::UnknownField { path });
            }
            target
        } else {
            serde_json::from_value(source).map_err(ParseError::Convert)?
        };

        crate::validate(&mut target)?;
        tracing::trace!(target_type = std::any::type_name::<T>(), "parsed");
        Ok(target)
    }
}

/// Parses with default options.
pub fn parse<T, S>(source: &S) -> Result<T, ParseError>
where
    T: DeserializeOwned + Serialize + Reflect,
    S: Serialize + ?Sized,
{
    Parser::new().parse(source)
}

fn rename_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (rename(&key), rename_keys(value, rename)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| rename_keys(item, rename)).collect())
        }
        other => other,
    }
}

/// First key of `source` with no counterpart in `known`, in key order.
fn unknown_field(source: &Value, known: &Value, path: &FieldPath) -> Option<FieldPath> {
    match (source, known) {
        (Value::Object(source), Value::Object(known)) => source.iter().find_map(|(key, value)| {
            let path = path.field(key.clone());
            match known.get(key) {
                Some(known) => unknown_field(value, known, &path),
                None => Some(path),
            }
        }),
        (Value::Array(source), Value::Array(known)) => source
            .iter()
            .zip(known)
            .enumerate()
            .find_map(|(i, (value, known))| unknown_field(value, known, &path.index(&i))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, optional, required};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn rename_reaches_nested_objects() {
        let renamed = rename_keys(
            json!({"A": {"B": 1}, "C": [{"D": true}]}),
            &|key: &str| key.to_lowercase(),
        );
        assert_eq!(renamed, json!({"a": {"b": 1}, "c": [{"d": true}]}));
    }

    #[test]
    fn unknown_keys_report_their_full_path() {
        let known = json!({"rows": [{"id": 1}, {"id": 2}]});
        let source = json!({"rows": [{"id": 1}, {"id": 2, "extra": 0}]});
        let path = unknown_field(&source, &known, &FieldPath::root()).unwrap();
        assert_eq!(path.to_string(), ".rows[1].extra");
        assert_eq!(unknown_field(&known, &known, &FieldPath::root()), None);
    }

    #[test]
    fn scalars_convert_with_range_checks() {
        let values: Vec<f64> = parse(&[1_u8, 2]).unwrap();
        assert_eq!(values, [1.0, 2.0]);

        let err = parse::<Vec<u8>, _>(&[1_u32, 300]).unwrap_err();
        assert!(matches!(err, ParseError::Convert(_)));
        assert!(err.path().is_none());
    }

    #[test]
    fn containers_are_validated_after_copy() {
        let source = BTreeMap::from([("a", 1), ("b", 2)]);
        let err = parse::<BTreeMap<String, optional::Odd<i64>>, _>(&source).unwrap_err();
        assert_eq!(err.to_string(), "validate: [b]: even value");

        let err = parse::<Vec<required::Any<u8>>, _>(&[Some(1), None]).unwrap_err();
        assert_eq!(err.as_validation().unwrap().kind, ErrorKind::MissingValue);
        assert_eq!(err.path().unwrap().to_string(), "[1]");
    }

    #[test]
    fn unknown_fields_in_maps_are_kept() {
        let source = json!({"a": 1});
        let parsed: BTreeMap<String, u8> = Parser::new().deny_unknown_fields().parse_value(source).unwrap();
        assert_eq!(parsed["a"], 1);
    }
}
