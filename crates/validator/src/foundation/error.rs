//! Error types for validation failures
//!
//! Every failure raised by a validator, a container, the Walker, or generated
//! traversal code is a [`ValidationError`]. Traversal levels wrap the error
//! they receive with [`ValidationError::within`], so the full location is
//! assembled bottom-up and read back with [`ValidationError::path`].
//!
//! All string fields use `Cow<'static, str>` so static codes and messages do
//! not allocate.

use std::borrow::Cow;
use std::fmt;

use super::path::FieldPath;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Broad classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The Walker was handed a null root.
    InvalidArgument,
    /// A `Required` container holds no value.
    MissingValue,
    /// A leaf validator or a container's type phase rejected a value.
    TypeValidation,
    /// A user-defined `Validate` hook failed after the type phase succeeded.
    CrossField,
    /// Eager construction could not convert its input.
    Parse,
}

impl ErrorKind {
    /// Stable snake_case name, used as the default error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::MissingValue => "missing_value",
            Self::TypeValidation => "type_validation",
            Self::CrossField => "cross_field",
            Self::Parse => "parse",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// An error is either a *cause* (created by [`ValidationError::new`] and the
/// other constructors) or a *location wrapper* around another error, created
/// by [`ValidationError::within`]. Wrappers carry the path of one traversal
/// level and inherit the kind and code of what they wrap.
///
/// # Examples
///
/// ```rust
/// use vouch_validator::{ErrorKind, FieldPath, ValidationError};
///
/// let cause = ValidationError::new("non_empty", "empty value");
/// let inner = cause.within(&FieldPath::root().field("name"));
/// let outer = inner.within(&FieldPath::root().field("users").index(&1usize));
///
/// assert_eq!(outer.kind, ErrorKind::TypeValidation);
/// assert_eq!(outer.path().to_string(), ".users[1].name");
/// assert_eq!(outer.to_string(), ".users[1].name: empty value");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Classification, inherited by location wrappers.
    pub kind: ErrorKind,

    /// Error code for programmatic handling.
    ///
    /// Examples: "non_empty", "missing_value", "or_failed"
    pub code: Cow<'static, str>,

    /// Human-readable message. Empty on location wrappers.
    pub message: Cow<'static, str>,

    /// Alternatives that all failed (see [`Or`](crate::combinators::Or)).
    pub nested: Vec<ValidationError>,

    path: FieldPath,
    source: Option<Box<ValidationError>>,
}

impl ValidationError {
    /// Creates a [`ErrorKind::TypeValidation`] error with a code and message.
    ///
    /// ```rust
    /// use vouch_validator::ValidationError;
    ///
    /// let error = ValidationError::new("even", "odd value");
    /// assert_eq!(error.code, "even");
    /// assert_eq!(error.to_string(), "odd value");
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(ErrorKind::TypeValidation, code, message)
    }

    /// Creates an error of an explicit kind.
    pub fn with_kind(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            nested: Vec::new(),
            path: FieldPath::root(),
            source: None,
        }
    }

    /// A `Required` container was empty at validation time.
    pub fn missing_value() -> Self {
        Self::with_kind(
            ErrorKind::MissingValue,
            ErrorKind::MissingValue.as_str(),
            "missing required value",
        )
    }

    /// The Walker was given something it cannot walk.
    pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(
            ErrorKind::InvalidArgument,
            ErrorKind::InvalidArgument.as_str(),
            message,
        )
    }

    /// Eager construction failed before validation.
    pub fn parse(message: impl Into<Cow<'static, str>>) -> Self {
        Self::with_kind(ErrorKind::Parse, ErrorKind::Parse.as_str(), message)
    }

    /// `parse_option(None)` on a `Required` container.
    pub fn parse_nil() -> Self {
        Self::parse("nil value passed for parsing")
    }

    /// The source value could not be converted into the container's type.
    pub fn unconvertible(
        source: &str,
        target: &str,
        reason: impl fmt::Display,
    ) -> Self {
        Self::parse(format!("cannot convert {source} to {target}"))
            .caused_by(Self::parse(reason.to_string()))
    }

    /// Attaches the inner error this one was raised because of.
    #[must_use = "builder methods must be chained or built"]
    pub fn caused_by(mut self, cause: ValidationError) -> Self {
        self.source = Some(Box::new(cause));
        self
    }

    /// Replaces the nested alternatives.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Wraps this error with the location of one traversal level.
    ///
    /// A root path adds nothing and returns the error unchanged.
    #[must_use = "wrapping returns a new error"]
    pub fn within(self, path: &FieldPath) -> Self {
        if path.is_root() {
            return self;
        }
        Self {
            kind: self.kind,
            code: self.code.clone(),
            message: Cow::Borrowed(""),
            nested: Vec::new(),
            path: path.clone(),
            source: Some(Box::new(self)),
        }
    }

    /// Reclassifies the error as a failed cross-field hook.
    #[must_use = "reclassifying returns a new error"]
    pub fn into_cross_field(mut self) -> Self {
        self.kind = ErrorKind::CrossField;
        self
    }

    /// Full location: the concatenation of every wrapper's path, outermost
    /// first.
    pub fn path(&self) -> FieldPath {
        match &self.source {
            Some(inner) => self.path.concat(&inner.path()),
            None => self.path.clone(),
        }
    }

    /// The path contributed by this level alone.
    pub fn local_path(&self) -> &FieldPath {
        &self.path
    }

    /// The error this one wraps or was caused by.
    pub fn inner(&self) -> Option<&ValidationError> {
        self.source.as_deref()
    }

    /// The innermost error of the chain.
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Some(inner) = current.inner() {
            current = inner;
        }
        current
    }

    /// Returns `true` if this error, or any error in its chain, has `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind || self.inner().is_some_and(|inner| inner.is(kind))
    }

    /// Messages of the chain joined with `": "`, skipping empty ones.
    pub fn message_chain(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut current = Some(self);
        while let Some(error) = current {
            if !error.message.is_empty() {
                parts.push(&error.message);
            }
            current = error.inner();
        }
        let mut chain = parts.join(": ");
        let root = self.root_cause();
        if !root.nested.is_empty() {
            let alternatives: Vec<String> = root.nested.iter().map(ToString::to_string).collect();
            if !chain.is_empty() {
                chain.push_str(": ");
            }
            chain.push_str(&alternatives.join("; "));
        }
        chain
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        if path.is_root() {
            write!(f, "{}", self.message_chain())
        } else {
            write!(f, "{path}: {}", self.message_chain())
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|inner| inner as &(dyn std::error::Error + 'static))
    }
}
