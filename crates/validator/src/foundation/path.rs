//! Structured field paths
//!
//! A [`FieldPath`] is an immutable, append-only list of [`Segment`]s. Appending
//! returns a new path that shares its prefix with the parent, so sibling
//! branches of a traversal can extend the same parent without ever observing
//! each other's segments.
//!
//! Both traversal engines build their error locations with this type: the
//! Walker appends concrete names and keys at runtime, the code generator
//! appends loop-variable names as dynamic segments and renders them into
//! builder calls.
//!
//! ```rust
//! use vouch_validator::FieldPath;
//!
//! let users = FieldPath::root().field("users");
//! let first = users.index(&0usize).field("name");
//! let second = users.index(&1usize).field("email");
//!
//! assert_eq!(first.to_string(), ".users[0].name");
//! assert_eq!(second.to_string(), ".users[1].email");
//! assert_eq!(users.to_string(), ".users");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// SEGMENT
// ============================================================================

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Field name, rendered index/key, or (for generated code) the name of
    /// the loop variable that holds the index/key.
    pub name: Cow<'static, str>,
    /// Rendered as `[name]` instead of `.name`.
    pub is_index: bool,
    /// The value is only known at runtime.
    pub is_dynamic: bool,
}

impl Segment {
    /// A static struct field segment: `.name`.
    pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            is_index: false,
            is_dynamic: false,
        }
    }

    /// A dynamic index or key segment: `[name]`.
    pub fn index(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            is_index: true,
            is_dynamic: true,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_index {
            write!(f, "[{}]", self.name)
        } else {
            write!(f, ".{}", self.name)
        }
    }
}

// ============================================================================
// PATH KEY
// ============================================================================

/// Stringification of map keys and sequence indexes inside a path.
///
/// Integers render in decimal, floats in their shortest round-trip form,
/// booleans as `true`/`false`, strings and chars verbatim. Other key types opt
/// in with an empty impl and fall back to their `Debug` form:
///
/// ```rust
/// use vouch_validator::{FieldPath, PathKey};
///
/// #[derive(Debug, PartialEq, Eq, Hash)]
/// struct Region(u8);
///
/// impl PathKey for Region {}
///
/// assert_eq!(FieldPath::root().index(&Region(7)).to_string(), "[Region(7)]");
/// ```
pub trait PathKey: fmt::Debug {
    /// Renders the key as it appears between the brackets.
    fn path_key(&self) -> String {
        format!("{self:?}")
    }
}

macro_rules! display_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PathKey for $ty {
                fn path_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

impl PathKey for Cow<'_, str> {
    fn path_key(&self) -> String {
        self.to_string()
    }
}

impl<K: PathKey + ?Sized> PathKey for &K {
    fn path_key(&self) -> String {
        (**self).path_key()
    }
}

impl<K: PathKey + ?Sized> PathKey for Box<K> {
    fn path_key(&self) -> String {
        (**self).path_key()
    }
}

impl<K: PathKey + ?Sized> PathKey for Arc<K> {
    fn path_key(&self) -> String {
        (**self).path_key()
    }
}

// ============================================================================
// FIELD PATH
// ============================================================================

#[derive(Debug)]
struct Node {
    parent: FieldPath,
    segment: Segment,
    len: usize,
}

/// Immutable location of a value inside a tree.
///
/// Cloning and appending are O(1); the prefix is shared through an [`Arc`].
#[derive(Debug, Clone, Default)]
pub struct FieldPath {
    tail: Option<Arc<Node>>,
}

impl FieldPath {
    /// The empty path, denoting the root value.
    pub const fn root() -> Self {
        Self { tail: None }
    }

    /// Returns `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.tail.is_none()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.tail.as_ref().map_or(0, |node| node.len)
    }

    /// Returns `true` when the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Returns a new path with `segment` appended.
    pub fn join(&self, segment: Segment) -> Self {
        Self {
            tail: Some(Arc::new(Node {
                parent: self.clone(),
                segment,
                len: self.len() + 1,
            })),
        }
    }

    /// Returns a new path with a `.name` segment appended.
    pub fn field(&self, name: impl Into<Cow<'static, str>>) -> Self {
        self.join(Segment::field(name))
    }

    /// Returns a new path with a `[key]` segment appended.
    pub fn index<K: PathKey + ?Sized>(&self, key: &K) -> Self {
        self.join(Segment::index(key.path_key()))
    }

    /// The last segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.tail.as_ref().map(|node| &node.segment)
    }

    /// The path without its last segment.
    pub fn parent(&self) -> Option<&FieldPath> {
        self.tail.as_ref().map(|node| &node.parent)
    }

    /// Segments from the root outwards.
    pub fn segments(&self) -> Vec<&Segment> {
        let mut segments = Vec::with_capacity(self.len());
        let mut cursor = self;
        while let Some(node) = &cursor.tail {
            segments.push(&node.segment);
            cursor = &node.parent;
        }
        segments.reverse();
        segments
    }

    /// Appends every segment of `suffix` to `self`.
    pub fn concat(&self, suffix: &FieldPath) -> Self {
        if suffix.is_root() {
            return self.clone();
        }
        if self.is_root() {
            return suffix.clone();
        }
        suffix
            .segments()
            .into_iter()
            .fold(self.clone(), |path, segment| path.join(segment.clone()))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.segments() {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl PartialEq for FieldPath {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.segments() == other.segments()
    }
}

impl Eq for FieldPath {}

impl<S: Into<Cow<'static, str>>> FromIterator<S> for FieldPath {
    /// Builds a path of field segments.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FieldPath::root(), |path, name| path.field(name))
    }
}
