//! Runtime introspection for the Walker
//!
//! [`Reflect`] is implemented by every type the [Walker](crate::validate)
//! can descend into. Instead of exposing its children as data, a type drives
//! a [`Visitor`] over them (internal iteration), which keeps mutable access
//! to the children sound without any `unsafe`.
//!
//! Implementations ship for primitives, `String`, sequences, maps, `Option`,
//! `Box` (including `Box<dyn Reflect>`), `Rc<RefCell<T>>`, tuples and the
//! `Required`/`Optional` containers. User types get theirs from
//! `#[derive(Reflect)]`:
//!
//! ```rust
//! use vouch_validator::{required, Reflect};
//!
//! #[derive(Reflect)]
//! struct User {
//!     name: required::NonEmpty<String>,
//!     tags: Vec<required::Ascii<String>>,
//! }
//! ```

mod impls;

use crate::foundation::{PathKey, TypeValidate, Validate, ValidationError};

/// Shape of a reflected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No children: primitives, strings, containers, opaque generated types.
    Leaf,
    /// Named or positional fields; enums report the fields of their active
    /// variant.
    Struct,
    /// Indexed elements.
    Sequence,
    /// Keyed entries.
    Map,
    /// A single, possibly absent, referent.
    Reference,
}

/// Introspection interface used by the Walker.
///
/// The default methods describe a leaf without capabilities.
pub trait Reflect {
    /// Shape of this value.
    fn kind(&self) -> Kind {
        Kind::Leaf
    }

    /// Presents every child to `visitor`, in declaration order.
    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        let _ = visitor;
        Ok(())
    }

    /// Returns `true` for an absent reference (`Option::None`).
    fn is_null(&self) -> bool {
        false
    }

    /// The type-phase capability, if this value has one.
    fn as_type_validate(&mut self) -> Option<&mut dyn TypeValidate> {
        None
    }

    /// The cross-phase capability, if this value has one.
    fn as_validate(&self) -> Option<&dyn Validate> {
        None
    }
}

/// Receiver of the children a [`Reflect`] value presents.
///
/// Every method returns the traversal result so a failure deep in the tree
/// stops iteration immediately.
pub trait Visitor {
    /// A struct field (or the positional field `"0"`, `"1"`, ... of a tuple).
    fn visit_field(
        &mut self,
        name: &'static str,
        value: &mut dyn Reflect,
    ) -> Result<(), ValidationError>;

    /// An element of a sequence.
    fn visit_element(&mut self, index: usize, value: &mut dyn Reflect)
    -> Result<(), ValidationError>;

    /// A value of a map, with its key.
    fn visit_entry(
        &mut self,
        key: &dyn PathKey,
        value: &mut dyn Reflect,
    ) -> Result<(), ValidationError>;

    /// Announces the address of a shared or boxed referent before it is
    /// visited. Returns `false` if the address was seen before in this walk;
    /// the referent must then be skipped.
    fn enter_reference(&mut self, address: usize) -> bool;

    /// The referent of a reference. The path is not extended.
    fn visit_referent(&mut self, value: &mut dyn Reflect) -> Result<(), ValidationError>;
}
