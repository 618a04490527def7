use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;

use super::{Kind, Reflect, Visitor};
use crate::foundation::{PathKey, ValidationError};

// ============================================================================
// LEAVES
// ============================================================================

macro_rules! leaf {
    ($($ty:ty),* $(,)?) => {
        $(impl Reflect for $ty {})*
    };
}

leaf!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, ()
);

impl Reflect for Cow<'_, str> {}

impl Reflect for std::time::Duration {}

impl Reflect for std::path::PathBuf {}

// ============================================================================
// SEQUENCES
// ============================================================================

fn elements<'a, T: Reflect + 'a>(
    iter: impl Iterator<Item = &'a mut T>,
    visitor: &mut dyn Visitor,
) -> Result<(), ValidationError> {
    for (index, element) in iter.enumerate() {
        visitor.visit_element(index, element)?;
    }
    Ok(())
}

impl<T: Reflect> Reflect for [T] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        elements(self.iter_mut(), visitor)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        elements(self.iter_mut(), visitor)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        elements(self.iter_mut(), visitor)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        elements(self.iter_mut(), visitor)
    }
}

// ============================================================================
// MAPS
// ============================================================================

fn entries<'a, K: PathKey + 'a, V: Reflect + 'a>(
    iter: impl Iterator<Item = (&'a K, &'a mut V)>,
    visitor: &mut dyn Visitor,
) -> Result<(), ValidationError> {
    for (key, value) in iter {
        visitor.visit_entry(key, value)?;
    }
    Ok(())
}

impl<K: PathKey, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        entries(self.iter_mut(), visitor)
    }
}

impl<K: PathKey, V: Reflect> Reflect for BTreeMap<K, V> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        entries(self.iter_mut(), visitor)
    }
}

#[cfg(feature = "indexmap")]
impl<K: PathKey, V: Reflect, S: BuildHasher> Reflect for indexmap::IndexMap<K, V, S> {
    fn kind(&self) -> Kind {
        Kind::Map
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        entries(self.iter_mut(), visitor)
    }
}

// ============================================================================
// REFERENCES
// ============================================================================

fn address_of<T: ?Sized>(value: &T) -> Option<usize> {
    if size_of_val(value) == 0 {
        // Distinct zero-sized values may share an address.
        return None;
    }
    Some(std::ptr::from_ref(value).cast::<()>().addr())
}

impl<T: Reflect> Reflect for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Reference
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        match self {
            Some(value) => visitor.visit_referent(value),
            None => Ok(()),
        }
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn kind(&self) -> Kind {
        Kind::Reference
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        let referent: &mut T = self;
        if let Some(address) = address_of(&*referent) {
            if !visitor.enter_reference(address) {
                return Ok(());
            }
        }
        visitor.visit_referent(&mut Referent(referent))
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<RefCell<T>> {
    fn kind(&self) -> Kind {
        Kind::Reference
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        // Already borrowed means an ancestor in this walk holds it: a cycle.
        let Ok(mut referent) = self.try_borrow_mut() else {
            return Ok(());
        };
        if let Some(address) = address_of(&*referent) {
            if !visitor.enter_reference(address) {
                return Ok(());
            }
        }
        visitor.visit_referent(&mut Referent(&mut *referent))
    }
}

/// Sized handle around an unsized referent so it can be passed on as
/// `&mut dyn Reflect`.
struct Referent<'a, T: ?Sized>(&'a mut T);

impl<T: Reflect + ?Sized> Reflect for Referent<'_, T> {
    fn kind(&self) -> Kind {
        self.0.kind()
    }

    fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
        self.0.reflect(visitor)
    }

    fn is_null(&self) -> bool {
        self.0.is_null()
    }

    fn as_type_validate(&mut self) -> Option<&mut dyn crate::TypeValidate> {
        self.0.as_type_validate()
    }

    fn as_validate(&self) -> Option<&dyn crate::Validate> {
        self.0.as_validate()
    }
}

// ============================================================================
// TUPLES
// ============================================================================

macro_rules! tuple {
    ($(($idx:tt $name:ident)),+) => {
        impl<$($name: Reflect),+> Reflect for ($($name,)+) {
            fn kind(&self) -> Kind {
                Kind::Struct
            }

            fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
                $(visitor.visit_field(stringify!($idx), &mut self.$idx)?;)+
                Ok(())
            }
        }
    };
}

tuple!((0 A));
tuple!((0 A), (1 B));
tuple!((0 A), (1 B), (2 C));
tuple!((0 A), (1 B), (2 C), (3 D));
tuple!((0 A), (1 B), (2 C), (3 D), (4 E));
tuple!((0 A), (1 B), (2 C), (3 D), (4 E), (5 F));
