//! The dynamic Walker
//!
//! [`validate`] walks a value tree in pre-order, depth-first, running the
//! type phase at every node that has one and the cross phase afterwards.
//!
//! The cross phase must see a tree whose type phase fully succeeded, so
//! cross-phase hooks are deferred. A queue of deferred calls cannot hold
//! shared references into a tree that is still being walked mutably; instead
//! the Walker counts deferrals during the type pass and, if there were any,
//! replays the exact same traversal a second time calling only the cross
//! phase. The replay visits nodes in the same order the queue would have
//! held them.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::foundation::traits::short_type_name;
use crate::foundation::{FieldPath, PathKey, ValidationError};
use crate::reflect::{Reflect, Visitor};

/// Validates a whole value tree in two phases.
///
/// 1. **Type phase.** Every node exposing
///    [`TypeValidate`](crate::TypeValidate) is type-validated as soon as it
///    is reached; the first failure aborts the walk. A node exposing both
///    capabilities owns its subtree: its children are not visited.
/// 2. **Cross phase.** Once the type phase succeeded, every node exposing
///    [`Validate`](crate::Validate) runs its hook, in traversal order.
///    Failures are reclassified as
///    [`ErrorKind::CrossField`](crate::ErrorKind::CrossField).
///
/// Errors carry the path of the failing node: `.field` for struct fields,
/// `[index]` for sequence elements and `[key]` for map entries. References
/// keep the path of the referring node.
///
/// A root that is itself an absent reference (`None`) is rejected with
/// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument).
///
/// # Examples
///
/// ```rust
/// use vouch_validator::{required, validate, ErrorKind, Reflect};
///
/// #[derive(Reflect, Default)]
/// struct Item {
///     title: required::NonEmpty<String>,
/// }
///
/// let mut items = vec![Item::default()];
/// let err = validate(&mut items).unwrap_err();
/// assert_eq!(err.kind, ErrorKind::MissingValue);
/// assert_eq!(err.path().to_string(), "[0].title");
/// ```
pub fn validate<T: Reflect + ?Sized>(root: &mut T) -> Result<(), ValidationError> {
    if root.is_null() {
        return Err(ValidationError::invalid_argument(format!(
            "validate(None::<{}>)",
            short_type_name::<T>()
        )));
    }
    debug!(root = %short_type_name::<T>(), "validating value tree");
    let result = validate_nested(root);
    match &result {
        Ok(()) => debug!("value tree is valid"),
        Err(error) => debug!(kind = %error.kind, path = %error.path(), "value tree is invalid"),
    }
    result
}

/// [`validate`] without the root check; containers use it for the value
/// they own.
pub(crate) fn validate_nested<T: Reflect + ?Sized>(root: &mut T) -> Result<(), ValidationError> {
    let mut walker = Walker::new(Pass::Type);
    walker.node(root)?;
    if walker.deferred == 0 {
        return Ok(());
    }
    trace!(deferred = walker.deferred, "running cross-field hooks");
    Walker::new(Pass::Cross).node(root)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Type,
    Cross,
}

struct Walker {
    pass: Pass,
    path: FieldPath,
    visited: HashSet<usize>,
    deferred: usize,
}

impl Walker {
    fn new(pass: Pass) -> Self {
        Self {
            pass,
            path: FieldPath::root(),
            visited: HashSet::new(),
            deferred: 0,
        }
    }

    fn node<R: Reflect + ?Sized>(&mut self, value: &mut R) -> Result<(), ValidationError> {
        let validates = value.as_validate().is_some();
        let mut type_validates = false;

        match self.pass {
            Pass::Type => {
                if let Some(target) = value.as_type_validate() {
                    type_validates = true;
                    trace!(path = %self.path, "type_validate");
                    target
                        .type_validate()
                        .map_err(|error| error.within(&self.path))?;
                }
                if validates {
                    self.deferred += 1;
                }
            }
            Pass::Cross => {
                type_validates = value.as_type_validate().is_some();
                if let Some(target) = value.as_validate() {
                    trace!(path = %self.path, "validate");
                    target
                        .validate()
                        .map_err(|error| error.into_cross_field().within(&self.path))?;
                }
            }
        }

        if validates && type_validates {
            return Ok(());
        }
        value.reflect(self)
    }

    fn descend(&mut self, path: FieldPath, value: &mut dyn Reflect) -> Result<(), ValidationError> {
        let parent = std::mem::replace(&mut self.path, path);
        let result = self.node(value);
        self.path = parent;
        result
    }
}

impl Visitor for Walker {
    fn visit_field(
        &mut self,
        name: &'static str,
        value: &mut dyn Reflect,
    ) -> Result<(), ValidationError> {
        let path = self.path.field(name);
        self.descend(path, value)
    }

    fn visit_element(
        &mut self,
        index: usize,
        value: &mut dyn Reflect,
    ) -> Result<(), ValidationError> {
        let path = self.path.index(&index);
        self.descend(path, value)
    }

    fn visit_entry(
        &mut self,
        key: &dyn PathKey,
        value: &mut dyn Reflect,
    ) -> Result<(), ValidationError> {
        let path = self.path.index(key);
        self.descend(path, value)
    }

    fn enter_reference(&mut self, address: usize) -> bool {
        self.visited.insert(address)
    }

    fn visit_referent(&mut self, value: &mut dyn Reflect) -> Result<(), ValidationError> {
        self.node(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Kind, TypeValidate, Validate, required};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    /// Records every capability call into a shared log.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        fail_type: bool,
        fail_cross: bool,
        cross: bool,
        children: Vec<Probe>,
    }

    impl Probe {
        fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                name,
                log: Rc::clone(log),
                fail_type: false,
                fail_cross: false,
                cross: false,
                children: Vec::new(),
            }
        }
    }

    impl TypeValidate for Probe {
        fn type_validate(&mut self) -> Result<(), ValidationError> {
            self.log.borrow_mut().push(format!("type {}", self.name));
            if self.fail_type {
                return Err(ValidationError::new("probe", "type failed"));
            }
            Ok(())
        }
    }

    impl Validate for Probe {
        fn validate(&self) -> Result<(), ValidationError> {
            self.log.borrow_mut().push(format!("cross {}", self.name));
            if self.fail_cross {
                return Err(ValidationError::new("probe", "cross failed"));
            }
            Ok(())
        }
    }

    impl Reflect for Probe {
        fn kind(&self) -> Kind {
            Kind::Sequence
        }

        fn reflect(&mut self, visitor: &mut dyn Visitor) -> Result<(), ValidationError> {
            for (index, child) in self.children.iter_mut().enumerate() {
                visitor.visit_element(index, child)?;
            }
            Ok(())
        }

        fn as_type_validate(&mut self) -> Option<&mut dyn TypeValidate> {
            (!self.cross).then_some(self as &mut dyn TypeValidate)
        }

        fn as_validate(&self) -> Option<&dyn Validate> {
            self.cross.then_some(self as &dyn Validate)
        }
    }

    #[test]
    fn null_root_is_invalid_argument() {
        let mut root: Option<Vec<u8>> = None;
        let err = validate(&mut root).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn nothing_to_validate() {
        assert!(validate(&mut vec![1, 2, 3]).is_ok());
        assert!(validate(&mut Some(String::new())).is_ok());
    }

    #[test]
    fn type_phase_runs_before_every_cross_hook() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = Probe::new("root", &log);
        root.cross = true;
        let mut a = Probe::new("a", &log);
        a.children.push(Probe::new("a0", &log));
        let mut b = Probe::new("b", &log);
        b.cross = true;
        root.children = vec![a, b, Probe::new("c", &log)];

        validate(&mut root).unwrap();
        assert_eq!(
            *log.borrow(),
            ["type a", "type a0", "type c", "cross root", "cross b"]
        );
    }

    #[test]
    fn first_type_failure_aborts_without_cross_hooks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = Probe::new("root", &log);
        root.cross = true;
        let mut bad = Probe::new("bad", &log);
        bad.fail_type = true;
        root.children = vec![Probe::new("ok", &log), bad, Probe::new("never", &log)];

        let err = validate(&mut root).unwrap_err();
        assert_eq!(err.path().to_string(), "[1]");
        assert_eq!(err.kind, ErrorKind::TypeValidation);
        assert_eq!(*log.borrow(), ["type ok", "type bad"]);
    }

    #[test]
    fn cross_failure_is_reclassified_with_path() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root = Probe::new("root", &log);
        let mut hook = Probe::new("hook", &log);
        hook.cross = true;
        hook.fail_cross = true;
        root.children = vec![Probe::new("x", &log), hook];

        let err = validate(&mut root).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CrossField);
        assert_eq!(err.to_string(), "[1]: cross failed");
    }

    #[test]
    fn map_keys_and_nested_paths() {
        let mut tree: BTreeMap<&str, Vec<required::Positive<i32>>> = BTreeMap::new();
        let mut bad = required::Positive::default();
        bad.load(Some(-1));
        tree.insert("k", vec![required::Positive::default(), bad]);

        let err = validate(&mut tree).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingValue);
        assert_eq!(err.path().to_string(), "[k][0]");
    }

    #[test]
    fn references_keep_the_path() {
        let mut value: Option<Box<required::Positive<i32>>> =
            Some(Box::new(required::Positive::default()));
        let err = validate(&mut value).unwrap_err();
        assert_eq!(err.path().to_string(), "");
        assert_eq!(err.to_string(), "missing required value");
    }

    #[test]
    fn shared_cells_are_visited_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let shared = Rc::new(RefCell::new(Probe::new("shared", &log)));
        let mut root = (Rc::clone(&shared), Rc::clone(&shared));

        validate(&mut root).unwrap();
        assert_eq!(*log.borrow(), ["type shared"]);
    }
}
