//! Collection element validators.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::{ValidationError, Validator};

/// Accepts sequences without duplicate elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unique;

impl Unique {
    fn check<'a, T: Eq + Hash + 'a>(
        elements: impl IntoIterator<Item = &'a T>,
    ) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for element in elements {
            if !seen.insert(element) {
                return Err(ValidationError::new("unique", "duplicate value found"));
            }
        }
        Ok(())
    }
}

impl<T: Eq + Hash> Validator<[T]> for Unique {
    fn validate(&self, value: &[T]) -> Result<(), ValidationError> {
        Self::check(value)
    }
}

impl<T: Eq + Hash, const N: usize> Validator<[T; N]> for Unique {
    fn validate(&self, value: &[T; N]) -> Result<(), ValidationError> {
        Self::check(value)
    }
}

impl<T: Eq + Hash> Validator<Vec<T>> for Unique {
    fn validate(&self, value: &Vec<T>) -> Result<(), ValidationError> {
        Self::check(value)
    }
}

impl<T: Eq + Hash> Validator<VecDeque<T>> for Unique {
    fn validate(&self, value: &VecDeque<T>) -> Result<(), ValidationError> {
        Self::check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_duplicates() {
        assert!(Unique.validate(&vec![1, 2, 3]).is_ok());
        let err = Unique.validate(&vec!["a", "b", "a"]).unwrap_err();
        assert_eq!(err.message, "duplicate value found");
    }

    #[test]
    fn empty_is_unique() {
        assert!(Unique.validate(&Vec::<u8>::new()).is_ok());
        assert!(Unique.validate(&[0u8; 0][..]).is_ok());
    }

    #[test]
    fn arrays_and_deques() {
        assert!(Unique.validate(&[1, 1]).is_err());
        assert!(Unique.validate(&VecDeque::from([1, 2])).is_ok());
    }
}
