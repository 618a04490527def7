//! Value categories the built-in validators are generic over.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Numbers with a zero and a total-ish order: every integer and float.
pub trait Real: Copy + PartialOrd + Default {
    /// Lossy conversion used by range checks.
    fn to_f64(self) -> f64;

    /// `T::default()`, spelled out.
    fn zero() -> Self {
        Self::default()
    }
}

/// Integers of any width and signedness.
pub trait Integer: Real {
    /// Divisible by two.
    fn is_even(self) -> bool;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Real for $ty {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }

            impl Integer for $ty {
                fn is_even(self) -> bool {
                    self % 2 == 0
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Real for f32 {
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Anything with a number of elements (bytes for strings).
pub trait Length {
    /// Number of elements.
    fn length(&self) -> usize;
}

impl Length for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<T: Length + ?Sized> Length for Box<T> {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Borrowable as text.
pub trait Text: AsRef<str> {}

impl<T: AsRef<str> + ?Sized> Text for T {}
