//! Orderable scalar keys.
//!
//! The tree only accepts keys implementing [`Scalar`]. Integers are always
//! orderable; floats are orderable unless NaN. Dynamically-typed input
//! (`serde_json::Value`) goes through [`Scalar::from_json`] and is rejected
//! with [`AvlError::InvalidKeyType`] when it does not fit the key type.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use serde_json::Value;

use crate::error::{AvlError, Result};

pub trait Scalar: Copy + PartialOrd + Debug + Display {
    /// `false` for values that have no place in a total order (NaN).
    fn is_orderable(&self) -> bool {
        true
    }

    /// Total comparison between two orderable values.
    fn compare(&self, other: &Self) -> Ordering;

    /// Converts a JSON value into a key, `None` when the value is not a
    /// number representable by `Self`.
    fn from_json(value: &Value) -> Option<Self>;
}

/// Rejects keys outside the orderable domain.
pub fn validate<K: Scalar>(key: &K) -> Result<()> {
    if key.is_orderable() {
        Ok(())
    } else {
        Err(AvlError::InvalidKeyType(format!("{key:?} is not orderable")))
    }
}

/// Converts and validates a dynamically-typed key.
pub fn key_from_json<K: Scalar>(value: &Value) -> Result<K> {
    let key = K::from_json(value).ok_or_else(|| {
        AvlError::InvalidKeyType(format!(
            "expected {}, got {value}",
            std::any::type_name::<K>()
        ))
    })?;
    validate(&key)?;
    Ok(key)
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            fn from_json(value: &Value) -> Option<Self> {
                value.as_i64().and_then(|n| <$t>::try_from(n).ok())
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }

            fn from_json(value: &Value) -> Option<Self> {
                value.as_u64().and_then(|n| <$t>::try_from(n).ok())
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            fn is_orderable(&self) -> bool {
                !self.is_nan()
            }

            // NaN never reaches the tree, so `partial_cmp` is total here and
            // `0.0 == -0.0` keeps its numeric meaning.
            fn compare(&self, other: &Self) -> Ordering {
                self.partial_cmp(other).unwrap_or(Ordering::Equal)
            }

            // A finite number that overflows the key type is out of range.
            fn from_json(value: &Value) -> Option<Self> {
                let n = value.as_f64()?;
                let k = n as $t;
                (k.is_finite() || !n.is_finite()).then_some(k)
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);
impl_float!(f32, f64);
