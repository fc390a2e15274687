// SPDX-License-Identifier: MIT OR Apache-2.0
//! Mapping views and the object-like guard.
//!
//! A JSON object maps its member names to values. A JSON array is accepted
//! as well and maps canonical decimal indices (`"0"`, `"1"`, ...) to its
//! elements. An array also owns a non-enumerable `"length"` key holding its
//! element count. Every other JSON value is rejected.

use crate::error::{Argument, DeltaError, Result};
use crate::value::{StrictEq, value_kind};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// Own key of every array that is not part of its entries
pub const ARRAY_LENGTH_KEY: &str = "length";

/// Borrowed, read-only view of an object-like JSON value.
#[derive(Debug, Clone, Copy)]
pub enum MappingRef<'a> {
    /// A JSON object
    Object(&'a Map<String, Value>),
    /// A JSON array keyed by index
    Array(&'a [Value]),
}

/// Validate that `value` is object-like and view it as a mapping.
///
/// # Errors
///
/// Returns [`DeltaError::InvalidArgument`] tagged with `argument` when
/// `value` is `null`, a boolean, a number or a string.
pub fn as_mapping(value: &Value, argument: Argument) -> Result<MappingRef<'_>> {
    match value {
        Value::Object(map) => Ok(MappingRef::Object(map)),
        Value::Array(items) => Ok(MappingRef::Array(items)),
        other => Err(DeltaError::invalid_argument(argument, value_kind(other))),
    }
}

impl<'a> MappingRef<'a> {
    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Object(map) => map.len(),
            Self::Array(items) => items.len(),
        }
    }

    /// True when the mapping has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up an enumerable entry by exact key.
    ///
    /// An array's `"length"` is not an entry and is not returned here.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match *self {
            Self::Object(map) => map.get(key),
            Self::Array(items) => parse_index(key).and_then(|idx| items.get(idx)),
        }
    }

    /// True when the mapping owns `key`, including an array's `"length"`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        match *self {
            Self::Array(_) if key == ARRAY_LENGTH_KEY => true,
            _ => self.get(key).is_some(),
        }
    }

    /// True when the mapping owns `key` and its value there is strictly
    /// equal to `value`.
    #[must_use]
    pub fn holds(&self, key: &str, value: &Value) -> bool {
        match *self {
            Self::Array(items) if key == ARRAY_LENGTH_KEY => {
                Value::from(items.len()).strict_eq(value)
            }
            _ => self.get(key).is_some_and(|prev| prev.strict_eq(value)),
        }
    }

    /// Entries in enumeration order: insertion order for objects, index
    /// order for arrays.
    #[must_use]
    pub fn iter(&self) -> Entries<'a> {
        match *self {
            Self::Object(map) => Entries::Object(map.iter()),
            Self::Array(items) => Entries::Array(items.iter().enumerate()),
        }
    }
}

impl<'a> IntoIterator for MappingRef<'a> {
    type Item = (Cow<'a, str>, &'a Value);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`MappingRef`].
pub enum Entries<'a> {
    /// Object members
    Object(serde_json::map::Iter<'a>),
    /// Array elements with their indices
    Array(Enumerate<slice::Iter<'a, Value>>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Cow<'a, str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Object(iter) => iter
                .next()
                .map(|(key, value)| (Cow::Borrowed(key.as_str()), value)),
            Self::Array(iter) => iter
                .next()
                .map(|(idx, value)| (Cow::Owned(idx.to_string()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Object(iter) => iter.size_hint(),
            Self::Array(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

/// Parse a canonical array index: decimal digits, no sign, no leading zero.
fn parse_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => key.parse().ok(),
        _ => None,
    }
}

/// Own-key lookup over a typed mapping.
pub trait Lookup<K, V> {
    /// The value stored under `key`, if any
    fn lookup(&self, key: &K) -> Option<&V>;
}

impl<K, V, S> Lookup<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K: Ord, V> Lookup<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl Lookup<String, Value> for Map<String, Value> {
    fn lookup(&self, key: &String) -> Option<&Value> {
        self.get(key.as_str())
    }
}

impl Lookup<String, Value> for MappingRef<'_> {
    fn lookup(&self, key: &String) -> Option<&Value> {
        self.get(key)
    }
}

impl<K, V, L: Lookup<K, V> + ?Sized> Lookup<K, V> for &L {
    fn lookup(&self, key: &K) -> Option<&V> {
        (**self).lookup(key)
    }
}
