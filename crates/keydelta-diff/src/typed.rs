// SPDX-License-Identifier: MIT OR Apache-2.0
//! Delta over statically typed mappings.

use keydelta_core::{Lookup, StrictEq};

/// True when `value` must be reported given the original entry for its key.
#[inline]
fn is_changed<V: StrictEq + ?Sized>(previous: Option<&V>, value: &V) -> bool {
    previous.is_none_or(|prev| !prev.strict_eq(value))
}

/// Compute the delta between a typed original mapping and the entries of an
/// updated mapping.
///
/// Both sides are mappings by construction, so no validation happens. The
/// result is collected into any `C`; collecting into a `Vec<(K, V)>` keeps
/// the iteration order of `updated`.
///
/// ```
/// use keydelta_diff::compute_delta_by;
/// use std::collections::{BTreeMap, HashMap};
///
/// let original: HashMap<&str, u32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let updated: BTreeMap<&str, u32> = [("a", 1), ("b", 3), ("c", 4)].into_iter().collect();
///
/// let delta: Vec<(&str, u32)> = compute_delta_by(&original, &updated);
/// assert_eq!(delta, [("b", 3), ("c", 4)]);
/// ```
pub fn compute_delta_by<'a, K, V, L, I, C>(original: &L, updated: I) -> C
where
    K: Clone + 'a,
    V: StrictEq + Clone + 'a,
    L: Lookup<K, V> + ?Sized,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    C: FromIterator<(K, V)>,
{
    updated
        .into_iter()
        .filter(|&(key, value)| is_changed(original.lookup(key), value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
