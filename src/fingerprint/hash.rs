//! Hashing of serialized walk counts.

use crate::types::{HashValue, Weight};
use itertools::Itertools;
use std::collections::hash_map::DefaultHasher;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

pub fn hash_str(s: &str) -> HashValue {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

/// Serializes `values` as comma separated decimals.
pub fn serialize<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values.into_iter().join(",")
}

/// Hashes the serialization of `values`; order matters.
pub fn hash_sequence<I>(values: I) -> HashValue
where
    I: IntoIterator,
    I::Item: Display,
{
    hash_str(&serialize(values))
}

/// Hashes `values` regardless of their order. The slice is sorted in place.
pub fn hash_multiset(values: &mut [Weight]) -> HashValue {
    values.sort_unstable();
    hash_sequence(values.iter())
}

pub fn hash_weight(weight: Weight) -> HashValue {
    hash_str(&weight.to_string())
}
