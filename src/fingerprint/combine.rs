use crate::{
    fingerprint::{hash::hash_sequence, Trajectory},
    types::HashValue,
};
use rayon::prelude::*;

/// Folds the hashes of each node or edge across all walk lengths into one.
pub fn combine(trajectory: &Trajectory) -> Vec<HashValue> {
    if trajectory.is_empty() {
        return vec![];
    }
    (0..trajectory.width())
        .into_par_iter()
        .map(|i| hash_sequence(trajectory.vectors().iter().map(|vector| vector[i])))
        .collect()
}
