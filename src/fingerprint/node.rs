//! Node fingerprints.
//!
//! Step `i` squares the working matrix, so it counts walks of length
//! `2^(i+1)`. Each column is hashed after sorting, which makes the hash of a
//! node independent of how the other nodes are labeled.

use crate::{
    error::Result,
    fingerprint::{check_shapes, hash::hash_multiset, lockstep, Fingerprints},
    matrix::AdjMatrix,
    types::HashValue,
};
use rayon::prelude::*;

/// The column hashes of one graph under repeated squaring.
pub struct NodeWalk {
    current: AdjMatrix,
}

impl NodeWalk {
    pub fn new(matrix: &AdjMatrix) -> Result<Self> {
        matrix.order()?;
        Ok(Self {
            current: matrix.clone(),
        })
    }
}

impl Iterator for NodeWalk {
    type Item = Vec<HashValue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = self.current.product(&self.current);
        Some(column_hashes(&self.current))
    }
}

pub fn column_hashes(matrix: &AdjMatrix) -> Vec<HashValue> {
    (0..matrix.n_cols())
        .into_par_iter()
        .map(|col| hash_multiset(&mut matrix.column(col)))
        .collect()
}

/// Runs the node pipeline for at most `walks` steps.
pub fn fingerprints(a: &AdjMatrix, b: &AdjMatrix, walks: usize) -> Result<Fingerprints> {
    let order = check_shapes(a, b)?;
    lockstep(NodeWalk::new(a)?, NodeWalk::new(b)?, order, walks)
}
