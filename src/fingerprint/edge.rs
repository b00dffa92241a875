//! Edge fingerprints.
//!
//! Step `i` hashes every entry of `A^(i+1)` on its own, in row-major order.

use crate::{
    error::Result,
    fingerprint::{check_shapes, hash::hash_weight, lockstep, Fingerprints},
    matrix::AdjMatrix,
    types::HashValue,
};
use rayon::prelude::*;

/// The entry hashes of one graph under increasing powers.
pub struct EdgeWalk {
    original: AdjMatrix,
    current: Option<AdjMatrix>,
}

impl EdgeWalk {
    pub fn new(matrix: &AdjMatrix) -> Result<Self> {
        matrix.order()?;
        Ok(Self {
            original: matrix.clone(),
            current: None,
        })
    }
}

impl Iterator for EdgeWalk {
    type Item = Vec<HashValue>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &self.current {
            Some(current) => self.original.product(current),
            None => self.original.clone(),
        };
        let hashes = entry_hashes(&next);
        self.current = Some(next);
        Some(hashes)
    }
}

pub fn entry_hashes(matrix: &AdjMatrix) -> Vec<HashValue> {
    matrix
        .as_slice()
        .par_iter()
        .map(|&weight| hash_weight(weight))
        .collect()
}

/// Runs the edge pipeline for at most `walks` steps.
pub fn fingerprints(a: &AdjMatrix, b: &AdjMatrix, walks: usize) -> Result<Fingerprints> {
    let order = check_shapes(a, b)?;
    lockstep(EdgeWalk::new(a)?, EdgeWalk::new(b)?, order * order, walks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::hash::hash_str;

    fn matrix(rows: Vec<Vec<i64>>) -> AdjMatrix {
        AdjMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_walk() {
        let star = matrix(vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]);
        let mut walk = EdgeWalk::new(&star).unwrap();
        let (zero, one, two) = (hash_str("0"), hash_str("1"), hash_str("2"));
        assert_eq!(
            walk.next().unwrap(),
            [zero, one, one, one, zero, zero, one, zero, zero]
        );
        assert_eq!(
            walk.next().unwrap(),
            [two, zero, zero, zero, one, one, zero, one, one]
        );
        // A^3 = 2A
        assert_eq!(
            walk.next().unwrap(),
            [zero, two, two, two, zero, zero, two, zero, zero]
        );
    }

    #[test]
    fn test_divergence_truncates() {
        let triangle = matrix(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        let path = matrix(vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]);
        let fingerprints = fingerprints(&triangle, &path, 5).unwrap();
        assert_eq!(fingerprints.divergence(), Some(0));
        assert_eq!(fingerprints.left().len(), 1);
        assert_eq!(fingerprints.left().width(), 9);
        assert_eq!(fingerprints.right().vectors()[0].len(), 9);
    }

    #[test]
    fn test_full_trajectory() {
        let a = matrix(vec![vec![0, 1], vec![1, 0]]);
        let fingerprints = fingerprints(&a, &a, 4).unwrap();
        assert_eq!(fingerprints.divergence(), None);
        assert_eq!(fingerprints.left().len(), 4);
        assert_eq!(fingerprints.left(), fingerprints.right());
    }
}
