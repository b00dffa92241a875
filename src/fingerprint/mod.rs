//! Walk-count fingerprints of nodes and edges.
//!
//! A pipeline drives one walk per graph in lockstep. Each step yields a hash
//! vector per graph; the first step where the two vectors differ as multisets
//! proves the graphs non-isomorphic and ends the pipeline.

pub use combine::combine;
pub use edge::EdgeWalk;
pub use node::NodeWalk;

pub mod edge;
pub mod hash;
pub mod node;

mod combine;

use crate::{
    error::{Err, Result},
    matrix::AdjMatrix,
    tools::same_multiset,
    types::HashValue,
};
use log::debug;

/// The hash vectors of one graph, one per walk length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    width: usize,
    vectors: Vec<Vec<HashValue>>,
}

impl Trajectory {
    /// Creates an empty trajectory whose vectors hold `width` hashes.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            vectors: vec![],
        }
    }

    /// Collects the first `walks` steps of `walk`.
    pub fn from_walk<W>(width: usize, walk: W, walks: usize) -> Result<Self>
    where
        W: Iterator<Item = Vec<HashValue>>,
    {
        let mut trajectory = Self::new(width);
        for vector in walk.take(walks) {
            trajectory.push(vector)?;
        }
        Ok(trajectory)
    }

    /// Appends the hash vector of the next step, which must hold `width` hashes.
    pub fn push(&mut self, vector: Vec<HashValue>) -> Result<()> {
        if vector.len() != self.width {
            return Err(Err::Length {
                expected: self.width,
                found: vector.len(),
            });
        }
        self.vectors.push(vector);
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vectors(&self) -> &[Vec<HashValue>] {
        &self.vectors
    }
}

/// The trajectories of two graphs computed by one pipeline run.
///
/// When the walks diverge, both trajectories hold only the diverging vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprints {
    left: Trajectory,
    right: Trajectory,
    divergence: Option<usize>,
}

impl Fingerprints {
    pub fn left(&self) -> &Trajectory {
        &self.left
    }

    pub fn right(&self) -> &Trajectory {
        &self.right
    }

    /// The index of the walk step at which the hash multisets differ.
    pub fn divergence(&self) -> Option<usize> {
        self.divergence
    }
}

/// Returns the common number of nodes of two graphs.
pub(crate) fn check_shapes(a: &AdjMatrix, b: &AdjMatrix) -> Result<usize> {
    let (left, right) = (a.order()?, b.order()?);
    if left != right {
        return Err(Err::DimensionMismatch { left, right });
    }
    Ok(left)
}

pub(crate) fn lockstep<W>(
    left: W,
    right: W,
    width: usize,
    walks: usize,
) -> Result<Fingerprints>
where
    W: Iterator<Item = Vec<HashValue>>,
{
    let mut left_trajectory = Trajectory::new(width);
    let mut right_trajectory = Trajectory::new(width);
    for (step, (l, r)) in left.zip(right).take(walks).enumerate() {
        if !same_multiset(&l, &r) {
            debug!("hash multisets diverge at step {}", step);
            let (mut left, mut right) = (Trajectory::new(width), Trajectory::new(width));
            left.push(l)?;
            right.push(r)?;
            return Ok(Fingerprints {
                left,
                right,
                divergence: Some(step),
            });
        }
        debug!("step {} agrees", step);
        left_trajectory.push(l)?;
        right_trajectory.push(r)?;
    }
    Ok(Fingerprints {
        left: left_trajectory,
        right: right_trajectory,
        divergence: None,
    })
}
