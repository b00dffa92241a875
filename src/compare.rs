//! The verdict: are two graphs distinguishable by their walk counts?

use crate::{
    error::Result,
    fingerprint::{combine, edge, node, EdgeWalk, NodeWalk, Trajectory},
    matrix::AdjMatrix,
    tools::sorted,
    types::HashValue,
};
use derive_more::Display;
use log::info;
use std::str::FromStr;

/// Which entities are fingerprinted.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[display(fmt = "node")]
    Node,
    #[display(fmt = "edge")]
    Edge,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "node" => Ok(Mode::Node),
            "edge" => Ok(Mode::Edge),
            _ => Err(format!("invalid mode: {}", s)),
        }
    }
}

/// The outcome of comparing two graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    mode: Mode,
    walks: usize,
    divergence: Option<usize>,
    left: Vec<HashValue>,
    right: Vec<HashValue>,
}

impl Report {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The walk step at which the per-step hash multisets first differ.
    pub fn divergence(&self) -> Option<usize> {
        self.divergence
    }

    /// The sorted combined hashes of the first graph.
    pub fn left(&self) -> &[HashValue] {
        &self.left
    }

    /// The sorted combined hashes of the second graph.
    pub fn right(&self) -> &[HashValue] {
        &self.right
    }

    /// `false` means the graphs are certainly not isomorphic.
    pub fn possibly_isomorphic(&self) -> bool {
        self.left == self.right
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.possibly_isomorphic(), self.divergence) {
            (true, _) => write!(
                f,
                "{}: possibly isomorphic ({} walks)",
                self.mode, self.walks
            ),
            (false, Some(step)) => write!(
                f,
                "{}: not isomorphic (diverged at walk {})",
                self.mode, step
            ),
            (false, None) => write!(
                f,
                "{}: not isomorphic (combined hashes differ after {} walks)",
                self.mode, self.walks
            ),
        }
    }
}

/// Compares `a` and `b` using at most `walks` walk lengths.
pub fn compare(a: &AdjMatrix, b: &AdjMatrix, walks: usize, mode: Mode) -> Result<Report> {
    let fingerprints = match mode {
        Mode::Node => node::fingerprints(a, b, walks)?,
        Mode::Edge => edge::fingerprints(a, b, walks)?,
    };
    let report = Report {
        mode,
        walks,
        divergence: fingerprints.divergence(),
        left: sorted(combine(fingerprints.left())),
        right: sorted(combine(fingerprints.right())),
    };
    info!("{}", report);
    Ok(report)
}

/// Whether the node fingerprints of `a` and `b` agree.
pub fn node_hash_compare(a: &AdjMatrix, b: &AdjMatrix, walks: usize) -> Result<bool> {
    Ok(compare(a, b, walks, Mode::Node)?.possibly_isomorphic())
}

/// Whether the edge fingerprints of `a` and `b` agree.
pub fn edge_hash_compare(a: &AdjMatrix, b: &AdjMatrix, walks: usize) -> Result<bool> {
    Ok(compare(a, b, walks, Mode::Edge)?.possibly_isomorphic())
}

/// The sorted combined hashes of a single graph.
pub fn combined_hashes(matrix: &AdjMatrix, walks: usize, mode: Mode) -> Result<Vec<HashValue>> {
    let order = matrix.order()?;
    let trajectory = match mode {
        Mode::Node => Trajectory::from_walk(order, NodeWalk::new(matrix)?, walks)?,
        Mode::Edge => Trajectory::from_walk(order * order, EdgeWalk::new(matrix)?, walks)?,
    };
    Ok(sorted(combine(&trajectory)))
}
