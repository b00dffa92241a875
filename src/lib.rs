//! Walk-counting fingerprints for refuting graph isomorphism.
//!
//! Two graphs whose fingerprints differ are certainly not isomorphic. Equal
//! fingerprints only mean the heuristic found no evidence against it.

pub use compare::{compare, edge_hash_compare, node_hash_compare, Mode, Report};

pub mod compare;
pub mod error;
pub mod fingerprint;
pub mod matrix;
pub mod types;

pub(crate) mod tools;
