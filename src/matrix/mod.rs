//! The adjacency matrix and its loaders.

pub use adj_matrix::AdjMatrix;
pub use parser::{parse, read_file};
pub use sqlite::from_sqlite;

mod adj_matrix;
mod parser;
mod sqlite;
