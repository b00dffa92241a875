//! Error management.

use derive_more::Display;

#[derive(Debug, Display, PartialEq)]
pub enum Err {
    #[display(fmt = "parse error: {}", _0)]
    Parse(String),
    #[display(fmt = "io error: {}", _0)]
    Io(String),
    #[display(fmt = "matrix has no rows")]
    Empty,
    #[display(fmt = "expected {} entries, found {}", expected, found)]
    Length { expected: usize, found: usize },
    #[display(fmt = "row {} has {} entries, expected {}", row, found, expected)]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[display(fmt = "matrix is {}x{}, expected a square matrix", rows, cols)]
    NotSquare { rows: usize, cols: usize },
    #[display(fmt = "graphs have {} and {} nodes", left, right)]
    DimensionMismatch { left: usize, right: usize },
    #[display(fmt = "invalid permutation")]
    InvalidPermutation,
}

impl std::error::Error for Err {}

impl From<std::io::Error> for Err {
    fn from(e: std::io::Error) -> Self {
        Err::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Err>;
