use crate::{
    error::{Err, Result},
    matrix::AdjMatrix,
    types::Weight,
};
use log::debug;
use pest::Parser;
use pest_derive::Parser;
use std::path::Path;

#[derive(Parser)]
#[grammar = "matrix/grammar.pest"]
struct MatrixParser;

/// Parses a matrix written one row per line.
///
/// Entries are separated by whitespace or commas, `#` starts a comment and
/// blank lines are ignored:
///
/// ```text
/// # a star on three nodes
/// 0 1 1
/// 1 0 0
/// 1 0 0
/// ```
pub fn parse(input: &str) -> Result<AdjMatrix> {
    let matrix = MatrixParser::parse(Rule::matrix, input)
        .map_err(|e| Err::Parse(e.to_string()))?
        .next()
        .unwrap();
    let mut rows = vec![];
    for pair in matrix.into_inner() {
        match pair.as_rule() {
            Rule::row => rows.push(parse_row(pair)?),
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    AdjMatrix::from_rows(rows)
}

/// Reads and parses the matrix stored at `path`.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<AdjMatrix> {
    let matrix = parse(&std::fs::read_to_string(path.as_ref())?)?;
    debug!(
        "read {}x{} matrix from {}",
        matrix.n_rows(),
        matrix.n_cols(),
        path.as_ref().display()
    );
    Ok(matrix)
}

fn parse_row(pair: pest::iterators::Pair<Rule>) -> Result<Vec<Weight>> {
    pair.into_inner()
        .map(|int| {
            int.as_str()
                .parse::<Weight>()
                .map_err(|e| Err::Parse(format!("{}: {}", int.as_str(), e)))
        })
        .collect()
}
