use crate::matrix::AdjMatrix;
use log::{info, warn};
use std::collections::HashMap;

/// Reads the graph stored in the SQLite3 database into an adjacency matrix.
///
/// The database must have the following schema:
///
/// ```sql
/// CREATE TABLE vertices (vid INT, vlabel INT);
/// CREATE TABLE edges (src INT, dst INT, elabel INT);
/// ```
///
/// Vertices are numbered in ascending `vid` order and every arc adds one to
/// its entry. Labels are ignored.
pub fn from_sqlite(conn: &rusqlite::Connection) -> rusqlite::Result<AdjMatrix> {
    let mut vertices_stmt = conn.prepare("SELECT DISTINCT vid FROM vertices ORDER BY vid")?;
    let vids = vertices_stmt
        .query_map([], |row| row.get::<_, i64>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    let index: HashMap<i64, usize> = vids.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let mut matrix = AdjMatrix::zeros(vids.len(), vids.len());
    let mut edges_stmt = conn.prepare("SELECT src, dst FROM edges")?;
    let mut num_edges = 0;
    let edges = edges_stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
    })?;
    for edge in edges {
        let (src, dst) = edge?;
        match (index.get(&src), index.get(&dst)) {
            (Some(&i), Some(&j)) => {
                matrix.add(i, j, 1);
                num_edges += 1;
            }
            _ => warn!("skipping arc ({}, {}) with an unknown endpoint", src, dst),
        }
    }
    info!("read {} vertices and {} arcs", vids.len(), num_edges);
    Ok(matrix)
}
