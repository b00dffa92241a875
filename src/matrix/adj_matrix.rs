use crate::{
    error::{Err, Result},
    types::Weight,
};
use rayon::prelude::*;

/// A dense adjacency matrix stored in row-major order.
///
/// Products use wrapping arithmetic, so walk counts larger than
/// `Weight::MAX` are kept modulo 2^64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<Weight>,
}

impl AdjMatrix {
    pub fn new(n_rows: usize, n_cols: usize, data: Vec<Weight>) -> Result<Self> {
        if data.len() != n_rows * n_cols {
            return Err(Err::Length {
                expected: n_rows * n_cols,
                found: data.len(),
            });
        }
        Ok(Self {
            n_rows,
            n_cols,
            data,
        })
    }

    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            data: vec![0; n_rows * n_cols],
        }
    }

    /// Builds a matrix from its rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let n_cols = rows.first().ok_or(Err::Empty)?.len();
        let mut data = Vec::with_capacity(rows.len() * n_cols);
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n_cols {
                return Err(Err::Ragged {
                    row,
                    expected: n_cols,
                    found: entries.len(),
                });
            }
            data.extend_from_slice(entries);
        }
        Self::new(rows.len(), n_cols, data)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_square(&self) -> bool {
        self.n_rows == self.n_cols
    }

    /// Returns the number of nodes of the graph.
    pub fn order(&self) -> Result<usize> {
        if self.is_square() {
            Ok(self.n_rows)
        } else {
            Err(Err::NotSquare {
                rows: self.n_rows,
                cols: self.n_cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Weight {
        self.data[row * self.n_cols + col]
    }

    pub(crate) fn add(&mut self, row: usize, col: usize, weight: Weight) {
        let entry = &mut self.data[row * self.n_cols + col];
        *entry = entry.wrapping_add(weight);
    }

    /// The entries in row-major order.
    pub fn as_slice(&self) -> &[Weight] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        self.data.chunks(self.n_cols.max(1)).take(self.n_rows)
    }

    pub fn column(&self, col: usize) -> Vec<Weight> {
        self.data
            .iter()
            .skip(col)
            .step_by(self.n_cols.max(1))
            .copied()
            .collect()
    }

    /// Computes `self × rhs` assuming `self.n_cols == rhs.n_rows`.
    pub(crate) fn product(&self, rhs: &AdjMatrix) -> AdjMatrix {
        let mut product = AdjMatrix::zeros(self.n_rows, rhs.n_cols);
        if rhs.n_cols == 0 || self.n_cols == 0 {
            return product;
        }
        product
            .data
            .par_chunks_mut(rhs.n_cols)
            .zip(self.data.par_chunks(self.n_cols))
            .for_each(|(out, lhs_row)| {
                for (&a, rhs_row) in lhs_row.iter().zip(rhs.data.chunks(rhs.n_cols)) {
                    if a == 0 {
                        continue;
                    }
                    for (o, &b) in out.iter_mut().zip(rhs_row) {
                        *o = o.wrapping_add(a.wrapping_mul(b));
                    }
                }
            });
        product
    }

    /// Relabels node `perm[i]` as node `i`, i.e. `B[i][j] = A[perm[i]][perm[j]]`.
    pub fn permute(&self, perm: &[usize]) -> Result<AdjMatrix> {
        let order = self.order()?;
        let mut seen = vec![false; order];
        if perm.len() != order {
            return Err(Err::InvalidPermutation);
        }
        for &p in perm {
            if p >= order || seen[p] {
                return Err(Err::InvalidPermutation);
            }
            seen[p] = true;
        }
        let data = perm
            .iter()
            .flat_map(|&pi| perm.iter().map(move |&pj| self.get(pi, pj)))
            .collect();
        Self::new(order, order, data)
    }
}

impl std::fmt::Display for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let mut entries = row.iter();
            if let Some(first) = entries.next() {
                write!(f, "{}", first)?;
            }
            for entry in entries {
                write!(f, " {}", entry)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> AdjMatrix {
        AdjMatrix::from_rows(vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]).unwrap()
    }

    #[test]
    fn test_from_rows() {
        let m = star();
        assert_eq!((m.n_rows(), m.n_cols()), (3, 3));
        assert_eq!(m.as_slice(), [0, 1, 1, 1, 0, 0, 1, 0, 0]);
        assert_eq!(m.column(0), [0, 1, 1]);
        assert_eq!(m.column(2), [1, 0, 0]);
        assert_eq!(AdjMatrix::from_rows(vec![]), Err(Err::Empty));
        assert_eq!(
            AdjMatrix::from_rows(vec![vec![0, 1], vec![1]]),
            Err(Err::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            AdjMatrix::new(2, 2, vec![0, 1, 1]),
            Err(Err::Length {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_product_square() {
        assert_eq!(
            star().product(&star()).as_slice(),
            [2, 0, 0, 0, 1, 1, 0, 1, 1]
        );
    }

    #[test]
    fn test_product_rectangular() {
        let a = AdjMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let b = AdjMatrix::from_rows(vec![vec![1, 0], vec![0, 1], vec![1, 1]]).unwrap();
        let c = a.product(&b);
        assert_eq!((c.n_rows(), c.n_cols()), (2, 2));
        assert_eq!(c.as_slice(), [4, 5, 10, 11]);
        let d = b.product(&a);
        assert_eq!((d.n_rows(), d.n_cols()), (3, 3));
        assert_eq!(d.as_slice(), [1, 2, 3, 4, 5, 6, 5, 7, 9]);
        assert_eq!(a.order(), Err(Err::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_product_wraps() {
        let m = AdjMatrix::from_rows(vec![vec![Weight::MAX, 0], vec![0, 1]]).unwrap();
        let p = m.product(&m);
        assert_eq!(p.get(0, 0), Weight::MAX.wrapping_mul(Weight::MAX));
        assert_eq!(p.get(1, 1), 1);
    }

    #[test]
    fn test_permute() {
        let m = star();
        let p = m.permute(&[1, 2, 0]).unwrap();
        assert_eq!(p.as_slice(), [0, 0, 1, 0, 0, 1, 1, 1, 0]);
        assert_eq!(m.permute(&[0, 1, 2]).unwrap(), m);
        assert_eq!(m.permute(&[0, 0, 1]), Err(Err::InvalidPermutation));
        assert_eq!(m.permute(&[0, 1]), Err(Err::InvalidPermutation));
        assert_eq!(m.permute(&[0, 1, 3]), Err(Err::InvalidPermutation));
    }

    #[test]
    fn test_display() {
        assert_eq!(star().to_string(), "0 1 1\n1 0 0\n1 0 0\n");
    }
}
