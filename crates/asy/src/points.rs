//! Exponent point clouds as exact k×n matrices (one column per term).

use crate::error::{AsyError, Result};
use crate::exact::{IntoExact, QMatrix, Rat};

/// Validated point matrix: k ≥ 1 rows, n ≥ 1 columns, exact entries.
///
/// Column `j` is the exponent vector of term `j`; the last row is the order
/// axis that scaling vectors are compared against.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMatrix {
    m: QMatrix,
}

impl PointMatrix {
    /// Build from `n` rows of `k` values each (row = point), transposing.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Clone + IntoExact,
    {
        let first = rows.first().ok_or(AsyError::EmptyPointSet)?;
        let k = first.as_ref().len();
        if k == 0 {
            return Err(AsyError::ZeroDimension);
        }
        for (index, row) in rows.iter().enumerate() {
            let found = row.as_ref().len();
            if found != k {
                return Err(AsyError::DimensionMismatch {
                    index,
                    expected: k,
                    found,
                });
            }
        }
        let m = QMatrix::from_fn(k, rows.len(), |i, j| rows[j].as_ref()[i].clone().into_exact());
        Ok(Self { m })
    }

    /// Wrap an existing k×n matrix whose columns are points.
    pub fn from_columns(m: QMatrix) -> Result<Self> {
        if m.ncols() == 0 {
            return Err(AsyError::EmptyPointSet);
        }
        if m.nrows() == 0 {
            return Err(AsyError::ZeroDimension);
        }
        Ok(Self { m })
    }

    /// Ambient dimension k.
    #[inline]
    pub fn dim(&self) -> usize {
        self.m.nrows()
    }

    /// Number of points n.
    #[inline]
    pub fn len(&self) -> usize {
        self.m.ncols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.m.ncols() == 0
    }

    #[inline]
    pub fn get(&self, coord: usize, point: usize) -> &Rat {
        &self.m[(coord, point)]
    }

    /// Order coordinate (last row) of point `j`.
    #[inline]
    pub fn order(&self, j: usize) -> &Rat {
        &self.m[(self.dim() - 1, j)]
    }

    /// Point `j` as an owned vector.
    pub fn point(&self, j: usize) -> Vec<Rat> {
        self.m.column(j).iter().cloned().collect()
    }

    #[inline]
    pub fn as_matrix(&self) -> &QMatrix {
        &self.m
    }

    /// Reorder points: column `j` of the result is column `perm[j]` here.
    ///
    /// Any non-empty selection of valid indices is accepted, repeats included.
    pub fn permuted(&self, perm: &[usize]) -> Result<Self> {
        if perm.is_empty() {
            return Err(AsyError::EmptyPointSet);
        }
        if let Some(&index) = perm.iter().find(|&&j| j >= self.len()) {
            return Err(AsyError::PointIndex {
                index,
                len: self.len(),
            });
        }
        let m = QMatrix::from_fn(self.dim(), perm.len(), |i, j| self.m[(i, perm[j])].clone());
        Ok(Self { m })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::q;

    #[test]
    fn rows_become_columns() {
        let p = PointMatrix::from_rows(&[[0, 2], [1, 0], [3, 1]]).unwrap();
        assert_eq!(p.dim(), 2);
        assert_eq!(p.len(), 3);
        assert_eq!(p.point(2), vec![q(3), q(1)]);
        assert_eq!(p.order(0), &q(2));
    }

    #[test]
    fn rejects_bad_shapes() {
        let empty: [[i64; 2]; 0] = [];
        assert!(matches!(
            PointMatrix::from_rows(&empty),
            Err(AsyError::EmptyPointSet)
        ));
        let flat: [[i64; 0]; 2] = [[], []];
        assert!(matches!(
            PointMatrix::from_rows(&flat),
            Err(AsyError::ZeroDimension)
        ));
        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            PointMatrix::from_rows(&ragged),
            Err(AsyError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn from_columns_checks_shape() {
        let m = QMatrix::from_fn(2, 3, |i, j| q((i + j) as i64));
        let p = PointMatrix::from_columns(m.clone()).unwrap();
        assert_eq!(p.as_matrix(), &m);
        assert!(matches!(
            PointMatrix::from_columns(QMatrix::from_fn(2, 0, |_, _| q(0))),
            Err(AsyError::EmptyPointSet)
        ));
    }

    #[test]
    fn permutation_moves_columns() {
        let p = PointMatrix::from_rows(&[[0, 2], [1, 0], [3, 1]]).unwrap();
        let s = p.permuted(&[2, 0, 1]).unwrap();
        assert_eq!(s.point(0), p.point(2));
        assert_eq!(s.point(1), p.point(0));
    }

    #[test]
    fn permutation_keeps_the_matrix_valid() {
        let p = PointMatrix::from_rows(&[[0, 2], [1, 0], [3, 1]]).unwrap();
        assert!(matches!(p.permuted(&[]), Err(AsyError::EmptyPointSet)));
        assert!(matches!(
            p.permuted(&[0, 3]),
            Err(AsyError::PointIndex { index: 3, len: 3 })
        ));
        assert_eq!(p.permuted(&[1, 1]).unwrap().len(), 2);
    }
}
