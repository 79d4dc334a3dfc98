//! Affine-hull reduction: express points in a frame of their affine hull.
//!
//! Algorithm
//! - Translate by the first point (`bias`) on a private copy.
//! - Factor the centered matrix with a rank-revealing orthogonal
//!   factorization from the `ExactLinearAlgebra` capability.
//!
//! Invariants
//! - `weight · reduced[:, j] + bias == P[:, j]` exactly for every `j`.
//! - `weight` has `rank` pairwise orthogonal columns with squared norms
//!   `norms_sq`; `rank == 0` iff all points coincide.

use nalgebra::DMatrix;
use num_traits::ToPrimitive;
use tracing::debug;

use crate::error::{AsyError, Result};
use crate::exact::{dot, ExactLinearAlgebra, QMatrix, Rat};
use crate::points::PointMatrix;

/// Points expressed in an orthogonal frame of their affine hull.
#[derive(Clone, Debug)]
pub struct AffineFrame {
    /// r×n reduced coordinates.
    pub reduced: QMatrix,
    /// k×r frame with orthogonal columns.
    pub weight: QMatrix,
    /// Translation back to the ambient origin (the first point).
    pub bias: Vec<Rat>,
    /// Squared lengths of the `weight` columns.
    pub norms_sq: Vec<Rat>,
}

impl AffineFrame {
    /// Dimension r of the affine hull.
    #[inline]
    pub fn rank(&self) -> usize {
        self.reduced.nrows()
    }

    /// Recover point `j` as `weight · reduced[:, j] + bias`.
    pub fn reconstruct(&self, j: usize) -> Vec<Rat> {
        (0..self.weight.nrows())
            .map(|i| dot(self.weight.row(i).iter(), self.reduced.column(j).iter()) + &self.bias[i])
            .collect()
    }

    /// Reduced coordinates in the orthonormal frame, as floats.
    ///
    /// Row `i` is scaled by `sqrt(norms_sq[i])`. This is the only place exact
    /// data is turned into floating point; the result feeds hull backends.
    pub fn hull_coords(&self) -> Result<DMatrix<f64>> {
        let (r, n) = self.reduced.shape();
        let mut out = DMatrix::<f64>::zeros(r, n);
        for i in 0..r {
            let scale = to_finite(&self.norms_sq[i])?.sqrt();
            for j in 0..n {
                out[(i, j)] = to_finite(&self.reduced[(i, j)])? * scale;
            }
        }
        Ok(out)
    }
}

fn to_finite(x: &Rat) -> Result<f64> {
    x.to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AsyError::FloatConversion {
            value: x.to_string(),
        })
}

/// Reduce `points` to coordinates on their affine hull.
///
/// The caller's matrix is left untouched.
pub fn reduce<L: ExactLinearAlgebra + ?Sized>(points: &PointMatrix, la: &L) -> AffineFrame {
    let p = points.as_matrix();
    let (k, n) = p.shape();
    let bias = points.point(0);
    let mut centered = p.clone();
    for j in 0..n {
        for i in 0..k {
            centered[(i, j)] -= &bias[i];
        }
    }
    let f = la.qr(&centered);
    debug!(k, n, rank = f.rank(), "affine hull reduced");
    AffineFrame {
        reduced: f.r,
        weight: f.w,
        bias,
        norms_sq: f.norms_sq,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{q, RationalBackend};
    use num_traits::Zero;

    fn frame(rows: &[Vec<i64>]) -> (PointMatrix, AffineFrame) {
        let p = PointMatrix::from_rows(rows).unwrap();
        let f = reduce(&p, &RationalBackend);
        (p, f)
    }

    #[test]
    fn triangle_is_full_rank() {
        let (p, f) = frame(&[vec![0, 0], vec![2, 0], vec![0, 2]]);
        assert_eq!(f.rank(), 2);
        for j in 0..p.len() {
            assert_eq!(f.reconstruct(j), p.point(j));
        }
    }

    #[test]
    fn plane_in_3d_has_rank_two() {
        let (p, f) = frame(&[vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, -1]]);
        assert_eq!(f.rank(), 2);
        assert_eq!(f.weight.shape(), (3, 2));
        for j in 0..p.len() {
            assert_eq!(f.reconstruct(j), p.point(j));
        }
        let cross = dot(f.weight.column(0).iter(), f.weight.column(1).iter());
        assert!(cross.is_zero());
    }

    #[test]
    fn coincident_points_have_rank_zero() {
        let (p, f) = frame(&[vec![1, 1], vec![1, 1], vec![1, 1]]);
        assert_eq!(f.rank(), 0);
        assert_eq!(f.reduced.shape(), (0, 3));
        assert_eq!(f.weight.shape(), (2, 0));
        assert_eq!(f.bias, vec![q(1), q(1)]);
        assert_eq!(f.reconstruct(2), p.point(2));
        assert_eq!(f.hull_coords().unwrap().shape(), (0, 3));
    }

    #[test]
    fn caller_matrix_is_unchanged() {
        let (p, _) = frame(&[vec![3, 4], vec![5, 6]]);
        assert_eq!(p.point(1), vec![q(5), q(6)]);
    }

    #[test]
    fn hull_coords_are_orthonormal_lengths() {
        // Segment of length 2·sqrt(2) along the diagonal.
        let (_, f) = frame(&[vec![0, 0], vec![2, 2]]);
        let h = f.hull_coords().unwrap();
        assert_eq!(h.shape(), (1, 2));
        assert!(h[(0, 0)].abs() < 1e-12);
        assert!((h[(0, 1)].abs() - 8f64.sqrt()).abs() < 1e-12);
    }
}
