//! Facets by brute force: every r-tuple spanning a supporting hyperplane.
//!
//! Complexity: O(C(n, r) · n · r³) time, O(r) extra memory per tuple since
//! tuples are streamed. Kept as a reference backend: no state carries over
//! between tuples, so it is easy to audit against `IncrementalHull`.

use nalgebra::{DMatrix, DVector};

use super::{ConvexHull, Facet};
use crate::cfg::HullCfg;
use crate::error::{AsyError, Result};

/// Supporting-plane enumeration for any r ≥ 2.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnumerativeHull {
    pub cfg: HullCfg,
}

impl EnumerativeHull {
    #[inline]
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }
}

impl ConvexHull for EnumerativeHull {
    fn facets(&self, points: &DMatrix<f64>) -> Result<Vec<Facet>> {
        let (r, n) = points.shape();
        if r < 2 {
            return Err(AsyError::HullDimension {
                expected: 2,
                found: r,
            });
        }
        let mut out = Vec::new();
        for comb in Combinations::new(n, r) {
            let Some((normal, c)) = plane_through(points, &comb, self.cfg.eps_rank) else {
                continue;
            };
            if one_sided(points, &normal, c, self.cfg.eps_side) {
                out.push(comb);
            }
        }
        Ok(out)
    }
}

/// Unit normal and offset of the hyperplane through the selected columns.
///
/// Uses the generalized cross product of the r−1 difference vectors
/// (signed maximal minors). `None` if the points are affinely dependent.
pub(super) fn plane_through(
    points: &DMatrix<f64>,
    comb: &[usize],
    eps: f64,
) -> Option<(DVector<f64>, f64)> {
    let r = comb.len();
    let base = points.column(comb[0]);
    let diffs = DMatrix::from_fn(r - 1, r, |i, j| points[(j, comb[i + 1])] - base[j]);
    let n = DVector::from_fn(r, |j, _| {
        let minor = diffs.clone().remove_column(j).determinant();
        if j % 2 == 0 {
            minor
        } else {
            -minor
        }
    });
    let norm = n.norm();
    // Hadamard: |n| <= Π |diff_i|, equality iff the diffs are orthogonal.
    let scale: f64 = diffs.row_iter().map(|row| row.norm()).product();
    if !norm.is_finite() || norm <= eps * scale {
        return None;
    }
    let n = n / norm;
    let c = n.dot(&base);
    Some((n, c))
}

fn one_sided(points: &DMatrix<f64>, n: &DVector<f64>, c: f64, eps: f64) -> bool {
    let mut above = false;
    let mut below = false;
    for col in points.column_iter() {
        let d = n.dot(&col) - c;
        above |= d > eps;
        below |= d < -eps;
        if above && below {
            return false;
        }
    }
    true
}

/// k-subsets of `0..n` in lexicographic order, produced one at a time.
pub(crate) struct Combinations {
    n: usize,
    idxs: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub(crate) fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            idxs: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.idxs.clone();
        let k = self.idxs.len();
        // rightmost slot that can still advance
        match (0..k).rev().find(|&i| self.idxs[i] != i + self.n - k) {
            Some(i) => {
                self.idxs[i] += 1;
                for j in i + 1..k {
                    self.idxs[j] = self.idxs[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(out)
    }
}
