//! Rank-revealing Gram–Schmidt on exact columns.

use num_traits::Zero;

use super::{dot, OrthoFactor, QMatrix, Rat};

/// Orthogonalize the columns of `c` left to right, dropping dependent ones.
///
/// Exact arithmetic makes classical Gram–Schmidt stable, and a column is
/// dependent iff its residual is exactly zero, so the kept columns number
/// `rank(c)`.
pub(super) fn gram_schmidt(c: &QMatrix) -> OrthoFactor {
    let (k, n) = c.shape();
    let mut basis: Vec<Vec<Rat>> = Vec::new();
    let mut norms_sq: Vec<Rat> = Vec::new();
    for j in 0..n {
        let col: Vec<Rat> = c.column(j).iter().cloned().collect();
        let mut v = col.clone();
        for (w, nsq) in basis.iter().zip(&norms_sq) {
            let coef = dot(w, &col) / nsq;
            if coef.is_zero() {
                continue;
            }
            for (vi, wi) in v.iter_mut().zip(w) {
                *vi -= wi * &coef;
            }
        }
        if v.iter().any(|x| !x.is_zero()) {
            norms_sq.push(dot(&v, &v));
            basis.push(v);
        }
    }
    let r = basis.len();
    let w = QMatrix::from_fn(k, r, |i, j| basis[j][i].clone());
    // R = diag(norms_sq)^-1 · Wᵀ · C
    let coords = QMatrix::from_fn(r, n, |i, j| dot(&basis[i], c.column(j).iter()) / &norms_sq[i]);
    OrthoFactor {
        w,
        r: coords,
        norms_sq,
    }
}
