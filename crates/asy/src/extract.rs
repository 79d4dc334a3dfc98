//! Facet normals → leading scaling vectors.
//!
//! For a facet spanned by columns `p_1..p_r` of the point matrix we look for
//! `s ∈ ℚ^k` with
//!
//! ```text
//! dot(s[..k-1], p_i[..k-1]) - s[k-1] = -p_i[k-1]      (i = 1..r)
//! ```
//!
//! i.e. the hyperplane `dot(s[..k-1], x[..k-1]) + x[k-1] = s[k-1]` through the
//! facet, normalized to coefficient 1 on the order axis. Free parameters of an
//! under-determined system are set to zero. A candidate is kept iff every
//! point lies on or above its hyperplane; kept vectors are deduplicated by
//! exact equality.
//!
//! Assumptions and conventions
//! - Facets parallel to the order axis have no such normalization; their
//!   system is inconsistent and they contribute nothing.
//! - A facet whose arity differs from the affine rank, or which points past
//!   the last column, is a broken hull backend and aborts the extraction.

use std::collections::BTreeSet;

use num_traits::One;
use tracing::{debug, trace};

use crate::error::{AsyError, Result};
use crate::exact::{dot, ExactLinearAlgebra, QMatrix, Rat};
use crate::hull::{hull_facets, ConvexHull, Facet};
use crate::points::PointMatrix;
use crate::reduce::AffineFrame;

/// Exact hyperplane `dot(vector, x[..k-1]) + x[k-1] = offset` through a facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    vector: Vec<Rat>,
    offset: Rat,
}

impl Candidate {
    #[inline]
    pub fn vector(&self) -> &[Rat] {
        &self.vector
    }

    #[inline]
    pub fn offset(&self) -> &Rat {
        &self.offset
    }

    pub fn into_vector(self) -> Vec<Rat> {
        self.vector
    }

    /// Order of point `j` under this scaling: `dot(vector, p[..k-1]) + p[k-1]`.
    ///
    /// `points` must have the dimension the candidate was solved in.
    pub fn order_of(&self, points: &PointMatrix, j: usize) -> Result<Rat> {
        check_vector_len(points, &self.vector)?;
        Ok(order(points, &self.vector, j))
    }

    /// True iff no point lies strictly below the hyperplane.
    pub fn is_leading(&self, points: &PointMatrix) -> Result<bool> {
        check_vector_len(points, &self.vector)?;
        Ok((0..points.len()).all(|j| order(points, &self.vector, j) >= self.offset))
    }
}

/// Scaling vectors of `points` have `k - 1` entries.
pub(crate) fn check_vector_len(points: &PointMatrix, vector: &[Rat]) -> Result<()> {
    let expected = points.dim() - 1;
    if vector.len() != expected {
        return Err(AsyError::DimensionMismatch {
            index: 0,
            expected,
            found: vector.len(),
        });
    }
    Ok(())
}

/// Callers check the length with `check_vector_len` first.
pub(crate) fn order(points: &PointMatrix, vector: &[Rat], j: usize) -> Rat {
    let k = points.dim();
    let head = (0..k - 1).map(|i| points.get(i, j));
    dot(vector, head) + points.order(j)
}

/// Linear system `A s = b` of a facet (one row per selected point).
pub fn facet_system(points: &PointMatrix, facet: &[usize]) -> (QMatrix, Vec<Rat>) {
    let k = points.dim();
    let a = QMatrix::from_fn(facet.len(), k, |i, c| {
        if c + 1 == k {
            -Rat::one()
        } else {
            points.get(c, facet[i]).clone()
        }
    });
    let b = facet.iter().map(|&j| -points.order(j).clone()).collect();
    (a, b)
}

/// Candidate hyperplane of a facet, or `None` if the facet is parallel to
/// the order axis.
pub fn candidate<L: ExactLinearAlgebra + ?Sized>(
    points: &PointMatrix,
    facet: &[usize],
    la: &L,
) -> Option<Candidate> {
    let (a, b) = facet_system(points, facet);
    let sol = la.solve(&a, &b)?;
    let mut s = sol.particular;
    let offset = s.pop()?;
    Some(Candidate { vector: s, offset })
}

/// Distinct scaling vectors of dimension `dim = k - 1`.
///
/// Iteration order is lexicographic on the exact tuples.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScalingVectors {
    dim: usize,
    rows: BTreeSet<Vec<Rat>>,
}

impl ScalingVectors {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            rows: BTreeSet::new(),
        }
    }

    /// Insert a vector; `Ok(false)` if an equal one is already present.
    pub fn insert(&mut self, v: Vec<Rat>) -> Result<bool> {
        if v.len() != self.dim {
            return Err(AsyError::DimensionMismatch {
                index: self.rows.len(),
                expected: self.dim,
                found: v.len(),
            });
        }
        Ok(self.rows.insert(v))
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, v: &[Rat]) -> bool {
        self.rows.iter().any(|r| r.as_slice() == v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<Rat>> {
        self.rows.iter()
    }

    /// Rows as an m×dim exact matrix.
    pub fn to_matrix(&self) -> QMatrix {
        let rows: Vec<&Vec<Rat>> = self.rows.iter().collect();
        QMatrix::from_fn(rows.len(), self.dim, |i, j| rows[i][j].clone())
    }

    pub fn into_rows(self) -> Vec<Vec<Rat>> {
        self.rows.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ScalingVectors {
    type Item = &'a Vec<Rat>;
    type IntoIter = std::collections::btree_set::Iter<'a, Vec<Rat>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Run the per-facet solve, orientation filter and dedup on given facets.
///
/// Every facet must list exactly `rank` valid column indices.
pub fn vectors_from_facets<L: ExactLinearAlgebra + ?Sized>(
    points: &PointMatrix,
    rank: usize,
    facets: &[Facet],
    la: &L,
) -> Result<ScalingVectors> {
    let n = points.len();
    let mut out = ScalingVectors::new(points.dim() - 1);
    for facet in facets {
        if facet.len() != rank {
            return Err(AsyError::FacetArity {
                facet: facet.clone(),
                expected: rank,
                found: facet.len(),
            });
        }
        if let Some(&index) = facet.iter().find(|&&j| j >= n) {
            return Err(AsyError::FacetIndex {
                facet: facet.clone(),
                index,
                len: n,
            });
        }
        let Some(cand) = candidate(points, facet, la) else {
            trace!(?facet, "facet parallel to order axis");
            continue;
        };
        if cand.is_leading(points)? {
            out.insert(cand.into_vector())?;
        } else {
            trace!(?facet, "candidate faces away from the cloud");
        }
    }
    debug!(facets = facets.len(), vectors = out.len(), "scaling vectors extracted");
    Ok(out)
}

/// Scaling vectors of `points`, given their affine frame.
pub fn extract<L, H>(
    points: &PointMatrix,
    frame: &AffineFrame,
    la: &L,
    hull: &H,
) -> Result<ScalingVectors>
where
    L: ExactLinearAlgebra + ?Sized,
    H: ConvexHull + ?Sized,
{
    let facets = hull_facets(frame, hull)?;
    vectors_from_facets(points, frame.rank(), &facets, la)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{q, qf, RationalBackend};
    use crate::hull::DefaultHull;
    use crate::reduce::reduce;

    fn pm(rows: &[Vec<i64>]) -> PointMatrix {
        PointMatrix::from_rows(rows).unwrap()
    }

    fn vectors(rows: &[Vec<i64>]) -> Vec<Vec<Rat>> {
        let p = pm(rows);
        let frame = reduce(&p, &RationalBackend);
        extract(&p, &frame, &RationalBackend, &DefaultHull::default())
            .unwrap()
            .into_rows()
    }

    #[test]
    fn facet_system_layout() {
        let p = pm(&[vec![0, 2], vec![1, 0], vec![3, 1]]);
        let (a, b) = facet_system(&p, &[0, 2]);
        assert_eq!(a.shape(), (2, 2));
        assert_eq!(a[(0, 0)], q(0));
        assert_eq!(a[(0, 1)], q(-1));
        assert_eq!(a[(1, 0)], q(3));
        assert_eq!(a[(1, 1)], q(-1));
        assert_eq!(b, vec![q(-2), q(-1)]);
    }

    #[test]
    fn lower_edges_of_a_triangle() {
        // (0,2)-(1,0): slope -2; (1,0)-(3,1): slope 1/2; (0,2)-(3,1) faces up.
        let v = vectors(&[vec![0, 2], vec![1, 0], vec![3, 1]]);
        assert_eq!(v, vec![vec![qf(-1, 2)], vec![q(2)]]);
    }

    #[test]
    fn upper_facet_is_rejected() {
        let p = pm(&[vec![0, 2], vec![1, 0], vec![3, 1]]);
        let up = candidate(&p, &[0, 2], &RationalBackend).unwrap();
        assert_eq!(up.vector(), &[qf(1, 3)]);
        assert_eq!(up.offset(), &q(2));
        assert!(!up.is_leading(&p).unwrap());
        // The excluded point sits strictly below the plane.
        assert!(up.order_of(&p, 1).unwrap() < *up.offset());
    }

    #[test]
    fn vertical_facet_has_no_candidate() {
        let p = pm(&[vec![0, 0], vec![2, 0], vec![0, 2]]);
        assert!(candidate(&p, &[0, 2], &RationalBackend).is_none());
        assert_eq!(vectors(&[vec![0, 0], vec![2, 0], vec![0, 2]]), vec![vec![q(0)]]);
    }

    #[test]
    fn bad_facets_are_fatal() {
        let p = pm(&[vec![0, 2], vec![1, 0], vec![3, 1]]);
        let arity = vectors_from_facets(&p, 2, &[vec![0]], &RationalBackend);
        assert!(matches!(arity, Err(AsyError::FacetArity { expected: 2, found: 1, .. })));
        let index = vectors_from_facets(&p, 2, &[vec![0, 7]], &RationalBackend);
        assert!(matches!(index, Err(AsyError::FacetIndex { index: 7, len: 3, .. })));
    }

    #[test]
    fn candidate_checks_cloud_dimension() {
        let p = pm(&[vec![0, 2], vec![1, 0], vec![3, 1]]);
        let low = candidate(&p, &[0, 1], &RationalBackend).unwrap();
        assert!(low.is_leading(&p).unwrap());
        // Same points with an extra leading coordinate: k - 1 = 2 != 1.
        let wider = pm(&[vec![5, 0, 2], vec![5, 1, 0], vec![5, 3, 1]]);
        assert!(matches!(
            low.is_leading(&wider),
            Err(AsyError::DimensionMismatch { expected: 2, found: 1, .. })
        ));
        assert!(matches!(
            low.order_of(&wider, 0),
            Err(AsyError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn insert_checks_row_length() {
        let mut vs = ScalingVectors::new(2);
        assert!(vs.insert(vec![q(1), q(2)]).unwrap());
        assert!(!vs.insert(vec![q(1), q(2)]).unwrap());
        assert!(matches!(
            vs.insert(vec![q(1)]),
            Err(AsyError::DimensionMismatch { index: 1, expected: 2, found: 1 })
        ));
        assert_eq!(vs.len(), 1);
        assert_eq!(vs.to_matrix().shape(), (1, 2));
    }

    #[test]
    fn matrix_view_matches_rows() {
        let p = pm(&[vec![0, 0, 1], vec![1, 0, 0], vec![0, 1, 0], vec![1, 1, 1]]);
        let frame = reduce(&p, &RationalBackend);
        let v = extract(&p, &frame, &RationalBackend, &DefaultHull::default()).unwrap();
        let m = v.to_matrix();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m[(0, 0)], q(-1));
        assert_eq!(m[(1, 1)], q(1));
        assert!(v.contains(&[q(1), q(1)]));
    }
}
