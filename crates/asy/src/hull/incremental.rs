//! Beneath-beyond hull: insert points one at a time into a simplicial hull.
//!
//! Each insertion scans the live facets once, drops the ones the new point
//! sees and cones the horizon to the point, so the cost follows the facet
//! count instead of C(n, r). Points within `eps_side` of the current hull are
//! skipped; a non-simplicial facet therefore comes out triangulated, and every
//! piece still spans the facet's hyperplane.

use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};
use tracing::trace;

use super::enumerate::plane_through;
use super::{ConvexHull, Facet};
use crate::cfg::HullCfg;
use crate::error::{AsyError, Result};

/// Incremental hull for any r ≥ 2.
#[derive(Clone, Copy, Debug, Default)]
pub struct IncrementalHull {
    pub cfg: HullCfg,
}

impl IncrementalHull {
    #[inline]
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }
}

/// Simplicial facet with an outward unit normal.
struct Face {
    verts: Vec<usize>,
    normal: DVector<f64>,
    offset: f64,
}

impl Face {
    fn new(
        points: &DMatrix<f64>,
        mut verts: Vec<usize>,
        inside: &DVector<f64>,
        eps_rank: f64,
    ) -> Result<Self> {
        verts.sort_unstable();
        let Some((normal, offset)) = plane_through(points, &verts, eps_rank) else {
            return Err(AsyError::DegenerateFacet { facet: verts });
        };
        // The interior point must end up strictly beneath.
        if normal.dot(inside) > offset {
            Ok(Self {
                verts,
                normal: -normal,
                offset: -offset,
            })
        } else {
            Ok(Self {
                verts,
                normal,
                offset,
            })
        }
    }

    #[inline]
    fn height(&self, points: &DMatrix<f64>, j: usize) -> f64 {
        self.normal.dot(&points.column(j)) - self.offset
    }

    fn ridges(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        (0..self.verts.len()).map(move |skip| {
            self.verts
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &j)| j)
                .collect()
        })
    }
}

/// r+1 affinely independent columns, each the farthest from the affine hull
/// of those picked before it.
fn initial_simplex(points: &DMatrix<f64>, eps: f64) -> Result<Vec<usize>> {
    let (r, n) = points.shape();
    let base = points.column(0).clone_owned();
    let mut chosen = vec![0];
    let mut basis: Vec<DVector<f64>> = Vec::with_capacity(r);
    while basis.len() < r {
        let mut best: Option<(f64, usize, DVector<f64>)> = None;
        for j in 0..n {
            let mut v = points.column(j) - &base;
            for b in &basis {
                let c = b.dot(&v);
                v -= b * c;
            }
            let d = v.norm();
            if best.as_ref().map_or(true, |(bd, _, _)| d > *bd) {
                best = Some((d, j, v));
            }
        }
        match best {
            Some((d, j, v)) if d > eps => {
                basis.push(v / d);
                chosen.push(j);
            }
            _ => {
                return Err(AsyError::HullSpan {
                    expected: r,
                    found: basis.len(),
                });
            }
        }
    }
    Ok(chosen)
}

impl ConvexHull for IncrementalHull {
    fn facets(&self, points: &DMatrix<f64>) -> Result<Vec<Facet>> {
        let (r, n) = points.shape();
        if r < 2 {
            return Err(AsyError::HullDimension {
                expected: 2,
                found: r,
            });
        }
        let eps = self.cfg.eps_side;
        let simplex = initial_simplex(points, eps)?;
        let inside = simplex
            .iter()
            .fold(DVector::<f64>::zeros(r), |acc, &j| acc + points.column(j))
            / (r + 1) as f64;
        let mut faces = (0..=r)
            .map(|skip| {
                let verts = simplex
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &j)| j)
                    .collect();
                Face::new(points, verts, &inside, self.cfg.eps_rank)
            })
            .collect::<Result<Vec<Face>>>()?;

        for p in 0..n {
            if simplex.contains(&p) {
                continue;
            }
            let (visible, hidden): (Vec<Face>, Vec<Face>) = faces
                .into_iter()
                .partition(|f| f.height(points, p) > eps);
            faces = hidden;
            if visible.is_empty() {
                continue;
            }
            // Ridges seen once among the visible faces border a hidden one.
            let mut seen: BTreeMap<Vec<usize>, usize> = BTreeMap::new();
            for ridge in visible.iter().flat_map(Face::ridges) {
                *seen.entry(ridge).or_insert(0) += 1;
            }
            for (mut ridge, count) in seen {
                if count == 1 {
                    ridge.push(p);
                    faces.push(Face::new(points, ridge, &inside, self.cfg.eps_rank)?);
                }
            }
            trace!(point = p, visible = visible.len(), faces = faces.len(), "point inserted");
        }
        let mut out: Vec<Facet> = faces.into_iter().map(|f| f.verts).collect();
        out.sort();
        Ok(out)
    }
}
