//! Andrew's monotone chain over column indices (r = 2).

use std::cmp::Ordering;

use nalgebra::DMatrix;

use super::{ConvexHull, Facet};
use crate::cfg::HullCfg;
use crate::error::{AsyError, Result};

/// Planar hull; facets are consecutive pairs of the counterclockwise boundary.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotoneChain {
    pub cfg: HullCfg,
}

impl MonotoneChain {
    #[inline]
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }
}

impl ConvexHull for MonotoneChain {
    fn facets(&self, points: &DMatrix<f64>) -> Result<Vec<Facet>> {
        if points.nrows() != 2 {
            return Err(AsyError::HullDimension {
                expected: 2,
                found: points.nrows(),
            });
        }
        let hull = boundary_ccw(points, self.cfg);
        let facets = match hull.len() {
            0 | 1 => Vec::new(),
            2 => vec![vec![hull[0], hull[1]]],
            m => (0..m).map(|i| vec![hull[i], hull[(i + 1) % m]]).collect(),
        };
        Ok(facets)
    }
}

/// Hull vertices in CCW order. Collinear boundary points are dropped and
/// coincident points keep their lowest index.
fn boundary_ccw(points: &DMatrix<f64>, cfg: HullCfg) -> Vec<usize> {
    let at = |j: usize| (points[(0, j)], points[(1, j)]);
    let mut idx: Vec<usize> = (0..points.ncols()).collect();
    idx.sort_by(|&a, &b| {
        let (ax, ay) = at(a);
        let (bx, by) = at(b);
        match ax.partial_cmp(&bx).unwrap_or(Ordering::Equal) {
            Ordering::Equal => ay.partial_cmp(&by).unwrap_or(Ordering::Equal),
            o => o,
        }
    });
    idx.dedup_by(|a, b| {
        let (ax, ay) = at(*a);
        let (bx, by) = at(*b);
        (ax - bx).hypot(ay - by) < cfg.eps_merge
    });
    if idx.len() < 2 {
        return idx;
    }
    let turn = |o: usize, a: usize, b: usize| {
        let (ox, oy) = at(o);
        let (ax, ay) = at(a);
        let (bx, by) = at(b);
        (ax - ox) * (by - oy) - (ay - oy) * (bx - ox)
    };
    let mut lower: Vec<usize> = Vec::with_capacity(idx.len());
    for &p in &idx {
        while lower.len() >= 2
            && turn(lower[lower.len() - 2], lower[lower.len() - 1], p) <= cfg.eps_side
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(idx.len());
    for &p in idx.iter().rev() {
        while upper.len() >= 2
            && turn(upper[upper.len() - 2], upper[upper.len() - 1], p) <= cfg.eps_side
        {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}
