//! Convex-hull facet enumeration on reduced coordinates.
//!
//! Purpose
//! - Find which r-tuples of points span a facet of the hull of the reduced
//!   point cloud. Only this combinatorial answer leaves the module; every
//!   numeric decision downstream is redone exactly.
//!
//! Backends (`ConvexHull`)
//! - `MonotoneChain`: Andrew's monotone chain, r = 2 only.
//! - `IncrementalHull`: beneath-beyond insertion; any r ≥ 2, cost follows the
//!   facet count. Non-simplicial facets come out triangulated.
//! - `EnumerativeHull`: tests every r-tuple for a supporting plane; any r ≥ 2,
//!   O(C(n, r)). Reference backend for cross-checks. Non-simplicial facets
//!   show up once per independent r-subset.
//! - `DefaultHull`: chain for r = 2, incremental otherwise.
//!
//! Several facets on one hyperplane are absorbed by the extractor's exact
//! dedup.
//!
//! Low dimensions never reach a backend: r = 0 has no facets and r = 1 is
//! resolved exactly by `extreme_points`.

mod chain;
mod enumerate;
mod incremental;

use nalgebra::DMatrix;
use tracing::debug;

use crate::cfg::HullCfg;
use crate::error::Result;
use crate::exact::QMatrix;
use crate::reduce::AffineFrame;

pub use chain::MonotoneChain;
pub use enumerate::EnumerativeHull;
pub use incremental::IncrementalHull;

/// Facet as column indices into the point matrix (r entries).
pub type Facet = Vec<usize>;

/// Convex-hull capability.
pub trait ConvexHull {
    /// Facets of the hull of the columns of `points` (r×n, r ≥ 2, affinely
    /// spanning ℝ^r). Each facet lists r column indices.
    fn facets(&self, points: &DMatrix<f64>) -> Result<Vec<Facet>>;
}

impl<H: ConvexHull + ?Sized> ConvexHull for &H {
    fn facets(&self, points: &DMatrix<f64>) -> Result<Vec<Facet>> {
        (**self).facets(points)
    }
}

/// Chain in the plane, beneath-beyond above it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHull {
    pub cfg: HullCfg,
}

impl DefaultHull {
    #[inline]
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }
}

impl ConvexHull for DefaultHull {
    fn facets(&self, points: &DMatrix<f64>) -> Result<Vec<Facet>> {
        if points.nrows() == 2 {
            MonotoneChain::new(self.cfg).facets(points)
        } else {
            IncrementalHull::new(self.cfg).facets(points)
        }
    }
}

/// The two boundary points of a 1-D reduced cloud, compared exactly.
///
/// Ties pick the lowest index. Expects `reduced` to have exactly one row.
pub fn extreme_points(reduced: &QMatrix) -> Vec<Facet> {
    debug_assert_eq!(reduced.nrows(), 1);
    let row = reduced.row(0);
    let mut lo = 0;
    let mut hi = 0;
    for (j, x) in row.iter().enumerate() {
        if *x < row[lo] {
            lo = j;
        }
        if *x > row[hi] {
            hi = j;
        }
    }
    if lo == hi {
        vec![vec![lo]]
    } else {
        vec![vec![lo], vec![hi]]
    }
}

/// Facets of the reduced cloud, dispatching on the affine rank.
pub fn hull_facets<H: ConvexHull + ?Sized>(frame: &AffineFrame, hull: &H) -> Result<Vec<Facet>> {
    let facets = match frame.rank() {
        0 => Vec::new(),
        1 => extreme_points(&frame.reduced),
        _ => hull.facets(&frame.hull_coords()?)?,
    };
    debug!(rank = frame.rank(), facets = facets.len(), "hull computed");
    Ok(facets)
}
