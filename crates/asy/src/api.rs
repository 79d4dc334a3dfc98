//! Entry points.
//!
//! - `run`: nested rows in, scaling vectors out, default backends.
//! - `Pipeline`: the same computation with pluggable `ExactLinearAlgebra` and
//!   `ConvexHull` backends.
//! - `run_exchange`: text in, text out, in the matrix exchange format of `io`.

use crate::cfg::HullCfg;
use crate::error::Result;
use crate::exact::{ExactLinearAlgebra, IntoExact, RationalBackend};
use crate::extract::{extract, ScalingVectors};
use crate::hull::{ConvexHull, DefaultHull};
use crate::io::{format_vectors, parse_point_list};
use crate::points::PointMatrix;
use crate::reduce::{reduce, AffineFrame};

/// Reducer and extractor wired to a pair of backends.
#[derive(Clone, Debug, Default)]
pub struct Pipeline<L = RationalBackend, H = DefaultHull> {
    pub la: L,
    pub hull: H,
}

impl Pipeline {
    /// Default backends with custom hull tolerances.
    pub fn new(cfg: HullCfg) -> Self {
        Self {
            la: RationalBackend,
            hull: DefaultHull::new(cfg),
        }
    }
}

impl<L: ExactLinearAlgebra, H: ConvexHull> Pipeline<L, H> {
    pub fn with_backends(la: L, hull: H) -> Self {
        Self { la, hull }
    }

    /// Affine-hull reduction of `points`.
    pub fn reduce(&self, points: &PointMatrix) -> AffineFrame {
        reduce(points, &self.la)
    }

    /// Facet-normal extraction from a frame produced by `reduce`.
    pub fn extract(&self, points: &PointMatrix, frame: &AffineFrame) -> Result<ScalingVectors> {
        extract(points, frame, &self.la, &self.hull)
    }

    /// Reduce then extract.
    pub fn scaling_vectors(&self, points: &PointMatrix) -> Result<ScalingVectors> {
        let frame = self.reduce(points);
        self.extract(points, &frame)
    }

    /// Rows-in variant of `scaling_vectors`.
    pub fn run<R, T>(&self, point_list: &[R]) -> Result<ScalingVectors>
    where
        R: AsRef<[T]>,
        T: Clone + IntoExact,
    {
        let points = PointMatrix::from_rows(point_list)?;
        self.scaling_vectors(&points)
    }
}

/// Leading scaling vectors of `n` points given as rows of `k` exact values.
pub fn run<R, T>(point_list: &[R]) -> Result<ScalingVectors>
where
    R: AsRef<[T]>,
    T: Clone + IntoExact,
{
    Pipeline::new(HullCfg::default()).run(point_list)
}

/// Leading scaling vectors of an already validated point matrix.
pub fn scaling_vectors(points: &PointMatrix) -> Result<ScalingVectors> {
    Pipeline::new(HullCfg::default()).scaling_vectors(points)
}

/// Parse a point list, compute, and render the result matrix.
pub fn run_exchange(input: &str) -> Result<String> {
    let rows = parse_point_list(input)?;
    let vectors = run(&rows)?;
    Ok(format_vectors(&vectors))
}
