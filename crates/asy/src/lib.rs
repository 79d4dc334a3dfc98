//! Leading scaling vectors of monomial exponent clouds.
//!
//! Each point is the exponent vector of one term of a polynomial, its last
//! coordinate being the order axis. A scaling vector `v` rescales the
//! variables as `x_i ~ ρ^{v_i}`; it is leading when some non-empty set of
//! terms attains the minimal order and all other terms lie above it.
//!
//! Pipeline
//! - `reduce`: exact affine-hull reduction of the point matrix.
//! - `hull`: facet enumeration of the reduced cloud (floating point, facet
//!   combinatorics only).
//! - `extract`: exact per-facet hyperplane solve, orientation filter, dedup.
//!
//! Floating point never reaches a returned vector or an accept/reject
//! decision; those are recomputed exactly from the input.

pub mod api;
pub mod cfg;
pub mod error;
pub mod exact;
pub mod extract;
pub mod gen;
pub mod hull;
pub mod io;
pub mod leading;
pub mod points;
pub mod reduce;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{run, run_exchange, scaling_vectors, Pipeline};
pub use error::{AsyError, Result};
pub use exact::{IntoExact, Rat};
pub use extract::ScalingVectors;
pub use points::PointMatrix;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{run, scaling_vectors, Pipeline};
    pub use crate::cfg::HullCfg;
    pub use crate::error::{AsyError, Result};
    pub use crate::exact::{ExactLinearAlgebra, IntoExact, QMatrix, Rat, RationalBackend};
    pub use crate::extract::{Candidate, ScalingVectors};
    pub use crate::hull::{
        ConvexHull, DefaultHull, EnumerativeHull, Facet, IncrementalHull, MonotoneChain,
    };
    pub use crate::leading::{leading_regions, leading_terms, Region};
    pub use crate::points::PointMatrix;
    pub use crate::reduce::AffineFrame;
}
