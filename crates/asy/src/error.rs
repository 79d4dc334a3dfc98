//! Error type shared by the reducer, the extractor and the text exchange.
//!
//! Degenerate geometry (all points coinciding) is not an error: it yields an
//! empty result. Variants below are either caller mistakes or broken
//! invariants of a hull backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AsyError {
    #[error("empty point set")]
    EmptyPointSet,

    #[error("points must have at least one coordinate")]
    ZeroDimension,

    #[error("row {index} has {found} entries, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("entry {value} at row {index} is not an exact rational")]
    NotExact { index: usize, value: String },

    #[error("point index {index} out of range, only {len} points exist")]
    PointIndex { index: usize, len: usize },

    #[error("hull facet {facet:?} has {found} vertices, expected {expected}")]
    FacetArity {
        facet: Vec<usize>,
        expected: usize,
        found: usize,
    },

    #[error("hull facet {facet:?} references point {index}, only {len} points exist")]
    FacetIndex {
        facet: Vec<usize>,
        index: usize,
        len: usize,
    },

    #[error("hull backend supports dimension {expected}, got {found}")]
    HullDimension { expected: usize, found: usize },

    #[error("reduced points span only {found} of {expected} dimensions numerically")]
    HullSpan { expected: usize, found: usize },

    #[error("hull facet {facet:?} has affinely dependent vertices")]
    DegenerateFacet { facet: Vec<usize> },

    #[error("reduced coordinate {value} has no finite f64 image")]
    FloatConversion { value: String },

    #[error("malformed matrix text: {reason}")]
    Parse { reason: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AsyError {
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AsyError>;
