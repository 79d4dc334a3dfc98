//! Tolerances for the floating-point hull stage.
//!
//! Policy
//! - Only the hull backends see tolerances. Reduction, facet solves, the
//!   orientation filter and dedup are exact and take no configuration.
//! - Defaults suit exponent clouds (small integers). Callers with large or
//!   badly scaled exponents can load an override with `HullCfg::from_json`.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Side test epsilon used by `HullCfg::default()`.
pub(crate) const SIDE_EPS: f64 = 1e-9;
/// Minimum normal length for an r-tuple to count as affinely independent.
pub(crate) const RANK_EPS: f64 = 1e-12;
/// Distance below which two reduced points are merged by the 2D chain.
pub(crate) const MERGE_EPS: f64 = 1e-12;

/// Hull stage tolerances.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullCfg {
    /// Normals shorter than this (relative to the tuple scale) are rejected.
    pub eps_rank: f64,
    /// Points within this signed distance of a plane count as on it.
    pub eps_side: f64,
    /// Coincidence threshold when merging duplicate points.
    pub eps_merge: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_rank: RANK_EPS,
            eps_side: SIDE_EPS,
            eps_merge: MERGE_EPS,
        }
    }
}

impl HullCfg {
    /// Parse a (possibly partial) JSON object; missing fields keep defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = HullCfg::from_json(r#"{ "eps_side": 1e-6 }"#).unwrap();
        assert_eq!(cfg.eps_side, 1e-6);
        assert_eq!(cfg.eps_rank, RANK_EPS);
        assert_eq!(cfg.eps_merge, MERGE_EPS);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(HullCfg::from_json("{ eps_side: }").is_err());
    }
}
