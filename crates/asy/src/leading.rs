//! Leading terms of a point cloud under a scaling vector.
//!
//! Under `x_i ~ ρ^{v_i}` term `j` scales like `ρ^{order_j}` with
//! `order_j = dot(v, p_j[..k-1]) + p_j[k-1]`. The terms of minimal order
//! dominate as `ρ → 0`. Orders are compared exactly.

use crate::error::Result;
use crate::exact::Rat;
use crate::extract::{check_vector_len, order, ScalingVectors};
use crate::points::PointMatrix;

/// One scaling vector with the indices of the terms it makes dominant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub vector: Vec<Rat>,
    pub terms: Vec<usize>,
}

/// Order of every term under `vector`.
pub fn term_orders(points: &PointMatrix, vector: &[Rat]) -> Result<Vec<Rat>> {
    check_vector_len(points, vector)?;
    Ok((0..points.len()).map(|j| order(points, vector, j)).collect())
}

/// Indices of the terms attaining the minimal order, ascending.
pub fn leading_terms(points: &PointMatrix, vector: &[Rat]) -> Result<Vec<usize>> {
    let orders = term_orders(points, vector)?;
    let Some(min) = orders.iter().min() else {
        return Ok(Vec::new());
    };
    Ok(orders
        .iter()
        .enumerate()
        .filter(|(_, o)| *o == min)
        .map(|(j, _)| j)
        .collect())
}

/// Leading terms for every vector of a result set.
pub fn leading_regions(points: &PointMatrix, vectors: &ScalingVectors) -> Result<Vec<Region>> {
    vectors
        .iter()
        .map(|v| {
            Ok(Region {
                vector: v.clone(),
                terms: leading_terms(points, v)?,
            })
        })
        .collect()
}
