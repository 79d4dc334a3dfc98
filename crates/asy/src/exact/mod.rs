//! Exact linear algebra over ℚ.
//!
//! Purpose
//! - Provide the exact field (`Rat`), dense exact matrices (`QMatrix`) and the
//!   `ExactLinearAlgebra` capability used by the reducer and the extractor.
//! - The default backend `RationalBackend` implements a rank-revealing
//!   Gram–Schmidt factorization and Gauss–Jordan solving on `BigRational`.
//!
//! Conventions
//! - Matrices store points as columns, like the rest of the crate.
//! - Orthogonal factors are orthogonal, not orthonormal: unit columns would
//!   need square roots. Squared column norms travel with the factor.
//! - Under-determined systems keep the non-pivot columns of a left-to-right
//!   elimination as free parameters; `LinearSolution::particular` sets them to 0.

mod qr;
mod solve;

use nalgebra::DMatrix;
use num_bigint::BigInt;
use num_rational::{BigRational, Ratio};
use num_traits::Zero;

/// Exact field used for all load-bearing arithmetic.
pub type Rat = BigRational;
/// Dense exact matrix.
pub type QMatrix = DMatrix<Rat>;

/// Lossless conversion into the exact field.
///
/// Implemented for integer and rational scalars only. Floats have no impl.
pub trait IntoExact {
    fn into_exact(self) -> Rat;
}

macro_rules! into_exact_int {
    ($($t:ty),*) => {
        $(impl IntoExact for $t {
            #[inline]
            fn into_exact(self) -> Rat {
                Rat::from_integer(BigInt::from(self))
            }
        })*
    };
}

into_exact_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl IntoExact for BigInt {
    #[inline]
    fn into_exact(self) -> Rat {
        Rat::from_integer(self)
    }
}

impl IntoExact for Rat {
    #[inline]
    fn into_exact(self) -> Rat {
        self
    }
}

impl IntoExact for Ratio<i64> {
    #[inline]
    fn into_exact(self) -> Rat {
        let (n, d) = self.into_raw();
        Rat::new(BigInt::from(n), BigInt::from(d))
    }
}

/// Result of a rank-revealing orthogonal factorization `C = W · R`.
///
/// Invariants:
/// - `w` is k×r with pairwise orthogonal, nonzero columns; `r = rank(C)`.
/// - `r` (the coordinate matrix) is r×n and `w · r == C` exactly.
/// - `norms_sq[i] == w[:, i] · w[:, i]`.
#[derive(Clone, Debug)]
pub struct OrthoFactor {
    pub w: QMatrix,
    pub r: QMatrix,
    pub norms_sq: Vec<Rat>,
}

impl OrthoFactor {
    #[inline]
    pub fn rank(&self) -> usize {
        self.w.ncols()
    }
}

/// Solution family of a consistent linear system `A x = b`.
///
/// Every solution is `particular + Σ t_i · kernel[i]`. Free parameters are the
/// columns listed in `free`, in increasing order, and `kernel[i]` is the basis
/// vector with parameter `free[i]` set to 1 and the others to 0.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSolution {
    pub particular: Vec<Rat>,
    pub pivots: Vec<usize>,
    pub free: Vec<usize>,
    pub kernel: Vec<Vec<Rat>>,
}

impl LinearSolution {
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.free.is_empty()
    }

    /// Evaluate the member with the given free-parameter values.
    ///
    /// Missing trailing parameters count as zero.
    pub fn instantiate(&self, params: &[Rat]) -> Vec<Rat> {
        let mut x = self.particular.clone();
        for (basis, t) in self.kernel.iter().zip(params) {
            if t.is_zero() {
                continue;
            }
            for (xi, bi) in x.iter_mut().zip(basis) {
                *xi += bi * t;
            }
        }
        x
    }
}

/// Exact linear-algebra capability.
///
/// Backends must be exact: no rounding may occur in either operation.
pub trait ExactLinearAlgebra {
    /// Rank-revealing orthogonal factorization of `c` (see `OrthoFactor`).
    fn qr(&self, c: &QMatrix) -> OrthoFactor;

    /// Solve `a x = b`. Returns `None` when the system is inconsistent.
    fn solve(&self, a: &QMatrix, b: &[Rat]) -> Option<LinearSolution>;
}

/// Default backend on `BigRational`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RationalBackend;

impl ExactLinearAlgebra for RationalBackend {
    fn qr(&self, c: &QMatrix) -> OrthoFactor {
        qr::gram_schmidt(c)
    }

    fn solve(&self, a: &QMatrix, b: &[Rat]) -> Option<LinearSolution> {
        solve::gauss_jordan(a, b)
    }
}

/// Exact dot product of two equally long sequences.
pub(crate) fn dot<'a>(
    a: impl IntoIterator<Item = &'a Rat>,
    b: impl IntoIterator<Item = &'a Rat>,
) -> Rat {
    a.into_iter()
        .zip(b)
        .fold(Rat::zero(), |acc, (x, y)| acc + x * y)
}

#[cfg(test)]
pub(crate) fn q(n: i64) -> Rat {
    n.into_exact()
}

#[cfg(test)]
pub(crate) fn qf(n: i64, d: i64) -> Rat {
    Rat::new(BigInt::from(n), BigInt::from(d))
}
