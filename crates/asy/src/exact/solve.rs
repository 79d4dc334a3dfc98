//! Gauss–Jordan elimination on an exact augmented matrix.

use num_traits::{One, Zero};

use super::{LinearSolution, QMatrix, Rat};

/// Reduce `[a | b]` to row echelon form with pivots chosen left to right.
///
/// Returns `None` if a zero row keeps a nonzero right-hand side.
pub(super) fn gauss_jordan(a: &QMatrix, b: &[Rat]) -> Option<LinearSolution> {
    let (m, k) = a.shape();
    debug_assert_eq!(m, b.len(), "rhs length must match row count");
    let mut rows: Vec<Vec<Rat>> = (0..m)
        .map(|i| {
            let mut row: Vec<Rat> = a.row(i).iter().cloned().collect();
            row.push(b[i].clone());
            row
        })
        .collect();

    let mut pivots = Vec::with_capacity(m.min(k));
    let mut lead = 0;
    for col in 0..k {
        if lead == m {
            break;
        }
        let Some(p) = (lead..m).find(|&i| !rows[i][col].is_zero()) else {
            continue;
        };
        rows.swap(lead, p);
        let inv = rows[lead][col].recip();
        for x in rows[lead].iter_mut() {
            *x *= &inv;
        }
        let pivot_row = rows[lead].clone();
        for (i, row) in rows.iter_mut().enumerate() {
            if i == lead || row[col].is_zero() {
                continue;
            }
            let factor = row[col].clone();
            for (x, px) in row.iter_mut().zip(&pivot_row) {
                *x -= px * &factor;
            }
        }
        pivots.push(col);
        lead += 1;
    }

    // Rows below `lead` have no coefficients left.
    if rows[lead..].iter().any(|row| !row[k].is_zero()) {
        return None;
    }

    let free: Vec<usize> = (0..k).filter(|c| !pivots.contains(c)).collect();
    let mut particular = vec![Rat::zero(); k];
    for (i, &pc) in pivots.iter().enumerate() {
        particular[pc] = rows[i][k].clone();
    }
    let kernel = free
        .iter()
        .map(|&f| {
            let mut v = vec![Rat::zero(); k];
            v[f] = Rat::one();
            for (i, &pc) in pivots.iter().enumerate() {
                v[pc] = -rows[i][f].clone();
            }
            v
        })
        .collect();
    Some(LinearSolution {
        particular,
        pivots,
        free,
        kernel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{q, qf};

    fn qm(rows: usize, cols: usize, vals: &[i64]) -> QMatrix {
        QMatrix::from_row_iterator(rows, cols, vals.iter().map(|&v| q(v)))
    }

    fn apply(a: &QMatrix, x: &[Rat]) -> Vec<Rat> {
        (0..a.nrows())
            .map(|i| crate::exact::dot(a.row(i).iter(), x))
            .collect()
    }

    #[test]
    fn unique_solution() {
        // 2x + y = 3, x - y = 0
        let a = qm(2, 2, &[2, 1, 1, -1]);
        let sol = gauss_jordan(&a, &[q(3), q(0)]).unwrap();
        assert!(sol.is_unique());
        assert_eq!(sol.particular, vec![q(1), q(1)]);
    }

    #[test]
    fn rational_solution() {
        // 2x = 1
        let a = qm(1, 1, &[2]);
        let sol = gauss_jordan(&a, &[q(1)]).unwrap();
        assert_eq!(sol.particular, vec![qf(1, 2)]);
    }

    #[test]
    fn underdetermined_sets_free_columns_to_zero() {
        // x - z = 0, y - z = 0  -> z free
        let a = qm(2, 3, &[1, 0, -1, 0, 1, -1]);
        let b = [q(0), q(0)];
        let sol = gauss_jordan(&a, &b).unwrap();
        assert_eq!(sol.pivots, vec![0, 1]);
        assert_eq!(sol.free, vec![2]);
        assert_eq!(sol.particular, vec![q(0), q(0), q(0)]);
        assert_eq!(sol.kernel, vec![vec![q(1), q(1), q(1)]]);
        let x = sol.instantiate(&[q(5)]);
        assert_eq!(apply(&a, &x), b.to_vec());
    }

    #[test]
    fn leading_zero_column_is_free() {
        // 0·x + y = 2
        let a = qm(1, 2, &[0, 1]);
        let sol = gauss_jordan(&a, &[q(2)]).unwrap();
        assert_eq!(sol.free, vec![0]);
        assert_eq!(sol.particular, vec![q(0), q(2)]);
    }

    #[test]
    fn inconsistent_system() {
        // -s = 0 and -s = -2
        let a = qm(2, 2, &[0, -1, 0, -1]);
        assert!(gauss_jordan(&a, &[q(0), q(-2)]).is_none());
    }
}
