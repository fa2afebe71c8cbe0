//! Gaussian elimination with partial pivoting.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Numerical configuration for a solve.
///
/// Passed explicitly so that no global epsilon is shared between
/// solver users.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// A pivot whose absolute value falls below this threshold marks
    /// the system as singular.
    pub pivot_epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_epsilon: 1e-9,
        }
    }
}

/// Solve a linear system Ax = b by Gaussian elimination with partial
/// pivoting.
///
/// Takes ownership of `a` and `b` and uses them as working storage for
/// the elimination; the caller keeps no alias into a half-reduced
/// matrix. Knows nothing about where the system came from.
///
/// Returns the solution vector `x`, or [`Error::SingularMatrix`] when
/// the largest available pivot in some column is smaller than
/// [`SolverConfig::pivot_epsilon`].
pub fn solve(
    mut a: DMatrix<f64>,
    mut b: DVector<f64>,
    config: &SolverConfig,
) -> Result<DVector<f64>> {
    if a.nrows() != a.ncols() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    if a.nrows() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }

    let n = a.nrows();
    log::debug!("gaussian elimination on {n}x{n} system");

    // Forward elimination.
    for i in 0..n {
        // Partial pivot: largest |A[k][i]| among the remaining rows.
        let mut pivot_row = i;
        let mut pivot_abs = a[(i, i)].abs();
        for k in (i + 1)..n {
            let candidate = a[(k, i)].abs();
            if candidate > pivot_abs {
                pivot_abs = candidate;
                pivot_row = k;
            }
        }
        if pivot_row != i {
            a.swap_rows(i, pivot_row);
            b.swap_rows(i, pivot_row);
        }

        let pivot = a[(i, i)];
        if pivot.abs() < config.pivot_epsilon {
            return Err(Error::SingularMatrix {
                column: i,
                epsilon: config.pivot_epsilon,
            });
        }

        for k in (i + 1)..n {
            let factor = a[(k, i)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in i..n {
                let aij = a[(i, j)];
                a[(k, j)] -= factor * aij;
            }
            let bi = b[i];
            b[k] -= factor * bi;
        }
    }

    // Back substitution.
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += a[(i, j)] * x[j];
        }
        x[i] = (b[i] - sum) / a[(i, i)];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn test_solve_simple() {
        // 2x + y = 5
        // x + 3y = 6
        // Solution: x = 1.8, y = 1.4
        let a = dmatrix![2.0, 1.0; 1.0, 3.0];
        let b = dvector![5.0, 6.0];

        let x = solve(a, b, &SolverConfig::default()).unwrap();

        assert!((x[0] - 1.8).abs() < 1e-10);
        assert!((x[1] - 1.4).abs() < 1e-10);
    }

    #[test]
    fn test_zero_pivot_needs_row_swap() {
        // A[0][0] = 0 forces a swap before elimination can proceed.
        let a = dmatrix![0.0, 1.0; 1.0, 1.0];
        let b = dvector![2.0, 3.0];

        let x = solve(a, b, &SolverConfig::default()).unwrap();

        assert!((x[0] - 1.0).abs() < 1e-10, "x[0] = {} (expected 1)", x[0]);
        assert!((x[1] - 2.0).abs() < 1e-10, "x[1] = {} (expected 2)", x[1]);
    }

    #[test]
    fn test_singular_matrix() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0]; // row 2 = 2 * row 1
        let b = dvector![1.0, 2.0];

        let result = solve(a, b, &SolverConfig::default());
        assert!(matches!(result, Err(Error::SingularMatrix { .. })));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = dmatrix![1.0, 2.0; 3.0, 4.0];
        let b = dvector![1.0, 2.0, 3.0];

        let result = solve(a, b, &SolverConfig::default());
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_non_square_matrix() {
        let a = DMatrix::zeros(2, 3);
        let b = dvector![1.0, 2.0];

        let result = solve(a, b, &SolverConfig::default());
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_residual_on_well_conditioned_system() {
        // Diagonally dominant 20x20 system: check A*x ~= b.
        let size = 20;
        let a = DMatrix::from_fn(size, size, |i, j| {
            if i == j {
                (size as f64) + 1.0
            } else {
                1.0 / ((i as f64 - j as f64).abs() + 1.0)
            }
        });
        let b = DVector::from_fn(size, |i, _| (i + 1) as f64);

        let x = solve(a.clone(), b.clone(), &SolverConfig::default()).unwrap();

        let residual = (&a * &x - &b).norm() / b.norm();
        assert!(residual < 1e-6, "relative residual = {residual}");
    }

    #[test]
    fn test_custom_epsilon() {
        // Well-formed system, but a pivot threshold above its entries
        // makes the solve report it as singular.
        let a = dmatrix![1e-3, 0.0; 0.0, 1e-3];
        let b = dvector![1.0, 1.0];

        let strict = SolverConfig { pivot_epsilon: 1.0 };
        let result = solve(a.clone(), b.clone(), &strict);
        assert!(matches!(
            result,
            Err(Error::SingularMatrix { column: 0, .. })
        ));

        let x = solve(a, b, &SolverConfig::default()).unwrap();
        assert!((x[0] - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_system() {
        let a = DMatrix::zeros(0, 0);
        let b = DVector::zeros(0);

        let x = solve(a, b, &SolverConfig::default()).unwrap();
        assert_eq!(x.len(), 0);
    }
}
