use ndarray::{Array1, Array2};

use crate::SolveError;

/// Pivots with a smaller magnitude than this are treated as zero.
pub const SINGULAR_PIVOT_TOLERANCE: f64 = 1e-12;

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Takes ownership of both operands and eliminates in place.
pub(crate) fn solve_linear_system(
    mut a: Array2<f64>,
    mut b: Array1<f64>,
) -> Result<Array1<f64>, SolveError> {
    let n = b.len();
    debug_assert_eq!(a.dim(), (n, n));

    for col in 0..n {
        let (pivot_row, pivot_abs) = (col..n)
            .map(|row| (row, a[[row, col]].abs()))
            .fold((col, f64::NEG_INFINITY), |best, cur| {
                if cur.1 > best.1 { cur } else { best }
            });

        // Also catches NaN pivots.
        if !(pivot_abs >= SINGULAR_PIVOT_TOLERANCE) {
            return Err(SolveError::SingularSystem {
                column: col,
                pivot: pivot_abs,
            });
        }

        if pivot_row != col {
            for k in col..n {
                a.swap([col, k], [pivot_row, k]);
            }
            b.swap(col, pivot_row);
        }

        let pivot = a[[col, col]];
        for row in (col + 1)..n {
            let factor = a[[row, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let mut acc = b[row];
        for k in (row + 1)..n {
            acc -= a[[row, k]] * x[k];
        }
        x[row] = acc / a[[row, row]];
    }

    match x.iter().position(|value| !value.is_finite()) {
        Some(state) => Err(SolveError::NonFiniteSolution { state }),
        None => Ok(x),
    }
}
