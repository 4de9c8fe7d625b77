//! Dense linear solves.

use std::fmt;

/// Pivots below this magnitude are treated as zero.
const PIVOT_EPSILON: f64 = 1e-12;

/// The coefficient matrix has no usable pivot.
#[derive(Clone, Copy, Debug)]
pub struct SingularMatrix;

impl fmt::Display for SingularMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "matrix is singular to working precision")
    }
}

impl std::error::Error for SingularMatrix {}

/// Solves the square system `a x = b` by LU factorization with partial
/// pivoting, leaving the solution in `b`.
///
/// `a` is row-major with `n` rows and columns and is overwritten by the
/// elimination. The system is solved exactly (up to rounding); there is no
/// least-squares fallback, so a degenerate matrix is reported rather than
/// masked.
pub fn solve_in_place(
    a: &mut [f64],
    b: &mut [f64],
    n: usize,
) -> Result<(), SingularMatrix> {
    assert_eq!(a.len(), n * n);
    assert_eq!(b.len(), n);

    for i in 0..n {
        let mut pivot_row = i;
        let mut pivot = a[i * n + i].abs();

        for k in i + 1..n {
            if a[k * n + i].abs() > pivot {
                pivot = a[k * n + i].abs();
                pivot_row = k;
            }
        }

        if pivot < PIVOT_EPSILON {
            return Err(SingularMatrix);
        }

        if pivot_row != i {
            for j in 0..n {
                a.swap(i * n + j, pivot_row * n + j);
            }

            b.swap(i, pivot_row);
        }

        for k in i + 1..n {
            let factor = a[k * n + i] / a[i * n + i];

            for j in i..n {
                a[k * n + j] -= factor * a[i * n + j];
            }

            b[k] -= factor * b[i];
        }
    }

    for i in (0..n).rev() {
        let mut sum = b[i];

        for j in i + 1..n {
            sum -= a[i * n + j] * b[j];
        }

        b[i] = sum / a[i * n + i];

        if !b[i].is_finite() {
            return Err(SingularMatrix);
        }
    }

    Ok(())
}
