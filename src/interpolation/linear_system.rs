use crate::float_trait::Float;

use conv::prelude::*;
use faer::Mat;
use faer::linalg::solvers::Solve;
use ndarray::{Array1, Array2};

/// Solve `a x = b` with the partially pivoted LU decomposition
///
/// The system is solved in double precision. Returns `None` if the matrix is not square or the
/// solution is not finite, as it is for singular matrices.
pub(super) fn solve_linear_system<T>(a: &Array2<T>, b: &Array1<T>) -> Option<Array1<T>>
where
    T: Float,
{
    let n = b.len();
    if a.nrows() != n || a.ncols() != n {
        return None;
    }
    let a = a
        .iter()
        .map(|&x| x.value_as::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    let b = b
        .iter()
        .map(|&x| x.value_as::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;

    let a = Mat::from_fn(n, n, |i, j| a[i * n + j]);
    let b = Mat::from_fn(n, 1, |i, _| b[i]);
    let x = a.partial_piv_lu().solve(b.as_ref());

    (0..n)
        .map(|i| {
            let value = x[(i, 0)];
            if value.is_finite() {
                value.approx_as::<T>().ok()
            } else {
                None
            }
        })
        .collect()
}
