//! Thomas algorithm for the per-column tridiagonal systems.

use crate::error::ConfigError;

/// Solve a tridiagonal system by the Thomas algorithm.
///
/// `sub` holds the sub-diagonal (entry `r` couples row `r` to row `r-1`,
/// `sub[0]` is unused), `diag` the diagonal, `sup` the super-diagonal
/// (`sup[n-1]` unused), `rhs` the right-hand side. The solution lands in
/// `sol`; `work` is caller-provided scratch of the same length, so the
/// smoother can reuse one allocation across all columns of a sweep.
///
/// The systems built by the line smoother are strictly diagonally dominant
/// whenever the operator diagonal is positive, so a vanishing pivot means
/// the coefficients describe a singular column and the sweep cannot
/// continue; that is reported as [`ConfigError::ZeroPivot`] rather than
/// papered over.
pub fn solve_tridiagonal(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &[f64],
    sol: &mut [f64],
    work: &mut [f64],
) -> Result<(), ConfigError> {
    let n = diag.len();
    debug_assert!(sub.len() == n && sup.len() == n && rhs.len() == n);
    debug_assert!(sol.len() == n && work.len() == n);

    let mut bet = diag[0];
    if bet == 0.0 {
        return Err(ConfigError::ZeroPivot { row: 0 });
    }
    sol[0] = rhs[0] / bet;

    for r in 1..n {
        work[r] = sup[r - 1] / bet;
        bet = diag[r] - sub[r] * work[r];
        if bet == 0.0 {
            return Err(ConfigError::ZeroPivot { row: r });
        }
        sol[r] = (rhs[r] - sub[r] * sol[r - 1]) / bet;
    }

    for r in (0..n - 1).rev() {
        sol[r] -= work[r + 1] * sol[r + 1];
    }

    Ok(())
}
