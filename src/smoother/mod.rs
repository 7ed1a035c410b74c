//! Relaxation sweeps for the multigrid smoother.
//!
//! This module provides:
//! - Red-black Gauss-Seidel relaxation with over-relaxation and
//!   boundary-mask substitution (`smooth_red_black`)
//! - The anisotropic line smoother: an exact per-column tridiagonal solve
//!   along the stiff axis (`smooth_line_z`)
//! - The Thomas tridiagonal solver backing it (`solve_tridiagonal`)
//! - The per-face boundary mask/coefficient bundle both smoothers consume
//!   (`BoundaryFaces`)

mod boundary;
mod line;
mod red_black;
mod tridiagonal;

#[cfg(test)]
pub(crate) mod testutil;

pub use boundary::BoundaryFaces;
pub use line::{smooth_line_z, MAX_COLUMN_LEN};
#[cfg(feature = "parallel")]
pub use red_black::smooth_red_black_parallel;
pub use red_black::{smooth_red_black, DEFAULT_OMEGA};
pub use tridiagonal::solve_tridiagonal;
