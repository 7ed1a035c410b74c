//! # mg-rs
//!
//! Matrix-free stencil kernels for geometric multigrid on block-structured
//! 3D grids.
//!
//! The crate implements the per-box numeric core of a multigrid iteration
//! for the variable-coefficient scalar elliptic operator
//!
//! ```text
//! alpha*A(x)*u - beta*div(B(x)*grad(u))
//! ```
//!
//! discretized with the standard second-order 7-point finite-volume stencil:
//! - operator application (`apply_operator`) and diagonal scaling
//!   (`normalize_by_diagonal`)
//! - directional face-flux reconstruction (`compute_flux`,
//!   `compute_boundary_flux`)
//! - red-black Gauss-Seidel relaxation with boundary-mask substitution
//!   (`smooth_red_black`)
//! - an anisotropy-specialized line smoother that replaces point relaxation
//!   along the stiff axis with an exact per-column tridiagonal solve
//!   (`smooth_line_z`)
//!
//! Everything else in a multigrid solver (hierarchy management, halo
//! exchange, sweep scheduling, convergence control) belongs to the calling
//! driver. Each kernel is a pure function over a box and borrowed field
//! views; no kernel allocates, retains, or frees grid storage, and no kernel
//! performs synchronization. Distinct boxes may be processed concurrently as
//! long as the one-cell halo each call reads has been filled beforehand.

pub mod error;
pub mod field;
pub mod operators;
pub mod smoother;
pub mod types;

// Re-export main types for convenience
pub use error::ConfigError;
pub use field::{Field, FieldView, FieldViewMut, Mask, MaskView};
#[cfg(feature = "parallel")]
pub use operators::apply_operator_parallel;
pub use operators::{
    apply_operator, compute_boundary_flux, compute_flux, normalize_by_diagonal, FaceCoeffs,
};
#[cfg(feature = "parallel")]
pub use smoother::smooth_red_black_parallel;
pub use smoother::{
    smooth_line_z, smooth_red_black, solve_tridiagonal, BoundaryFaces, DEFAULT_OMEGA,
    MAX_COLUMN_LEN,
};
pub use types::{Axis, BoxFaces, IndexBox, SweepColor};
