//! Matrix-free operator kernels: stencil application, diagonal scaling,
//! face-flux reconstruction.
//!
//! This module provides:
//! - Application of the discretized elliptic operator (`apply_operator`)
//! - In-place division by the operator's local diagonal
//!   (`normalize_by_diagonal`)
//! - Directional face fluxes, full-sweep and boundary-only
//!   (`compute_flux`, `compute_boundary_flux`)

mod flux;
mod stencil;

pub use flux::{compute_boundary_flux, compute_flux};
#[cfg(feature = "parallel")]
pub use stencil::apply_operator_parallel;
pub use stencil::{apply_operator, normalize_by_diagonal};

pub(crate) use stencil::local_diagonal;

use crate::field::FieldView;
use crate::types::Axis;

/// Face-centered diffusion coefficients, one field per axis.
///
/// Along each axis, coefficient index `i` denotes the face on the low side
/// of cell `i`, so a coefficient field spans one more entry than the cell
/// box along its own axis (see [`IndexBox::faces`](crate::types::IndexBox::faces)).
#[derive(Clone, Copy)]
pub struct FaceCoeffs<'a> {
    /// Coefficients on x-faces
    pub x: FieldView<'a>,
    /// Coefficients on y-faces
    pub y: FieldView<'a>,
    /// Coefficients on z-faces
    pub z: FieldView<'a>,
}

impl<'a> FaceCoeffs<'a> {
    /// Bundle the three per-axis coefficient views.
    pub fn new(x: FieldView<'a>, y: FieldView<'a>, z: FieldView<'a>) -> Self {
        Self { x, y, z }
    }

    /// The coefficient field for faces perpendicular to `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> &FieldView<'a> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}
