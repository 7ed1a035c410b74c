//! Boundary masks and fold coefficients for relaxation sweeps.

use crate::field::{FieldView, MaskView};
use crate::types::{Axis, BoxFaces, IndexBox};

/// The six mask / boundary-coefficient pairs around a valid box.
///
/// For each boundary face of the valid box, the mask is probed one cell
/// *outside* the valid box: a value > 0 means the neighbor across that face
/// is not a real interior cell and the relaxation must fold the matching
/// boundary coefficient into its diagonal instead. Coefficients are read at
/// the boundary cell just *inside* the valid box.
///
/// Field values outside the valid box are only ever consumed through this
/// mask-gated substitution; the smoothers never interpret raw halo data as
/// boundary conditions on their own.
#[derive(Clone, Copy)]
pub struct BoundaryFaces<'a> {
    /// Per-face boundary masks, one plane outside the valid box
    pub masks: BoxFaces<MaskView<'a>>,
    /// Per-face substitution coefficients, one plane inside the valid box
    pub coeffs: BoxFaces<FieldView<'a>>,
}

impl BoundaryFaces<'_> {
    /// Fold coefficient for the low face along `axis`.
    ///
    /// Nonzero only when `cell` sits on the valid-box low boundary along
    /// `axis` *and* the mask outside marks an active boundary condition.
    #[inline]
    pub fn correction_lo(&self, axis: Axis, cell: [i32; 3], n: usize, valid: &IndexBox) -> f64 {
        let ax = axis.index();
        if cell[ax] != valid.lo()[ax] {
            return 0.0;
        }
        if self.lo_mask_set(axis, cell, valid) {
            self.coeffs.lo(axis).at(cell[0], cell[1], cell[2], n)
        } else {
            0.0
        }
    }

    /// Fold coefficient for the high face along `axis`.
    #[inline]
    pub fn correction_hi(&self, axis: Axis, cell: [i32; 3], n: usize, valid: &IndexBox) -> f64 {
        let ax = axis.index();
        if cell[ax] != valid.hi()[ax] {
            return 0.0;
        }
        if self.hi_mask_set(axis, cell, valid) {
            self.coeffs.hi(axis).at(cell[0], cell[1], cell[2], n)
        } else {
            0.0
        }
    }

    /// Whether the low-side mask along `axis` marks an active boundary
    /// condition for the row/column through `cell` (probed one cell outside
    /// the valid box).
    #[inline]
    pub fn lo_mask_set(&self, axis: Axis, cell: [i32; 3], valid: &IndexBox) -> bool {
        let ax = axis.index();
        let mut probe = cell;
        probe[ax] = valid.lo()[ax] - 1;
        self.masks.lo(axis).at(probe[0], probe[1], probe[2]) > 0
    }

    /// Whether the high-side mask along `axis` marks an active boundary
    /// condition for the row/column through `cell`.
    #[inline]
    pub fn hi_mask_set(&self, axis: Axis, cell: [i32; 3], valid: &IndexBox) -> bool {
        let ax = axis.index();
        let mut probe = cell;
        probe[ax] = valid.hi()[ax] + 1;
        self.masks.hi(axis).at(probe[0], probe[1], probe[2]) > 0
    }
}
