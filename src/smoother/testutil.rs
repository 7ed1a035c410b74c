//! Shared fixtures for smoother tests.

use crate::field::{Field, Mask};
use crate::types::{Axis, BoxFaces, IndexBox};

use super::BoundaryFaces;

/// Owns mask and boundary-coefficient planes for all six faces of a valid
/// box, so tests can borrow a [`BoundaryFaces`] without hand-building
/// twelve plane fields.
pub(crate) struct BoundaryStorage {
    masks: BoxFaces<Mask>,
    coeffs: BoxFaces<Field>,
}

impl BoundaryStorage {
    /// Uniform masks (`mask_value` on every face plane, > 0 meaning active)
    /// and uniform fold coefficients.
    pub fn new(valid: &IndexBox, mask_value: i32, coeff_value: f64, ncomp: usize) -> Self {
        let make = |axis: Axis, high: bool| {
            let ax = axis.index();
            // Planes span the grown box transversally so corner probes resolve
            let grown = valid.grow(1);
            let mut lo = grown.lo();
            let mut hi = grown.hi();
            let (outside, inside) = if high {
                (valid.hi()[ax] + 1, valid.hi()[ax])
            } else {
                (valid.lo()[ax] - 1, valid.lo()[ax])
            };
            lo[ax] = outside;
            hi[ax] = outside;
            let mask_box = IndexBox::new(lo, hi);
            lo[ax] = inside;
            hi[ax] = inside;
            let coeff_box = IndexBox::new(lo, hi);
            (
                Mask::filled(mask_box, mask_value),
                Field::filled(coeff_box, ncomp, coeff_value),
            )
        };

        let (mx_lo, cx_lo) = make(Axis::X, false);
        let (my_lo, cy_lo) = make(Axis::Y, false);
        let (mz_lo, cz_lo) = make(Axis::Z, false);
        let (mx_hi, cx_hi) = make(Axis::X, true);
        let (my_hi, cy_hi) = make(Axis::Y, true);
        let (mz_hi, cz_hi) = make(Axis::Z, true);

        Self {
            masks: BoxFaces::new(mx_lo, my_lo, mz_lo, mx_hi, my_hi, mz_hi),
            coeffs: BoxFaces::new(cx_lo, cy_lo, cz_lo, cx_hi, cy_hi, cz_hi),
        }
    }

    /// Borrow the stored planes as the view bundle the smoothers take.
    pub fn faces(&self) -> BoundaryFaces<'_> {
        BoundaryFaces {
            masks: BoxFaces::new(
                self.masks.x_lo.view(),
                self.masks.y_lo.view(),
                self.masks.z_lo.view(),
                self.masks.x_hi.view(),
                self.masks.y_hi.view(),
                self.masks.z_hi.view(),
            ),
            coeffs: BoxFaces::new(
                self.coeffs.x_lo.view(),
                self.coeffs.y_lo.view(),
                self.coeffs.z_lo.view(),
                self.coeffs.x_hi.view(),
                self.coeffs.y_hi.view(),
                self.coeffs.z_hi.view(),
            ),
        }
    }
}

/// The three uniform face-coefficient fields for a cell box.
pub(crate) fn uniform_face_coeffs(bounds: &IndexBox, ncomp: usize, value: f64) -> [Field; 3] {
    [
        Field::filled(bounds.faces(Axis::X), ncomp, value),
        Field::filled(bounds.faces(Axis::Y), ncomp, value),
        Field::filled(bounds.faces(Axis::Z), ncomp, value),
    ]
}
