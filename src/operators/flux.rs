//! Directional face-flux reconstruction.
//!
//! Fluxes feed the flux registers that keep coarse-fine interfaces
//! conservative in the surrounding multigrid/AMR machinery. The scale
//! factor `fac` is supplied by the caller rather than baked in as
//! `beta/dx`, so the same routines serve both operator-internal use and
//! driver-level flux-register accumulation.

use crate::field::{FieldView, FieldViewMut};
use crate::types::{Axis, IndexBox};

/// Reconstruct the face flux along `axis` for every face in `bounds`.
///
/// `flux(face) = -fac * b(face) * (sol(cell) - sol(cell - 1))`, the
/// one-sided difference across the face on the low side of each cell.
///
/// `bounds` is face-centered along `axis` (see
/// [`IndexBox::faces`]); `sol` must extend one cell below
/// `bounds` along `axis` so the low-side neighbor of the first face exists.
pub fn compute_flux(
    bounds: &IndexBox,
    axis: Axis,
    flux: &mut FieldViewMut<'_>,
    sol: &FieldView<'_>,
    bcoef: &FieldView<'_>,
    fac: f64,
) {
    let off = axis.unit();
    let lo = bounds.lo();
    let hi = bounds.hi();

    for n in 0..flux.ncomp() {
        for k in lo[2]..=hi[2] {
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    let value = -fac
                        * bcoef.at(i, j, k, n)
                        * (sol.at(i, j, k, n) - sol.at(i - off[0], j - off[1], k - off[2], n));
                    flux.set(i, j, k, n, value);
                }
            }
        }
    }
}

/// Reconstruct the face flux only at the two bounding faces of the box
/// along `axis`.
///
/// Writes the low face (`lo[axis]`) and the face offset by `len`
/// (`lo[axis] + len`, the high bounding face when `len` is the box's cell
/// extent), skipping every interior face. Used when only coarse-fine
/// flux-register bookkeeping is needed and a full interior sweep would be
/// wasted work. Same arithmetic as [`compute_flux`] at the faces it visits.
#[allow(clippy::too_many_arguments)]
pub fn compute_boundary_flux(
    bounds: &IndexBox,
    axis: Axis,
    flux: &mut FieldViewMut<'_>,
    sol: &FieldView<'_>,
    bcoef: &FieldView<'_>,
    fac: f64,
    len: i32,
) {
    let ax = axis.index();
    let [t1, t2] = axis.others();
    let (p1, p2) = (t1.index(), t2.index());
    let off = axis.unit();
    let lo = bounds.lo();
    let hi = bounds.hi();

    for n in 0..flux.ncomp() {
        for q in lo[p2]..=hi[p2] {
            for p in lo[p1]..=hi[p1] {
                for face in [lo[ax], lo[ax] + len] {
                    let mut c = [0i32; 3];
                    c[ax] = face;
                    c[p1] = p;
                    c[p2] = q;
                    let value = -fac
                        * bcoef.at(c[0], c[1], c[2], n)
                        * (sol.at(c[0], c[1], c[2], n)
                            - sol.at(c[0] - off[0], c[1] - off[1], c[2] - off[2], n));
                    flux.set(c[0], c[1], c[2], n, value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn setup(axis: Axis) -> (IndexBox, IndexBox, Field, Field) {
        let cells = IndexBox::cube(0, 2);
        let face_box = cells.faces(axis);
        let sol = Field::from_fn(cells.grow(1), 1, |i, j, k, _| {
            (i + 10 * j + 100 * k) as f64
        });
        let bcoef = Field::from_fn(face_box, 1, |i, j, k, _| 1.0 + 0.5 * (i + j + k) as f64);
        (cells, face_box, sol, bcoef)
    }

    #[test]
    fn test_flux_each_axis() {
        for axis in Axis::ALL {
            let (_, face_box, sol, bcoef) = setup(axis);
            let mut flux = Field::zeros(face_box, 1);
            compute_flux(
                &face_box,
                axis,
                &mut flux.view_mut(),
                &sol.view(),
                &bcoef.view(),
                2.0,
            );

            let off = axis.unit();
            let lo = face_box.lo();
            let hi = face_box.hi();
            for k in lo[2]..=hi[2] {
                for j in lo[1]..=hi[1] {
                    for i in lo[0]..=hi[0] {
                        let expected = -2.0
                            * bcoef.at(i, j, k, 0)
                            * (sol.at(i, j, k, 0) - sol.at(i - off[0], j - off[1], k - off[2], 0));
                        assert_eq!(flux.at(i, j, k, 0), expected, "axis {} face {},{},{}", axis, i, j, k);
                    }
                }
            }
        }
    }

    #[test]
    fn test_flux_sign_and_scale() {
        // Linear solution along x with slope 1: flux = -fac * b
        let axis = Axis::X;
        let cells = IndexBox::cube(0, 2);
        let face_box = cells.faces(axis);
        let sol = Field::from_fn(cells.grow(1), 1, |i, _, _, _| i as f64);
        let bcoef = Field::filled(face_box, 1, 3.0);
        let mut flux = Field::zeros(face_box, 1);
        compute_flux(
            &face_box,
            axis,
            &mut flux.view_mut(),
            &sol.view(),
            &bcoef.view(),
            0.5,
        );
        assert!(flux.data().iter().all(|&v| (v + 1.5).abs() < 1e-15));
    }

    #[test]
    fn test_boundary_flux_touches_only_bounding_faces() {
        for axis in Axis::ALL {
            let (cells, face_box, sol, bcoef) = setup(axis);
            let len = cells.extent(axis) as i32;

            let sentinel = 777.0;
            let mut flux = Field::filled(face_box, 1, sentinel);
            compute_boundary_flux(
                &face_box,
                axis,
                &mut flux.view_mut(),
                &sol.view(),
                &bcoef.view(),
                2.0,
                len,
            );

            let mut full = Field::zeros(face_box, 1);
            compute_flux(
                &face_box,
                axis,
                &mut full.view_mut(),
                &sol.view(),
                &bcoef.view(),
                2.0,
            );

            let ax = axis.index();
            let lo = face_box.lo();
            let hi = face_box.hi();
            for k in lo[2]..=hi[2] {
                for j in lo[1]..=hi[1] {
                    for i in lo[0]..=hi[0] {
                        let pos = [i, j, k][ax];
                        if pos == lo[ax] || pos == lo[ax] + len {
                            assert_eq!(flux.at(i, j, k, 0), full.at(i, j, k, 0));
                        } else {
                            assert_eq!(flux.at(i, j, k, 0), sentinel, "interior face written");
                        }
                    }
                }
            }
        }
    }
}
