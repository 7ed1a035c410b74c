//! Line relaxation along the stiff vertical axis.
//!
//! On strongly anisotropic grids (thin vertical cells, so the z stencil
//! weight dominates) pointwise red-black relaxation stalls: the error
//! within each vertical column is tightly coupled and barely damped.
//! The line smoother instead solves each column exactly as a tridiagonal
//! system, coloring columns by their in-plane index parity so a sweep
//! never reads a same-color column it has already rewritten.

use crate::error::ConfigError;
use crate::field::{FieldView, FieldViewMut};
use crate::operators::{local_diagonal, FaceCoeffs};
use crate::types::{Axis, IndexBox, SweepColor};

use super::tridiagonal::solve_tridiagonal;
use super::BoundaryFaces;

/// Longest vertical column a line sweep accepts.
///
/// Line relaxation is meant for the coarsened levels of an anisotropic
/// hierarchy, where columns are short; a longer column means the smoother
/// is being applied at the wrong level.
pub const MAX_COLUMN_LEN: usize = 32;

/// One colored sweep of vertical-line relaxation over `bounds`.
///
/// Columns whose `(i + j)` parity matches `color` are each solved exactly:
/// the in-plane (x and y) neighbor contributions are frozen at their
/// current values and moved to the right-hand side, and the remaining
/// z-coupled system is solved by [`solve_tridiagonal`]. Boundary handling
/// matches [`smooth_red_black`](super::smooth_red_black): mask-gated fold
/// coefficients adjust the diagonal, while unmasked column-end ghost values
/// fold into the right-hand side.
///
/// `dh` holds the three stencil face weights; the sweep requires the
/// vertical weight to strictly dominate both in-plane weights, and rejects
/// columns longer than [`MAX_COLUMN_LEN`].
///
/// # Errors
///
/// [`ConfigError::Anisotropy`] when `dh[2]` does not dominate,
/// [`ConfigError::ColumnTooLong`] for an over-long column, and
/// [`ConfigError::ZeroPivot`] from a singular column system.
#[allow(clippy::too_many_arguments)]
pub fn smooth_line_z(
    bounds: &IndexBox,
    phi: &mut FieldViewMut<'_>,
    rhs: &FieldView<'_>,
    alpha: f64,
    acoef: &FieldView<'_>,
    dh: [f64; 3],
    bcoef: &FaceCoeffs<'_>,
    boundary: &BoundaryFaces<'_>,
    valid: &IndexBox,
    color: SweepColor,
) -> Result<(), ConfigError> {
    if dh[2] <= dh[0] {
        return Err(ConfigError::Anisotropy {
            stiff: Axis::Z,
            other: Axis::X,
            dh_stiff: dh[2],
            dh_other: dh[0],
        });
    }
    if dh[2] <= dh[1] {
        return Err(ConfigError::Anisotropy {
            stiff: Axis::Z,
            other: Axis::Y,
            dh_stiff: dh[2],
            dh_other: dh[1],
        });
    }

    let len = bounds.extent(Axis::Z);
    if len > MAX_COLUMN_LEN {
        return Err(ConfigError::ColumnTooLong {
            len,
            max: MAX_COLUMN_LEN,
        });
    }

    let lo = bounds.lo();
    let hi = bounds.hi();

    let mut sub = vec![0.0; len];
    let mut diag = vec![0.0; len];
    let mut sup = vec![0.0; len];
    let mut r = vec![0.0; len];
    let mut sol = vec![0.0; len];
    let mut work = vec![0.0; len];

    for n in 0..phi.ncomp() {
        for j in lo[1]..=hi[1] {
            for i in lo[0]..=hi[0] {
                if !color.matches(i + j) {
                    continue;
                }

                for k in lo[2]..=hi[2] {
                    let cell = [i, j, k];
                    let row = (k - lo[2]) as usize;

                    let gamma = local_diagonal(acoef, bcoef, alpha, dh, i, j, k, n);

                    let cf_xlo = boundary.correction_lo(Axis::X, cell, n, valid);
                    let cf_ylo = boundary.correction_lo(Axis::Y, cell, n, valid);
                    let cf_zlo = boundary.correction_lo(Axis::Z, cell, n, valid);
                    let cf_xhi = boundary.correction_hi(Axis::X, cell, n, valid);
                    let cf_yhi = boundary.correction_hi(Axis::Y, cell, n, valid);
                    let cf_zhi = boundary.correction_hi(Axis::Z, cell, n, valid);

                    let g_m_d = gamma
                        - (dh[0]
                            * (bcoef.x.at(i, j, k, n) * cf_xlo
                                + bcoef.x.at(i + 1, j, k, n) * cf_xhi)
                            + dh[1]
                                * (bcoef.y.at(i, j, k, n) * cf_ylo
                                    + bcoef.y.at(i, j + 1, k, n) * cf_yhi)
                            + dh[2]
                                * (bcoef.z.at(i, j, k, n) * cf_zlo
                                    + bcoef.z.at(i, j, k + 1, n) * cf_zhi));

                    let phi_view = phi.as_view();
                    let mut rho = dh[0]
                        * (bcoef.x.at(i, j, k, n) * phi_view.at(i - 1, j, k, n)
                            + bcoef.x.at(i + 1, j, k, n) * phi_view.at(i + 1, j, k, n))
                        + dh[1]
                            * (bcoef.y.at(i, j, k, n) * phi_view.at(i, j - 1, k, n)
                                + bcoef.y.at(i, j + 1, k, n) * phi_view.at(i, j + 1, k, n));

                    // In-plane faces with an active boundary condition are
                    // already folded into g_m_d above; their halo values
                    // must not also feed the right-hand side.
                    if i == valid.lo()[0] && boundary.lo_mask_set(Axis::X, cell, valid) {
                        rho -= dh[0] * bcoef.x.at(i, j, k, n) * phi_view.at(i - 1, j, k, n);
                    }
                    if i == valid.hi()[0] && boundary.hi_mask_set(Axis::X, cell, valid) {
                        rho -= dh[0] * bcoef.x.at(i + 1, j, k, n) * phi_view.at(i + 1, j, k, n);
                    }
                    if j == valid.lo()[1] && boundary.lo_mask_set(Axis::Y, cell, valid) {
                        rho -= dh[1] * bcoef.y.at(i, j, k, n) * phi_view.at(i, j - 1, k, n);
                    }
                    if j == valid.hi()[1] && boundary.hi_mask_set(Axis::Y, cell, valid) {
                        rho -= dh[1] * bcoef.y.at(i, j + 1, k, n) * phi_view.at(i, j + 1, k, n);
                    }

                    sub[row] = -dh[2] * bcoef.z.at(i, j, k, n);
                    diag[row] = g_m_d;
                    sup[row] = -dh[2] * bcoef.z.at(i, j, k + 1, n);
                    r[row] = rhs.at(i, j, k, n) + rho;

                    if k == lo[2] {
                        sub[row] = 0.0;
                        // A non-boundary column end couples to real data
                        // below; fold that known value into the system.
                        if !boundary.lo_mask_set(Axis::Z, cell, valid) {
                            r[row] += dh[2] * bcoef.z.at(i, j, k, n) * phi_view.at(i, j, k - 1, n);
                        }
                    }
                    if k == hi[2] {
                        sup[row] = 0.0;
                        if !boundary.hi_mask_set(Axis::Z, cell, valid) {
                            r[row] +=
                                dh[2] * bcoef.z.at(i, j, k + 1, n) * phi_view.at(i, j, k + 1, n);
                        }
                    }
                }

                solve_tridiagonal(&sub, &diag, &sup, &r, &mut sol, &mut work)?;

                for k in lo[2]..=hi[2] {
                    phi.set(i, j, k, n, sol[(k - lo[2]) as usize]);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::operators::apply_operator;
    use crate::smoother::testutil::{uniform_face_coeffs, BoundaryStorage};

    const DH: [f64; 3] = [1.0, 1.0, 25.0];
    const DXINV: [f64; 3] = [1.0, 1.0, 5.0];

    #[test]
    fn test_rejects_weak_vertical_coupling() {
        let bounds = IndexBox::cube(0, 3);
        let acoef = Field::filled(bounds, 1, 1.0);
        let b = uniform_face_coeffs(&bounds, 1, 1.0);
        let bcoef = FaceCoeffs::new(b[0].view(), b[1].view(), b[2].view());
        let storage = BoundaryStorage::new(&bounds, 0, 0.0, 1);
        let rhs = Field::zeros(bounds, 1);
        let mut phi = Field::zeros(bounds.grow(1), 1);

        let err = smooth_line_z(
            &bounds,
            &mut phi.view_mut(),
            &rhs.view(),
            1.0,
            &acoef.view(),
            [1.0, 1.0, 0.5],
            &bcoef,
            &storage.faces(),
            &bounds,
            SweepColor::Red,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Anisotropy {
                stiff: Axis::Z,
                other: Axis::X,
                ..
            }
        ));

        let err = smooth_line_z(
            &bounds,
            &mut phi.view_mut(),
            &rhs.view(),
            1.0,
            &acoef.view(),
            [0.5, 2.0, 1.0],
            &bcoef,
            &storage.faces(),
            &bounds,
            SweepColor::Red,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Anisotropy {
                stiff: Axis::Z,
                other: Axis::Y,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_over_long_column() {
        let bounds = IndexBox::new([0, 0, 0], [0, 0, 32]);
        let acoef = Field::filled(bounds, 1, 1.0);
        let b = uniform_face_coeffs(&bounds, 1, 1.0);
        let bcoef = FaceCoeffs::new(b[0].view(), b[1].view(), b[2].view());
        let storage = BoundaryStorage::new(&bounds, 0, 0.0, 1);
        let rhs = Field::zeros(bounds, 1);
        let mut phi = Field::zeros(bounds.grow(1), 1);

        let err = smooth_line_z(
            &bounds,
            &mut phi.view_mut(),
            &rhs.view(),
            1.0,
            &acoef.view(),
            DH,
            &bcoef,
            &storage.faces(),
            &bounds,
            SweepColor::Red,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ColumnTooLong { len: 33, max: 32 }));
    }

    #[test]
    fn test_single_column_solved_exactly() {
        // One column, unmasked faces, ghosts everywhere carrying a
        // manufactured solution: the column system is exactly the operator
        // equation, so one sweep recovers the manufactured values.
        let bounds = IndexBox::new([0, 0, 0], [0, 0, 7]);
        let grown = bounds.grow(1);
        let phi_star = Field::from_fn(grown, 1, |i, j, k, _| {
            0.5 + 0.3 * i as f64 - 0.2 * j as f64 + 0.1 * (k * k) as f64
        });
        let acoef = Field::from_fn(bounds, 1, |_, _, k, _| 1.0 + 0.1 * k as f64);
        let b = uniform_face_coeffs(&bounds, 1, 1.0);
        let bcoef = FaceCoeffs::new(b[0].view(), b[1].view(), b[2].view());
        let storage = BoundaryStorage::new(&bounds, 0, 0.0, 1);

        let (alpha, beta) = (2.0, 1.0);
        let mut rhs = Field::zeros(bounds, 1);
        apply_operator(
            &bounds,
            &mut rhs.view_mut(),
            &phi_star.view(),
            &acoef.view(),
            &bcoef,
            DXINV,
            alpha,
            beta,
        );

        // Interior zeroed, ghost ring keeps the manufactured values
        let mut phi = phi_star.clone();
        for k in 0..=7 {
            phi.set(0, 0, k, 0, 0.0);
        }

        smooth_line_z(
            &bounds,
            &mut phi.view_mut(),
            &rhs.view(),
            alpha,
            &acoef.view(),
            DH,
            &bcoef,
            &storage.faces(),
            &bounds,
            SweepColor::Red,
        )
        .unwrap();

        for k in 0..=7 {
            assert!(
                (phi.at(0, 0, k, 0) - phi_star.at(0, 0, k, 0)).abs() < 1e-12,
                "k = {}: {} vs {}",
                k,
                phi.at(0, 0, k, 0),
                phi_star.at(0, 0, k, 0)
            );
        }
    }

    #[test]
    fn test_fixed_point_left_unchanged() {
        let bounds = IndexBox::cube(0, 5);
        let grown = bounds.grow(1);
        let phi_star = Field::from_fn(grown, 1, |i, j, k, _| {
            1.0 + 0.25 * i as f64 + 0.125 * j as f64 - 0.0625 * k as f64
        });
        let acoef = Field::from_fn(bounds, 1, |i, j, k, _| 1.0 + 0.05 * (i + j + k) as f64);
        let b = uniform_face_coeffs(&bounds, 1, 1.0);
        let bcoef = FaceCoeffs::new(b[0].view(), b[1].view(), b[2].view());
        let storage = BoundaryStorage::new(&bounds, 0, 0.0, 1);

        let (alpha, beta) = (1.0, 1.0);
        let mut rhs = Field::zeros(bounds, 1);
        apply_operator(
            &bounds,
            &mut rhs.view_mut(),
            &phi_star.view(),
            &acoef.view(),
            &bcoef,
            DXINV,
            alpha,
            beta,
        );

        let mut phi = phi_star.clone();
        for color in [SweepColor::Red, SweepColor::Black] {
            smooth_line_z(
                &bounds,
                &mut phi.view_mut(),
                &rhs.view(),
                alpha,
                &acoef.view(),
                DH,
                &bcoef,
                &storage.faces(),
                &bounds,
                color,
            )
            .unwrap();
        }

        for (p, p0) in phi.data().iter().zip(phi_star.data()) {
            assert!((p - p0).abs() < 1e-11, "fixed point drifted: {} vs {}", p, p0);
        }
    }

    #[test]
    fn test_only_matching_columns_rewritten() {
        let bounds = IndexBox::cube(0, 3);
        let acoef = Field::filled(bounds, 1, 1.0);
        let b = uniform_face_coeffs(&bounds, 1, 1.0);
        let bcoef = FaceCoeffs::new(b[0].view(), b[1].view(), b[2].view());
        let storage = BoundaryStorage::new(&bounds, 0, 0.0, 1);
        let rhs = Field::filled(bounds, 1, 1.0);

        let sentinel = -42.0;
        let mut phi = Field::filled(bounds.grow(1), 1, sentinel);

        smooth_line_z(
            &bounds,
            &mut phi.view_mut(),
            &rhs.view(),
            1.0,
            &acoef.view(),
            DH,
            &bcoef,
            &storage.faces(),
            &bounds,
            SweepColor::Black,
        )
        .unwrap();

        for j in 0..=3 {
            for i in 0..=3 {
                for k in 0..=3 {
                    let touched = phi.at(i, j, k, 0) != sentinel;
                    assert_eq!(
                        touched,
                        SweepColor::Black.matches(i + j),
                        "column ({}, {})",
                        i,
                        j
                    );
                }
            }
        }
    }
}
