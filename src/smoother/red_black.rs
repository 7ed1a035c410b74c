//! Red-black Gauss-Seidel relaxation with boundary substitution.
//!
//! One call sweeps a single color. Same-color cells are never
//! stencil-adjacent, so the sweep has no dependency on its own writes and
//! may be split across threads or vector lanes at any granularity. A full
//! relaxation step is: sweep one color, make the writes visible (including
//! any cross-box ghost exchange), then sweep the other color. That
//! ordering is what makes the iteration a valid Gauss-Seidel step.

use crate::field::{FieldView, FieldViewMut};
use crate::operators::{local_diagonal, FaceCoeffs};
use crate::types::{Axis, IndexBox, SweepColor};

use super::BoundaryFaces;

/// Default over-relaxation factor for the colored sweeps.
pub const DEFAULT_OMEGA: f64 = 1.15;

/// The relaxed value of one cell, computed from the current state of `phi`.
///
/// Boundary substitution enters through the adjusted diagonal `g_m_d`, not
/// through the neighbor sum: neighbor values are read directly, and faces
/// whose mask marks a boundary condition have their fold coefficient
/// subtracted from the diagonal instead.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn relaxed_value(
    phi: &FieldView<'_>,
    rhs: &FieldView<'_>,
    alpha: f64,
    acoef: &FieldView<'_>,
    dh: [f64; 3],
    bcoef: &FaceCoeffs<'_>,
    boundary: &BoundaryFaces<'_>,
    valid: &IndexBox,
    omega: f64,
    i: i32,
    j: i32,
    k: i32,
    n: usize,
) -> f64 {
    let cell = [i, j, k];
    let cf_xlo = boundary.correction_lo(Axis::X, cell, n, valid);
    let cf_ylo = boundary.correction_lo(Axis::Y, cell, n, valid);
    let cf_zlo = boundary.correction_lo(Axis::Z, cell, n, valid);
    let cf_xhi = boundary.correction_hi(Axis::X, cell, n, valid);
    let cf_yhi = boundary.correction_hi(Axis::Y, cell, n, valid);
    let cf_zhi = boundary.correction_hi(Axis::Z, cell, n, valid);

    let gamma = local_diagonal(acoef, bcoef, alpha, dh, i, j, k, n);

    let g_m_d = gamma
        - (dh[0] * (bcoef.x.at(i, j, k, n) * cf_xlo + bcoef.x.at(i + 1, j, k, n) * cf_xhi)
            + dh[1] * (bcoef.y.at(i, j, k, n) * cf_ylo + bcoef.y.at(i, j + 1, k, n) * cf_yhi)
            + dh[2] * (bcoef.z.at(i, j, k, n) * cf_zlo + bcoef.z.at(i, j, k + 1, n) * cf_zhi));

    let rho = dh[0]
        * (bcoef.x.at(i, j, k, n) * phi.at(i - 1, j, k, n)
            + bcoef.x.at(i + 1, j, k, n) * phi.at(i + 1, j, k, n))
        + dh[1]
            * (bcoef.y.at(i, j, k, n) * phi.at(i, j - 1, k, n)
                + bcoef.y.at(i, j + 1, k, n) * phi.at(i, j + 1, k, n))
        + dh[2]
            * (bcoef.z.at(i, j, k, n) * phi.at(i, j, k - 1, n)
                + bcoef.z.at(i, j, k + 1, n) * phi.at(i, j, k + 1, n));

    let res = rhs.at(i, j, k, n) - (gamma * phi.at(i, j, k, n) - rho);
    phi.at(i, j, k, n) + omega / g_m_d * res
}

/// One colored Gauss-Seidel sweep with over-relaxation over `bounds`.
///
/// Updates every cell whose index-sum parity matches `color`:
///
/// ```text
/// res = rhs - (gamma*phi - rho)
/// phi += omega / g_m_d * res
/// ```
///
/// where `gamma` is the operator diagonal, `rho` the face-weighted neighbor
/// sum, and `g_m_d` the diagonal adjusted by the mask-gated boundary fold
/// coefficients. `valid` is the true domain extent used to recognize
/// genuine boundary cells; `bounds` may be any conforming sub-box of it.
///
/// # Preconditions
///
/// `phi` is defined on `bounds` grown by one cell in every direction, halo
/// filled by the caller before the call.
#[allow(clippy::too_many_arguments)]
pub fn smooth_red_black(
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
    omega: f64,
) {
    let lo = bounds.lo();
    let hi = bounds.hi();

    for n in 0..phi.ncomp() {
        for k in lo[2]..=hi[2] {
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    if !color.matches(i + j + k) {
                        continue;
                    }
                    // Updated cells are the current color; every value read
                    // below belongs to the other color, so in-place reads
                    // see the pre-sweep state.
                    let value = relaxed_value(
                        &phi.as_view(),
                        rhs,
                        alpha,
                        acoef,
                        dh,
                        bcoef,
                        boundary,
                        valid,
                        omega,
                        i,
                        j,
                        k,
                        n,
                    );
                    phi.set(i, j, k, n, value);
                }
            }
        }
    }
}

/// Parallel version of [`smooth_red_black`] using Rayon.
///
/// Evaluates all same-color updates from the pre-sweep state across
/// `(component, k)`-planes in parallel, then writes them back. Identical to
/// the serial sweep because same-color cells never read each other.
#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
pub fn smooth_red_black_parallel(
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
    omega: f64,
) {
    use rayon::prelude::*;

    let lo = bounds.lo();
    let hi = bounds.hi();
    let nz = bounds.extents()[2];
    let ncomp = phi.ncomp();

    let snapshot = phi.as_view();
    let planes: Vec<Vec<(i32, i32, i32, usize, f64)>> = (0..ncomp * nz)
        .into_par_iter()
        .map(|chunk| {
            let n = chunk / nz;
            let k = lo[2] + (chunk % nz) as i32;
            let mut updates = Vec::new();
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    if !color.matches(i + j + k) {
                        continue;
                    }
                    let value = relaxed_value(
                        &snapshot, rhs, alpha, acoef, dh, bcoef, boundary, valid, omega, i, j, k, n,
                    );
                    updates.push((i, j, k, n, value));
                }
            }
            updates
        })
        .collect();

    for plane in planes {
        for (i, j, k, n, value) in plane {
            phi.set(i, j, k, n, value);
        }
    }
}
