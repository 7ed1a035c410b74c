//! Application of the discretized elliptic operator and its diagonal.
//!
//! The continuous operator `alpha*A(x)*u - beta*div(B(x)*grad(u))` becomes
//! the standard second-order 7-point finite-volume stencil, with per-axis
//! scales `dh_d = beta * dxinv_d^2`. The same diagonal expression backs
//! `normalize_by_diagonal` and both smoothers, so the three always agree
//! for identical coefficient inputs.

use crate::field::{FieldView, FieldViewMut};
use crate::types::IndexBox;

use super::FaceCoeffs;

/// Local diagonal entry of the discretized operator at one cell.
///
/// `gamma = alpha*A + dh_x*(bX_lo + bX_hi) + dh_y*(..) + dh_z*(..)`
#[inline(always)]
pub(crate) fn local_diagonal(
    acoef: &FieldView<'_>,
    bcoef: &FaceCoeffs<'_>,
    alpha: f64,
    dh: [f64; 3],
    i: i32,
    j: i32,
    k: i32,
    n: usize,
) -> f64 {
    alpha * acoef.at(i, j, k, 0)
        + dh[0] * (bcoef.x.at(i, j, k, n) + bcoef.x.at(i + 1, j, k, n))
        + dh[1] * (bcoef.y.at(i, j, k, n) + bcoef.y.at(i, j + 1, k, n))
        + dh[2] * (bcoef.z.at(i, j, k, n) + bcoef.z.at(i, j, k + 1, n))
}

/// Apply the operator: `y = A_h x` over every cell of `bounds`.
///
/// For each component `n` and cell `(i, j, k)`:
///
/// ```text
/// y = alpha*A*x - dh_x*(bX_hi*(x_hi - x) - bX_lo*(x - x_lo)) - [y, z terms]
/// ```
///
/// `y` is fully overwritten; nothing is accumulated. The operator is linear
/// and has no boundary special-casing; boundary effects enter only through
/// how the caller has populated the halo of `x`.
///
/// # Preconditions
///
/// - `x` is defined on `bounds` grown by one cell in every direction, with
///   the halo filled by the caller.
/// - `acoef` covers `bounds`; each coefficient field covers the matching
///   face box.
#[allow(clippy::too_many_arguments)]
pub fn apply_operator(
    bounds: &IndexBox,
    y: &mut FieldViewMut<'_>,
    x: &FieldView<'_>,
    acoef: &FieldView<'_>,
    bcoef: &FaceCoeffs<'_>,
    dxinv: [f64; 3],
    alpha: f64,
    beta: f64,
) {
    debug_assert_eq!(y.ncomp(), x.ncomp());

    let dhx = beta * dxinv[0] * dxinv[0];
    let dhy = beta * dxinv[1] * dxinv[1];
    let dhz = beta * dxinv[2] * dxinv[2];

    let lo = bounds.lo();
    let hi = bounds.hi();

    for n in 0..y.ncomp() {
        for k in lo[2]..=hi[2] {
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    let value = stencil_value(x, acoef, bcoef, alpha, [dhx, dhy, dhz], i, j, k, n);
                    y.set(i, j, k, n, value);
                }
            }
        }
    }
}

#[inline(always)]
fn stencil_value(
    x: &FieldView<'_>,
    acoef: &FieldView<'_>,
    bcoef: &FaceCoeffs<'_>,
    alpha: f64,
    dh: [f64; 3],
    i: i32,
    j: i32,
    k: i32,
    n: usize,
) -> f64 {
    alpha * acoef.at(i, j, k, 0) * x.at(i, j, k, n)
        - dh[0]
            * (bcoef.x.at(i + 1, j, k, n) * (x.at(i + 1, j, k, n) - x.at(i, j, k, n))
                - bcoef.x.at(i, j, k, n) * (x.at(i, j, k, n) - x.at(i - 1, j, k, n)))
        - dh[1]
            * (bcoef.y.at(i, j + 1, k, n) * (x.at(i, j + 1, k, n) - x.at(i, j, k, n))
                - bcoef.y.at(i, j, k, n) * (x.at(i, j, k, n) - x.at(i, j - 1, k, n)))
        - dh[2]
            * (bcoef.z.at(i, j, k + 1, n) * (x.at(i, j, k + 1, n) - x.at(i, j, k, n))
                - bcoef.z.at(i, j, k, n) * (x.at(i, j, k, n) - x.at(i, j, k - 1, n)))
}

/// Parallel version of [`apply_operator`] using Rayon.
///
/// Computes the same result but distributes `(component, k)`-planes of the
/// output across threads. `y` must cover exactly `bounds` so that planes map
/// onto contiguous output chunks.
#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
pub fn apply_operator_parallel(
    bounds: &IndexBox,
    y: &mut FieldViewMut<'_>,
    x: &FieldView<'_>,
    acoef: &FieldView<'_>,
    bcoef: &FaceCoeffs<'_>,
    dxinv: [f64; 3],
    alpha: f64,
    beta: f64,
) {
    use rayon::prelude::*;

    assert_eq!(y.lo(), bounds.lo(), "output must cover exactly the box");
    assert_eq!(y.extents(), bounds.extents(), "output must cover exactly the box");
    debug_assert_eq!(y.ncomp(), x.ncomp());

    let dh = [
        beta * dxinv[0] * dxinv[0],
        beta * dxinv[1] * dxinv[1],
        beta * dxinv[2] * dxinv[2],
    ];

    let lo = bounds.lo();
    let hi = bounds.hi();
    let [nx, _ny, nz] = bounds.extents();
    let plane = nx * bounds.extents()[1];

    y.raw_mut()
        .par_chunks_mut(plane)
        .enumerate()
        .for_each(|(chunk, out)| {
            let n = chunk / nz;
            let k = lo[2] + (chunk % nz) as i32;
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    let di = (i - lo[0]) as usize;
                    let dj = (j - lo[1]) as usize;
                    out[dj * nx + di] = stencil_value(x, acoef, bcoef, alpha, dh, i, j, k, n);
                }
            }
        });
}

/// Divide `x` in place by the operator's local diagonal.
///
/// For each component `n` and cell `(i, j, k)`:
/// `x /= alpha*A + dh_x*(bX_lo + bX_hi) + dh_y*(..) + dh_z*(..)`.
///
/// # Preconditions
///
/// The diagonal must be nonzero at every cell of `bounds`. No check is
/// performed; a singular diagonal is a caller-side defect and yields
/// Inf/NaN that propagate as ordinary floating-point results.
#[allow(clippy::too_many_arguments)]
pub fn normalize_by_diagonal(
    bounds: &IndexBox,
    x: &mut FieldViewMut<'_>,
    acoef: &FieldView<'_>,
    bcoef: &FaceCoeffs<'_>,
    dxinv: [f64; 3],
    alpha: f64,
    beta: f64,
) {
    let dh = [
        beta * dxinv[0] * dxinv[0],
        beta * dxinv[1] * dxinv[1],
        beta * dxinv[2] * dxinv[2],
    ];

    let lo = bounds.lo();
    let hi = bounds.hi();

    for n in 0..x.ncomp() {
        for k in lo[2]..=hi[2] {
            for j in lo[1]..=hi[1] {
                for i in lo[0]..=hi[0] {
                    let gamma = local_diagonal(acoef, bcoef, alpha, dh, i, j, k, n);
                    let value = x.at(i, j, k, n) / gamma;
                    x.set(i, j, k, n, value);
                }
            }
        }
    }
}
