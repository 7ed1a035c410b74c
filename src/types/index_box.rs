//! Axis-aligned integer index boxes.

use std::fmt;

use super::Axis;

/// Inclusive axis-aligned range `[lo, hi]` of integer cell indices in 3D.
///
/// An `IndexBox` defines the iteration domain of one kernel call. It is
/// distinct from the *valid box*, the true physical/logical domain extent a
/// smoother uses to detect genuine boundary cells as opposed to halo padding.
///
/// # Example
///
/// ```
/// use mg_rs::types::{Axis, IndexBox};
///
/// let bx = IndexBox::new([0, 0, 0], [7, 3, 1]);
/// assert_eq!(bx.extent(Axis::X), 8);
/// assert_eq!(bx.num_points(), 8 * 4 * 2);
/// assert!(bx.contains(7, 0, 1));
/// assert!(!bx.contains(8, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexBox {
    lo: [i32; 3],
    hi: [i32; 3],
}

impl IndexBox {
    /// Create a box from inclusive lower and upper corners.
    ///
    /// # Panics
    ///
    /// Panics if `hi < lo` along any axis.
    pub fn new(lo: [i32; 3], hi: [i32; 3]) -> Self {
        for axis in Axis::ALL {
            let d = axis.index();
            assert!(
                hi[d] >= lo[d],
                "hi[{}] ({}) must be >= lo[{}] ({})",
                axis,
                hi[d],
                axis,
                lo[d]
            );
        }
        Self { lo, hi }
    }

    /// Create a cube `[lo, hi]^3`.
    pub fn cube(lo: i32, hi: i32) -> Self {
        Self::new([lo; 3], [hi; 3])
    }

    /// Inclusive lower corner.
    #[inline]
    pub const fn lo(&self) -> [i32; 3] {
        self.lo
    }

    /// Inclusive upper corner.
    #[inline]
    pub const fn hi(&self) -> [i32; 3] {
        self.hi
    }

    /// Number of cells along one axis.
    #[inline]
    pub fn extent(&self, axis: Axis) -> usize {
        let d = axis.index();
        (self.hi[d] - self.lo[d] + 1) as usize
    }

    /// Number of cells along each axis.
    #[inline]
    pub fn extents(&self) -> [usize; 3] {
        [
            self.extent(Axis::X),
            self.extent(Axis::Y),
            self.extent(Axis::Z),
        ]
    }

    /// Total number of cells.
    #[inline]
    pub fn num_points(&self) -> usize {
        let [nx, ny, nz] = self.extents();
        nx * ny * nz
    }

    /// Whether the cell `(i, j, k)` lies inside the box (inclusive).
    #[inline]
    pub fn contains(&self, i: i32, j: i32, k: i32) -> bool {
        let p = [i, j, k];
        (0..3).all(|d| p[d] >= self.lo[d] && p[d] <= self.hi[d])
    }

    /// Grow the box by `n` cells in every direction.
    ///
    /// A negative `n` shrinks the box; the result must stay non-empty.
    pub fn grow(&self, n: i32) -> Self {
        Self::new(
            [self.lo[0] - n, self.lo[1] - n, self.lo[2] - n],
            [self.hi[0] + n, self.hi[1] + n, self.hi[2] + n],
        )
    }

    /// The index range of the faces bounding this box's cells along `axis`.
    ///
    /// Face `i` sits on the low side of cell `i`, so the face range has one
    /// more entry than the cell range along that axis.
    pub fn faces(&self, axis: Axis) -> Self {
        let mut hi = self.hi;
        hi[axis.index()] += 1;
        Self::new(self.lo, hi)
    }
}

impl fmt::Display for IndexBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({},{},{})..({},{},{})]",
            self.lo[0], self.lo[1], self.lo[2], self.hi[0], self.hi[1], self.hi[2]
        )
    }
}
