//! Axis and sweep-color selectors.

use std::fmt;

/// Coordinate axis selector for direction-parameterized kernels.
///
/// Flux and stencil routines take an `Axis` plus its unit offset instead of
/// existing in three near-identical per-axis copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First axis (index 0, `i`)
    X,
    /// Second axis (index 1, `j`)
    Y,
    /// Third axis (index 2, `k`)
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in `[i, j, k]`-style arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit index offset along this axis.
    #[inline]
    pub const fn unit(self) -> [i32; 3] {
        match self {
            Axis::X => [1, 0, 0],
            Axis::Y => [0, 1, 0],
            Axis::Z => [0, 0, 1],
        }
    }

    /// The two axes spanning the plane perpendicular to this one.
    #[inline]
    pub const fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Parity color for red-black relaxation sweeps.
///
/// Cells are partitioned by index-sum parity so that same-color cells are
/// never stencil-adjacent: a full sweep of one color has no write-read
/// dependency on itself and may run at arbitrary granularity. A complete
/// relaxation step is one red sweep, a visibility point (ghost exchange
/// across boxes), then one black sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SweepColor {
    /// Updates cells with even `i + j + k`
    Red,
    /// Updates cells with odd `i + j + k`
    Black,
}

impl SweepColor {
    /// Integer offset added to the index sum in the parity test.
    #[inline]
    pub const fn offset(self) -> i32 {
        match self {
            SweepColor::Red => 0,
            SweepColor::Black => 1,
        }
    }

    /// Whether a cell with the given index sum belongs to this color.
    ///
    /// Works for negative index sums as well.
    #[inline]
    pub const fn matches(self, index_sum: i32) -> bool {
        (index_sum + self.offset()) & 1 == 0
    }

    /// The opposite color.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            SweepColor::Red => SweepColor::Black,
            SweepColor::Black => SweepColor::Red,
        }
    }
}
