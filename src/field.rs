//! Grid-indexed array views and owned host storage.
//!
//! Every kernel in this crate operates on *views*: dense, Fortran-ordered
//! windows over caller-owned slices, addressed by `(i, j, k, component)`
//! with an arbitrary (possibly negative) lower corner. The layout is `i`
//! fastest, then `j`, then `k`, with the component index slowest.
//!
//! Views borrow their storage for the duration of one call; no kernel
//! allocates, retains, or frees grid memory. Because the kernels only see
//! `&[f64]` / `&mut [f64]`, any storage provider that can hand out slices
//! (the [`Field`] type here, a pinned allocation, an arena, a device-mapped
//! host buffer) plugs in without duplicating any stencil math.

use crate::types::IndexBox;

/// Immutable view of a real-valued field over a box.
///
/// # Example
///
/// ```
/// use mg_rs::field::FieldView;
/// use mg_rs::types::IndexBox;
///
/// let bx = IndexBox::new([-1, 0, 0], [1, 0, 0]);
/// let data = [10.0, 20.0, 30.0];
/// let view = FieldView::new(&data, &bx, 1);
/// assert_eq!(view.at(-1, 0, 0, 0), 10.0);
/// assert_eq!(view.at(1, 0, 0, 0), 30.0);
/// ```
#[derive(Clone, Copy)]
pub struct FieldView<'a> {
    data: &'a [f64],
    lo: [i32; 3],
    dim: [usize; 3],
    ncomp: usize,
}

impl<'a> FieldView<'a> {
    /// Create a view of `data` covering `bounds` with `ncomp` components.
    ///
    /// # Panics
    ///
    /// Panics if the slice length does not equal the box volume times the
    /// component count, or if `ncomp` is zero.
    pub fn new(data: &'a [f64], bounds: &IndexBox, ncomp: usize) -> Self {
        assert!(ncomp >= 1, "field must have at least one component");
        assert_eq!(
            data.len(),
            bounds.num_points() * ncomp,
            "slice length must equal box volume times component count"
        );
        Self {
            data,
            lo: bounds.lo(),
            dim: bounds.extents(),
            ncomp,
        }
    }

    #[inline(always)]
    fn offset(&self, i: i32, j: i32, k: i32, n: usize) -> usize {
        debug_assert!(
            i >= self.lo[0]
                && j >= self.lo[1]
                && k >= self.lo[2]
                && ((i - self.lo[0]) as usize) < self.dim[0]
                && ((j - self.lo[1]) as usize) < self.dim[1]
                && ((k - self.lo[2]) as usize) < self.dim[2]
                && n < self.ncomp,
            "index ({}, {}, {}, {}) outside view with lo {:?}, dim {:?}, ncomp {}",
            i,
            j,
            k,
            n,
            self.lo,
            self.dim,
            self.ncomp
        );
        let di = (i - self.lo[0]) as usize;
        let dj = (j - self.lo[1]) as usize;
        let dk = (k - self.lo[2]) as usize;
        ((n * self.dim[2] + dk) * self.dim[1] + dj) * self.dim[0] + di
    }

    /// Value at cell `(i, j, k)`, component `n`.
    #[inline(always)]
    pub fn at(&self, i: i32, j: i32, k: i32, n: usize) -> f64 {
        self.data[self.offset(i, j, k, n)]
    }

    /// Number of components.
    #[inline]
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Lower corner of the covered box.
    #[inline]
    pub fn lo(&self) -> [i32; 3] {
        self.lo
    }

    /// Cell counts along each axis.
    #[inline]
    pub fn extents(&self) -> [usize; 3] {
        self.dim
    }
}

/// Mutable view of a real-valued field over a box.
pub struct FieldViewMut<'a> {
    data: &'a mut [f64],
    lo: [i32; 3],
    dim: [usize; 3],
    ncomp: usize,
}

impl<'a> FieldViewMut<'a> {
    /// Create a mutable view of `data` covering `bounds` with `ncomp`
    /// components.
    ///
    /// # Panics
    ///
    /// Same conditions as [`FieldView::new`].
    pub fn new(data: &'a mut [f64], bounds: &IndexBox, ncomp: usize) -> Self {
        assert!(ncomp >= 1, "field must have at least one component");
        assert_eq!(
            data.len(),
            bounds.num_points() * ncomp,
            "slice length must equal box volume times component count"
        );
        Self {
            data,
            lo: bounds.lo(),
            dim: bounds.extents(),
            ncomp,
        }
    }

    /// Reborrow as an immutable view.
    #[inline]
    pub fn as_view(&self) -> FieldView<'_> {
        FieldView {
            data: self.data,
            lo: self.lo,
            dim: self.dim,
            ncomp: self.ncomp,
        }
    }

    /// Value at cell `(i, j, k)`, component `n`.
    #[inline(always)]
    pub fn at(&self, i: i32, j: i32, k: i32, n: usize) -> f64 {
        self.as_view().at(i, j, k, n)
    }

    /// Overwrite the value at cell `(i, j, k)`, component `n`.
    #[inline(always)]
    pub fn set(&mut self, i: i32, j: i32, k: i32, n: usize, value: f64) {
        let idx = self.as_view().offset(i, j, k, n);
        self.data[idx] = value;
    }

    /// Number of components.
    #[inline]
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Lower corner of the covered box.
    #[inline]
    pub fn lo(&self) -> [i32; 3] {
        self.lo
    }

    /// Cell counts along each axis.
    #[inline]
    pub fn extents(&self) -> [usize; 3] {
        self.dim
    }

    #[cfg(feature = "parallel")]
    #[inline]
    pub(crate) fn raw_mut(&mut self) -> &mut [f64] {
        self.data
    }
}

/// Immutable view of an integer boundary mask over a box.
///
/// A mask value > 0 at a cell just outside the valid box marks a face where
/// the neighbor across the boundary must be replaced by a boundary-condition
/// substitution; 0 marks a genuine interior neighbor (filled halo).
#[derive(Clone, Copy)]
pub struct MaskView<'a> {
    data: &'a [i32],
    lo: [i32; 3],
    dim: [usize; 3],
}

impl<'a> MaskView<'a> {
    /// Create a view of `data` covering `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if the slice length does not equal the box volume.
    pub fn new(data: &'a [i32], bounds: &IndexBox) -> Self {
        assert_eq!(
            data.len(),
            bounds.num_points(),
            "slice length must equal box volume"
        );
        Self {
            data,
            lo: bounds.lo(),
            dim: bounds.extents(),
        }
    }

    /// Mask value at cell `(i, j, k)`.
    #[inline(always)]
    pub fn at(&self, i: i32, j: i32, k: i32) -> i32 {
        debug_assert!(
            i >= self.lo[0]
                && j >= self.lo[1]
                && k >= self.lo[2]
                && ((i - self.lo[0]) as usize) < self.dim[0]
                && ((j - self.lo[1]) as usize) < self.dim[1]
                && ((k - self.lo[2]) as usize) < self.dim[2],
            "index ({}, {}, {}) outside mask with lo {:?}, dim {:?}",
            i,
            j,
            k,
            self.lo,
            self.dim
        );
        let di = (i - self.lo[0]) as usize;
        let dj = (j - self.lo[1]) as usize;
        let dk = (k - self.lo[2]) as usize;
        self.data[(dk * self.dim[1] + dj) * self.dim[0] + di]
    }
}

/// Owned host-memory field: the `Vec`-backed storage provider.
///
/// Drivers and tests use `Field` to hold coefficient and solution data and
/// hand out views to the kernels.
#[derive(Clone, Debug)]
pub struct Field {
    data: Vec<f64>,
    bounds: IndexBox,
    ncomp: usize,
}

impl Field {
    /// Allocate a zero-filled field over `bounds`.
    pub fn zeros(bounds: IndexBox, ncomp: usize) -> Self {
        Self::filled(bounds, ncomp, 0.0)
    }

    /// Allocate a field over `bounds` filled with `value`.
    pub fn filled(bounds: IndexBox, ncomp: usize, value: f64) -> Self {
        assert!(ncomp >= 1, "field must have at least one component");
        Self {
            data: vec![value; bounds.num_points() * ncomp],
            bounds,
            ncomp,
        }
    }

    /// Allocate a field and initialize every entry from `f(i, j, k, n)`.
    pub fn from_fn<F>(bounds: IndexBox, ncomp: usize, mut f: F) -> Self
    where
        F: FnMut(i32, i32, i32, usize) -> f64,
    {
        let mut field = Self::zeros(bounds, ncomp);
        let lo = bounds.lo();
        let hi = bounds.hi();
        for n in 0..ncomp {
            for k in lo[2]..=hi[2] {
                for j in lo[1]..=hi[1] {
                    for i in lo[0]..=hi[0] {
                        field.set(i, j, k, n, f(i, j, k, n));
                    }
                }
            }
        }
        field
    }

    /// The box this field covers.
    #[inline]
    pub fn bounds(&self) -> IndexBox {
        self.bounds
    }

    /// Number of components.
    #[inline]
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Borrow as an immutable view.
    #[inline]
    pub fn view(&self) -> FieldView<'_> {
        FieldView::new(&self.data, &self.bounds, self.ncomp)
    }

    /// Borrow as a mutable view.
    #[inline]
    pub fn view_mut(&mut self) -> FieldViewMut<'_> {
        FieldViewMut::new(&mut self.data, &self.bounds, self.ncomp)
    }

    /// Value at cell `(i, j, k)`, component `n`.
    #[inline]
    pub fn at(&self, i: i32, j: i32, k: i32, n: usize) -> f64 {
        self.view().at(i, j, k, n)
    }

    /// Overwrite the value at cell `(i, j, k)`, component `n`.
    #[inline]
    pub fn set(&mut self, i: i32, j: i32, k: i32, n: usize, value: f64) {
        self.view_mut().set(i, j, k, n, value);
    }

    /// Raw data in layout order.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

/// Owned host-memory boundary mask.
#[derive(Clone, Debug)]
pub struct Mask {
    data: Vec<i32>,
    bounds: IndexBox,
}

impl Mask {
    /// Allocate a mask over `bounds` filled with `value`.
    pub fn filled(bounds: IndexBox, value: i32) -> Self {
        Self {
            data: vec![value; bounds.num_points()],
            bounds,
        }
    }

    /// The box this mask covers.
    #[inline]
    pub fn bounds(&self) -> IndexBox {
        self.bounds
    }

    /// Overwrite the mask value at cell `(i, j, k)`.
    pub fn set(&mut self, i: i32, j: i32, k: i32, value: i32) {
        let lo = self.bounds.lo();
        let [nx, ny, _] = self.bounds.extents();
        let di = (i - lo[0]) as usize;
        let dj = (j - lo[1]) as usize;
        let dk = (k - lo[2]) as usize;
        self.data[(dk * ny + dj) * nx + di] = value;
    }

    /// Borrow as a view.
    #[inline]
    pub fn view(&self) -> MaskView<'_> {
        MaskView::new(&self.data, &self.bounds)
    }
}
