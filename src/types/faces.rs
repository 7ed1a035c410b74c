//! Per-face containers for box boundary data.
//!
//! Provides a strongly-typed structure for six-sided boundary
//! specifications, eliminating the need to remember array index conventions.

use super::Axis;

/// Boundary data with named fields for each face of a 3D box.
///
/// Eliminates index confusion like `[m0, m1, m2, m3, m4, m5]` by using
/// explicit field names, while still offering axis-based access for
/// direction-parameterized kernels.
///
/// # Example
///
/// ```
/// use mg_rs::types::{Axis, BoxFaces};
///
/// let faces = BoxFaces::uniform(0);
/// assert_eq!(*faces.lo(Axis::Z), 0);
///
/// let doubled = BoxFaces::new(1, 2, 3, 4, 5, 6).map(|v| v * 2);
/// assert_eq!(doubled.x_lo, 2);
/// assert_eq!(doubled.z_hi, 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxFaces<T> {
    /// Low face along x (x = x_min plane)
    pub x_lo: T,
    /// Low face along y
    pub y_lo: T,
    /// Low face along z
    pub z_lo: T,
    /// High face along x (x = x_max plane)
    pub x_hi: T,
    /// High face along y
    pub y_hi: T,
    /// High face along z
    pub z_hi: T,
}

impl<T> BoxFaces<T> {
    /// Create from explicit named values, low faces first.
    pub fn new(x_lo: T, y_lo: T, z_lo: T, x_hi: T, y_hi: T, z_hi: T) -> Self {
        Self {
            x_lo,
            y_lo,
            z_lo,
            x_hi,
            y_hi,
            z_hi,
        }
    }

    /// Create with the same value on all six faces.
    pub fn uniform(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x_lo: value.clone(),
            y_lo: value.clone(),
            z_lo: value.clone(),
            x_hi: value.clone(),
            y_hi: value.clone(),
            z_hi: value,
        }
    }

    /// The low face along `axis`.
    #[inline]
    pub fn lo(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x_lo,
            Axis::Y => &self.y_lo,
            Axis::Z => &self.z_lo,
        }
    }

    /// The high face along `axis`.
    #[inline]
    pub fn hi(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x_hi,
            Axis::Y => &self.y_hi,
            Axis::Z => &self.z_hi,
        }
    }

    /// Map a function over all faces.
    pub fn map<U, F>(self, mut f: F) -> BoxFaces<U>
    where
        F: FnMut(T) -> U,
    {
        BoxFaces {
            x_lo: f(self.x_lo),
            y_lo: f(self.y_lo),
            z_lo: f(self.z_lo),
            x_hi: f(self.x_hi),
            y_hi: f(self.y_hi),
            z_hi: f(self.z_hi),
        }
    }

    /// Iterate over faces: low x, y, z, then high x, y, z.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [
            &self.x_lo, &self.y_lo, &self.z_lo, &self.x_hi, &self.y_hi, &self.z_hi,
        ]
        .into_iter()
    }
}
