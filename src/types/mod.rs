//! Strongly-typed domain types for safer APIs.
//!
//! This module provides the small vocabulary the stencil kernels share:
//! integer index boxes, axis and sweep-color selectors, and a named per-face
//! container for boundary data.
//!
//! # Design Philosophy
//!
//! - **Named fields over positional**: `BoxFaces { x_lo, .., z_hi }` instead
//!   of a six-element array with an index convention to memorize
//! - **One axis-parameterized routine** instead of triplicated per-axis code:
//!   `Axis` carries the unit offset each kernel needs
//! - **Explicit parity**: `SweepColor` makes the red-black split part of the
//!   call signature rather than a bare integer
//!
//! # Example
//!
//! ```
//! use mg_rs::types::{Axis, IndexBox, SweepColor};
//!
//! let bx = IndexBox::new([0, 0, 0], [3, 3, 3]);
//! assert_eq!(bx.num_points(), 64);
//! assert_eq!(bx.extent(Axis::X), 4);
//!
//! // Faces bounding the cells along x: one more face than cells
//! assert_eq!(bx.faces(Axis::X).extent(Axis::X), 5);
//!
//! // Red updates even index sums, black odd
//! assert!(SweepColor::Red.matches(0));
//! assert!(SweepColor::Black.matches(3));
//! ```

mod axis;
mod faces;
mod index_box;

pub use axis::{Axis, SweepColor};
pub use faces::BoxFaces;
pub use index_box::IndexBox;
