//! Error types for the stencil kernels.

use thiserror::Error;

use crate::types::Axis;

/// Fatal configuration defects detected inside a kernel call.
///
/// Every variant signals a caller-side problem (a wrong stiff axis, a
/// malformed column, a singular tridiagonal system) that must be fixed
/// upstream. The call terminates immediately; nothing is retried. All other
/// kernels are total functions over well-formed inputs, and floating-point
/// exceptional values (NaN/Inf) propagate untrapped as ordinary results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The line solve was invoked without the stiff axis dominating.
    #[error(
        "line solve requires the stiff-axis coefficient to dominate: \
         dh_{stiff} = {dh_stiff} <= dh_{other} = {dh_other}"
    )]
    Anisotropy {
        /// Axis the line solve runs along
        stiff: Axis,
        /// In-plane axis whose coefficient is not dominated
        other: Axis,
        /// Stiff-axis diffusion scale
        dh_stiff: f64,
        /// In-plane diffusion scale
        dh_other: f64,
    },

    /// A stiff-axis column is longer than the supported maximum.
    #[error("stiff-axis column of length {len} exceeds the supported maximum of {max}")]
    ColumnTooLong {
        /// Actual column length
        len: usize,
        /// Supported maximum
        max: usize,
    },

    /// A zero pivot appeared during tridiagonal elimination.
    #[error("zero pivot at row {row} during tridiagonal elimination")]
    ZeroPivot {
        /// Row at which elimination broke down
        row: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anisotropy_display() {
        let err = ConfigError::Anisotropy {
            stiff: Axis::Z,
            other: Axis::X,
            dh_stiff: 1.0,
            dh_other: 4.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("dh_z"));
        assert!(msg.contains("dh_x"));
    }

    #[test]
    fn test_zero_pivot_display() {
        let err = ConfigError::ZeroPivot { row: 3 };
        assert!(err.to_string().contains("row 3"));
    }
}
