//! Errors raised while validating grids, buffers, and observation batches.
//!
//! Every error is produced before any interpolation work begins; once a grid
//! and a batch have been validated, evaluation cannot fail.

/// Validation failure for an interpolation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InterpError {
    /// Input is not a recognized numeric array, or is not C-contiguous.
    #[error("invalid buffer: {reason}")]
    InvalidBuffer { reason: &'static str },

    /// Element size of a buffer does not match the numeric type being interpolated.
    #[error("invalid buffer: element size {found} does not match expected {expected}")]
    InvalidElementSize { expected: usize, found: usize },

    /// Counts or lengths that must agree do not.
    #[error("dimension mismatch in {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// An axis has fewer than 2 points or is not strictly increasing.
    #[error("degenerate axis {axis}: {reason}")]
    DegenerateAxis { axis: usize, reason: &'static str },

    /// Dimension count exceeds the fixed scratch capacity of the interpolator.
    #[error("{ndims} dimensions exceeds maximum ({max}); use the interpolator struct with a larger MAXDIMS")]
    TooManyDimensions { ndims: usize, max: usize },
}

impl InterpError {
    /// Whether this error belongs to the invalid-buffer class,
    /// covering both layout and element-size failures.
    pub fn is_invalid_buffer(&self) -> bool {
        matches!(
            self,
            InterpError::InvalidBuffer { .. } | InterpError::InvalidElementSize { .. }
        )
    }

    /// Shorthand used throughout validation.
    #[inline]
    pub(crate) fn mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        log::debug!("dimension mismatch in {what}: expected {expected}, found {found}");
        InterpError::DimensionMismatch {
            what,
            expected,
            found,
        }
    }
}

pub type Result<T> = core::result::Result<T, InterpError>;
