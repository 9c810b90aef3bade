//! Read-only view over one axis's coordinates.

use num_traits::Float;

use super::locate::{locate, Cell};
use crate::error::{InterpError, Result};

/// Borrowed coordinates along one axis of a rectilinear grid.
///
/// Construction checks that there are at least 2 coordinates,
/// that all of them are finite, and that they are strictly increasing.
/// After that the view is trusted for the rest of the call.
#[derive(Debug, Clone, Copy)]
pub struct AxisView<'a, T> {
    coords: &'a [T],
}

impl<'a, T: Float> AxisView<'a, T> {
    /// Validate and wrap the coordinates of axis number `axis`.
    ///
    /// The axis number is only used for error reporting.
    ///
    /// # Errors
    /// * `DegenerateAxis` if there are fewer than 2 coordinates,
    ///   any coordinate is non-finite, or the coordinates are not strictly increasing
    pub fn new(coords: &'a [T], axis: usize) -> Result<Self> {
        if coords.len() < 2 {
            log::debug!("axis {axis} has {} entries", coords.len());
            return Err(InterpError::DegenerateAxis {
                axis,
                reason: "axis must have at least 2 entries",
            });
        }
        if !coords.iter().all(|x| x.is_finite()) {
            log::debug!("axis {axis} has non-finite entries");
            return Err(InterpError::DegenerateAxis {
                axis,
                reason: "axis entries must be finite",
            });
        }
        // Equal neighbors would make a zero-width cell
        if let Some(i) = coords.windows(2).position(|w| w[1] <= w[0]) {
            log::debug!("axis {axis} is not strictly increasing at index {i}");
            return Err(InterpError::DegenerateAxis {
                axis,
                reason: "axis must be strictly increasing",
            });
        }

        Ok(Self { coords })
    }

    /// Placeholder for unused slots in fixed-capacity storage.
    #[inline]
    pub(crate) fn unset() -> Self {
        Self { coords: &[] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always false for a validated axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn first(&self) -> T {
        self.coords[0]
    }

    #[inline]
    pub fn last(&self) -> T {
        self.coords[self.coords.len() - 1]
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        self.coords.get(i).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.coords
    }

    /// Find the cell bracketing `x`. See [`locate`].
    #[inline]
    pub fn locate(&self, x: T) -> Cell<T> {
        locate(*self, x)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_axis() {
        let x = [-1.0_f64, 0.0, 0.5, 10.0];
        let axis = AxisView::new(&x, 0).unwrap();
        assert_eq!(axis.len(), 4);
        assert_eq!(axis.first(), -1.0);
        assert_eq!(axis.last(), 10.0);
        assert_eq!(axis.get(2), Some(0.5));
        assert_eq!(axis.get(4), None);
        assert!(!axis.is_empty());
    }

    #[test]
    fn test_too_short() {
        let x = [1.0_f64];
        assert_eq!(
            AxisView::new(&x, 3).unwrap_err(),
            InterpError::DegenerateAxis {
                axis: 3,
                reason: "axis must have at least 2 entries"
            }
        );
        let empty: [f64; 0] = [];
        assert!(AxisView::new(&empty, 0).is_err());
    }

    #[test]
    fn test_not_monotonic() {
        // Decreasing
        let x = [2.0_f64, 1.0, 0.0];
        assert!(matches!(
            AxisView::new(&x, 1),
            Err(InterpError::DegenerateAxis { axis: 1, .. })
        ));

        // Repeated entry deep inside the axis, past the first pair
        let x = [0.0_f64, 1.0, 2.0, 2.0, 3.0];
        assert!(matches!(
            AxisView::new(&x, 0),
            Err(InterpError::DegenerateAxis { axis: 0, .. })
        ));
    }

    #[test]
    fn test_non_finite() {
        let x = [0.0_f64, f64::NAN, 2.0];
        assert!(AxisView::new(&x, 0).is_err());
        let x = [0.0_f64, 1.0, f64::INFINITY];
        assert!(AxisView::new(&x, 0).is_err());
    }
}
