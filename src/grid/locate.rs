//! Cell location along a single axis.

use num_traits::Float;

use super::axis::AxisView;
use crate::options::Extrapolation;

/// Where an observation coordinate falls relative to the span of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Inside,
    Below,
    Above,
}

/// The grid interval containing (or nearest to) one coordinate of an observation point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<T> {
    /// Lower index of the interval, always in `0..=len-2`.
    pub index: usize,
    /// Fractional offset within the interval, unclamped.
    /// In `[0, 1]` inside the axis, negative below it, above 1 past the end.
    pub t: T,
    pub side: Side,
    /// Signed distance past the nearest end of the axis; zero inside.
    pub overshoot: T,
}

impl<T: Float> Cell<T> {
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.side == Side::Inside
    }

    /// Fractional offset to interpolate with under an extrapolation policy.
    #[inline]
    pub fn fraction(&self, extrapolation: Extrapolation) -> T {
        match extrapolation {
            Extrapolation::Clamp => self.t.max(T::zero()).min(T::one()),
            Extrapolation::Linear => self.t,
        }
    }
}

/// Find the interval of `axis` bracketing `x`: the largest `i` with `axis[i] <= x < axis[i+1]`.
///
/// A coordinate exactly on a grid point resolves to the interval starting there (`t == 0`),
/// except the last grid point, which resolves to the last interval with `t == 1`.
/// Outside the axis, the index saturates to the first or last interval and the
/// returned `t` continues linearly past `[0, 1]`.
///
/// Bisection search, O(log n) in the axis length.
#[inline]
pub fn locate<T: Float>(axis: AxisView<'_, T>, x: T) -> Cell<T> {
    let grid = axis.as_slice();
    let n = grid.len();

    // `partition_point` returns 0 if outside-low, and n if at or past the last point
    let iloc = grid.partition_point(|v| *v <= x) as isize - 1;
    let index = iloc.max(0).min(n as isize - 2) as usize;

    let x0 = grid[index];
    let x1 = grid[index + 1];
    let t = (x - x0) / (x1 - x0);

    let (side, overshoot) = if x < grid[0] {
        (Side::Below, x - grid[0])
    } else if x > grid[n - 1] {
        (Side::Above, x - grid[n - 1])
    } else {
        (Side::Inside, T::zero())
    };

    Cell {
        index,
        t,
        side,
        overshoot,
    }
}
