//! Rectilinear grids: validated views over borrowed axis coordinates and grid values.

pub mod axis;
pub mod locate;
pub mod tensor;

pub use axis::AxisView;
pub use locate::{locate, Cell, Side};
pub use tensor::GridTensorView;

use num_traits::Float;

use crate::error::{InterpError, Result};
use crate::options::Extrapolation;

/// A rectilinear grid of up to `MAXDIMS` dimensions, borrowing its
/// coordinates and values from the caller.
///
/// Assumes C-style ordering of vals (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a, T, const MAXDIMS: usize> {
    /// x, y, ... coordinate grids, only the first `ndims` are set
    axes: [AxisView<'a, T>; MAXDIMS],

    ndims: usize,

    /// Values at each point, size prod(dims)
    values: GridTensorView<'a, T, MAXDIMS>,
}

impl<'a, T: Float, const MAXDIMS: usize> Grid<'a, T, MAXDIMS> {
    /// Validate the axes and values of a grid, using O(sum of axis lengths) calculations.
    ///
    /// # Errors
    /// * `DimensionMismatch` if there are no axes or the number of values is not the product of axis lengths
    /// * `TooManyDimensions` if there are more than `MAXDIMS` axes
    /// * `DegenerateAxis` if any axis has fewer than 2 entries or is not strictly increasing
    pub fn new(grids: &[&'a [T]], vals: &'a [T]) -> Result<Self> {
        let ndims = grids.len();
        if ndims > MAXDIMS {
            log::debug!("grid has {ndims} axes, capacity is {MAXDIMS}");
            return Err(InterpError::TooManyDimensions {
                ndims,
                max: MAXDIMS,
            });
        }

        let mut axes = [AxisView::unset(); MAXDIMS];
        let mut dims = [0_usize; MAXDIMS];
        for (i, &g) in grids.iter().enumerate() {
            axes[i] = AxisView::new(g, i)?;
            dims[i] = g.len();
        }
        let values = GridTensorView::new(&dims[..ndims], vals)?;

        Ok(Self {
            axes,
            ndims,
            values,
        })
    }

    #[inline]
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    #[inline]
    pub fn axes(&self) -> &[AxisView<'a, T>] {
        &self.axes[..self.ndims]
    }

    #[inline]
    pub fn axis(&self, i: usize) -> Option<AxisView<'a, T>> {
        self.axes().get(i).copied()
    }

    #[inline]
    pub fn values(&self) -> &GridTensorView<'a, T, MAXDIMS> {
        &self.values
    }

    /// Locate the cell containing an observation point, writing the lower-corner
    /// index and fractional offset along each dimension.
    ///
    /// `coord(j)` supplies the observation coordinate on dimension `j`, and both
    /// output slices must have length `ndims`.
    #[inline]
    pub fn locate_point(
        &self,
        coord: impl Fn(usize) -> T,
        extrapolation: Extrapolation,
        origin: &mut [usize],
        t: &mut [T],
    ) {
        for j in 0..self.ndims {
            let cell = self.axes[j].locate(coord(j));
            origin[j] = cell.index;
            t[j] = cell.fraction(extrapolation);
        }
    }
}

/// Check whether a list of observation points are inside the grid within some absolute tolerance.
///
/// Output slice entry `i` is set to `false` if no points on that dimension are out of bounds,
/// and set to `true` if there is a bounds violation on that axis.
///
/// # Errors
/// * `DimensionMismatch` if the dimensionality of the grid does not match the
///   observation points or the output slice
/// * `DegenerateAxis` if any axis is invalid
pub fn check_bounds<T: Float>(
    grids: &[&[T]],
    obs: &[&[T]],
    atol: T,
    out: &mut [bool],
) -> Result<()> {
    let ndims = grids.len();
    if obs.len() != ndims {
        return Err(InterpError::mismatch("query axis count", ndims, obs.len()));
    }
    if out.len() != ndims {
        return Err(InterpError::mismatch("bounds output length", ndims, out.len()));
    }
    for i in 0..ndims {
        let axis = AxisView::new(grids[i], i)?;
        let (lo, hi) = (axis.first(), axis.last());
        out[i] = obs[i]
            .iter()
            .any(|&x| (x - lo) <= -atol || (x - hi) >= atol);
    }
    Ok(())
}
