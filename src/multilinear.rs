//! Multilinear interpolation/extrapolation on a rectilinear grid.
//!
//! ```rust
//! use ndlinterp::{Extrapolation, MultilinearRectilinear};
//!
//! // Define a grid
//! let x = [1.0_f64, 1.2, 2.0];
//! let y = [1.0_f64, 1.3, 1.5];
//!
//! // Values at grid points
//! let z = [2.0; 9];
//!
//! // Points to interpolate/extrapolate
//! let xobs = [0.0_f64, 5.0];
//! let yobs = [-1.0, 3.0];
//! let obs = [&xobs[..], &yobs[..]];
//!
//! // Storage for output
//! let mut out = [0.0; 2];
//!
//! let interpolator = MultilinearRectilinear::<'_, f64, 2>::new(&[&x, &y], &z).unwrap();
//! interpolator.interp(&obs, &mut out, Extrapolation::Linear).unwrap();
//! assert_eq!(out, [2.0, 2.0]);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Weighted_mean
use num_traits::Float;

use crate::batch::{BatchEvaluator, Interpolant};
use crate::error::Result;
use crate::grid::Grid;
use crate::options::Extrapolation;

/// An arbitrary-dimensional multilinear interpolator / extrapolator on a rectilinear grid.
///
/// Assumes C-style ordering of vals (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
///
/// The interpolated value is the sum over all 2^ndims corners of the containing cell of
/// the corner value times the product, over each dimension, of the fractional offset `t`
/// (upper corner) or `1 - t` (lower corner). This reproduces grid values exactly at grid points
/// and any function that is affine along each axis independently.
///
/// Operation Complexity
/// * O(2^ndims) for interpolation and extrapolation in all regions,
///   plus a bisection search on each axis.
///
/// Memory Complexity
/// * Peak stack usage is O(MAXDIMS), which is minimally O(ndims).
pub struct MultilinearRectilinear<'a, T: Float, const MAXDIMS: usize> {
    grid: Grid<'a, T, MAXDIMS>,
}

impl<'a, T: Float, const MAXDIMS: usize> MultilinearRectilinear<'a, T, MAXDIMS> {
    /// Build a new interpolator, validating every axis and the value count.
    ///
    /// # Errors
    /// * If any input dimensions do not match
    /// * If any axis has fewer than 2 entries or is not strictly increasing
    /// * If there are more than `MAXDIMS` dimensions
    pub fn new(grids: &[&'a [T]], vals: &'a [T]) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(grids, vals)?))
    }

    pub fn from_grid(grid: Grid<'a, T, MAXDIMS>) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid<'a, T, MAXDIMS> {
        &self.grid
    }

    /// Interpolate on a contiguous list of observation points, one slice per dimension.
    ///
    /// # Errors
    ///   * If the number of observation slices does not match the grid
    ///   * If the observation slices and output differ in length
    pub fn interp(&self, obs: &[&[T]], out: &mut [T], extrapolation: Extrapolation) -> Result<()> {
        BatchEvaluator::new(self, extrapolation).eval(obs, out)
    }

    /// Interpolate the value at a point,
    /// using fixed-size intermediate storage of O(MAXDIMS) and no allocation.
    ///
    /// # Errors
    ///   * If the dimensionality of the point does not match the grid
    pub fn interp_one(&self, x: &[T], extrapolation: Extrapolation) -> Result<T> {
        BatchEvaluator::new(self, extrapolation).eval_one(x)
    }

    /// Weighted sum over the corners of the cell at `origin` with fractional offsets `t`.
    #[inline]
    fn combine(&self, origin: &[usize], t: &[T]) -> T {
        let ndims = self.grid.ndims();
        let values = self.grid.values();
        let strides = values.strides();

        // Traverse the 2^ndims elements of the cartesian product
        // of `[0, 1] x ... x [0, 1]`; bit `j` of the vertex number
        // selects the upper side of the cell on dimension `j`.
        let mut interped = T::zero();
        let nverts = 1_usize << ndims;
        for i in 0..nverts {
            let mut k = 0; // index of the value for this vertex
            let mut weight = T::one();
            for j in 0..ndims {
                let upper = (i >> j) & 1 == 1;
                k += strides[j] * (origin[j] + upper as usize);
                weight = weight * if upper { t[j] } else { T::one() - t[j] };
            }
            interped = interped + weight * values.at_flat(k);
        }

        interped
    }
}

impl<'a, T: Float, const MAXDIMS: usize> Interpolant<T> for MultilinearRectilinear<'a, T, MAXDIMS> {
    #[inline]
    fn ndims(&self) -> usize {
        self.grid.ndims()
    }

    #[inline]
    fn eval_with(&self, coord: impl Fn(usize) -> T, extrapolation: Extrapolation) -> T {
        let ndims = self.grid.ndims();
        let mut origin = [0_usize; MAXDIMS]; // Indices of lower corner of hypercube
        let mut t = [T::zero(); MAXDIMS]; // Fractional offsets within the cell
        self.grid
            .locate_point(coord, extrapolation, &mut origin[..ndims], &mut t[..ndims]);

        self.combine(&origin[..ndims], &t[..ndims])
    }
}
