//! Batch evaluation of an interpolant over a set of observation points,
//! and the top-level convenience functions that build an interpolant per call.
//!
//! Observation points are given column-wise: one slice per dimension, all of the same
//! length, so that point `i` is `(obs[0][i], obs[1][i], ...)`. Output order matches input order.
use num_traits::Float;

use crate::error::{InterpError, Result};
use crate::multilinear::MultilinearRectilinear;
use crate::options::{Extrapolation, InterpOptions, Method};
use crate::simplex::SimplexRectilinear;

/// Maximum number of dimensions for multilinear convenience methods.
/// The cost grows like 2^ndims, so this is kept small.
pub const MAXDIMS_MULTILINEAR: usize = 8;

/// Maximum number of dimensions for simplex convenience methods.
pub const MAXDIMS_SIMPLEX: usize = 32;

/// Number of observation points handled by each parallel task
#[cfg(feature = "parallel")]
const PAR_CHUNK: usize = 1024;

/// An interpolation method bound to a validated grid.
///
/// Implementations locate the cell containing a point on every axis and
/// combine the surrounding grid values. Evaluation is infallible; all checks
/// happen when the implementor and its grid are built.
pub trait Interpolant<T: Float> {
    /// Number of dimensions of the underlying grid.
    fn ndims(&self) -> usize;

    /// Evaluate at one observation point, where `coord(j)` is the coordinate
    /// on dimension `j` for `j` in `0..ndims`.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_with(&self, coord: impl Fn(usize) -> T, extrapolation: Extrapolation) -> T;
}

/// Drives an [`Interpolant`] over a batch of observation points.
///
/// There is no state shared between points, so the batch can be split
/// into disjoint chunks of output and evaluated independently.
pub struct BatchEvaluator<'i, I> {
    interpolant: &'i I,
    extrapolation: Extrapolation,
}

impl<'i, I> BatchEvaluator<'i, I> {
    pub fn new(interpolant: &'i I, extrapolation: Extrapolation) -> Self {
        Self {
            interpolant,
            extrapolation,
        }
    }

    /// Evaluate at a single point.
    ///
    /// # Errors
    /// * `DimensionMismatch` if the point does not have one coordinate per grid dimension
    #[inline]
    pub fn eval_one<T: Float>(&self, x: &[T]) -> Result<T>
    where
        I: Interpolant<T>,
    {
        let ndims = self.interpolant.ndims();
        if x.len() != ndims {
            return Err(InterpError::mismatch("point dimension count", ndims, x.len()));
        }
        Ok(self.interpolant.eval_with(|j| x[j], self.extrapolation))
    }

    /// Evaluate at every point of a batch, writing `out[i]` for point `i`.
    ///
    /// # Errors
    /// * `DimensionMismatch` if there is not one observation slice per grid dimension,
    ///   if the observation slices differ in length, or if the output length differs from them.
    ///   Nothing is written to `out` in that case.
    pub fn eval<T: Float>(&self, obs: &[&[T]], out: &mut [T]) -> Result<()>
    where
        I: Interpolant<T>,
    {
        let ndims = self.validate(obs, out)?;
        log::trace!(
            "evaluating {} points in {ndims} dimensions, {:?} extrapolation",
            out.len(),
            self.extrapolation
        );

        for (i, o) in out.iter_mut().enumerate() {
            *o = self.interpolant.eval_with(|j| obs[j][i], self.extrapolation);
        }

        Ok(())
    }

    /// Evaluate at every point of a batch in parallel.
    /// Each task fills a disjoint chunk of `out`; results are identical to [`Self::eval`].
    ///
    /// # Errors
    /// * Same as [`Self::eval`]
    #[cfg(feature = "parallel")]
    pub fn par_eval<T>(&self, obs: &[&[T]], out: &mut [T]) -> Result<()>
    where
        T: Float + Send + Sync,
        I: Interpolant<T> + Sync,
    {
        use rayon::prelude::*;

        let ndims = self.validate(obs, out)?;
        log::trace!(
            "evaluating {} points in {ndims} dimensions on {} threads",
            out.len(),
            rayon::current_num_threads()
        );

        out.par_chunks_mut(PAR_CHUNK)
            .enumerate()
            .for_each(|(c, chunk)| {
                let start = c * PAR_CHUNK;
                for (k, o) in chunk.iter_mut().enumerate() {
                    let i = start + k;
                    *o = self.interpolant.eval_with(|j| obs[j][i], self.extrapolation);
                }
            });

        Ok(())
    }

    /// Check the shape of a batch against the grid, returning the dimension count.
    fn validate<T: Float>(&self, obs: &[&[T]], out: &[T]) -> Result<usize>
    where
        I: Interpolant<T>,
    {
        let ndims = self.interpolant.ndims();
        if obs.len() != ndims {
            return Err(InterpError::mismatch("query axis count", ndims, obs.len()));
        }
        // Every query axis must have the same length; nothing is truncated
        let m = obs.first().map_or(0, |o| o.len());
        if let Some(bad) = obs.iter().find(|o| o.len() != m) {
            return Err(InterpError::mismatch("query length", m, bad.len()));
        }
        if out.len() != m {
            return Err(InterpError::mismatch("output length", m, out.len()));
        }
        Ok(ndims)
    }
}

/// Evaluate interpolation on a rectilinear grid, building the interpolator for this call.
/// Assumes C-style ordering of vals (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
///
/// The multilinear method supports up to [`MAXDIMS_MULTILINEAR`] dimensions and
/// the simplex method up to [`MAXDIMS_SIMPLEX`]. Use the interpolator structs directly
/// for higher dimensions.
///
/// All inputs are validated before any point is evaluated.
///
/// # Errors
/// * `DegenerateAxis` if any grid axis has fewer than 2 entries or is not strictly increasing
/// * `DimensionMismatch` if the value count, query axis count, query lengths, or output length do not match
/// * `TooManyDimensions` if the grid exceeds the supported dimension count of the method
pub fn interpn<T: Float>(
    grids: &[&[T]],
    vals: &[T],
    obs: &[&[T]],
    out: &mut [T],
    options: InterpOptions,
) -> Result<()> {
    let ndims = grids.len();
    let extrapolation = options.extrapolation;
    match options.method.resolve(ndims) {
        Method::Simplex => {
            let interpolator = SimplexRectilinear::<'_, T, MAXDIMS_SIMPLEX>::new(grids, vals)?;
            BatchEvaluator::new(&interpolator, extrapolation).eval(obs, out)
        }
        _ => {
            let interpolator =
                MultilinearRectilinear::<'_, T, MAXDIMS_MULTILINEAR>::new(grids, vals)?;
            BatchEvaluator::new(&interpolator, extrapolation).eval(obs, out)
        }
    }
}

/// Evaluate interpolant, allocating a new Vec for the output.
///
/// For best results, use the `interpn` function with preallocated output;
/// allocation has a significant performance cost, and should be used sparingly.
#[cfg(feature = "std")]
pub fn interpn_alloc<T: Float>(
    grids: &[&[T]],
    vals: &[T],
    obs: &[&[T]],
    options: InterpOptions,
) -> Result<Vec<T>> {
    let m = obs.first().map_or(0, |o| o.len());
    let mut out = vec![T::zero(); m];
    interpn(grids, vals, obs, &mut out, options)?;
    Ok(out)
}

/// Interpolate on an `N`-dimensional grid, with the dimension count fixed by the caller.
#[cfg(feature = "std")]
pub fn interpolate<T: Float, const N: usize>(
    axes: [&[T]; N],
    values: &[T],
    queries: [&[T]; N],
    options: InterpOptions,
) -> Result<Vec<T>> {
    interpn_alloc(&axes, values, &queries, options)
}

/// Interpolate on a 1-dimensional grid.
#[cfg(feature = "std")]
pub fn interpolate_1d<T: Float>(
    axes: [&[T]; 1],
    values: &[T],
    queries: [&[T]; 1],
    options: InterpOptions,
) -> Result<Vec<T>> {
    interpolate(axes, values, queries, options)
}

/// Interpolate on a 2-dimensional grid.
#[cfg(feature = "std")]
pub fn interpolate_2d<T: Float>(
    axes: [&[T]; 2],
    values: &[T],
    queries: [&[T]; 2],
    options: InterpOptions,
) -> Result<Vec<T>> {
    interpolate(axes, values, queries, options)
}

/// Interpolate on a 3-dimensional grid.
#[cfg(feature = "std")]
pub fn interpolate_3d<T: Float>(
    axes: [&[T]; 3],
    values: &[T],
    queries: [&[T]; 3],
    options: InterpOptions,
) -> Result<Vec<T>> {
    interpolate(axes, values, queries, options)
}
