//! Convenience methods for constructing grids and observation sets in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// # Panics
/// * If `n < 2`
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    assert!(n >= 2, "linspace needs at least 2 points");
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates every grid point in C ordering (x0, y0, z0, x0, y0, z1, ..., x0, yn, zn),
/// matching the ordering expected for grid values.
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .multi_cartesian_product()
        .map(|xx| xx.iter().map(|y| **y).collect())
        .collect()
}

/// Splits a list of points into one coordinate list per dimension,
/// the layout used for observation points.
pub fn transpose<T: Copy>(points: &[Vec<T>], ndims: usize) -> Vec<Vec<T>> {
    (0..ndims)
        .map(|i| points.iter().map(|p| p[i]).collect())
        .collect()
}
