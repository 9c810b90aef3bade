//! Simplex (barycentric) interpolation/extrapolation on a rectilinear grid.
//!
//! Each grid cell is split into ndims! simplices by the ordering of the fractional
//! offsets of the observation point. Only the ndims + 1 vertices of the simplex
//! containing the point contribute, so the cost grows like ndims * log(ndims)
//! instead of 2^ndims, which makes this method the better choice for many dimensions.
//!
//! ```rust
//! use ndlinterp::{Extrapolation, SimplexRectilinear};
//!
//! let x = [0.0_f64, 1.0];
//! let y = [0.0_f64, 1.0];
//! let z = [0.0, 0.0, 0.0, 1.0]; // z = x * y at the corners
//!
//! let interpolator = SimplexRectilinear::<'_, f64, 2>::new(&[&x, &y], &z).unwrap();
//! let v = interpolator.interp_one(&[0.25, 0.75], Extrapolation::Linear).unwrap();
//! assert_eq!(v, 0.25);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Barycentric_coordinate_system
//! * Kuhn triangulation of the hypercube
use core::cmp::Ordering;

use num_traits::Float;

use crate::batch::{BatchEvaluator, Interpolant};
use crate::error::Result;
use crate::grid::Grid;
use crate::options::Extrapolation;

/// An arbitrary-dimensional simplex interpolator / extrapolator on a rectilinear grid.
///
/// Assumes C-style ordering of vals (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...).
///
/// With the fractional offsets sorted descending as `s1 >= s2 >= ... >= sN`, the
/// vertices visited are the lower corner of the cell followed by the corners reached by
/// stepping up one dimension at a time in that order, with weights
/// `1 - s1, s1 - s2, ..., s(N-1) - sN, sN`.
/// This reproduces grid values exactly at grid points and any globally affine function.
///
/// Operation Complexity
/// * O(ndims log ndims) for the sort plus O(ndims) to combine, plus a bisection search on each axis.
///
/// Memory Complexity
/// * Peak stack usage is O(MAXDIMS), which is minimally O(ndims).
pub struct SimplexRectilinear<'a, T: Float, const MAXDIMS: usize> {
    grid: Grid<'a, T, MAXDIMS>,
}

impl<'a, T: Float, const MAXDIMS: usize> SimplexRectilinear<'a, T, MAXDIMS> {
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

    /// Interpolate the value at a point.
    ///
    /// # Errors
    ///   * If the dimensionality of the point does not match the grid
    pub fn interp_one(&self, x: &[T], extrapolation: Extrapolation) -> Result<T> {
        BatchEvaluator::new(self, extrapolation).eval_one(x)
    }

    /// Weighted sum over the simplex vertices of the cell at `origin`
    /// selected by the fractional offsets `t`.
    #[inline]
    fn combine(&self, origin: &[usize], t: &[T]) -> T {
        let ndims = self.grid.ndims();
        let values = self.grid.values();
        let strides = values.strides();

        // Dimensions in order of descending offset; ties go to the lower dimension
        // so that the walk is deterministic. NaN offsets sort last so the order stays total.
        let key = |j: usize| if t[j].is_nan() { T::neg_infinity() } else { t[j] };
        let mut order = [0_usize; MAXDIMS];
        let order = &mut order[..ndims];
        (0..ndims).for_each(|j| order[j] = j);
        order.sort_unstable_by(|&a, &b| {
            key(b)
                .partial_cmp(&key(a))
                .unwrap_or(Ordering::Equal)
                .then(a.cmp(&b))
        });

        let mut k: usize = (0..ndims).map(|j| origin[j] * strides[j]).sum();
        let mut prev = T::one();
        let mut interped = T::zero();
        for &j in order.iter() {
            let s = t[j];
            interped = interped + (prev - s) * values.at_flat(k);
            k += strides[j];
            prev = s;
        }

        interped + prev * values.at_flat(k)
    }
}

impl<'a, T: Float, const MAXDIMS: usize> Interpolant<T> for SimplexRectilinear<'a, T, MAXDIMS> {
    #[inline]
    fn ndims(&self) -> usize {
        self.grid.ndims()
    }

    #[inline]
    fn eval_with(&self, coord: impl Fn(usize) -> T, extrapolation: Extrapolation) -> T {
        let ndims = self.grid.ndims();
        let mut origin = [0_usize; MAXDIMS];
        let mut t = [T::zero(); MAXDIMS];
        self.grid
            .locate_point(coord, extrapolation, &mut origin[..ndims], &mut t[..ndims]);

        self.combine(&origin[..ndims], &t[..ndims])
    }
}

#[cfg(test)]
mod test {
    use super::SimplexRectilinear;
    use crate::multilinear::MultilinearRectilinear;
    use crate::options::Extrapolation;
    use crate::testing::*;
    use crate::utils::*;

    /// Globally affine function of every coordinate
    fn affine(p: &[f64]) -> f64 {
        p.iter()
            .enumerate()
            .fold(0.25, |acc, (i, x)| acc + (i as f64 + 1.0) * (1.0 - 2.0 * (i % 2) as f64) * x)
    }

    #[test]
    fn test_exact_at_nodes() {
        let mut rng = rng_fixed_seed();

        for ndims in 1..=4 {
            let xs = random_axes(&mut rng, ndims, 3);
            let grids: Vec<&[f64]> = xs.iter().map(|x| &x[..]).collect();
            let nodes = meshgrid(xs.iter().collect());
            let z = randn::<f64>(&mut rng, nodes.len());

            let interpolator = SimplexRectilinear::<'_, f64, 4>::new(&grids, &z).unwrap();
            for (node, &zi) in nodes.iter().zip(z.iter()) {
                for extrap in [Extrapolation::Linear, Extrapolation::Clamp] {
                    assert_eq!(interpolator.interp_one(node, extrap).unwrap(), zi);
                }
            }
        }
    }

    /// Globally affine functions are reproduced inside and outside the grid,
    /// in dimension counts where the multilinear method would be impractical.
    #[test]
    fn test_affine_exact_1d_to_12d() {
        let mut rng = rng_fixed_seed();

        for ndims in 1..=12 {
            let xs = random_axes(&mut rng, ndims, 2);
            let grids: Vec<&[f64]> = xs.iter().map(|x| &x[..]).collect();
            let nodes = meshgrid(xs.iter().collect());
            let z: Vec<f64> = nodes.iter().map(|p| affine(p)).collect();
            let interpolator = SimplexRectilinear::<'_, f64, 12>::new(&grids, &z).unwrap();

            for _ in 0..20 {
                let r = randn::<f64>(&mut rng, ndims);
                // Spread across the grid and past both ends
                let p: Vec<f64> = (0..ndims)
                    .map(|i| {
                        let (lo, hi) = (xs[i][0], xs[i][1]);
                        lo + (hi - lo) * (3.0 * r[i] - 1.0)
                    })
                    .collect();
                let v = interpolator.interp_one(&p, Extrapolation::Linear).unwrap();
                assert!((v - affine(&p)).abs() < 1e-9);
            }
        }
    }

    /// On a nonuniform multi-cell grid, an affine function is reproduced where
    /// the point lands in an interior cell.
    #[test]
    fn test_affine_exact_multicell() {
        let x = [0.0, 0.3, 1.0, 2.5];
        let y = [-1.0, 0.0, 4.0];
        let w = [1.0, 2.0, 2.1];
        let nodes = meshgrid(vec![&x.to_vec(), &y.to_vec(), &w.to_vec()]);
        let z: Vec<f64> = nodes.iter().map(|p| affine(p)).collect();
        let interpolator = SimplexRectilinear::<'_, f64, 3>::new(&[&x, &y, &w], &z).unwrap();

        let mut rng = rng_fixed_seed();
        let r = randn::<f64>(&mut rng, 3 * 50);
        for k in 0..50 {
            let p = [2.5 * r[3 * k], -1.0 + 5.0 * r[3 * k + 1], 1.0 + 1.1 * r[3 * k + 2]];
            let v = interpolator.interp_one(&p, Extrapolation::Clamp).unwrap();
            assert!((v - affine(&p)).abs() < 1e-10);
        }
    }

    /// The simplex and multilinear methods agree on the cell diagonal
    /// and differ off of it when the data has a product term.
    #[test]
    fn test_planar_vs_bilinear() {
        let x = [0.0_f64, 1.0];
        let y = [0.0_f64, 1.0];
        let z = [0.0, 0.0, 0.0, 1.0]; // z = x * y

        let simplex = SimplexRectilinear::<'_, f64, 2>::new(&[&x, &y], &z).unwrap();
        let multilinear = MultilinearRectilinear::<'_, f64, 2>::new(&[&x, &y], &z).unwrap();
        let ex = Extrapolation::Linear;

        let s = simplex.interp_one(&[0.5, 0.5], ex).unwrap();
        let m = multilinear.interp_one(&[0.5, 0.5], ex).unwrap();
        assert_eq!(s, 0.5);
        assert_eq!(m, 0.25);

        // Lower-right and upper-left triangles
        assert_eq!(simplex.interp_one(&[0.25, 0.75], ex).unwrap(), 0.25);
        assert_eq!(simplex.interp_one(&[0.75, 0.25], ex).unwrap(), 0.25);
        assert!((multilinear.interp_one(&[0.25, 0.75], ex).unwrap() - 0.1875).abs() < 1e-15);
    }

    #[test]
    fn test_weights_are_convex_inside() {
        // With all-ones data, any convex combination is exactly 1 up to rounding
        let x = [0.0_f64, 1.0, 2.0];
        let z = [1.0; 27];
        let simplex = SimplexRectilinear::<'_, f64, 3>::new(&[&x, &x, &x], &z).unwrap();
        let mut rng = rng_fixed_seed();
        for _ in 0..50 {
            let r = randn::<f64>(&mut rng, 3);
            let p = [2.0 * r[0], 2.0 * r[1], 2.0 * r[2]];
            let v = simplex.interp_one(&p, Extrapolation::Clamp).unwrap();
            assert!((v - 1.0).abs() < 1e-14);
        }
    }

    #[test]
    fn test_clamp() {
        let x = [0.0_f64, 1.0];
        let y = [0.0_f64, 1.0, 3.0];
        let nodes = meshgrid(vec![&x.to_vec(), &y.to_vec()]);
        let z: Vec<f64> = nodes.iter().map(|p| 2.0 * p[0] + p[1]).collect();
        let simplex = SimplexRectilinear::<'_, f64, 2>::new(&[&x, &y], &z).unwrap();

        assert_eq!(
            simplex.interp_one(&[2.0, 10.0], Extrapolation::Clamp).unwrap(),
            5.0
        );
        assert!(
            (simplex.interp_one(&[2.0, 10.0], Extrapolation::Linear).unwrap() - 14.0).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_nan_coordinate_high_dims() {
        // Enough dimensions that the sort checks its comparator for a total order
        let ndims = 21;
        let x = [0.0_f64, 1.0];
        let grids: Vec<&[f64]> = (0..ndims).map(|_| &x[..]).collect();
        let z = vec![1.0; 1 << ndims];
        let simplex = SimplexRectilinear::<'_, f64, 21>::new(&grids, &z).unwrap();

        let mut p: Vec<f64> = (0..ndims).map(|j| 0.045 * j as f64).collect();
        for j in [1, 5, 11, 17] {
            p[j] = f64::NAN;
        }
        for ex in [Extrapolation::Linear, Extrapolation::Clamp] {
            let v = simplex.interp_one(&p, ex).unwrap();
            assert!(v.is_nan() || v == 1.0);
        }
        assert!(simplex
            .interp_one(&p, Extrapolation::Linear)
            .unwrap()
            .is_nan());
    }
}
