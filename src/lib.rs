//! N-dimensional piecewise-linear interpolation/extrapolation on rectilinear grids,
//! no-std and no-alloc compatible, operating directly on borrowed buffers.
//!
//! A grid is a set of strictly increasing coordinate arrays, one per dimension, plus the
//! values at every grid point in C order (the index along the first dimension varies slowest).
//! Observation points are given as one slice of coordinates per dimension.
//!
//! # Methods
//! For a self-consistent multidimensional linear interpolation, there are 2^ndims grid values
//! that contribute to each observation point. The simplex method instead splits each grid cell into
//! ndims! simplices and uses only the ndims + 1 vertices of one of them, trading the
//! tensor-product form for a much lower cost in high dimensions.
//!
//! Both methods perform a bisection search to find the relevant grid cell on each axis, which takes
//! a worst-case number of iterations of log2(axis length).
//!
//! | Method        | RAM          | Interp. / Extrap. Cost                        | Exact for             |
//! |---------------|--------------|-----------------------------------------------|-----------------------|
//! | multilinear   | O(MAXDIMS)   | O(2^ndims) + log2(gridsize)                   | affine along each axis|
//! | simplex       | O(MAXDIMS)   | O(ndims log ndims) + log2(gridsize)           | globally affine       |
//!
//! Both reproduce the grid values exactly at grid points. Outside the grid, values are either
//! held at the boundary ([`Extrapolation::Clamp`]) or continued from the boundary cell
//! ([`Extrapolation::Linear`]).
//!
//! # Example: Multilinear and Simplex
//! ```rust
//! use ndlinterp::{interpn, Extrapolation, InterpOptions, Method};
//!
//! // Define a grid
//! let x = [1.0_f64, 2.0, 3.0, 4.0];
//! let y = [0.0_f64, 1.0, 2.0, 3.0];
//! let grids = &[&x[..], &y[..]];
//!
//! // Values at grid points
//! let z = [2.0; 16];
//!
//! // Points to interpolate/extrapolate
//! let xobs = [0.0_f64, 5.0];
//! let yobs = [-1.0, 3.0];
//! let obs = [&xobs[..], &yobs[..]];
//!
//! // Storage for output
//! let mut out = [0.0; 2];
//!
//! // Do interpolation
//! let options = InterpOptions::default().with_extrapolation(Extrapolation::Clamp);
//! interpn(grids, &z, &obs, &mut out, options).unwrap();
//! interpn(grids, &z, &obs, &mut out, options.with_method(Method::Simplex)).unwrap();
//! assert_eq!(out, [2.0, 2.0]);
//! ```
//!
//! # Example: Fixed dimension count
//! ```rust
//! use ndlinterp::{interpolate_2d, InterpOptions, Method};
//!
//! let x = [0.0_f64, 1.0];
//! let y = [0.0_f64, 1.0];
//! let z = [0.0, 1.0, 1.0, 2.0];
//! let xobs = [0.5, 0.25];
//! let yobs = [0.5, 0.75];
//!
//! let out = interpolate_2d(
//!     [&x[..], &y[..]],
//!     &z,
//!     [&xobs[..], &yobs[..]],
//!     InterpOptions::default().with_method(Method::Simplex),
//! )
//! .unwrap();
//! assert_eq!(out, vec![1.0, 1.0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod error;
pub use error::{InterpError, Result};

pub mod options;
pub use options::{Extrapolation, InterpOptions, Method};

pub mod grid;
pub use grid::{check_bounds, AxisView, Cell, Grid, GridTensorView, Side};

pub mod multilinear;
pub use multilinear::MultilinearRectilinear;

pub mod simplex;
pub use simplex::SimplexRectilinear;

pub mod batch;
pub use batch::{interpn, BatchEvaluator, Interpolant, MAXDIMS_MULTILINEAR, MAXDIMS_SIMPLEX};
#[cfg(feature = "std")]
pub use batch::{interpn_alloc, interpolate, interpolate_1d, interpolate_2d, interpolate_3d};

#[cfg(feature = "std")]
pub mod adapter;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
