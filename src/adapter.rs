//! Zero-copy adapter from a caller runtime's dynamically-typed arrays to the
//! borrowed slices used by the interpolators.
//!
//! A binding layer hands over whatever arrays it received as [`HostArray`]s.
//! Each one is checked for kind, element size, rank, and C-contiguous layout,
//! then borrowed as a plain slice for the rest of the call. Nothing is copied
//! and nothing outlives the borrow of the host arrays.
//!
//! ```rust
//! use ndarray::array;
//! use ndlinterp::adapter::{interpn_host_alloc, HostArray};
//! use ndlinterp::InterpOptions;
//!
//! let x = array![0.0_f64, 1.0, 2.0];
//! let z = array![0.0_f64, 10.0, 20.0];
//! let xobs = array![0.5_f64, 1.5];
//!
//! let axes = [HostArray::from(x.view())];
//! let queries = [HostArray::from(xobs.view())];
//! let out: Vec<f64> =
//!     interpn_host_alloc(&axes, &HostArray::from(z.view()), &queries, InterpOptions::default())
//!         .unwrap();
//! assert_eq!(out, vec![5.0, 15.0]);
//! ```
use core::mem::size_of;

use ndarray::{ArrayView, ArrayViewD, Dimension};
use num_traits::Float;

use crate::batch::{interpn, interpn_alloc};
use crate::error::{InterpError, Result};
use crate::options::InterpOptions;

/// An array as received from a caller's runtime, with its element type known only at runtime.
#[derive(Debug, Clone)]
pub enum HostArray<'a> {
    Float64(ArrayViewD<'a, f64>),
    Float32(ArrayViewD<'a, f32>),
    Int64(ArrayViewD<'a, i64>),
    Int32(ArrayViewD<'a, i32>),
    /// An object that is not a numeric array.
    Opaque,
}

impl<'a> HostArray<'a> {
    /// Size in bytes of one element, or `None` for a non-array.
    pub fn item_size(&self) -> Option<usize> {
        match self {
            HostArray::Float64(_) | HostArray::Int64(_) => Some(8),
            HostArray::Float32(_) | HostArray::Int32(_) => Some(4),
            HostArray::Opaque => None,
        }
    }

    pub fn ndim(&self) -> Option<usize> {
        self.shape().map(|s| s.len())
    }

    pub fn shape(&self) -> Option<&[usize]> {
        match self {
            HostArray::Float64(v) => Some(v.shape()),
            HostArray::Float32(v) => Some(v.shape()),
            HostArray::Int64(v) => Some(v.shape()),
            HostArray::Int32(v) => Some(v.shape()),
            HostArray::Opaque => None,
        }
    }
}

macro_rules! host_array_from {
    ($T:ty, $variant:ident) => {
        impl<'a, D: Dimension> From<ArrayView<'a, $T, D>> for HostArray<'a> {
            fn from(view: ArrayView<'a, $T, D>) -> Self {
                HostArray::$variant(view.into_dyn())
            }
        }
    };
}

host_array_from!(f64, Float64);
host_array_from!(f32, Float32);
host_array_from!(i64, Int64);
host_array_from!(i32, Int32);

/// Numeric types that can be borrowed out of a [`HostArray`].
pub trait HostElement: Float + 'static {
    /// The typed view, if the host array holds exactly this element type.
    fn typed_view<'a>(array: &HostArray<'a>) -> Option<ArrayViewD<'a, Self>>;
}

impl HostElement for f64 {
    fn typed_view<'a>(array: &HostArray<'a>) -> Option<ArrayViewD<'a, f64>> {
        match array {
            HostArray::Float64(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl HostElement for f32 {
    fn typed_view<'a>(array: &HostArray<'a>) -> Option<ArrayViewD<'a, f32>> {
        match array {
            HostArray::Float32(v) => Some(v.clone()),
            _ => None,
        }
    }
}

/// Borrow a host array of rank `rank` as a flat slice without copying.
///
/// # Errors
/// * `InvalidBuffer` if the array is not a numeric array, holds a different numeric kind
///   of the same width, or is not C-contiguous
/// * `InvalidElementSize` if the element size differs from `T`
/// * `DimensionMismatch` if the rank differs from `rank`
pub fn wrap<'a, T: HostElement>(buffer: &HostArray<'a>, rank: usize) -> Result<&'a [T]> {
    let item_size = buffer.item_size().ok_or_else(|| {
        log::debug!("rejected non-array input");
        InterpError::InvalidBuffer {
            reason: "not a numeric array",
        }
    })?;
    if item_size != size_of::<T>() {
        log::debug!("rejected array with {item_size}-byte elements");
        return Err(InterpError::InvalidElementSize {
            expected: size_of::<T>(),
            found: item_size,
        });
    }
    let view = T::typed_view(buffer).ok_or(InterpError::InvalidBuffer {
        reason: "element type does not match",
    })?;
    if view.ndim() != rank {
        return Err(InterpError::mismatch("array rank", rank, view.ndim()));
    }

    view.to_slice().ok_or_else(|| {
        log::debug!("rejected non-contiguous array with strides {:?}", view.strides());
        InterpError::InvalidBuffer {
            reason: "array must be C-style contiguous",
        }
    })
}

/// Borrow each of a sequence of rank-1 host arrays.
pub fn wrap_sequence<'a, T: HostElement>(buffers: &[HostArray<'a>]) -> Result<Vec<&'a [T]>> {
    buffers.iter().map(|b| wrap(b, 1)).collect()
}

/// Borrow the grid values, given as either a flat array or
/// an array whose shape matches the axis lengths `dims`.
///
/// # Errors
/// * Same as [`wrap`]
/// * `DimensionMismatch` if a multidimensional array's shape differs from `dims`
pub fn wrap_values<'a, T: HostElement>(buffer: &HostArray<'a>, dims: &[usize]) -> Result<&'a [T]> {
    match buffer.shape() {
        Some(shape) if shape.len() > 1 || dims.len() == 1 => {
            if shape.len() != dims.len() {
                return Err(InterpError::mismatch("value rank", dims.len(), shape.len()));
            }
            if let Some(i) = (0..dims.len()).find(|&i| shape[i] != dims[i]) {
                return Err(InterpError::mismatch("value shape", dims[i], shape[i]));
            }
            wrap(buffer, dims.len())
        }
        // Flat values; the count is checked against the axes with the grid
        _ => wrap(buffer, 1),
    }
}

/// Borrowed axes, values, and observation slices for one call.
type Borrowed<'a, T> = (Vec<&'a [T]>, &'a [T], Vec<&'a [T]>);

fn borrow_inputs<'a, T: HostElement>(
    axes: &[HostArray<'a>],
    values: &HostArray<'a>,
    queries: &[HostArray<'a>],
) -> Result<Borrowed<'a, T>> {
    if axes.len() != queries.len() {
        return Err(InterpError::mismatch("query axis count", axes.len(), queries.len()));
    }
    let grids = wrap_sequence::<T>(axes)?;
    let dims: Vec<usize> = grids.iter().map(|g| g.len()).collect();
    let vals = wrap_values::<T>(values, &dims)?;
    let obs = wrap_sequence::<T>(queries)?;
    Ok((grids, vals, obs))
}

/// Interpolate from host arrays into a caller-owned output slice.
///
/// # Errors
/// * Any error from wrapping the host arrays
/// * Any error from [`interpn`]
pub fn interpn_host<'a, T: HostElement>(
    axes: &[HostArray<'a>],
    values: &HostArray<'a>,
    queries: &[HostArray<'a>],
    out: &mut [T],
    options: InterpOptions,
) -> Result<()> {
    let (grids, vals, obs) = borrow_inputs::<T>(axes, values, queries)?;
    interpn(&grids, vals, &obs, out, options)
}

/// Interpolate from host arrays, allocating for the output.
pub fn interpn_host_alloc<'a, T: HostElement>(
    axes: &[HostArray<'a>],
    values: &HostArray<'a>,
    queries: &[HostArray<'a>],
    options: InterpOptions,
) -> Result<Vec<T>> {
    let (grids, vals, obs) = borrow_inputs::<T>(axes, values, queries)?;
    interpn_alloc(&grids, vals, &obs, options)
}
