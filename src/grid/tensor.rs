//! Read-only view over the flattened grid values.

use crate::error::{InterpError, Result};

/// Borrowed values at each grid point, in C order:
/// `(z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...)`,
/// meaning the index along axis 0 varies slowest.
#[derive(Debug, Clone, Copy)]
pub struct GridTensorView<'a, T, const MAXDIMS: usize> {
    vals: &'a [T],

    ndims: usize,

    /// Size of each dimension
    dims: [usize; MAXDIMS],

    /// Cumulative product of the sizes of higher dimensions,
    /// which is the stride between blocks relating to a given index along each dimension.
    strides: [usize; MAXDIMS],
}

impl<'a, T: Copy, const MAXDIMS: usize> GridTensorView<'a, T, MAXDIMS> {
    /// Wrap `vals` as a tensor of shape `dims`.
    ///
    /// # Errors
    /// * `TooManyDimensions` if `dims` is longer than `MAXDIMS`
    /// * `DimensionMismatch` if there are no dimensions, or the number of
    ///   values is not the product of the dimension sizes
    pub fn new(dims: &[usize], vals: &'a [T]) -> Result<Self> {
        let ndims = dims.len();
        if ndims > MAXDIMS {
            return Err(InterpError::TooManyDimensions {
                ndims,
                max: MAXDIMS,
            });
        }
        if ndims == 0 {
            return Err(InterpError::mismatch("grid dimension count", 1, 0));
        }

        let nvals = dims
            .iter()
            .try_fold(1_usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| InterpError::mismatch("value count", usize::MAX, vals.len()))?;
        if vals.len() != nvals {
            return Err(InterpError::mismatch("value count", nvals, vals.len()));
        }

        let mut shape = [0_usize; MAXDIMS];
        let mut strides = [0_usize; MAXDIMS];
        let mut acc = 1;
        for i in (0..ndims).rev() {
            shape[i] = dims[i];
            strides[i] = acc;
            acc *= dims[i];
        }

        Ok(Self {
            vals,
            ndims,
            dims: shape,
            strides,
        })
    }

    #[inline]
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims[..self.ndims]
    }

    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides[..self.ndims]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.vals
    }

    /// Flat position of a multi-index, or `None` if it is outside the tensor.
    #[inline]
    pub fn flat_index(&self, loc: &[usize]) -> Option<usize> {
        if loc.len() != self.ndims {
            return None;
        }
        let mut i = 0;
        for j in 0..self.ndims {
            if loc[j] >= self.dims[j] {
                return None;
            }
            i += loc[j] * self.strides[j];
        }
        Some(i)
    }

    /// Value at a multi-index.
    #[inline]
    pub fn get(&self, loc: &[usize]) -> Option<T> {
        self.flat_index(loc).map(|i| self.vals[i])
    }

    /// Value at a flat position already known to be in bounds.
    #[inline]
    pub(crate) fn at_flat(&self, i: usize) -> T {
        self.vals[i]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_c_order_indexing() {
        // 2x3 grid, values encode their own multi-index as 10*i + j
        let vals = [0.0_f64, 1.0, 2.0, 10.0, 11.0, 12.0];
        let tensor = GridTensorView::<'_, f64, 4>::new(&[2, 3], &vals).unwrap();

        assert_eq!(tensor.ndims(), 2);
        assert_eq!(tensor.dims(), &[2, 3]);
        assert_eq!(tensor.strides(), &[3, 1]);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(tensor.get(&[i, j]), Some((10 * i + j) as f64));
            }
        }
        assert_eq!(tensor.get(&[2, 0]), None);
        assert_eq!(tensor.get(&[0, 3]), None);
        assert_eq!(tensor.get(&[0]), None);
    }

    #[test]
    fn test_strides_3d() {
        let vals = [0.0_f64; 24];
        let tensor = GridTensorView::<'_, f64, 3>::new(&[2, 3, 4], &vals).unwrap();
        assert_eq!(tensor.strides(), &[12, 4, 1]);
        assert_eq!(tensor.flat_index(&[1, 2, 3]), Some(23));
    }

    #[test]
    fn test_size_mismatch() {
        let vals = [0.0_f64; 5];
        assert_eq!(
            GridTensorView::<'_, f64, 2>::new(&[2, 3], &vals).unwrap_err(),
            InterpError::DimensionMismatch {
                what: "value count",
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn test_capacity() {
        let vals = [0.0_f64; 8];
        assert_eq!(
            GridTensorView::<'_, f64, 2>::new(&[2, 2, 2], &vals).unwrap_err(),
            InterpError::TooManyDimensions { ndims: 3, max: 2 }
        );
        assert!(GridTensorView::<'_, f64, 2>::new(&[], &vals).is_err());
    }

    #[test]
    fn test_overflow() {
        let vals = [0.0_f64; 4];
        assert!(GridTensorView::<'_, f64, 2>::new(&[usize::MAX, 2], &vals).is_err());
    }
}
