//! Per-call configuration: which interpolation variant to use and
//! how to treat observation points outside the grid.

/// Dimension count above which `Method::Auto` switches from multilinear to simplex.
pub const AUTO_SIMPLEX_THRESHOLD: usize = 6;

/// Interpolation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Tensor-product interpolation over all 2^ndims corners of the cell.
    #[default]
    Multilinear,
    /// Barycentric interpolation over the ndims + 1 vertices of one simplex of the cell.
    Simplex,
    /// Multilinear for low dimension counts, simplex above `AUTO_SIMPLEX_THRESHOLD`.
    Auto,
}

impl Method {
    /// Resolve `Auto` to a concrete variant for a given dimension count.
    pub fn resolve(self, ndims: usize) -> Method {
        match self {
            Method::Auto if ndims > AUTO_SIMPLEX_THRESHOLD => Method::Simplex,
            Method::Auto => Method::Multilinear,
            m => m,
        }
    }
}

/// Treatment of observation points outside the span of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Hold the boundary value.
    Clamp,
    /// Extend the boundary cell's interpolant past the edge of the grid.
    #[default]
    Linear,
}

/// Options for one interpolation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterpOptions {
    pub method: Method,
    pub extrapolation: Extrapolation,
}

impl InterpOptions {
    pub fn new(method: Method, extrapolation: Extrapolation) -> Self {
        Self {
            method,
            extrapolation,
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_auto_resolution() {
        assert_eq!(Method::Auto.resolve(1), Method::Multilinear);
        assert_eq!(Method::Auto.resolve(6), Method::Multilinear);
        assert_eq!(Method::Auto.resolve(7), Method::Simplex);
        assert_eq!(Method::Simplex.resolve(1), Method::Simplex);
        assert_eq!(Method::Multilinear.resolve(20), Method::Multilinear);
    }

    #[test]
    fn test_builder() {
        let opts = InterpOptions::default()
            .with_method(Method::Simplex)
            .with_extrapolation(Extrapolation::Clamp);
        assert_eq!(opts, InterpOptions::new(Method::Simplex, Extrapolation::Clamp));
        assert_eq!(
            InterpOptions::default(),
            InterpOptions::new(Method::Multilinear, Extrapolation::Linear)
        );
    }
}
