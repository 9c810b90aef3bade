use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

use crate::utils::linspace;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Unevenly spaced axes of `n` points each, a different span on every dimension.
pub fn random_axes(rng: &mut StdRng, ndims: usize, n: usize) -> Vec<Vec<f64>> {
    (0..ndims)
        .map(|i| {
            // Make a linear grid and add noise small enough to keep it increasing
            let mut x = linspace(-5.0 * (i as f64), 5.0 * ((i + 1) as f64), n);
            let dx = randn::<f64>(rng, x.len());
            (0..x.len()).for_each(|j| x[j] += (dx[j] - 0.5) / 10.0);
            (0..x.len() - 1).for_each(|j| assert!(x[j + 1] > x[j]));
            x
        })
        .collect()
}
