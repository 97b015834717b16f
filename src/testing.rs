use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    7, 3, 1, 9, 2, 8, 4, 6, 5, 0, 7, 3, 1, 9, 2, 8, 4, 6, 5, 0, 7, 3, 1, 9, 2, 8, 4, 6, 5, 0, 7,
    3,
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
