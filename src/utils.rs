//! Convenience methods for constructing observation grids in a way that
//! echoes, but does not exactly match, methods common in scripting
//! languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates a meshgrid with axis 0 varying fastest, matching the flat
/// buffer ordering used by the interpolator
/// (x0, y0, z0, x1, y0, z0, ..., xn, y0, z0, x0, y1, z0, ...).
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .rev()
        .multi_cartesian_product()
        .map(|xx| xx.iter().rev().map(|y| **y).collect())
        .collect()
}
