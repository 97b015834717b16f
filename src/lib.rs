//! N-dimensional interpolation over sampled grids, plus dense square-matrix
//! algebra, no-std compatible.
//!
//! Two independent components, neither depending on the other:
//!
//! * [`grid`] evaluates linear or cubic interpolation over a flat buffer of
//!   samples addressed as an N-dimensional grid in grid-cell coordinates,
//!   composing the lazy views in [`sample`] one axis at a time. The typical
//!   caller is a sampled-function evaluator that clamps its inputs to a
//!   declared domain and rescales them to cell units before evaluating.
//! * [`matrix`] provides a runtime-sized dense [`SquareMatrix`] with
//!   closed-form determinant/inverse kernels below 4x4 and pivoted
//!   elimination above.
//!
//! # Performance Scalings
//! Linear interpolation reads 2^ndims weighted samples per observation
//! point and cubic reads 4^ndims; both collapse geometrically, so
//! intermediate storage is one small view layer per axis rather than
//! anything proportional to the sample count.
//!
//! | Method                  | RAM       | Cost                          |
//! |-------------------------|-----------|-------------------------------|
//! | grid, linear            | O(ndims)  | O(2^ndims)                    |
//! | grid, cubic             | O(ndims)  | O(4^ndims)                    |
//! | matrix product          | O(n^2)    | O(n^3)                        |
//! | matrix det. / inverse   | O(n^2)    | O(n^3), closed-form for n < 4 |
//!
//! # Example: Interpolating a Sampled Function
//! ```rust
//! use gridsample::{interpn, Order};
//!
//! // One output channel of a sampled function tabulated on a 2 x 3 grid,
//! // with axis 0 varying fastest
//! let dims = [2, 3];
//! let samples = [0.0_f64, 1.0, 10.0, 11.0, 20.0, 21.0];
//!
//! // Observation points, already clamped and rescaled to cell units
//! let x = [0.5_f64];
//! let y = [1.25_f64];
//! let obs = [&x[..], &y[..]];
//!
//! // Storage for output
//! let mut out = [0.0];
//!
//! // Do interpolation
//! interpn(&dims, &samples, Order::Linear, &obs, &mut out).unwrap();
//! assert!((out[0] - 13.0).abs() < 1e-12);
//! ```
//!
//! # Example: Matrix Determinant and Inverse
//! ```rust
//! use gridsample::SquareMatrix;
//!
//! let m = SquareMatrix::from_rows(&[&[2.0_f64, 1.0][..], &[0.0, 4.0][..]]).unwrap();
//! assert_eq!(m.determinant(), 8.0);
//!
//! let inv = m.inverse().unwrap();
//! assert!(m.product(&inv).unwrap().is_identity(1e-12));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

pub mod sample;
pub use sample::{CombinedSamples, RawSamples, SampleArray, WeightedSamples};

pub mod grid;
#[cfg(feature = "std")]
pub use grid::interpn_alloc;
pub use grid::{GridInterpolator, Order, check_bounds, interpn};

pub mod matrix;
pub use matrix::SquareMatrix;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
