//! Linear and cubic interpolation over an N-dimensional sampled grid
//! addressed in grid-cell coordinates.
//!
//! Coordinates are given in units of grid cells: integer values address
//! exact sample positions, so an axis with `n` samples spans `[0, n-1]`.
//! Callers owning a real-valued domain (for example a sampled-function
//! evaluator) clamp each input to its domain interval and rescale it into
//! cell units before evaluating here.
//!
//! The engine collapses axes from the highest-indexed axis down to axis 0.
//! Each collapsed axis wraps the current view of the sample buffer in a set
//! of weighted, index-shifted reads (see [`crate::sample`]): a pair with
//! weights `1-r` and `r` for the linear basis, or a four-point window with
//! Bernstein weights for the cubic basis. Axis 0 is summed directly into
//! the final scalar without building another view layer.
//!
//! The cubic basis uses the Bernstein/Bezier blend
//! `(1-t)^3, 3(1-t)^2 t, 3(1-t) t^2, t^3` over a window of four samples
//! spanning three cells. It is an intentionally local blend, not a spline
//! with a global smoothness solve: the blend passes through the window
//! endpoints and stays inside the hull of the window samples. Any axis with
//! fewer than four samples falls back to the linear basis.
//!
//! ```rust
//! use gridsample::{interpn, Order};
//!
//! // A 2 x 2 grid with axis 0 varying fastest
//! let dims = [2, 2];
//! let z = [0.0_f64, 1.0, 2.0, 3.0];
//!
//! // Observation points in cell units
//! let xobs = [0.5_f64];
//! let yobs = [0.5_f64];
//! let obs = [&xobs[..], &yobs[..]];
//!
//! // Storage for output
//! let mut out = [0.0];
//!
//! // Do interpolation
//! interpn(&dims, &z, Order::Linear, &obs, &mut out).unwrap();
//! assert_eq!(out[0], 1.5);
//! ```
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use num_traits::{Float, NumCast};

use crate::sample::{CombinedSamples, RawSamples, SampleArray, WeightedSamples};

/// Basis family used along each axis.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Order {
    /// Degree-1 basis: a weighted pair per axis.
    Linear,
    /// Degree-3 basis: a Bernstein-weighted four-point window per axis.
    /// Degrades to [`Order::Linear`] on any axis with fewer than 4 samples.
    Cubic,
}

/// An arbitrary-dimensional interpolator over a flat sample buffer
/// addressed in grid-cell coordinates.
///
/// Assumes axis 0 varies fastest in the flat buffer
/// (v(x0, y0), v(x1, y0), ..., v(xn, y0), v(x0, y1), ...).
///
/// Operation Complexity
/// * O(2^ndims) weighted sample reads for linear, O(4^ndims) for cubic.
///
/// Memory Complexity
/// * One transient view layer per collapsed axis, each holding two (linear)
///   or four (cubic) weighted readers; nothing proportional to the total
///   sample count is ever materialized.
///
/// Timing
/// * Every evaluation visits a fixed number of samples for a given
///   dimensionality and order, so timing is deterministic to the extent
///   that floating-point calculation timing is consistent.
pub struct GridInterpolator<'a, T: Float> {
    /// Size of each dimension
    dims: Vec<usize>,

    /// Stride of each dimension in the flat buffer, dimprod[0] == 1
    dimprod: Vec<usize>,

    /// Values at each point, size prod(dims)
    vals: &'a [T],

    /// Basis family applied along every axis
    order: Order,
}

impl<'a, T: Float> GridInterpolator<'a, T> {
    /// Build a new interpolator over a borrowed sample buffer.
    ///
    /// Assumes axis 0 varies fastest in the flat buffer
    /// (v(x0, y0), v(x1, y0), ..., v(xn, y0), v(x0, y1), ...).
    ///
    /// Single-entry dimensions are allowed; the only valid coordinate on
    /// such an axis is 0.0, and its sample participates unchanged.
    ///
    /// # Errors
    /// * If there are no dimensions
    /// * If the buffer length does not match the product of the dimensions
    /// * If any dimension is empty
    pub fn new(dims: &[usize], vals: &'a [T], order: Order) -> Result<Self, &'static str> {
        let ndims = dims.len();
        let nvals: usize = dims.iter().product();
        if !(ndims > 0 && vals.len() == nvals) {
            return Err("Dimension mismatch");
        }
        let degenerate = dims.iter().any(|&n| n < 1);
        if degenerate {
            return Err("All grids must have at least one entry");
        }

        // Cumulative product of lower-indexed dimensions.
        //
        // Each entry is the stride between consecutive indices along that
        // axis in the flat buffer, with axis 0 varying fastest.
        let mut dimprod = vec![1_usize; ndims];
        let mut acc = 1;
        for i in 0..ndims {
            dimprod[i] = acc;
            acc *= dims[i];
        }

        Ok(Self {
            dims: dims.to_vec(),
            dimprod,
            vals,
            order,
        })
    }

    /// Interpolate on a contiguous list of observation points.
    ///
    /// # Errors
    ///   * If the dimensionality of the points does not match the grid
    ///   * If the size of the inputs and output do not match
    ///   * If any observation point is outside the grid
    pub fn interp(&self, x: &[&[T]], out: &mut [T]) -> Result<(), &'static str> {
        let n = out.len();
        let ndims = self.dims.len();
        // Make sure there are enough coordinate inputs for each dimension
        if x.len() != ndims {
            return Err("Dimension mismatch");
        }
        // Make sure the size of inputs and output match
        let size_matches = x.iter().all(|&xx| xx.len() == out.len());
        if !size_matches {
            return Err("Dimension mismatch");
        }

        let mut tmp = vec![T::zero(); ndims];
        for i in 0..n {
            (0..ndims).for_each(|j| tmp[j] = x[j][i]);
            out[i] = self.interp_one(&tmp)?;
        }

        Ok(())
    }

    /// Interpolate the value at a point given in grid-cell coordinates.
    ///
    /// # Errors
    ///   * If the dimensionality of the point does not match the grid
    ///   * If any coordinate is outside `[0, n-1]` for its axis
    ///   * If any coordinate is not representable as an integer index
    pub fn interp_one(&self, x: &[T]) -> Result<T, &'static str> {
        let ndims = self.dims.len();
        if x.len() != ndims {
            return Err("Dimension mismatch");
        }

        // Reject observation points off the grid before building any view;
        // no out-of-bounds read is reachable past this point.
        for i in 0..ndims {
            let top = <T as NumCast>::from(self.dims[i] - 1)
                .ok_or("Unrepresentable coordinate value")?;
            if x[i] < T::zero() || x[i] > top {
                return Err("Observation point is outside the grid");
            }
        }

        // Collapse axes from the last down to axis 1, wrapping the current
        // view of the sample buffer in one weighted layer per axis.
        let mut current: Rc<dyn SampleArray<T> + '_> = Rc::new(RawSamples::new(self.vals));
        for i in (1..ndims).rev() {
            let n = self.dims[i];
            if n < 2 {
                // A single-sample axis contributes its only value; the flat
                // offset along it is always zero.
                continue;
            }
            let stride = self.dimprod[i];
            let (f, r) = split_cell(x[i], n)?;

            current = if self.order == Order::Linear || n < 4 {
                let sources: Vec<Rc<dyn SampleArray<T> + '_>> = vec![
                    Rc::new(WeightedSamples::new(
                        Rc::clone(&current),
                        stride * f,
                        T::one() - r,
                    )),
                    Rc::new(WeightedSamples::new(
                        Rc::clone(&current),
                        stride * (f + 1),
                        r,
                    )),
                ];
                Rc::new(CombinedSamples::new(sources))
            } else {
                let (start, t) = cubic_window(f, r, n);
                let weights = bernstein_weights(t);
                let sources: Vec<Rc<dyn SampleArray<T> + '_>> = (0..4)
                    .map(|j| {
                        Rc::new(WeightedSamples::new(
                            Rc::clone(&current),
                            stride * (start + j),
                            weights[j],
                        )) as Rc<dyn SampleArray<T> + '_>
                    })
                    .collect();
                Rc::new(CombinedSamples::new(sources))
            };
        }

        // Axis 0 is summed directly into the result rather than going
        // through another view layer.
        let n = self.dims[0];
        if n < 2 {
            return Ok(current.get(0));
        }
        let (f, r) = split_cell(x[0], n)?;
        if self.order == Order::Linear || n < 4 {
            Ok((T::one() - r) * current.get(f) + r * current.get(f + 1))
        } else {
            let (start, t) = cubic_window(f, r, n);
            let weights = bernstein_weights(t);
            let mut interped = T::zero();
            for j in 0..4 {
                interped = interped + weights[j] * current.get(start + j);
            }
            Ok(interped)
        }
    }
}

/// Split a cell-unit coordinate into the index of its containing cell and
/// the fractional remainder within that cell.
///
/// The cell index is clipped to the last cell of the axis, so the remainder
/// reaches exactly 1.0 at the top edge of the grid and every referenced
/// sample index stays inside the axis.
#[inline]
fn split_cell<T: Float>(v: T, n: usize) -> Result<(usize, T), &'static str> {
    let floc = v.floor();
    let iloc = <isize as NumCast>::from(floc).ok_or("Unrepresentable coordinate value")?;

    let dimmax = n as isize - 2; // lower index of the top cell
    let f = iloc.max(0).min(dimmax) as usize;

    let r = v - <T as NumCast>::from(f).ok_or("Unrepresentable coordinate value")?;
    Ok((f, r))
}

/// Select the four-sample window and normalized parameter for a cubic axis.
///
/// The first cell anchors its window at sample 0, the last cell anchors at
/// sample `n-4`, and interior cells center their window one sample below
/// the cell. Each window spans three cells, with `t` covering a different
/// third of `[0, 1]` per cell, so all referenced indices stay inside
/// `[0, n-1]` at both edges of the axis.
#[inline]
fn cubic_window<T: Float>(f: usize, r: T, n: usize) -> (usize, T) {
    let one = T::one();
    let two = one + one;
    let three = two + one;

    if f == 0 {
        (0, r / three)
    } else if f + 2 == n {
        (n - 4, (two + r) / three)
    } else {
        (f - 1, (one + r) / three)
    }
}

/// Bernstein basis weights for the four window samples at normalized
/// parameter `t`: `(1-t)^3, 3(1-t)^2 t, 3(1-t) t^2, t^3`.
#[inline]
fn bernstein_weights<T: Float>(t: T) -> [T; 4] {
    let one = T::one();
    let three = one + one + one;
    let s = one - t;
    [s * s * s, three * s * s * t, three * s * t * t, t * t * t]
}

/// Evaluate interpolation on a sampled grid at a list of observation points.
///
/// Assumes axis 0 varies fastest in the flat buffer
/// (v(x0, y0), v(x1, y0), ..., v(xn, y0), v(x0, y1), ...).
///
/// While this function initializes the interpolator struct on every call,
/// the overhead of doing so is minimal even when using it to evaluate one
/// observation point at a time.
pub fn interpn<T: Float>(
    dims: &[usize],
    vals: &[T],
    order: Order,
    obs: &[&[T]],
    out: &mut [T],
) -> Result<(), &'static str> {
    GridInterpolator::new(dims, vals, order)?.interp(obs, out)
}

/// Evaluate interpolation, allocating a new Vec for the output.
///
/// For best results, use the `interpn` function with preallocated output;
/// allocation has a significant performance cost, and should be used
/// sparingly.
#[cfg(feature = "std")]
pub fn interpn_alloc<T: Float>(
    dims: &[usize],
    vals: &[T],
    order: Order,
    obs: &[&[T]],
) -> Result<Vec<T>, &'static str> {
    let mut out = vec![T::zero(); obs[0].len()];
    interpn(dims, vals, order, obs, &mut out)?;
    Ok(out)
}

/// Check whether a list of observation points are inside the grid within
/// some absolute tolerance, in grid-cell units.
///
/// Output slice entry `i` is set to `false` if no points on that dimension
/// are out of bounds, and set to `true` if there is a bounds violation on
/// that axis.
///
/// # Errors
/// * If the dimensionality of the grid does not match the dimensionality of the observation points
/// * If the output slice length does not match the dimensionality of the grid
pub fn check_bounds<T: Float>(
    dims: &[usize],
    obs: &[&[T]],
    atol: T,
    out: &mut [bool],
) -> Result<(), &'static str> {
    let ndims = dims.len();
    if !(obs.len() == ndims && out.len() == ndims) {
        return Err("Dimension mismatch");
    }

    for i in 0..ndims {
        let lo = T::zero();
        let hi = <T as NumCast>::from(dims[i] - 1); // Last cell coordinate on this axis

        match hi {
            Some(hi) => {
                let bad = obs[i]
                    .iter()
                    .any(|&x| (x - lo) <= -atol || (x - hi) >= atol);
                out[i] = bad;
            }
            // Passing an unrepresentable number in isn't, strictly speaking, an error
            // and since an unrepresentable number can't be on the grid,
            // we can just flag it for the bounds check like normal
            None => {
                out[i] = true;
            }
        }
    }
    Ok(())
}
