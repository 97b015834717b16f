//! Lazy views over a flat sample buffer.
//!
//! The interpolation engine collapses one grid axis at a time by stacking
//! these views: each collapsed axis wraps the previous view in a set of
//! weighted, index-shifted reads summed together. Nothing is materialized
//! until a flat index is pulled through the whole stack, so the cost of an
//! interpolation is exactly the weighted leaf reads it needs and no
//! intermediate buffers are allocated.
//!
//! Views are immutable once built and live only for the duration of a single
//! interpolation call.

use alloc::rc::Rc;
use alloc::vec::Vec;
use num_traits::Float;

/// A read-only source of sample values addressed by flat index.
pub trait SampleArray<T> {
    /// Get the value at a flat index into this view.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn get(&self, index: usize) -> T;
}

/// A direct view of a flat sample buffer.
#[derive(Clone, Copy)]
pub struct RawSamples<'a, T> {
    vals: &'a [T],
}

impl<'a, T> RawSamples<'a, T> {
    pub fn new(vals: &'a [T]) -> Self {
        Self { vals }
    }
}

impl<T: Copy> SampleArray<T> for RawSamples<'_, T> {
    #[inline]
    fn get(&self, index: usize) -> T {
        self.vals[index]
    }
}

/// A view that shifts indices into a shared source array by a fixed offset
/// and scales the values read there by a fixed weight.
///
/// The source is shared, not owned: several weighted views over the same
/// source make up one collapsed axis, so the source is reference-counted
/// rather than borrowed from a stack frame that has already returned.
pub struct WeightedSamples<'a, T> {
    source: Rc<dyn SampleArray<T> + 'a>,
    offset: usize,
    weight: T,
}

impl<'a, T> WeightedSamples<'a, T> {
    pub fn new(source: Rc<dyn SampleArray<T> + 'a>, offset: usize, weight: T) -> Self {
        Self {
            source,
            offset,
            weight,
        }
    }
}

impl<T: Float> SampleArray<T> for WeightedSamples<'_, T> {
    #[inline]
    fn get(&self, index: usize) -> T {
        self.source.get(index + self.offset) * self.weight
    }
}

/// A view that sums an ordered list of source arrays element-wise.
pub struct CombinedSamples<'a, T> {
    sources: Vec<Rc<dyn SampleArray<T> + 'a>>,
}

impl<'a, T> CombinedSamples<'a, T> {
    pub fn new(sources: Vec<Rc<dyn SampleArray<T> + 'a>>) -> Self {
        Self { sources }
    }
}

impl<T: Float> SampleArray<T> for CombinedSamples<'_, T> {
    #[inline]
    fn get(&self, index: usize) -> T {
        self.sources
            .iter()
            .fold(T::zero(), |acc, s| acc + s.get(index))
    }
}
