//! Extensions for splitting slices into borrowed sub-slices.
//!
//! This module provides the [`SliceExt`] trait, which partitions a slice
//! (or a `Vec`) into consecutive sub-slices whose lengths come from an
//! iterator of sizes. The chunking operations are built on top of it.

use crate::transform::chunk_sizes;

/// Extension trait for splitting collections into consecutive chunks
/// according to an iterator of sizes.
pub trait SliceExt<T> {
    /// Splits this collection into contiguous sub-slices according to `sizes`.
    ///
    /// Each item produced by `sizes` is the length of the next chunk, taken from
    /// the start of the slice in order. If `sizes` does not cover the entire
    /// slice, the remaining tail is ignored.
    ///
    /// Panics
    /// - If any size yielded by `sizes` is greater than the number of elements
    ///   remaining in the slice at that step.
    fn split_at_sizes(&self, sizes: impl Iterator<Item = usize>) -> Vec<&[T]>;

    /// Mutable counterpart of [`SliceExt::split_at_sizes`]. The returned
    /// sub-slices are non-overlapping views into the original buffer.
    fn split_at_sizes_mut(&mut self, sizes: impl Iterator<Item = usize>) -> Vec<&mut [T]>;

    /// Splits into mutable chunks of `size` elements; the last chunk may be
    /// shorter.
    ///
    /// Panics
    /// - If `size` is zero.
    fn chunk_mut(&mut self, size: usize) -> Vec<&mut [T]>;
}

impl<T> SliceExt<T> for [T] {
    fn split_at_sizes(&self, sizes: impl Iterator<Item = usize>) -> Vec<&[T]> {
        let mut rest = self;
        let (lower, upper) = sizes.size_hint();
        let mut res: Vec<&[T]> = Vec::with_capacity(upper.unwrap_or(lower));
        for size in sizes {
            let (chunk, tail) = rest.split_at(size);
            res.push(chunk);
            rest = tail;
        }
        res
    }

    fn split_at_sizes_mut(&mut self, sizes: impl Iterator<Item = usize>) -> Vec<&mut [T]> {
        let mut rest = self;
        let (lower, upper) = sizes.size_hint();
        let mut res: Vec<&mut [T]> = Vec::with_capacity(upper.unwrap_or(lower));
        for size in sizes {
            let (chunk, tail) = rest.split_at_mut(size);
            res.push(chunk);
            rest = tail;
        }
        res
    }

    fn chunk_mut(&mut self, size: usize) -> Vec<&mut [T]> {
        assert!(size >= 1, "chunk size must be at least 1");
        let len = self.len();
        self.split_at_sizes_mut(chunk_sizes(len, size))
    }
}

impl<T> SliceExt<T> for Vec<T> {
    fn split_at_sizes(&self, sizes: impl Iterator<Item = usize>) -> Vec<&[T]> {
        self.as_slice().split_at_sizes(sizes)
    }

    fn split_at_sizes_mut(&mut self, sizes: impl Iterator<Item = usize>) -> Vec<&mut [T]> {
        self.as_mut_slice().split_at_sizes_mut(sizes)
    }

    fn chunk_mut(&mut self, size: usize) -> Vec<&mut [T]> {
        self.as_mut_slice().chunk_mut(size)
    }
}
