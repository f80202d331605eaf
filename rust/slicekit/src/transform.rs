//! Allocating transformations.
//!
//! Every function in this module builds a fresh `Vec` (or map) and leaves its
//! input untouched. Empty input always produces an empty result.

use std::hash::Hash;
use std::ops::Add;

use num_traits::{PrimInt, Zero};
use slicekit_common::{Result, verify_arg};

use crate::slice_ext::SliceExt;

/// Applies `f` to every element and collects the results in order.
pub fn map<E, R>(s: &[E], f: impl FnMut(&E) -> R) -> Vec<R> {
    s.iter().map(f).collect()
}

/// Returns the elements that satisfy `f`, preserving their relative order.
pub fn filter<E: Clone>(s: &[E], mut f: impl FnMut(&E) -> bool) -> Vec<E> {
    s.iter().filter(|v| f(v)).cloned().collect()
}

/// Equivalent to [`filter`] followed by [`map`], except that `map_fn` only
/// runs on the elements that pass `filter_fn`.
pub fn filter_map<E, R>(
    s: &[E],
    mut filter_fn: impl FnMut(&E) -> bool,
    mut map_fn: impl FnMut(&E) -> R,
) -> Vec<R> {
    s.iter()
        .filter_map(|v| filter_fn(v).then(|| map_fn(v)))
        .collect()
}

/// Maps every element to an iterable and concatenates the results in order.
pub fn flat_map<E, I>(s: &[E], f: impl FnMut(&E) -> I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    s.iter().flat_map(f).collect()
}

/// Concatenates the rows of `ss` in order.
pub fn flatten<E: Clone>(ss: &[Vec<E>]) -> Vec<E> {
    let len = reduce(ss, |v, acc| v.len() + acc, 0);
    let mut res = Vec::with_capacity(len);
    for s in ss {
        res.extend_from_slice(s);
    }
    res
}

/// Calls `f` on every element in index order.
pub fn for_each<E>(s: &[E], f: impl FnMut(&E)) {
    s.iter().for_each(f);
}

/// Calls `f` on every element together with its index.
pub fn for_each_index<E>(s: &[E], mut f: impl FnMut(&E, usize)) {
    for (i, v) in s.iter().enumerate() {
        f(v, i);
    }
}

/// Left fold: threads `init` through `f(element, acc)` from index 0 upward.
pub fn reduce<E, R>(s: &[E], mut f: impl FnMut(&E, R) -> R, init: R) -> R {
    s.iter().fold(init, |acc, v| f(v, acc))
}

/// Right fold: like [`reduce`], but visits elements from the last to the first.
pub fn reduce_right<E, R>(s: &[E], mut f: impl FnMut(&E, R) -> R, init: R) -> R {
    s.iter().rev().fold(init, |acc, v| f(v, acc))
}

/// Partitions the elements by the key `key_fn` derives from each of them.
///
/// Each group keeps the original relative order of its elements. Keys that no
/// element produced are absent from the map.
pub fn group_by<E, K>(s: &[E], mut key_fn: impl FnMut(&E) -> K) -> ahash::HashMap<K, Vec<E>>
where
    E: Clone,
    K: Eq + Hash,
{
    group_map(s, &mut key_fn, E::clone)
}

/// Like [`group_by`], but stores `value_fn(element)` in each group instead of
/// the element itself.
pub fn group_map<E, K, V>(
    s: &[E],
    mut key_fn: impl FnMut(&E) -> K,
    mut value_fn: impl FnMut(&E) -> V,
) -> ahash::HashMap<K, Vec<V>>
where
    K: Eq + Hash,
{
    let mut groups = ahash::HashMap::<K, Vec<V>>::default();
    for v in s {
        groups.entry(key_fn(v)).or_default().push(value_fn(v));
    }
    groups
}

/// Returns the first occurrence of every distinct element, in first-seen order.
pub fn dedup<E>(s: &[E]) -> Vec<E>
where
    E: Clone + Eq + Hash,
{
    let mut seen = ahash::AHashSet::with_capacity(s.len());
    s.iter().filter(|v| seen.insert(*v)).cloned().collect()
}

/// Splits the slice into consecutive chunks of `size` elements; the last chunk
/// may be shorter.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunk<E: Clone>(s: &[E], size: usize) -> Vec<Vec<E>> {
    chunk_slices(s, size)
        .into_iter()
        .map(<[E]>::to_vec)
        .collect()
}

/// Borrowing variant of [`chunk`]: the chunks are sub-slices of `s`.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunk_slices<E>(s: &[E], size: usize) -> Vec<&[E]> {
    assert!(size >= 1, "chunk size must be at least 1");
    s.split_at_sizes(chunk_sizes(s.len(), size))
}

/// Checked variant of [`chunk`]: returns an error instead of panicking when
/// `size` is zero.
pub fn try_chunk<E: Clone>(s: &[E], size: usize) -> Result<Vec<Vec<E>>> {
    verify_arg!(size, size >= 1);
    Ok(chunk(s, size))
}

/// Sizes of the chunks that cover `len` elements in steps of `size`.
pub(crate) fn chunk_sizes(len: usize, size: usize) -> impl Iterator<Item = usize> {
    (0..len.div_ceil(size)).map(move |i| size.min(len - i * size))
}

/// Pairs elements positionally. The result is as long as the shorter input.
pub fn zip<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter().cloned().zip(b.iter().cloned()).collect()
}

/// Returns a copy of the slice with its elements in reverse order.
pub fn reverse_copy<E: Clone>(s: &[E]) -> Vec<E> {
    s.iter().rev().cloned().collect()
}

/// Returns the integers of the half-open range `[start, end)`, or an empty
/// `Vec` when `start >= end`.
pub fn range<T: PrimInt>(start: T, end: T) -> Vec<T> {
    if start >= end {
        return Vec::new();
    }
    let len = end
        .to_i128()
        .zip(start.to_i128())
        .map_or(0, |(end, start)| (end - start) as usize);
    let mut res = Vec::with_capacity(len);
    let mut i = start;
    while i < end {
        res.push(i);
        i = i + T::one();
    }
    res
}

/// Returns the sum of all elements, or zero for an empty slice.
pub fn sum<E>(s: &[E]) -> E
where
    E: Zero + Add<Output = E> + Copy,
{
    s.iter().fold(E::zero(), |acc, &v| acc + v)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_map() {
        assert_eq!(map(&[1, 2, 3], |&v| v * 2), vec![2, 4, 6]);
        assert_eq!(
            map(&[1, 2, 3], |v| (v * 2).to_string()),
            vec!["2", "4", "6"]
        );
        assert!(map::<i32, i32>(&[], |&v| v * 2).is_empty());
    }

    #[test]
    fn test_filter() {
        assert_eq!(filter(&[1, 2, 3], |&v| v > 1), vec![2, 3]);
        assert_eq!(filter(&[1, 2, 3], |&v| v > 3), Vec::<i32>::new());
        assert!(filter::<i32>(&[], |_| true).is_empty());
    }

    #[test]
    fn test_filter_map() {
        let mut calls = 0;
        let r = filter_map(
            &[1, 2, 3, 4],
            |&v| v % 2 == 0,
            |v| {
                calls += 1;
                format!("#{v}")
            },
        );
        assert_eq!(r, vec!["#2", "#4"]);
        assert_eq!(calls, 2);
        assert!(filter_map(&[1, 3], |&v| v % 2 == 0, |&v| v).is_empty());
    }

    #[test]
    fn test_flatten() {
        assert_eq!(
            flatten(&[vec![1, 2], vec![], vec![3], vec![4, 5]]),
            vec![1, 2, 3, 4, 5]
        );
        assert!(flatten::<i32>(&[]).is_empty());
        assert!(flatten::<i32>(&[vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_flat_map() {
        assert_eq!(flat_map(&[1, 2, 3], |&v| vec![v; v as usize]), vec![1, 2, 2, 3, 3, 3]);
        assert!(flat_map(&[1, 2], |_| Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_for_each() {
        let mut total = 0;
        for_each(&[1, 2, 3], |v| total += v);
        assert_eq!(total, 6);

        let mut weighted = 0;
        for_each_index(&[1, 2, 3], |v, i| weighted += *v as usize * i);
        assert_eq!(weighted, 8);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(&[1, 2, 3], |v, acc| v + acc, 0), 6);
        assert_eq!(
            reduce(&[1, 2, 3], |v, acc: String| acc + &v.to_string(), String::new()),
            "123"
        );
        assert_eq!(reduce::<i32, i32>(&[], |v, acc| v + acc, 7), 7);
    }

    #[test]
    fn test_reduce_right() {
        assert_eq!(reduce_right(&[1, 2, 3], |v, acc| v + acc, 0), 6);
        assert_eq!(
            reduce_right(&[1, 2, 3], |v, acc: String| acc + &v.to_string(), String::new()),
            "321"
        );
    }

    #[test]
    fn test_group_by() {
        let g = group_by(&[1, 2, 3, 4, 5], |&v| v % 2 == 0);
        assert_eq!(g.len(), 2);
        assert_eq!(g[&true], vec![2, 4]);
        assert_eq!(g[&false], vec![1, 3, 5]);

        let g = group_by(&[1, 3, 5], |&v| v % 2);
        assert_eq!(g.len(), 1);
        assert!(!g.contains_key(&0));

        assert!(group_by::<i32, i32>(&[], |&v| v).is_empty());
    }

    #[test]
    fn test_group_map() {
        let g = group_map(&[1, 2, 3, 4], |&v| v % 2, |v| v.to_string());
        assert_eq!(g[&0], vec!["2", "4"]);
        assert_eq!(g[&1], vec!["1", "3"]);
        assert_eq!(g.keys().copied().sorted().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_dedup() {
        assert_eq!(dedup(&[1, 2, 1, 3, 2, 4]), vec![1, 2, 3, 4]);
        assert_eq!(dedup(&[3, 3, 3]), vec![3]);
        assert!(dedup::<i32>(&[]).is_empty());
        assert_eq!(dedup(&["b", "a", "b"]), vec!["b", "a"]);
    }

    #[test]
    fn test_chunk() {
        assert_eq!(
            chunk(&[1, 2, 3, 4, 5], 2),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(chunk(&[1, 2, 3, 4], 2), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(chunk(&[1, 2, 3], 5), vec![vec![1, 2, 3]]);
        assert!(chunk::<i32>(&[], 1).is_empty());
    }

    #[test]
    fn test_chunk_slices_borrow_input() {
        let s = [1, 2, 3, 4, 5, 6, 7];
        let chunks = chunk_slices(&s, 3);
        assert_eq!(chunks, vec![&s[0..3], &s[3..6], &s[6..7]]);
        assert!(std::ptr::eq(chunks[1].as_ptr(), &s[3]));
    }

    #[test]
    #[should_panic]
    fn test_chunk_zero_size() {
        chunk(&[1, 2, 3], 0);
    }

    #[test]
    fn test_try_chunk() {
        assert_eq!(try_chunk(&[1, 2, 3], 2).unwrap(), vec![vec![1, 2], vec![3]]);
        assert!(try_chunk(&[1, 2, 3], 0).is_err());
    }

    #[test]
    fn test_chunk_sizes() {
        assert_eq!(chunk_sizes(5, 2).collect::<Vec<_>>(), vec![2, 2, 1]);
        assert_eq!(chunk_sizes(6, 3).collect::<Vec<_>>(), vec![3, 3]);
        assert_eq!(chunk_sizes(0, 3).count(), 0);
    }

    #[test]
    fn test_zip() {
        assert_eq!(zip(&[1, 2, 3], &[-1, -2]), vec![(1, -1), (2, -2)]);
        assert_eq!(zip(&[1], &["a", "b"]), vec![(1, "a")]);
        assert!(zip::<i32, i32>(&[], &[1, 2]).is_empty());
    }

    #[test]
    fn test_reverse_copy() {
        let s = vec![1, 2, 3];
        assert_eq!(reverse_copy(&s), vec![3, 2, 1]);
        assert_eq!(s, vec![1, 2, 3]);
        assert!(reverse_copy::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_range() {
        assert_eq!(range(0, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(range(-2i64, 1), vec![-2, -1, 0]);
        assert_eq!(range(250u8, 255), vec![250, 251, 252, 253, 254]);
        assert!(range(3, 3).is_empty());
        assert!(range(1, -1).is_empty());
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1, 2, 3]), 6);
        assert_eq!(sum(&[0.5f64, 0.25]), 0.75);
        assert_eq!(sum::<u32>(&[]), 0);
    }
}
