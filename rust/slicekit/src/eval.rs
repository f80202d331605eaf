//! Queries and predicates over slices.
//!
//! Nothing here allocates a result sequence or mutates its input. Absence is
//! reported through `Option`: index-returning queries yield `None` where a
//! sentinel index would otherwise be used, and value-returning queries borrow
//! the matching element from the input.

use std::hash::Hash;

use itertools::Itertools;

/// Returns the number of elements that satisfy `f`.
pub fn count<E>(s: &[E], mut f: impl FnMut(&E) -> bool) -> usize {
    s.iter().filter(|v| f(v)).count()
}

/// Returns `true` if `a` and `b` hold equal elements in the same order.
pub fn equals<E: PartialEq>(a: &[E], b: &[E]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Returns `true` if `a` and `b` hold the same elements with the same
/// multiplicities, regardless of order.
pub fn equals_any_order<E: Eq + Hash>(a: &[E], b: &[E]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().counts() == b.iter().counts()
}

/// Returns `true` if every element satisfies `f`. Vacuously `true` for an
/// empty slice.
pub fn every<E>(s: &[E], mut f: impl FnMut(&E) -> bool) -> bool {
    s.iter().all(|v| f(v))
}

/// Returns `true` if at least one element satisfies `f`. Always `false` for
/// an empty slice.
pub fn some<E>(s: &[E], mut f: impl FnMut(&E) -> bool) -> bool {
    s.iter().any(|v| f(v))
}

/// Returns the first element that satisfies `f`.
pub fn find<E>(s: &[E], mut f: impl FnMut(&E) -> bool) -> Option<&E> {
    s.iter().find(|v| f(v))
}

/// Returns a copy of the first element that satisfies `f`, or `default` when
/// there is none.
pub fn find_default<E: Clone>(s: &[E], f: impl FnMut(&E) -> bool, default: E) -> E {
    find(s, f).cloned().unwrap_or(default)
}

/// Returns the index of the first element that satisfies `f`.
pub fn find_index<E>(s: &[E], f: impl FnMut(&E) -> bool) -> Option<usize> {
    s.iter().position(f)
}

/// Returns the last element that satisfies `f`, scanning from the end.
pub fn find_last<E>(s: &[E], mut f: impl FnMut(&E) -> bool) -> Option<&E> {
    s.iter().rev().find(|v| f(v))
}

pub fn find_last_default<E: Clone>(s: &[E], f: impl FnMut(&E) -> bool, default: E) -> E {
    find_last(s, f).cloned().unwrap_or(default)
}

/// Returns the index of the last element that satisfies `f`.
pub fn find_last_index<E>(s: &[E], f: impl FnMut(&E) -> bool) -> Option<usize> {
    s.iter().rposition(f)
}

/// Returns `true` if `v` occurs in the slice.
pub fn includes<E: PartialEq>(s: &[E], v: &E) -> bool {
    s.contains(v)
}

/// Returns the index of the first occurrence of `v`.
pub fn index_of<E: PartialEq>(s: &[E], v: &E) -> Option<usize> {
    s.iter().position(|e| e == v)
}

/// Returns the index of the first occurrence of `v` at or after `from`.
///
/// A `from` past the end of the slice finds nothing.
pub fn index_of_from<E: PartialEq>(s: &[E], v: &E, from: usize) -> Option<usize> {
    s.get(from..)?
        .iter()
        .position(|e| e == v)
        .map(|i| i + from)
}

/// Returns the index of the last occurrence of `v`.
pub fn last_index_of<E: PartialEq>(s: &[E], v: &E) -> Option<usize> {
    s.iter().rposition(|e| e == v)
}

/// Returns the "most" element according to `f`.
///
/// `f(candidate, best)` must return `true` when `candidate` should replace the
/// current `best`. The fold starts from the first element, so ties stay with
/// the earliest element unless `f` says otherwise. Returns `None` for an
/// empty slice.
pub fn most<E>(s: &[E], mut f: impl FnMut(&E, &E) -> bool) -> Option<&E> {
    let (first, rest) = s.split_first()?;
    Some(rest.iter().fold(first, |best, v| if f(v, best) { v } else { best }))
}
