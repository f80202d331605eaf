//! Operations that change the length of a sequence.
//!
//! The functions that take a `Vec` by value reuse its allocation and hand it
//! back; when there is nothing to do, the input comes back unchanged.

use crate::eval::{find_index, index_of};

/// Inserts `v` at index `i`, shifting later elements right. An index at or
/// past the end appends.
pub fn insert<E>(mut s: Vec<E>, i: usize, v: E) -> Vec<E> {
    if i >= s.len() {
        s.push(v);
    } else {
        s.insert(i, v);
    }
    s
}

/// Removes the first occurrence of `v`. Returns `s` unchanged if `v` is absent.
pub fn remove<E: PartialEq>(s: Vec<E>, v: &E) -> Vec<E> {
    match index_of(&s, v) {
        Some(i) => remove_index(s, i),
        None => s,
    }
}

/// Removes the first element that satisfies `f`. Returns `s` unchanged if
/// there is none.
pub fn remove_func<E>(s: Vec<E>, f: impl FnMut(&E) -> bool) -> Vec<E> {
    match find_index(&s, f) {
        Some(i) => remove_index(s, i),
        None => s,
    }
}

/// Removes the element at index `i`, preserving the order of the rest.
/// Returns `s` unchanged if `i` is out of bounds.
pub fn remove_index<E>(mut s: Vec<E>, i: usize) -> Vec<E> {
    if i < s.len() {
        s.remove(i);
    }
    s
}

/// Concatenates the given slices in argument order.
pub fn concat<E: Clone>(ss: &[&[E]]) -> Vec<E> {
    let mut res = Vec::with_capacity(ss.iter().map(|s| s.len()).sum());
    for s in ss {
        res.extend_from_slice(s);
    }
    res
}

/// Returns a shallow copy of the slice in new storage.
pub fn clone<E: Clone>(s: &[E]) -> Vec<E> {
    s.to_vec()
}

/// Turns an absent sequence into an empty one; a present sequence passes
/// through untouched.
pub fn no_nil<E>(s: Option<Vec<E>>) -> Vec<E> {
    s.unwrap_or_default()
}
