//! In-place operations on caller-owned slices.
//!
//! These functions never reallocate. Out-of-range indices are programmer
//! errors and panic, the same way slice indexing does; the `try_*` variants
//! validate their arguments first and leave the slice untouched on error.

use std::cmp::Ordering;

use slicekit_common::{Result, result::verify_range, verify_index};

/// Overwrites every element with `v`.
pub fn fill<E: Clone>(s: &mut [E], v: E) {
    s.fill(v);
}

/// Overwrites the elements of `s[start..end]` with `v`.
///
/// # Panics
///
/// Panics if `start > end` or `end > s.len()`.
pub fn fill_range<E: Clone>(s: &mut [E], v: E, start: usize, end: usize) {
    s[start..end].fill(v);
}

/// Checked variant of [`fill_range`].
pub fn try_fill_range<E: Clone>(s: &mut [E], v: E, start: usize, end: usize) -> Result<()> {
    verify_range(start, end, s.len())?;
    fill_range(s, v, start, end);
    Ok(())
}

/// Reverses the slice in place by swapping from both ends toward the middle.
pub fn reverse<E>(s: &mut [E]) {
    let mut i = 0;
    let mut j = s.len();
    while i + 1 < j {
        j -= 1;
        s.swap(i, j);
        i += 1;
    }
}

/// Sorts the slice in place using a strict "less than" predicate.
///
/// The sort is stable: elements for which neither `less(a, b)` nor
/// `less(b, a)` holds keep their relative order.
pub fn sort<E>(s: &mut [E], mut less: impl FnMut(&E, &E) -> bool) {
    s.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}

/// Moves the element at index `from` to index `to`, shifting the elements in
/// between by one position. Does nothing when `from == to`.
///
/// # Panics
///
/// Panics if either index is out of bounds.
pub fn move_element<E>(s: &mut [E], from: usize, to: usize) {
    let len = s.len();
    assert!(from < len, "move source {from} is out of bounds for length {len}");
    assert!(to < len, "move target {to} is out of bounds for length {len}");
    match from.cmp(&to) {
        Ordering::Less => s[from..=to].rotate_left(1),
        Ordering::Greater => s[to..=from].rotate_right(1),
        Ordering::Equal => (),
    }
}

/// Checked variant of [`move_element`].
pub fn try_move_element<E>(s: &mut [E], from: usize, to: usize) -> Result<()> {
    verify_index!(from, from, s.len());
    verify_index!(to, to, s.len());
    move_element(s, from, to);
    Ok(())
}
