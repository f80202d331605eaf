//! Stack and queue helpers over `Vec`.
//!
//! `push`/`pop` work at the back, `unshift`/`shift` at the front. Each takes
//! the `Vec` by value and returns the resulting sequence; the removing
//! operations also return the removed element, or `None` when the input was
//! empty.

/// Appends `v` to the end.
pub fn push<E>(mut s: Vec<E>, v: E) -> Vec<E> {
    s.push(v);
    s
}

/// Removes the last element.
pub fn pop<E>(mut s: Vec<E>) -> (Option<E>, Vec<E>) {
    let v = s.pop();
    (v, s)
}

/// Removes the first element.
pub fn shift<E>(mut s: Vec<E>) -> (Option<E>, Vec<E>) {
    if s.is_empty() {
        return (None, s);
    }
    let v = s.remove(0);
    (Some(v), s)
}

/// Prepends `v`.
pub fn unshift<E>(mut s: Vec<E>, v: E) -> Vec<E> {
    s.insert(0, v);
    s
}
