//! Randomized operations.
//!
//! The plain functions draw from fastrand's thread-local generator, which is
//! seeded once per thread. The `*_with` variants take an explicit
//! [`fastrand::Rng`] so that callers can seed it and get reproducible results.

/// Shuffles the slice in place (Fisher-Yates).
pub fn shuffle<E>(s: &mut [E]) {
    fastrand::shuffle(s);
}

/// Shuffles the slice in place using the supplied generator.
pub fn shuffle_with<E>(rng: &mut fastrand::Rng, s: &mut [E]) {
    rng.shuffle(s);
}

/// Removes a uniformly chosen element and returns it together with the
/// remaining elements.
///
/// The removed slot is filled with the last element, so the order of the rest
/// is not preserved. Returns `None` and an empty `Vec` for empty input.
pub fn random_pick<E>(s: Vec<E>) -> (Option<E>, Vec<E>) {
    pick_at(s, |len| fastrand::usize(..len))
}

/// [`random_pick`] with an explicit generator.
pub fn random_pick_with<E>(rng: &mut fastrand::Rng, s: Vec<E>) -> (Option<E>, Vec<E>) {
    pick_at(s, |len| rng.usize(..len))
}

fn pick_at<E>(mut s: Vec<E>, index: impl FnOnce(usize) -> usize) -> (Option<E>, Vec<E>) {
    if s.is_empty() {
        return (None, s);
    }
    let i = index(s.len());
    log::trace!("random_pick: index {i} of {}", s.len());
    let v = s.swap_remove(i);
    (Some(v), s)
}
