//! Functional-style operations over slices, vectors and hash maps.
//!
//! Every function is a free-standing, stateless operation on caller-supplied
//! data. The modules group them by contract:
//!
//! - [`eval`] - queries and predicates (`find`, `index_of`, `most`, ...)
//! - [`transform`] - allocating transformations (`map`, `filter`, `group_by`, `chunk`, ...)
//! - [`mutate`] - in-place operations (`fill`, `reverse`, `sort`, `move_element`)
//! - [`random`] - shuffling and random removal
//! - [`structural`] - length-changing operations (`insert`, `remove`, `concat`, ...)
//! - [`stack_queue`] - `push`, `pop`, `shift`, `unshift`
//! - [`grid`] - two-dimensional allocation and padding
//! - [`map`] - key and value extraction
//!
//! All functions are re-exported at the crate root.
//!
//! # Absence
//!
//! "Not found" and "empty input" are ordinary outcomes, reported as `None` or
//! as an empty `Vec`. Out-of-range indices are programmer errors and panic;
//! operations with such preconditions also have a checked `try_*` variant
//! returning [`slicekit_common::Result`].
//!
//! ```
//! use slicekit::{chunk, filter, index_of, map, zip};
//!
//! assert_eq!(map(&[1, 2, 3], |&v| v * 2), vec![2, 4, 6]);
//! assert_eq!(filter(&[1, 2, 3], |&v| v > 1), vec![2, 3]);
//! assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
//! assert_eq!(zip(&[1, 2, 3], &[-1, -2]), vec![(1, -1), (2, -2)]);
//! assert_eq!(index_of(&[1, 2, 3], &4), None);
//! ```

pub mod eval;
pub mod grid;
pub mod map;
pub mod mutate;
pub mod random;
pub mod slice_ext;
pub mod stack_queue;
pub mod structural;
pub mod transform;

pub use eval::*;
pub use grid::*;
pub use map::{keys, values};
pub use mutate::*;
pub use random::*;
pub use slice_ext::SliceExt;
pub use stack_queue::*;
pub use structural::*;
pub use transform::*;
