//! Two-dimensional (row-major `Vec<Vec<E>>`) helpers.

/// Allocates a `rows` x `cols` grid with every cell set to `E::default()`.
///
/// `rows == 0` yields an empty grid; `cols == 0` yields `rows` empty rows.
pub fn make_2d<E: Default + Clone>(rows: usize, cols: usize) -> Vec<Vec<E>> {
    vec![vec![E::default(); cols]; rows]
}

/// Grows `grid` to at least `rows` rows of at least `cols` columns.
///
/// Rows shorter than `cols` are padded with `E::default()`; new all-default
/// rows are appended until there are `rows` of them. Existing rows that are
/// already long enough, and grids that already have enough rows, are never
/// truncated.
pub fn expand_2d<E: Default + Clone>(grid: &mut Vec<Vec<E>>, rows: usize, cols: usize) {
    let mut padded = 0usize;
    for row in grid.iter_mut().filter(|row| row.len() < cols) {
        row.resize(cols, E::default());
        padded += 1;
    }
    let appended = rows.saturating_sub(grid.len());
    if appended > 0 {
        grid.resize(rows, vec![E::default(); cols]);
    }
    log::trace!("expand_2d: padded {padded} rows, appended {appended} rows");
}
