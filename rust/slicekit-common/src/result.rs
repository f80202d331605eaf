pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with an `InvalidArgument` error when the condition does not hold.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Returns early with an `IndexOutOfBounds` error when `index >= len`.
#[macro_export]
macro_rules! verify_index {
    ($name:expr, $index:expr, $len:expr) => {{
        $crate::result::verify_index(stringify!($name), $index, $len)?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_index(name: &str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        index_out_of_bounds(name, index, len)
    }
}

/// Checks that `start..end` is a valid sub-range of a sequence of length `len`.
#[inline]
pub fn verify_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start <= end && end <= len {
        Ok(())
    } else {
        invalid_range(start, end, len)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    log::debug!("argument check failed for {name}: {condition}");
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn index_out_of_bounds(name: &str, index: usize, len: usize) -> Result<()> {
    log::debug!("index check failed for {name}: {index} >= {len}");
    Err(crate::error::Error::index_out_of_bounds(name, index, len))
}

#[cold]
pub fn invalid_range(start: usize, end: usize, len: usize) -> Result<()> {
    log::debug!("range check failed: {start}..{end} within 0..{len}");
    Err(crate::error::Error::invalid_range(start, end, len))
}
