use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn index_out_of_bounds(name: impl Into<String>, index: usize, len: usize) -> Error {
        Error(
            ErrorKind::IndexOutOfBounds {
                name: name.into(),
                index,
                len,
            }
            .into(),
        )
    }

    pub fn invalid_range(start: usize, end: usize, len: usize) -> Error {
        Error(ErrorKind::InvalidRange { start, end, len }.into())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{name} index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        name: String,
        index: usize,
        len: usize,
    },

    #[error("range {start}..{end} is invalid for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<Error>(),
            std::mem::size_of::<usize>()
        );
    }

    #[test]
    fn test_error_display() {
        let e = Error::index_out_of_bounds("from", 7, 3);
        assert_eq!(e.to_string(), "from index 7 is out of bounds for length 3");

        let e = Error::invalid_range(4, 2, 10);
        assert_eq!(e.to_string(), "range 4..2 is invalid for length 10");

        let e = Error::invalid_arg("size", "size >= 1");
        assert_eq!(e.to_string(), "invalid argument size: size >= 1");
    }

    #[test]
    fn test_into_kind() {
        let e: Error = ErrorKind::InvalidRange {
            start: 1,
            end: 5,
            len: 3,
        }
        .into();
        assert_eq!(
            e.kind(),
            &ErrorKind::InvalidRange {
                start: 1,
                end: 5,
                len: 3
            }
        );
        assert!(matches!(e.into_kind(), ErrorKind::InvalidRange { end: 5, .. }));
    }
}
