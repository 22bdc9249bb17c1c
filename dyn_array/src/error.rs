use std::fmt;

/// Broad class of an [`ArrayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A capacity or index argument was rejected.
    InvalidArgument,
    /// Two elements could not be ordered while sorting.
    TypeMismatch,
}

/// Errors reported by [`DynamicArray`](crate::DynamicArray) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Requested initial capacity was negative.
    InvalidCapacity(i64),
    /// Index outside the range accepted by the operation.
    InvalidIndex {
        /// The offending index.
        index: i64,
        /// Container size at the time of the call.
        size: usize,
    },
    /// A comparison performed by `quicksort` found an unordered pair.
    TypeMismatch,
}

impl ArrayError {
    pub(crate) fn index(index: usize, size: usize) -> Self {
        ArrayError::InvalidIndex {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            size,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::InvalidCapacity(_) | ArrayError::InvalidIndex { .. } => {
                ErrorKind::InvalidArgument
            }
            ArrayError::TypeMismatch => ErrorKind::TypeMismatch,
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::InvalidCapacity(capacity) => {
                write!(f, "invalid capacity: {}", capacity)
            }
            ArrayError::InvalidIndex { index, size } => {
                write!(f, "invalid index: {}, size = {}", index, size)
            }
            ArrayError::TypeMismatch => write!(f, "elements in the array are not comparable"),
        }
    }
}

impl std::error::Error for ArrayError {}
