//! Error type for fallible [`ArrayList`](crate::ArrayList) operations.
//!
//! Every error is raised before the list is touched, so a failed call leaves
//! the elements and their order exactly as they were.

use core::fmt::{Display, Formatter, Result};

/// Error returned by the checked operations of [`ArrayList`](crate::ArrayList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// The index lies outside the range accepted by the operation.
    ///
    /// The accepted range differs per operation: `get`, `set` and `remove`
    /// require an existing slot (`index < len`), `add` also accepts
    /// `index == len` but rejects every index on an empty list.
    IndexOutOfBounds {
        /// The index that was passed in.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// The list holds no elements to remove.
    Empty,
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ListError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for a list of length {len}")
            }
            ListError::Empty => write!(f, "cannot remove an element from an empty list"),
        }
    }
}

impl core::error::Error for ListError {}
