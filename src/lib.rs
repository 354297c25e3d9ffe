//! ## Intro
//!
//! A contiguous list with insertion and removal at the front, at the back and
//! at any index, backed by a single buffer that doubles when it fills up.
//!
//! [`ArrayList`] keeps its elements in list order at the start of the buffer.
//! The buffer begins with [`INITIAL_CAPACITY`] slots, doubles on the insertion
//! that finds it full, and never shrinks.
//!
//! ```
//! use arraylist::{ArrayList, ListError};
//!
//! let mut list = ArrayList::new();
//! list.add_back(2);
//! list.add_front(1);
//! list.add(2, 4).unwrap();
//! list.add(2, 3).unwrap();
//! assert_eq!(list.to_string(), "[1, 2, 3, 4]");
//!
//! assert_eq!(list.remove(0), Ok(1));
//! assert_eq!(list.remove_back(), Ok(4));
//! assert!(list.contains(&3));
//!
//! assert_eq!(
//!     list.get(2),
//!     Err(ListError::IndexOutOfBounds { index: 2, len: 2 })
//! );
//! ```
//!
//! ## Errors
//!
//! Index based operations return [`ListError::IndexOutOfBounds`], removals from
//! an empty list return [`ListError::Empty`]. A failed call never changes the
//! elements of the list.
//!
//! ## Quirks
//!
//! - An empty list displays as `null`, a non-empty one as `[a, b, c]`.
//! - [`ArrayList::add`] rejects every index while the list is empty.
//! - [`ArrayList::remove_item`] removes only every other element of a run of
//!   adjacent matches, see its documentation.
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, [`ArrayList`] implements the
//! [`serde::Serialize`] and [`serde::Deserialize`] traits as a plain sequence.
//!
//! [`serde::Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`serde::Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
#![no_std]

extern crate alloc;

mod utils;

pub mod error;
#[doc(inline)]
pub use error::ListError;

pub mod array_list;
#[doc(inline)]
pub use array_list::{ArrayList, INITIAL_CAPACITY};

#[cfg(feature = "serde")]
mod serde;
