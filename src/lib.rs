//! A singly linked list with a before-begin sentinel, position-based
//! `insert_after` / `erase_after`, and fallible allocation.
//!
//! ```
//! use forward_list::ForwardList;
//!
//! let mut lst = ForwardList::from([2, 3]);
//! lst.before_begin_mut().insert_after(1).unwrap();
//! assert_eq!(lst.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

pub mod prelude;

mod error;
pub mod forward_list;
pub mod traits;

pub use error::ListError;
pub use forward_list::{swap, Cursor, CursorMut, ForwardList};
