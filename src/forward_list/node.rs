use std::{
    alloc::{alloc, Layout},
    ptr::{self, NonNull},
};

use crate::ListError;

/// An owning link to the rest of the chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates an unlinked node holding `value`.
    ///
    /// The node is created with an empty `next` so a failed allocation can
    /// never take a chain down with it. On failure `value` is dropped.
    pub(crate) fn try_boxed(value: T) -> Result<Box<Self>, ListError> {
        let layout = Layout::new::<Self>();
        // SAFETY: a node always carries a link, so the layout is never zero sized
        let raw = unsafe { alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(raw) else {
            log::error!(
                "node allocation failed (size {}, align {})",
                layout.size(),
                layout.align()
            );
            return Err(ListError::Alloc { layout });
        };
        // SAFETY: `ptr` is non-null and was allocated for `Self`
        unsafe { ptr::write(ptr.as_ptr(), Node { value, next: None }) };
        // SAFETY: the memory came from the global allocator with the layout of `Self`
        // and was initialized above
        Ok(unsafe { Box::from_raw(ptr.as_ptr()) })
    }
}
