use std::alloc::Layout;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The allocator could not provide memory for a new node.
    #[error("failed to allocate a list node ({} bytes, align {})", .layout.size(), .layout.align())]
    Alloc { layout: Layout },
    /// A cursor sitting at the end of the list has no link to insert into.
    #[error("cannot insert after the end of the list")]
    PastEnd,
}
