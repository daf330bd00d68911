pub use crate::forward_list::{Cursor, CursorMut, ForwardList};
pub use crate::traits::iter::{Drainable, Iterable, IterableMut};
pub use crate::traits::Collection;
pub use crate::ListError;
