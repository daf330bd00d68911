use std::{
    alloc::handle_alloc_error,
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    mem,
};

use crate::ListError;

mod cursor;
mod iters;
mod node;

pub use cursor::{Cursor, CursorMut};
pub use iters::{Drain, IntoIter, Iter, IterMut};
use node::{Link, Node};

/// A singly linked list.
///
/// Besides the usual front operations the list exposes positions
/// ([`Cursor`], [`CursorMut`]) with `insert_after` / `erase_after`. The
/// before-begin position is backed by the list's own head link, so those
/// operations work the same way at the front as anywhere else.
pub struct ForwardList<T> {
    /// Sentinel link. Stores no value; it owns the first node.
    head: Link<T>,
    len: usize,
}

impl<T> ForwardList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Builds a list holding the items of `iter` in order.
    ///
    /// If a node cannot be allocated everything built so far is released
    /// and the error is returned.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, ListError> {
        let mut lst = Self::new();
        if let Err(err) = lst.try_extend(iter) {
            log::debug!("rolling back partially built list of {} nodes", lst.len);
            return Err(err);
        }
        Ok(lst)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Inserts an element at the beginning of the list
    pub fn push_front(&mut self, item: T) {
        abort_on_alloc_failure(self.try_push_front(item))
    }

    /// Inserts an element at the beginning of the list, leaving it untouched
    /// if the node cannot be allocated.
    pub fn try_push_front(&mut self, item: T) -> Result<(), ListError> {
        self.before_begin_mut().insert_after(item).map(|_| ())
    }

    /// Removes the first element. `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.before_begin_mut().erase_after()
    }

    pub fn clear(&mut self) {
        log::trace!("clearing list of {} nodes", self.len);
        self.unlink_all();
    }

    /// Exchanges the contents of two lists without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves every element of `other` to the back of `self`.
    pub fn append(&mut self, other: &mut Self) {
        let moved = mem::replace(&mut other.len, 0);
        log::trace!("appending {} nodes after {}", moved, self.len);
        *last_link(&mut self.head) = other.head.take();
        self.len += moved;
    }

    pub fn contains<Q: PartialEq<T>>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    /// The position before the first element.
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::before_begin(self)
    }

    /// The position of the first element, equal to [`ForwardList::end`] when empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        let mut cursor = self.before_begin();
        cursor.move_next();
        cursor
    }

    /// The position one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end()
    }

    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::before_begin(self)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        let mut cursor = self.before_begin_mut();
        cursor.move_next();
        cursor
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: &self.head,
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            node: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Removes elements front to back as the returned iterator advances.
    pub fn drain(&mut self) -> Drain<'_, T> {
        let item = self.head.take();
        let remaining = mem::replace(&mut self.len, 0);
        Drain {
            head_ref: &mut self.head,
            len_ref: &mut self.len,
            item_ref: item,
            remaining,
        }
    }

    /// Appends the items of `iter` at the back.
    ///
    /// Items appended before an allocation failure stay in the list.
    fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), ListError> {
        let mut tail = last_link(&mut self.head);
        for value in iter {
            tail = &mut tail.insert(Node::try_boxed(value)?).next;
            self.len += 1;
        }
        Ok(())
    }

    fn unlink_all(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: Clone> ForwardList<T> {
    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, ListError> {
        Self::try_from_iter(self.iter().cloned())
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// The copy is built before anything is replaced, so on failure `self`
    /// is unchanged.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), ListError> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

/// Walks to the link after the last node (the sentinel itself when empty).
fn last_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

fn abort_on_alloc_failure<R>(result: Result<R, ListError>) -> R {
    match result {
        Ok(r) => r,
        Err(ListError::Alloc { layout }) => handle_alloc_error(layout),
        Err(err) => unreachable!("{err}"),
    }
}

/// Exchanges the contents of two lists.
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs)
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        abort_on_alloc_failure(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        abort_on_alloc_failure(self.try_clone_from(source))
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ForwardList {{ length: {}, items: {{", self.len)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        abort_on_alloc_failure(Self::try_from_iter(iter))
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_iter(items)
    }
}

impl<T> From<Vec<T>> for ForwardList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_iter(items)
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        abort_on_alloc_failure(self.try_extend(iter))
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
