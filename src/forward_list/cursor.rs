//! Positions inside a [`ForwardList`].
//!
//! A position is one of three things: the before-begin position (the list's
//! sentinel link), an element, or the end. Every position except the end has
//! a "next" link, and `insert_after` / `erase_after` operate on that link,
//! the sentinel's included.

use std::{fmt, ptr};

use super::{
    node::{Link, Node},
    ForwardList,
};
use crate::ListError;

/// A read-only position in a list.
///
/// Cursors are `Copy`; a copy moves independently of the original. Two
/// cursors compare equal when they refer to the same position of the same
/// list, or when both are at the end.
pub struct Cursor<'a, T> {
    current: Option<&'a T>,
    next: Option<&'a Link<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn before_begin(list: &'a ForwardList<T>) -> Self {
        Self {
            current: None,
            next: Some(&list.head),
        }
    }

    pub(crate) fn end() -> Self {
        Self {
            current: None,
            next: None,
        }
    }

    /// The element at this position. `None` at before-begin and at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.current
    }

    /// The element right after this position, if any.
    pub fn peek_next(&self) -> Option<&'a T> {
        self.next?.as_deref().map(|node| &node.value)
    }

    /// Advances to the following position. A cursor at the end stays there.
    pub fn move_next(&mut self) {
        match self.next.take() {
            Some(Some(node)) => {
                self.current = Some(&node.value);
                self.next = Some(&node.next);
            }
            _ => self.current = None,
        }
    }

    pub fn is_before_begin(&self) -> bool {
        self.current.is_none() && self.next.is_some()
    }

    pub fn is_end(&self) -> bool {
        self.next.is_none()
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.next, other.next) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            write!(f, "Cursor(end)")
        } else if let Some(value) = self.current {
            f.debug_tuple("Cursor").field(value).finish()
        } else {
            write!(f, "Cursor(before_begin)")
        }
    }
}

/// A position that can modify the list it points into.
///
/// Only one may exist per list at a time. Use [`CursorMut::as_cursor`] or
/// `Cursor::from` wherever a read-only position is wanted.
pub struct CursorMut<'a, T> {
    current: Option<&'a mut T>,
    next: Option<&'a mut Link<T>>,
    len: &'a mut usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn before_begin(list: &'a mut ForwardList<T>) -> Self {
        let ForwardList { head, len } = list;
        Self {
            current: None,
            next: Some(head),
            len,
        }
    }

    pub fn current(&mut self) -> Option<&mut T> {
        self.current.as_deref_mut()
    }

    pub fn peek_next(&mut self) -> Option<&mut T> {
        self.next
            .as_deref_mut()?
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    /// Advances to the following position. A cursor at the end stays there.
    pub fn move_next(&mut self) {
        match self.next.take() {
            Some(Some(node)) => {
                let Node { value, next } = &mut **node;
                self.current = Some(value);
                self.next = Some(next);
            }
            _ => self.current = None,
        }
    }

    pub fn is_before_begin(&self) -> bool {
        self.current.is_none() && self.next.is_some()
    }

    pub fn is_end(&self) -> bool {
        self.next.is_none()
    }

    /// Inserts `value` right after this position and returns the new element.
    ///
    /// The cursor does not move. At before-begin this is a push to the front.
    /// Nothing changes if the cursor is at the end or the node cannot be
    /// allocated.
    pub fn insert_after(&mut self, value: T) -> Result<&mut T, ListError> {
        let link = self.next.as_deref_mut().ok_or(ListError::PastEnd)?;
        let mut node = Node::try_boxed(value)?;
        node.next = link.take();
        *self.len += 1;
        Ok(&mut link.insert(node).value)
    }

    /// Unlinks and returns the element right after this position.
    ///
    /// The cursor does not move, so the position now following it is the one
    /// after the removed element: [`CursorMut::peek_next`] yields that element,
    /// and one [`CursorMut::move_next`] reaches it (or the end). Returns `None`
    /// when there is nothing after this position.
    pub fn erase_after(&mut self) -> Option<T> {
        let link = self.next.as_deref_mut()?;
        let Node { value, next } = *link.take()?;
        *link = next;
        debug_assert!(*self.len > 0);
        *self.len -= 1;
        Some(value)
    }

    /// Borrows this position as a read-only cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.current.as_deref(),
            next: self.next.as_deref(),
        }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor {
            current: cursor.current.map(|value| &*value),
            next: cursor.next.map(|link| &*link),
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.as_cursor()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn before_begin_then_begin() {
        let lst = ForwardList::from([1, 2]);
        let mut c = lst.before_begin();
        assert!(c.is_before_begin());
        assert_eq!(c.current(), None);
        assert_eq!(c.peek_next(), Some(&1));
        c.move_next();
        assert_eq!(c, lst.begin());
        assert_eq!(c.current(), Some(&1));
    }

    #[test]
    fn walk_to_end_and_stay() {
        let lst = ForwardList::from([1, 2]);
        let mut c = lst.begin();
        c.move_next();
        assert_eq!(c.current(), Some(&2));
        assert_eq!(c.peek_next(), None);
        c.move_next();
        assert!(c.is_end());
        assert_eq!(c, lst.end());
        c.move_next();
        assert_eq!(c, lst.end());
    }

    #[test]
    fn empty_list_positions() {
        let lst: ForwardList<i32> = ForwardList::new();
        assert_eq!(lst.begin(), lst.end());
        assert_ne!(lst.before_begin(), lst.end());
        assert_ne!(lst.before_begin(), lst.begin());
    }

    #[test]
    fn equality_is_identity_not_value() {
        let lst = ForwardList::from([5, 5]);
        let a = lst.begin();
        let mut b = lst.begin();
        assert_eq!(a, b);
        b.move_next();
        assert_eq!(a.current(), b.current());
        assert_ne!(a, b);

        let other = ForwardList::from([5, 5]);
        assert_ne!(lst.begin(), other.begin());
        assert_eq!(lst.end(), other.end());
    }

    #[test]
    fn insert_after_before_begin_is_push_front() {
        let mut a = ForwardList::from([2, 3]);
        let mut b = a.clone();
        assert_eq!(a.before_begin_mut().insert_after(1), Ok(&mut 1));
        b.push_front(1);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn erase_after_before_begin_is_pop_front() {
        let mut a = ForwardList::from([1, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a.before_begin_mut().erase_after(), b.pop_front());
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn insert_returns_new_element() {
        let mut lst = ForwardList::from([1, 3]);
        let mut c = lst.begin_mut();
        let new = c.insert_after(2).unwrap();
        *new *= 10;
        assert_eq!(c.peek_next(), Some(&mut 20));
        assert_eq!(c.current(), Some(&mut 1));
        drop(c);
        assert_eq!(lst.iter().copied().collect::<Vec<_>>(), vec![1, 20, 3]);
    }

    #[test]
    fn insert_at_end_is_rejected() {
        let mut lst = ForwardList::from([1]);
        let mut c = lst.begin_mut();
        c.move_next();
        assert!(c.is_end());
        assert_eq!(c.insert_after(2), Err(ListError::PastEnd));
        drop(c);
        assert_eq!(lst.len(), 1);
    }

    #[test]
    fn insert_after_last_appends() {
        let mut lst = ForwardList::from([1, 2]);
        let mut c = lst.begin_mut();
        c.move_next();
        c.insert_after(3).unwrap();
        c.move_next();
        assert_eq!(c.current(), Some(&mut 3));
        c.move_next();
        assert!(c.is_end());
        drop(c);
        assert_eq!(lst, ForwardList::from([1, 2, 3]));
    }

    #[test]
    fn erase_after_keeps_position() {
        let mut lst = ForwardList::from([1, 2, 3, 4]);
        let mut c = lst.begin_mut();
        assert_eq!(c.erase_after(), Some(2));
        assert_eq!(c.peek_next(), Some(&mut 3));
        assert_eq!(c.erase_after(), Some(3));
        assert_eq!(c.erase_after(), Some(4));
        assert_eq!(c.erase_after(), None);
        assert_eq!(c.peek_next(), None);
        drop(c);
        assert_eq!(lst.len(), 1);
        assert_eq!(lst.front(), Some(&1));
    }

    #[test]
    fn erase_after_then_move_next_reaches_following() {
        let mut lst = ForwardList::from([1, 2, 3]);
        let mut c = lst.begin_mut();
        assert_eq!(c.erase_after(), Some(2));
        c.move_next();
        assert_eq!(c.current(), Some(&mut 3));
        assert_eq!(c.erase_after(), None);
        c.move_next();
        assert!(c.is_end());
    }

    #[test]
    fn erase_after_at_end_does_nothing() {
        let mut lst: ForwardList<i32> = ForwardList::new();
        let mut c = lst.before_begin_mut();
        assert_eq!(c.erase_after(), None);
        c.move_next();
        assert!(c.is_end());
        assert_eq!(c.erase_after(), None);
        drop(c);
        assert!(lst.is_empty());
    }

    #[test]
    fn mutable_cursor_as_read_only() {
        let mut lst = ForwardList::from([1, 2, 3]);
        let mut c = lst.begin_mut();
        c.move_next();
        let view = c.as_cursor();
        assert_eq!(view.current(), Some(&2));
        assert_eq!(view.peek_next(), Some(&3));

        let c: Cursor<'_, i32> = c.into();
        let mut d = c;
        d.move_next();
        assert_eq!(d.current(), Some(&3));
        assert_eq!(c.current(), Some(&2));
    }

    #[test]
    fn converted_cursor_matches_read_only_position() {
        let mut lst = ForwardList::from([1, 2]);
        let begin_addr = {
            let c = lst.begin();
            format!("{:p}", c.current().unwrap())
        };
        let c = Cursor::from(lst.begin_mut());
        assert_eq!(format!("{:p}", c.current().unwrap()), begin_addr);
    }

    #[test]
    fn debug_names_position() {
        let lst = ForwardList::from([4]);
        assert_eq!(format!("{:?}", lst.before_begin()), "Cursor(before_begin)");
        assert_eq!(format!("{:?}", lst.begin()), "Cursor(4)");
        assert_eq!(format!("{:?}", lst.end()), "Cursor(end)");
    }
}
