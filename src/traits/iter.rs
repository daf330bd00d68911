pub trait Iterable {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item> + 'a
    where
        Self: 'a;
    fn iter<'a>(&'a self) -> Self::Iter<'a>;
}

pub trait IterableMut {
    type Item;
    type IterMut<'a>: Iterator<Item = &'a mut Self::Item> + 'a
    where
        Self: 'a;
    fn iter_mut<'a>(&'a mut self) -> Self::IterMut<'a>;
}

pub trait Drainable {
    type Item;
    type Drain<'a>: Iterator<Item = Self::Item> + 'a
    where
        Self: 'a;
    fn drain<'a>(&'a mut self) -> Self::Drain<'a>;
}

mod impls {
    use super::*;
    use crate::forward_list::{self, ForwardList};

    impl<T> Iterable for ForwardList<T> {
        type Item = T;
        type Iter<'a> = forward_list::Iter<'a, T> where T: 'a;
        fn iter<'a>(&'a self) -> Self::Iter<'a> {
            ForwardList::iter(self)
        }
    }

    impl<T> IterableMut for ForwardList<T> {
        type Item = T;
        type IterMut<'a> = forward_list::IterMut<'a, T> where T: 'a;
        fn iter_mut<'a>(&'a mut self) -> Self::IterMut<'a> {
            ForwardList::iter_mut(self)
        }
    }

    impl<T> Drainable for ForwardList<T> {
        type Item = T;
        type Drain<'a> = forward_list::Drain<'a, T> where T: 'a;
        fn drain<'a>(&'a mut self) -> Self::Drain<'a> {
            ForwardList::drain(self)
        }
    }

    impl<T> Iterable for Vec<T> {
        type Item = T;
        type Iter<'a> = std::slice::Iter<'a, T> where T: 'a;
        fn iter<'a>(&'a self) -> Self::Iter<'a> {
            self.as_slice().iter()
        }
    }

    impl<T> IterableMut for Vec<T> {
        type Item = T;
        type IterMut<'a> = std::slice::IterMut<'a, T> where T: 'a;
        fn iter_mut<'a>(&'a mut self) -> Self::IterMut<'a> {
            self.as_mut_slice().iter_mut()
        }
    }

    impl<T> Drainable for Vec<T> {
        type Item = T;
        type Drain<'a> = std::vec::Drain<'a, T> where T: 'a;
        fn drain<'a>(&'a mut self) -> Self::Drain<'a> {
            Vec::drain(self, ..)
        }
    }
}

/// `true` if both collections yield equal items in the same order.
pub fn same_items<A, B>(a: &A, b: &B) -> bool
where
    A: Iterable,
    B: Iterable,
    A::Item: PartialEq<B::Item>,
{
    let mut a = a.iter();
    let mut b = b.iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if x == y => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}
