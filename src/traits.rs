pub mod iter;

use iter::*;

/// Anything that can be built from, walked over, and drained back into items.
pub trait Collection<T>:
    Iterable<Item = T> + IterableMut<Item = T> + Drainable<Item = T> + FromIterator<T>
{
}

impl<T, C> Collection<T> for C where
    C: Iterable<Item = T> + IterableMut<Item = T> + Drainable<Item = T> + FromIterator<T>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ForwardList;

    fn rebuild_doubled<C: Collection<i32>>(mut c: C) -> C {
        for v in c.iter_mut() {
            *v *= 2;
        }
        c.drain().collect()
    }

    #[test]
    fn list_is_a_collection() {
        let lst = rebuild_doubled(ForwardList::from([1, 2, 3]));
        assert!(iter::same_items(&lst, &vec![2, 4, 6]));
        let v = rebuild_doubled(vec![1, 2, 3]);
        assert_eq!(v, vec![2, 4, 6]);
    }
}
