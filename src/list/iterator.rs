use crate::list::{Linked, List, NodeId};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the elements of a `List`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the list, where `start` is inclusive and `end` is not.
///
/// # Examples
///
/// ```compile_fail
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::from_iter(["1", "2", "3"]);
/// let mut iter = queue.iter();
///
/// // Won't compile, because the queue is already borrowed immutably.
/// queue.insert_tail("4").unwrap();
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    start: NodeId,
    end: NodeId,
    len: usize,
    list: &'a List<T>,
}

impl<'a, T: Linked + 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            start: list.front_node(),
            end: list.ghost_node(),
            len: list.len(),
            list,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            end: self.end,
            len: self.len,
            list: self.list,
        }
    }
}

impl<'a, T: Linked + fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: Linked + 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let current = self.start;
        self.start = self.list.next_of(current);
        self.len -= 1;
        Some(self.list.element(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: Linked + 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end = self.list.prev_of(self.end);
        self.len -= 1;
        Some(self.list.element(self.end))
    }
}

impl<'a, T: Linked + 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Linked + 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the `into_iter` method on [`List`]
/// (provided by the `IntoIterator` trait).
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: Linked> IntoIter<T> {
    pub(crate) fn new(list: List<T>) -> Self {
        Self { list }
    }
}

impl<T: Linked + fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T: Linked> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Linked> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T: Linked> ExactSizeIterator for IntoIter<T> {}

impl<T: Linked> FusedIterator for IntoIter<T> {}

impl<T: Linked> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T: Linked> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| self.push_back(elt));
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::{list_of, values, Item};

    #[test]
    fn iter_both_ends() {
        let list = list_of(0..5);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next().map(|item| item.value), Some(0));
        assert_eq!(iter.next_back().map(|item| item.value), Some(4));
        assert_eq!(iter.len(), 3);
        assert_eq!(
            iter.map(|item| item.value).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(list.iter().last().map(|item| item.value), Some(4));
        assert_eq!(list.iter().rev().map(|item| item.value).collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn into_iter_drains_the_list() {
        let list = list_of(0..4);
        let mut iter = list.into_iter();
        assert_eq!(iter.next_back().map(|item| item.value), Some(3));
        assert_eq!(
            iter.map(|item| item.value).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn extend_appends() {
        let mut list = list_of(0..2);
        list.extend((2..4).map(Item::new));
        assert_eq!(values(&list), vec![0, 1, 2, 3]);
        assert_eq!(list.check_integrity(), Ok(()));
    }
}
