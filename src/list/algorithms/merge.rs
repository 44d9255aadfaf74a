use crate::list::{Linked, List};
use log::trace;
use std::collections::TryReserveError;

impl<T: Linked> List<T> {
    /// Merge the sorted list `other` into this sorted list, so that the
    /// result is sorted by `less`. After this operation, `other` becomes
    /// empty.
    ///
    /// A cursor walks this list and every front element of `other` that
    /// goes strictly before the cursor's element is moved in front of it.
    /// On ties, elements already in this list come first. Whatever remains
    /// in `other` once the cursor reaches the end is appended as a whole.
    ///
    /// Elements of `other` are moved into this list's node storage rather
    /// than spliced. Room for every moved element is reserved first, so on
    /// error neither list is changed. A drained `other` gives back its spare
    /// node memory.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time, where *n* and
    /// *m* are the lengths of both lists.
    pub fn try_merge_by<F>(&mut self, other: &mut Self, mut less: F) -> Result<(), TryReserveError>
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.nodes.try_reserve(other.len())?;
        if other.is_empty() {
            return Ok(());
        }
        trace!("merging {} nodes into {}", other.len(), self.len());
        let mut cursor = self.front_node();
        while !cursor.is_ghost() {
            match other.front() {
                Some(front) if less(front, self.element(cursor)) => {
                    if let Some(elt) = other.pop_front() {
                        let prev = self.prev_of(cursor);
                        self.attach_node(prev, cursor, elt);
                    }
                }
                Some(_) => cursor = self.next_of(cursor),
                None => break,
            }
        }
        self.try_append(other)?;
        self.verify_links();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::{list_of, values, Item};
    use crate::list::{Link, LinkMut, Linked, List};

    fn less(a: &Item, b: &Item) -> bool {
        a.value < b.value
    }

    #[test]
    fn merge_interleaved() {
        let mut list = list_of(vec![1, 4, 6, 9]);
        let mut other = list_of(vec![0, 2, 4, 5, 10, 11]);
        list.try_merge_by(&mut other, less).unwrap();
        assert_eq!(values(&list), vec![0, 1, 2, 4, 4, 5, 6, 9, 10, 11]);
        assert!(other.is_empty());
        assert_eq!(list.check_integrity(), Ok(()));
        assert_eq!(other.check_integrity(), Ok(()));
    }

    #[test]
    fn merge_with_empty_sides() {
        let mut list = List::new();
        let mut other = list_of(0..3);
        list.try_merge_by(&mut other, less).unwrap();
        assert_eq!(values(&list), vec![0, 1, 2]);

        let mut empty = List::new();
        list.try_merge_by(&mut empty, less).unwrap();
        assert_eq!(values(&list), vec![0, 1, 2]);
        assert_eq!(list.check_integrity(), Ok(()));
    }

    #[derive(Debug)]
    struct Tagged {
        key: i32,
        mine: bool,
        link: Link,
    }

    impl Linked for Tagged {
        fn link(&self) -> &Link {
            &self.link
        }
    }

    impl LinkMut for Tagged {
        fn link_mut(&mut self) -> &mut Link {
            &mut self.link
        }
    }

    fn tagged(keys: &[i32], mine: bool) -> List<Tagged> {
        keys.iter()
            .map(|&key| Tagged {
                key,
                mine,
                link: Link::new(),
            })
            .collect()
    }

    #[test]
    fn merge_keeps_own_elements_first_on_ties() {
        let mut list = tagged(&[1, 2, 2], true);
        let mut other = tagged(&[1, 2, 3], false);
        list.try_merge_by(&mut other, |a, b| a.key < b.key).unwrap();
        let merged: Vec<_> = list.iter().map(|e| (e.key, e.mine)).collect();
        assert_eq!(
            merged,
            vec![(1, true), (1, false), (2, true), (2, true), (2, false), (3, false)]
        );
    }

    #[test]
    fn merge_descending() {
        let mut list = list_of(vec![9, 5, 1]);
        let mut other = list_of(vec![8, 5, 0]);
        list.try_merge_by(&mut other, |a, b| a.value > b.value).unwrap();
        assert_eq!(values(&list), vec![9, 8, 5, 5, 1, 0]);
    }
}
