use crate::list::{Linked, List, NodeId};
use log::trace;

// While sorting, the ring is broken: runs are chained by `next` only and end
// at the ghost node, and `prev` is rebuilt once at the end.
impl<T: Linked> List<T> {
    /// Sort the list in place with a comparator telling whether the first
    /// element goes strictly before the second.
    ///
    /// The sort is stable: elements for which `less` is `false` both ways
    /// keep their relative order. Nodes are relinked, elements never move.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* log *n*) time and *O*(log *n*)
    /// memory.
    pub fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let front = self.front_node();
        if front.is_ghost() || self.next_of(front).is_ghost() {
            return;
        }
        trace!("merge sort over {} nodes", self.len());
        let front = self.sort_run(front, &mut less);
        self.relink_prev(front);
        self.verify_links();
    }

    /// Sort the list in ascending order, keeping equal elements in their
    /// original order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a < b);
    }

    /// Sort the run starting at `front` and return its new front node.
    fn sort_run<F>(&mut self, front: NodeId, less: &mut F) -> NodeId
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.next_of(front).is_ghost() {
            return front;
        }
        let second = self.split_run(front);
        let left = self.sort_run(front, less);
        let right = self.sort_run(second, less);
        self.merge_runs(left, right, less)
    }

    /// Cut the run starting at `front` after its lower middle node, found
    /// with a slow and a fast pointer, and return the front of the second
    /// half. The run must hold at least two nodes.
    fn split_run(&mut self, front: NodeId) -> NodeId {
        let (mut slow, mut fast) = (front, self.next_of(front));
        while !fast.is_ghost() {
            fast = self.next_of(fast);
            if !fast.is_ghost() {
                slow = self.next_of(slow);
                fast = self.next_of(fast);
            }
        }
        let (second, ghost) = (self.next_of(slow), self.ghost_node());
        self.link_mut(slow).next = ghost;
        second
    }

    /// Merge the sorted runs `left` and `right` and return the front of the
    /// merged run. The smaller front is taken first; on ties `left` wins.
    fn merge_runs<F>(&mut self, mut left: NodeId, mut right: NodeId, less: &mut F) -> NodeId
    where
        F: FnMut(&T, &T) -> bool,
    {
        // the ghost stands in front of the merged run
        let ghost = self.ghost_node();
        let mut back = ghost;
        while !left.is_ghost() && !right.is_ghost() {
            let taken = if less(self.element(right), self.element(left)) {
                let taken = right;
                right = self.next_of(right);
                taken
            } else {
                let taken = left;
                left = self.next_of(left);
                taken
            };
            self.link_mut(back).next = taken;
            back = taken;
        }
        self.link_mut(back).next = if left.is_ghost() { right } else { left };
        self.next_of(ghost)
    }

    /// Restore the ring from the `next` chain starting at `front`.
    fn relink_prev(&mut self, front: NodeId) {
        let ghost = self.ghost_node();
        let (mut prev, mut node) = (ghost, front);
        while !node.is_ghost() {
            let next = self.next_of(node);
            self.connect(prev, node);
            prev = node;
            node = next;
        }
        self.connect(prev, ghost);
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::{list_of, values};
    use crate::list::{Link, LinkMut, Linked, List};
    use std::cmp::Ordering;

    #[test]
    fn sort_small_and_large() {
        for len in [0, 1, 2, 3, 4, 5, 8, 9, 17, 100] {
            // a deterministic shuffle
            let input: Vec<i32> = (0..len).map(|i| (i * 37 + 11) % 23 - 7).collect();
            let mut list = list_of(input.clone());
            list.sort_by(|a, b| a.value < b.value);
            let mut expected = input;
            expected.sort();
            assert_eq!(values(&list), expected, "len = {}", len);
            assert_eq!(list.check_integrity(), Ok(()));
        }
    }

    #[test]
    fn sort_sorted_and_reversed_input() {
        let mut list = list_of(0..33);
        list.sort_by(|a, b| a.value < b.value);
        assert_eq!(values(&list), (0..33).collect::<Vec<_>>());
        list.sort_by(|a, b| a.value > b.value);
        assert_eq!(values(&list), (0..33).rev().collect::<Vec<_>>());
        assert_eq!(list.check_integrity(), Ok(()));
        assert_eq!(list.front().map(|item| item.value), Some(32));
        assert_eq!(list.back().map(|item| item.value), Some(0));
    }

    #[test]
    fn sort_descending() {
        let mut list = list_of(vec![3, 9, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
        list.sort_by(|a, b| a.value > b.value);
        assert_eq!(values(&list), vec![9, 9, 6, 5, 5, 5, 4, 3, 3, 2, 1, 1]);
        assert_eq!(list.check_integrity(), Ok(()));
    }

    #[derive(Debug)]
    struct Keyed {
        key: u8,
        tag: usize,
        link: Link,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    // ordered by `key` only, `tag` records the input position
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl Linked for Keyed {
        fn link(&self) -> &Link {
            &self.link
        }
    }

    impl LinkMut for Keyed {
        fn link_mut(&mut self) -> &mut Link {
            &mut self.link
        }
    }

    #[test]
    fn sort_is_stable() {
        let keys = [2u8, 0, 1, 2, 0, 1, 1, 2, 0, 0, 2, 1, 0, 2, 1, 1, 0, 2, 2, 0];
        let mut list: List<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(tag, &key)| Keyed {
                key,
                tag,
                link: Link::new(),
            })
            .collect();
        list.sort_by(|a, b| a.key < b.key);
        let sorted: Vec<_> = list.iter().map(|e| (e.key, e.tag)).collect();
        let mut expected: Vec<_> = keys.iter().copied().zip(0usize..).collect();
        expected.sort_by_key(|&(key, _)| key);
        assert_eq!(sorted, expected);
    }

    #[test]
    fn sort_by_ord() {
        let mut list: List<Keyed> = [(1, 0), (0, 1), (1, 2)]
            .into_iter()
            .map(|(key, tag)| Keyed {
                key,
                tag,
                link: Link::new(),
            })
            .collect();
        list.sort();
        let sorted: Vec<_> = list.iter().map(|e| e.tag).collect();
        assert_eq!(sorted, vec![1, 0, 2]);
    }
}
