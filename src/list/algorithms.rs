use crate::list::{Linked, List};
use log::trace;

mod merge;
mod sort;

impl<T: Linked + PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Linked + Eq> Eq for List<T> {}

impl<T: Linked + Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// Reordering algorithms. They only relink nodes, elements never move
// inside the arena.
impl<T: Linked> List<T> {
    /// Reverse the list in place by moving every node, in order, to the
    /// front.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        while node != ghost {
            let next = self.next_of(node);
            self.move_after(node, ghost);
            node = next;
        }
    }

    /// Reverse every run of `k` consecutive nodes, starting from the front.
    /// A trailing run shorter than `k` keeps its order.
    ///
    /// `k <= 1` leaves the list unchanged, and so does a `k` greater than
    /// the length.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    pub fn reverse_groups(&mut self, k: usize) {
        if k <= 1 {
            return;
        }
        trace!("reverse groups of {} over {} nodes", k, self.len());
        let mut remaining = self.len();
        // `cursor` is the node right before the group being reversed.
        let mut cursor = self.ghost_node();
        while remaining >= k {
            let mut tail = cursor;
            for _ in 0..k {
                tail = self.next_of(tail);
            }
            let next_group = self.next_of(tail);
            // Pull the last node of the group to the place after `cursor`,
            // k - 1 times. The first node of the group ends up last.
            for _ in 0..k - 1 {
                let node = tail;
                tail = self.prev_of(tail);
                self.move_after(node, cursor);
                cursor = node;
            }
            remaining -= k;
            cursor = self.prev_of(next_group);
        }
    }

    /// Swap every two adjacent nodes: the 1st with the 2nd, the 3rd with the
    /// 4th, and so on. A trailing unpaired node stays put.
    pub fn swap_pairs(&mut self) {
        let mut pos = self.ghost_node();
        loop {
            let first = self.next_of(pos);
            if first.is_ghost() {
                break;
            }
            let second = self.next_of(first);
            if second.is_ghost() {
                break;
            }
            self.move_after(second, pos);
            pos = first;
        }
    }

    /// Remove the middle element and return it, or `None` if the list is
    /// empty. For an even length *n*, the element at index (*n* - 1) / 2 is
    /// removed.
    ///
    /// Two cursors walk inward from both ends until they meet or become
    /// adjacent.
    pub fn remove_middle(&mut self) -> Option<T> {
        let (mut front, mut back) = (self.front_node(), self.back_node());
        while front != back && self.next_of(front) != back {
            front = self.next_of(front);
            back = self.prev_of(back);
        }
        self.detach_node(front)
    }

    /// Remove every element that belongs to a run of adjacent elements
    /// considered the same by `same`, keeping none of the run. Returns the
    /// number of removed elements.
    ///
    /// Only adjacent elements are compared, so on an unsorted list equal
    /// elements that are apart survive.
    pub fn dedup_runs_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut removed = 0;
        let mut node = self.front_node();
        while !node.is_ghost() {
            let mut next = self.next_of(node);
            let mut duplicated = false;
            while !next.is_ghost() && same(self.element(node), self.element(next)) {
                let after = self.next_of(next);
                self.detach_node(next);
                removed += 1;
                duplicated = true;
                next = after;
            }
            if duplicated {
                self.detach_node(node);
                removed += 1;
            }
            node = next;
        }
        if removed > 0 {
            trace!("dedup removed {} nodes", removed);
        }
        removed
    }

    /// Scan from back to front and remove every element dominated by the
    /// running extreme on its right, i.e. `dominated(element, extreme)`
    /// returns `true`. An element that is not dominated becomes the new
    /// extreme. Returns the length afterwards.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    pub fn retain_monotonic_by<F>(&mut self, mut dominated: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut extreme = self.back_node();
        if extreme.is_ghost() {
            return 0;
        }
        let mut node = self.prev_of(extreme);
        while !node.is_ghost() {
            let prev = self.prev_of(node);
            if dominated(self.element(node), self.element(extreme)) {
                self.detach_node(node);
            } else {
                extreme = node;
            }
            node = prev;
        }
        trace!("monotonic filter kept {} nodes", self.len());
        self.len()
    }
}
