use crate::error::IntegrityError;
use crate::list::{Linked, List};

impl<T: Linked> List<T> {
    /// Walk the ring once and verify its structure.
    ///
    /// Checks that for every node `n` (the ghost included) `n.next.prev == n`,
    /// that no link refers to a released node, and that every node owned by
    /// the list is reachable from the ghost node. Together these imply
    /// `n.prev.next == n` as well.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["b", "a", "c"]);
    /// queue.sort(false);
    /// assert_eq!(queue.as_list().check_integrity(), Ok(()));
    /// ```
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let allocated = self.nodes.len();
        let mut node = self.ghost_node();
        let mut reachable = 0;
        loop {
            let next = self.next_of(node);
            if !next.is_ghost() && !self.nodes.contains(next) {
                return Err(IntegrityError::Dangling { node });
            }
            if self.prev_of(next) != node {
                return Err(IntegrityError::Asymmetric { node });
            }
            if next.is_ghost() {
                break;
            }
            reachable += 1;
            if reachable > allocated {
                // a cycle that misses the ghost node
                return Err(IntegrityError::Leaked {
                    reachable,
                    allocated,
                });
            }
            node = next;
        }
        if reachable != allocated {
            return Err(IntegrityError::Leaked {
                reachable,
                allocated,
            });
        }
        Ok(())
    }
}
