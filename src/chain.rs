//! Queues of queues, and merging them into one.

use crate::error::Result;
use crate::list::{Link, LinkMut, Linked, List};
use crate::queue::Queue;
use crate::Iter;
use log::debug;
use std::fmt;
use std::mem;

/// One queue of a [`Chain`], threaded into it by the embedded `chain` link.
pub struct QueueContext {
    queue: Queue,
    id: usize,
    pub(crate) chain: Link,
}

impl QueueContext {
    /// The id handed out by [`Chain::push`].
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Number of elements of the queue, counted by walking it.
    pub fn size(&self) -> usize {
        self.queue.size()
    }
}

impl Linked for QueueContext {
    fn link(&self) -> &Link {
        &self.chain
    }
}

impl LinkMut for QueueContext {
    fn link_mut(&mut self) -> &mut Link {
        &mut self.chain
    }
}

impl fmt::Debug for QueueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueContext")
            .field("id", &self.id)
            .field("queue", &self.queue)
            .finish()
    }
}

/// A circular list of queues.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{Chain, Queue};
///
/// let mut chain = Chain::new();
/// let first = chain.push(Queue::from_iter(["a", "c"])).unwrap();
/// let second = chain.push(Queue::from_iter(["b"])).unwrap();
/// chain.push(Queue::from_iter(["d"])).unwrap();
///
/// assert_eq!(chain.merge(false), Ok(4));
/// assert_eq!(chain.get(first).unwrap().queue().values(), vec!["a", "b", "c", "d"]);
/// assert!(chain.get(second).unwrap().queue().is_empty());
/// ```
#[derive(Default)]
pub struct Chain {
    contexts: List<QueueContext>,
    next_id: usize,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            contexts: List::new(),
            next_id: 0,
        }
    }

    /// Append `queue` to the chain and return the id of its context.
    pub fn push(&mut self, queue: Queue) -> Result<usize> {
        let id = self.next_id;
        self.contexts.try_push_back(QueueContext {
            queue,
            id,
            chain: Link::new(),
        })?;
        self.next_id += 1;
        Ok(id)
    }

    /// Number of queues in the chain.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    pub fn first(&self) -> Option<&QueueContext> {
        self.contexts.front()
    }

    pub fn get(&self, id: usize) -> Option<&QueueContext> {
        self.contexts.iter().find(|context| context.id == id)
    }

    /// The queue of the context `id`. Only the queue is handed out, the
    /// context stays threaded into the chain.
    pub fn get_mut(&mut self, id: usize) -> Option<&mut Queue> {
        let mut node = self.contexts.front_node();
        while !node.is_ghost() {
            if self.contexts.element(node).id == id {
                return Some(&mut self.contexts.element_mut(node).queue);
            }
            node = self.contexts.next_of(node);
        }
        None
    }

    pub fn iter(&self) -> Iter<'_, QueueContext> {
        self.contexts.iter()
    }

    /// Merge every queue of the chain into the first one and return the
    /// number of elements it then holds. Each queue must already be sorted
    /// in the order `descend` names; the other queues are left in the chain,
    /// empty.
    ///
    /// The queues are merged pairwise: each one in turn is merged into the
    /// first queue by a linear walk, so the whole merge takes
    /// *O*(*N* × *n*) time for *N* queues holding *n* elements in total.
    ///
    /// Every queue owns its own node storage, so elements are not spliced
    /// across: each one is moved out of its queue and re-inserted into the
    /// first one, and a drained queue gives back its spare node memory.
    /// Room for all incoming elements is therefore reserved in the first
    /// queue before anything moves; on [`Error::Alloc`] no queue is changed.
    ///
    /// An empty chain merges to 0 elements.
    ///
    /// [`Error::Alloc`]: crate::Error::Alloc
    pub fn merge(&mut self, descend: bool) -> Result<usize> {
        self.merge_reserving(descend, Queue::try_reserve)
    }

    /// [`Chain::merge`], with the up-front reservation in the first queue
    /// done by `reserve`.
    fn merge_reserving<R>(&mut self, descend: bool, reserve: R) -> Result<usize>
    where
        R: FnOnce(&mut Queue, usize) -> Result<()>,
    {
        let mut cursor = self.contexts.cursor_start_mut();
        let incoming: usize = cursor.view().iter().skip(1).map(QueueContext::size).sum();
        // The first queue is taken out while the others are visited.
        let mut target = match cursor.current_mut() {
            Some(first) => mem::take(&mut first.queue),
            None => return Ok(0),
        };
        let mut merged = 1;
        let mut result = reserve(&mut target, incoming);
        while result.is_ok() && cursor.move_next().is_ok() {
            let Some(context) = cursor.current_mut() else {
                break;
            };
            if context.queue.is_empty() {
                continue;
            }
            result = target.merge_sorted(&mut context.queue, descend);
            merged += 1;
        }
        let total = target.size();
        cursor.move_to_start();
        if let Some(first) = cursor.current_mut() {
            first.queue = target;
        }
        result?;
        debug!(
            "merged {} of {} queues into {} elements",
            merged,
            self.contexts.len(),
            total
        );
        Ok(total)
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Chain;
    use crate::error::Error;
    use crate::queue::Queue;

    fn chain_of(queues: &[&[&str]]) -> (Chain, Vec<usize>) {
        let mut chain = Chain::new();
        let ids = queues
            .iter()
            .map(|values| chain.push(values.iter().copied().collect()).unwrap())
            .collect();
        (chain, ids)
    }

    #[test]
    fn merge_three_queues() {
        let (mut chain, ids) = chain_of(&[&["a", "c"], &["b"], &["d"]]);
        assert_eq!(chain.merge(false), Ok(4));
        let first = chain.get(ids[0]).unwrap();
        assert_eq!(first.queue().values(), vec!["a", "b", "c", "d"]);
        assert_eq!(first.size(), 4);
        assert!(chain.get(ids[1]).unwrap().queue().is_empty());
        assert!(chain.get(ids[2]).unwrap().queue().is_empty());
        assert_eq!(chain.len(), 3);
        for context in chain.iter() {
            assert_eq!(context.queue().as_list().check_integrity(), Ok(()));
        }
        assert_eq!(chain.contexts.check_integrity(), Ok(()));
    }

    #[test]
    fn merge_descending() {
        let (mut chain, ids) = chain_of(&[&["d", "b"], &["e", "c", "a"]]);
        assert_eq!(chain.merge(true), Ok(5));
        assert_eq!(
            chain.get(ids[0]).unwrap().queue().values(),
            vec!["e", "d", "c", "b", "a"]
        );
    }

    #[test]
    fn merge_into_empty_first_queue() {
        let (mut chain, ids) = chain_of(&[&[], &["x", "y"], &[], &["w"]]);
        assert_eq!(chain.merge(false), Ok(3));
        assert_eq!(chain.first().unwrap().id(), ids[0]);
        assert_eq!(chain.first().unwrap().queue().values(), vec!["w", "x", "y"]);
    }

    #[test]
    fn merge_edge_cases() {
        let mut empty = Chain::new();
        assert_eq!(empty.merge(false), Ok(0));
        assert!(empty.is_empty());

        let (mut single, _) = chain_of(&[&["b", "a"]]);
        // a single queue is returned as is, even unsorted
        assert_eq!(single.merge(false), Ok(2));
        assert_eq!(single.first().unwrap().queue().values(), vec!["b", "a"]);
    }

    #[test]
    fn get_mut_by_id() {
        let (mut chain, ids) = chain_of(&[&["a"], &["b"]]);
        chain.get_mut(ids[1]).unwrap().insert_tail("c").unwrap();
        assert_eq!(chain.get(ids[1]).unwrap().queue().values(), vec!["b", "c"]);
        assert!(chain.get_mut(42).is_none());
        assert_eq!(format!("{:?}", chain.get(ids[0]).unwrap().queue()), r#"["a"]"#);
    }

    #[test]
    fn failed_reservation_changes_no_queue() {
        let (mut chain, ids) = chain_of(&[&["a", "c"], &["b"], &["d"]]);
        let result = chain.merge_reserving(false, |queue, _| queue.try_reserve(usize::MAX));
        assert!(matches!(result, Err(Error::Alloc(_))));
        let expected: [&[&str]; 3] = [&["a", "c"], &["b"], &["d"]];
        for (&id, values) in ids.iter().zip(expected) {
            let queue = chain.get(id).unwrap().queue();
            assert_eq!(queue.values(), values);
            assert_eq!(queue.as_list().check_integrity(), Ok(()));
        }
        assert_eq!(chain.contexts.check_integrity(), Ok(()));

        // the chain is still usable
        assert_eq!(chain.merge(false), Ok(4));
    }

    #[test]
    fn swapping_queues_across_chains_keeps_both_chains_linked() {
        let (mut left, left_ids) = chain_of(&[&["a"], &["b"]]);
        let (mut right, right_ids) = chain_of(&[&["x", "y"]]);
        std::mem::swap(
            left.get_mut(left_ids[0]).unwrap(),
            right.get_mut(right_ids[0]).unwrap(),
        );
        assert_eq!(left.contexts.check_integrity(), Ok(()));
        assert_eq!(right.contexts.check_integrity(), Ok(()));
        assert_eq!(left.first().unwrap().queue().values(), vec!["x", "y"]);
        assert_eq!(right.first().unwrap().queue().values(), vec!["a"]);
        assert_eq!(left.iter().map(|context| context.id()).collect::<Vec<_>>(), left_ids);
    }
}
