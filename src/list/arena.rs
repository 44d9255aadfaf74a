use crate::list::link::NodeId;
use slab::Slab;
use std::collections::TryReserveError;
use std::ops::{Index, IndexMut};

/// Node storage of a list, keyed by [`NodeId`].
///
/// Freed slab entries are reused before the slab grows, so a handle stays
/// valid until its node is removed.
pub(crate) struct Arena<T> {
    slab: Slab<T>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self { slab: Slab::new() }
    }

    /// The number of occupied entries.
    pub(crate) fn len(&self) -> usize {
        self.slab.len()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        !id.is_ghost() && self.slab.contains(id.0)
    }

    /// Make sure that `additional` more nodes can be inserted without
    /// allocating.
    ///
    /// `Slab` only grows infallibly, so the growth is first tried on a
    /// scratch buffer of the same element type; the slab is left untouched
    /// when that fails.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let room = self.slab.capacity() - self.slab.len();
        if additional > room {
            Vec::<T>::new().try_reserve_exact(additional - room)?;
            self.slab.reserve(additional);
        }
        Ok(())
    }

    pub(crate) fn try_insert(&mut self, value: T) -> Result<NodeId, TryReserveError> {
        self.try_reserve(1)?;
        Ok(self.insert(value))
    }

    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        NodeId(self.slab.insert(value))
    }

    /// Take the value out of an occupied entry, or return `None` if the
    /// entry is vacant or out of range.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        self.slab.try_remove(id.0)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.slab.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slab.get_mut(id.0)
    }

    /// Give back the memory of trailing vacant entries.
    pub(crate) fn shrink_to_fit(&mut self) {
        self.slab.shrink_to_fit();
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slab.capacity()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(value) => value,
            None => panic!("dangling node handle {:?}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(value) => value,
            None => panic!("dangling node handle {:?}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Arena;
    use crate::list::link::NodeId;

    #[test]
    fn arena_reuses_freed_entries() {
        let mut arena = Arena::new();
        let a = arena.try_insert('a').unwrap();
        let b = arena.try_insert('b').unwrap();
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.remove(a), Some('a'));
        assert_eq!(arena.remove(a), None);
        assert!(!arena.contains(a));
        assert!(!arena.contains(NodeId::GHOST));
        assert_eq!(arena.len(), 1);

        let c = arena.try_insert('c').unwrap();
        assert_eq!(c, a);
        assert_eq!(arena[c], 'c');
        assert_eq!(arena[b], 'b');
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn arena_reserve_then_insert_does_not_grow() {
        let mut arena = Arena::new();
        arena.try_reserve(16).unwrap();
        let capacity = arena.capacity();
        assert!(capacity >= 16);
        (0..16).for_each(|i| {
            arena.insert(i);
        });
        assert_eq!(arena.capacity(), capacity);
        assert_eq!(arena.len(), 16);
    }

    #[test]
    fn arena_overflowing_reserve_fails_untouched() {
        let mut arena = Arena::new();
        let a = arena.try_insert(1u64).unwrap();
        let capacity = arena.capacity();
        assert!(arena.try_reserve(usize::MAX).is_err());
        assert_eq!(arena.capacity(), capacity);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[a], 1);
    }

    #[test]
    fn arena_shrinks_after_draining() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..64).map(|i| arena.insert(i)).collect();
        ids.into_iter().for_each(|id| {
            arena.remove(id);
        });
        assert!(arena.capacity() >= 64);
        arena.shrink_to_fit();
        assert_eq!(arena.len(), 0);
        assert!(arena.capacity() < 64);
    }

    #[test]
    #[should_panic(expected = "dangling node handle")]
    fn arena_index_vacant_panics() {
        let mut arena = Arena::new();
        let id = arena.try_insert(1).unwrap();
        arena.remove(id);
        let _ = arena[id];
    }
}
