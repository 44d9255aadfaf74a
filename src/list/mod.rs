use std::collections::TryReserveError;
use std::fmt::{Debug, Formatter};

use crate::list::arena::Arena;
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter};

pub use link::{Link, Linked, NodeId};
pub(crate) use link::LinkMut;

pub mod cursor;
pub mod iterator;
pub mod link;

mod algorithms;
mod arena;
mod integrity;

/// The `List` is a doubly-linked list with embedded links, implemented as a
/// cyclic list headed by a ghost node.
/// It allows inserting, removing elements at any given position in constant time.
/// In compromise, accessing or mutating elements at any position take *O*(*n*) time.
///
/// The `List` contains:
/// - the `ghost` link, whose `next` is the first element and whose `prev` is
///   the last element (or the ghost itself in an empty list);
/// - an arena `nodes` that owns every element. Elements refer to each other
///   through the [`Link`] they embed, by [`NodeId`] handles into the arena.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    ghost: Link,
    nodes: Arena<T>,
}

// private methods
impl<T: Linked> List<T> {
    pub(crate) fn ghost_node(&self) -> NodeId {
        NodeId::GHOST
    }
    pub(crate) fn front_node(&self) -> NodeId {
        self.ghost.next
    }
    pub(crate) fn back_node(&self) -> NodeId {
        self.ghost.prev
    }

    pub(crate) fn link(&self, node: NodeId) -> &Link {
        if node.is_ghost() {
            &self.ghost
        } else {
            self.nodes[node].link()
        }
    }
    pub(crate) fn link_mut(&mut self, node: NodeId) -> &mut Link {
        if node.is_ghost() {
            &mut self.ghost
        } else {
            self.nodes[node].link_mut()
        }
    }
    pub(crate) fn next_of(&self, node: NodeId) -> NodeId {
        self.link(node).next
    }
    pub(crate) fn prev_of(&self, node: NodeId) -> NodeId {
        self.link(node).prev
    }

    /// The element held by a non-ghost node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the ghost node or has been released.
    pub(crate) fn element(&self, node: NodeId) -> &T {
        &self.nodes[node]
    }
    pub(crate) fn element_mut(&mut self, node: NodeId) -> &mut T {
        &mut self.nodes[node]
    }

    pub(crate) fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.link_mut(prev).next = next;
        self.link_mut(next).prev = prev;
    }

    /// Detach a single node `node` from the list, release its slot and return
    /// the element, or return `None` if `node` is the ghost node.
    pub(crate) fn detach_node(&mut self, node: NodeId) -> Option<T> {
        if node.is_ghost() {
            return None;
        }
        let Link { next, prev } = *self.link(node);
        let mut element = self.nodes.remove(node)?;
        self.connect(prev, next);
        *element.link_mut() = Link::new();
        Some(element)
    }

    /// Attach a new node holding `element` to the list, between `prev` and
    /// `next`.
    ///
    /// `prev` and `next` must be adjacent nodes of the list (checked only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) fn attach_node(&mut self, prev: NodeId, next: NodeId, element: T) -> NodeId {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.nodes.insert(element);
        self.connect(prev, node);
        self.connect(node, next);
        node
    }

    /// Like [`List::attach_node`], but leaves the list untouched and releases
    /// `element` if there is no room for another node.
    pub(crate) fn try_attach_node(
        &mut self,
        prev: NodeId,
        next: NodeId,
        element: T,
    ) -> Result<NodeId, TryReserveError> {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.nodes.try_insert(element)?;
        self.connect(prev, node);
        self.connect(node, next);
        Ok(node)
    }

    /// Move the range `front..=back` to the place before `to`.
    ///
    /// `front..=back` must be a valid range of the list, and `to` must be
    /// outside of it. Moving a range in front of its own successor changes
    /// nothing.
    pub(crate) fn move_nodes(&mut self, front: NodeId, back: NodeId, to: NodeId) {
        if to == front {
            return;
        }
        let (before, after) = (self.prev_of(front), self.next_of(back));
        self.connect(before, after);
        let prev = self.prev_of(to);
        self.connect(prev, front);
        self.connect(back, to);
    }

    pub(crate) fn move_node(&mut self, node: NodeId, to: NodeId) {
        self.move_nodes(node, node, to);
    }

    /// Move `node` to the place right after `pos`.
    pub(crate) fn move_after(&mut self, node: NodeId, pos: NodeId) {
        if node == pos {
            return;
        }
        let to = self.next_of(pos);
        self.move_node(node, to);
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: NodeId, next: NodeId) {
        assert_eq!(self.next_of(prev), next);
        assert_eq!(self.prev_of(next), prev);
    }

    /// Run the full integrity check when the `verify-links` feature is on.
    pub(crate) fn verify_links(&self) {
        #[cfg(feature = "verify-links")]
        debug_assert_eq!(self.check_integrity(), Ok(()));
    }
}

impl<T: Linked> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::{Element, List};
    /// let list: List<Element> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: Link::new(),
            nodes: Arena::new(),
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the number of elements the `List` owns.
    ///
    /// This is the count of live nodes in the arena, so it is *O*(1). See
    /// [`List::size`] for the count obtained by walking the ring.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Counts the elements by walking the ring from the ghost node back to
    /// itself.
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
    /// let queue = Queue::from_iter(["a", "b", "c"]);
    /// assert_eq!(queue.size(), 3);
    /// ```
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut node = self.front_node();
        while !node.is_ghost() {
            count += 1;
            node = self.next_of(node);
        }
        count
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.front_node())
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.back_node())
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Adds an element first in the list, or returns an error and drops the
    /// element if the list cannot grow. The list is left untouched on error.
    pub fn try_push_front(&mut self, elt: T) -> Result<(), TryReserveError> {
        self.cursor_start_mut().try_insert(elt)
    }

    /// Appends an element to the back of a list, or returns an error and
    /// drops the element if the list cannot grow. The list is left untouched
    /// on error.
    pub fn try_push_back(&mut self, elt: T) -> Result<(), TryReserveError> {
        self.cursor_end_mut().try_insert(elt)
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Provides a cursor at the first node, or at the ghost node if the list
    /// is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node())
    }

    /// Provides a cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost_node())
    }

    /// Provides a mutable cursor at the first node, or at the ghost node if
    /// the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.front_node();
        CursorMut::new(self, current)
    }

    /// Provides a mutable cursor at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.ghost_node();
        CursorMut::new(self, current)
    }

    /// Provides a mutable cursor at the last node, or at the ghost node if
    /// the list is empty.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let current = self.back_node();
        CursorMut::new(self, current)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let queue = Queue::from_iter(["0", "1", "2"]);
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next().map(|e| e.value()), Some("0"));
    /// assert_eq!(iter.next_back().map(|e| e.value()), Some("2"));
    /// assert_eq!(iter.next().map(|e| e.value()), Some("1"));
    /// assert!(iter.next().is_none());
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Moves all elements from `other` to the end of the list, keeping their
    /// order. After this operation, `other` becomes empty and its spare node
    /// memory is released.
    ///
    /// Each list owns its node storage, so the elements are not spliced but
    /// taken out of `other` and inserted into this list one by one. Room for
    /// every moved element is reserved up front, so on error neither list
    /// is changed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m*) time, where *m* is the
    /// length of `other`.
    pub fn try_append(&mut self, other: &mut Self) -> Result<(), TryReserveError> {
        self.nodes.try_reserve(other.len())?;
        while let Some(elt) = other.pop_front() {
            self.push_back(elt);
        }
        other.nodes.shrink_to_fit();
        Ok(())
    }

    /// Reserve room so that `additional` more elements can be inserted
    /// without allocating.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.nodes.try_reserve(additional)
    }
}

impl<T: Linked + Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Linked> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Linked> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T: Linked> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
