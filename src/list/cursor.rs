use crate::list::{Linked, List, NodeId};
use std::collections::TryReserveError;
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor:
/// the *n* elements and the ghost node.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use cyclic_queue::Queue;
///
/// // Create a queue: [ A B C #]
/// let queue = Queue::from_iter(["A", "B", "C"]);
///
/// // Create a cursor at start: [|A B C #]
/// let mut cursor = queue.as_list().cursor_start();
/// assert_eq!(cursor.current().map(|e| e.value()), Some("A"));
///
/// // Move cursor forward: [ A|B C #]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current().map(|e| e.value()), Some("B"));
///
/// // Create a cursor in the end: [ A B C|#]
/// let mut cursor = queue.as_list().cursor_end();
/// assert!(cursor.current().is_none());
/// assert!(cursor.move_next().is_err());
///
/// // Move cursor forward, cyclically: [|A B C #]
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current().map(|e| e.value()), Some("A"));
/// ```
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: NodeId,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            list: self.list,
        }
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: NodeId,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: Linked + 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.ghost_node()
            }
            pub(crate) fn next_node(&self) -> NodeId {
                self.list.next_of(self.current)
            }
            pub(crate) fn prev_node(&self) -> NodeId {
                self.list.prev_of(self.current)
            }
        }

        impl<'a, T: Linked + 'a> $CURSOR<'a, T> {
            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next_cyclic(&mut self) {
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_prev_cyclic(&mut self) {
                self.current = self.prev_node();
            }

            /// Move the cursor to the next position, or return an error
            /// when passing through the ghost node is happened.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if !self.is_empty() && !self.is_ghost_node() {
                    self.move_next_cyclic();
                    return Ok(());
                }
                Err("`move_next` across ghost boundary")
            }

            /// Move the cursor to the previous position, or return an error
            /// when passing through the ghost node is happened.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                if !self.is_empty() && !self.is_front_node() {
                    self.move_prev_cyclic();
                    return Ok(());
                }
                Err("`move_prev` across ghost boundary")
            }

            /// Move the cursor to the first node (or the ghost node if the
            /// list is empty).
            pub fn move_to_start(&mut self) {
                self.current = self.list.front_node();
            }

            /// Move the cursor to the ghost node.
            pub fn move_to_end(&mut self) {
                self.current = self.list.ghost_node();
            }

            /// Return an immutable reference of the element at the cursor,
            /// or return `None` if it is located at the ghost node.
            pub fn current(&self) -> Option<&T> {
                if self.is_ghost_node() {
                    return None;
                }
                Some(self.list.element(self.current))
            }

            /// Return an immutable reference of previous node of the cursor,
            /// or return `None` if it is located at the first node.
            pub fn previous(&self) -> Option<&T> {
                if self.is_front_node() {
                    return None;
                }
                Some(self.list.element(self.prev_node()))
            }

            /// Return an immutable reference of next node of the cursor,
            /// or return `None` if the next node is the ghost node.
            pub fn peek_next(&self) -> Option<&T> {
                let next = self.next_node();
                if next == self.list.ghost_node() {
                    return None;
                }
                Some(self.list.element(next))
            }
        }

        impl<'a, T: Linked + fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: Linked + 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NodeId) -> Self {
        Self { current, list }
    }
}

impl<'a, T: Linked + 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NodeId) -> Self {
        Self { current, list }
    }

    /// Temporarily view the list via an immutable reference.
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// The element at the cursor, or `None` at the ghost node. Kept inside
    /// the crate: a `&mut T` could replace the embedded link.
    pub(crate) fn current_mut(&mut self) -> Option<&mut T> {
        self.list.nodes.get_mut(self.current)
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: Linked + 'a> CursorMut<'a, T> {
    /// Add an element before the cursor position. The cursor stays put.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert(&mut self, item: T) {
        let prev = self.prev_node();
        self.list.attach_node(prev, self.current, item);
    }

    /// Like [`CursorMut::insert`], but returns an error and drops `item`
    /// when the list cannot grow.
    pub fn try_insert(&mut self, item: T) -> Result<(), TryReserveError> {
        let prev = self.prev_node();
        self.list.try_attach_node(prev, self.current, item)?;
        Ok(())
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node unless no removing is happened.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c"]);
    /// let mut cursor = queue.as_list_mut().cursor_start_mut();
    /// cursor.move_next_cyclic();
    ///
    /// assert_eq!(cursor.remove().map(|e| e.into_value()), Some("b".to_string()));
    /// assert_eq!(cursor.current().map(|e| e.value()), Some("c"));
    ///
    /// cursor.move_to_end();
    /// assert!(cursor.remove().is_none());
    /// assert_eq!(queue.values(), vec!["a", "c"]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        let next = self.next_node();
        let item = self.list.detach_node(self.current);
        self.current = next;
        item
    }

    /// Remove the element before the cursor and return it, or return `None` if
    /// the cursor is at the first node. After removal, the cursor is not moved.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::{list_of, values};

    #[test]
    fn cursor_moves_cyclically() {
        let list = list_of(1..=3);
        let mut cursor = list.cursor_end();
        assert!(cursor.current().is_none());
        assert_eq!(cursor.previous().map(|item| item.value), Some(3));
        assert!(cursor.move_next().is_err());

        cursor.move_next_cyclic();
        assert_eq!(cursor.current().map(|item| item.value), Some(1));
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor.peek_next().map(|item| item.value), Some(2));

        cursor.move_prev_cyclic();
        assert!(cursor.current().is_none());
        cursor.move_prev_cyclic();
        assert_eq!(cursor.current().map(|item| item.value), Some(3));
        assert!(cursor.peek_next().is_none());
    }

    #[test]
    fn cursor_insert_remove_backspace() {
        let mut list = list_of(0..5);
        let mut cursor = list.cursor_start_mut();
        cursor.move_next_cyclic();
        cursor.move_next_cyclic();

        assert_eq!(cursor.remove().map(|item| item.value), Some(2));
        assert_eq!(cursor.current().map(|item| item.value), Some(3));
        assert_eq!(cursor.backspace().map(|item| item.value), Some(1));
        assert_eq!(cursor.current().map(|item| item.value), Some(3));

        cursor.insert(crate::list::tests::Item::new(7));
        assert_eq!(cursor.previous().map(|item| item.value), Some(7));

        cursor.move_to_start();
        assert!(cursor.backspace().is_none());
        cursor.move_to_end();
        assert!(cursor.remove().is_none());

        assert_eq!(values(&list), vec![0, 7, 3, 4]);
        assert_eq!(list.check_integrity(), Ok(()));
    }
}
