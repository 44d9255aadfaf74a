use std::fmt;

/// A handle to a node of a list, wrapping its slab key.
///
/// The ghost node is not stored in the slab; it is addressed by the
/// reserved handle [`NodeId::GHOST`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const GHOST: NodeId = NodeId(usize::MAX);

    pub(crate) fn is_ghost(self) -> bool {
        self == Self::GHOST
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ghost() {
            write!(f, "NodeId(ghost)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// The link node embedded in every payload of a [`List`].
///
/// A `Link` holds two structural handles, `next` and `prev`. It never owns
/// the nodes it refers to: the list's arena does. When a payload is not part
/// of a list, both handles point at the ghost, which carries no meaning.
///
/// [`List`]: crate::List
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
}

impl Link {
    /// Create an unlinked `Link`.
    pub const fn new() -> Self {
        Self {
            next: NodeId::GHOST,
            prev: NodeId::GHOST,
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("next", &self.next)
            .field("prev", &self.prev)
            .finish()
    }
}

mod sealed {
    use super::Link;

    /// Write access to the embedded link. Only this crate can name it, so
    /// links are rewritten by list operations alone.
    pub trait LinkMut {
        fn link_mut(&mut self) -> &mut Link;
    }
}

pub(crate) use sealed::LinkMut;

/// A payload type that embeds a [`Link`].
///
/// A [`List`] keeps no per-node wrapper around its elements; it reaches the
/// structure through this accessor instead. The trait is sealed: the
/// payloads are [`Element`] and [`QueueContext`], and outside code can read
/// a link but never write one.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{Link, Linked, Queue};
///
/// let queue = Queue::from_iter(["a", "b"]);
/// let front = queue.iter().next().unwrap();
/// assert_ne!(*front.link(), Link::new());
/// ```
///
/// Copying one element's link over another's does not compile:
///
/// ```compile_fail
/// use cyclic_queue::{Linked, Queue};
///
/// let mut queue = Queue::from_iter(["a", "b"]);
/// let mut cursor = queue.as_list_mut().cursor_start_mut();
/// let link = *cursor.current().unwrap().link();
/// cursor.move_next_cyclic();
/// *cursor.current_mut().unwrap().link_mut() = link;
/// ```
///
/// [`List`]: crate::List
/// [`Element`]: crate::Element
/// [`QueueContext`]: crate::QueueContext
pub trait Linked: sealed::LinkMut {
    fn link(&self) -> &Link;
}
