//! This crate provides a circular doubly-linked queue of strings, built on a
//! generic intrusive list headed by a ghost node.
//!
//! The [`Queue`] supports insertion and removal at both ends in constant time,
//! and a set of in-place algorithms that only relink nodes: deleting the
//! middle element, deleting runs of duplicates, swapping pairs, reversing
//! (whole or by groups of *k*), monotonic filtering, and a stable merge sort.
//! A [`Chain`] holds several queues and merges them into its first one.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
//!
//! queue.reverse_k(2);
//! assert_eq!(queue.values(), vec!["2", "1", "4", "3", "5"]);
//!
//! queue.delete_mid().unwrap();
//! assert_eq!(queue.values(), vec!["2", "1", "3", "5"]);
//!
//! queue.sort(true);
//! assert_eq!(queue.values(), vec!["5", "3", "2", "1"]);
//!
//! let mut buf = [0u8; 8];
//! let tail = queue.remove_tail(Some(&mut buf[..])).unwrap();
//! assert_eq!(tail.value(), "1");
//! assert_eq!(&buf[..2], b"1\0");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                       (Ghost) Link  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║ link.next ║ ────────→ ║ link.next ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢   Slot 2, 3, ...       ├───────────┤
//! ┌─ ║ link.prev ║ ←──────── ║ link.prev ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        └───────────┘
//! │  ║ payload T ║           ║ payload T ║                              ↑
//! │  ╚═══════════╝           ╚═══════════╝                              │
//! │      Slot 0                  Slot 1                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`List`] contains:
//! - the `ghost` link, which carries no payload. Its `next` is the first
//!   element and its `prev` the last one; in an empty list both refer to the
//!   ghost itself;
//! - a [`slab`] of entries owning the elements. A released entry is reused by
//!   the next insertion.
//!
//! The links are not wrapped around the payload: every element type embeds a
//! [`Link`] and exposes it through the [`Linked`] trait. [`Element`] embeds
//! one named `list`, [`QueueContext`] one named `chain`. Links hold [`NodeId`]
//! handles into the arena, never references, so a list can be moved freely
//! and every structural edit is checked by the borrow checker. Only the
//! list itself writes links: code outside this crate can read them.
//!
//! The number of live entries is kept by the slab, so [`List::len`] is *O*(1),
//! while [`List::size`] counts by walking the ring. Comparing the two, and
//! [`List::check_integrity`], catch leaked and dangling nodes.
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] move forward or backward over a
//! list. In a list with length *n*, there are *n* + 1 valid locations for a
//! cursor: the *n* elements and the ghost node. [`CursorMut`] can insert
//! before the cursor, [`remove`] the element at the cursor, or [`backspace`]
//! the element before it.
//!
//! # Features
//!
//! - `verify-links`: run [`List::check_integrity`] as a debug assertion after
//!   each mutation of a [`Queue`]. Off by default.
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{Link, Linked, List, NodeId};

pub use chain::{Chain, QueueContext};
pub use error::{Error, IntegrityError, Result};
pub use queue::{Element, Queue};

pub mod chain;
pub mod error;
pub mod handle;
pub mod list;
pub mod queue;
