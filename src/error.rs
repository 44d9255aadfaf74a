use crate::list::NodeId;
use std::collections::TryReserveError;
use thiserror::Error;

/// Failures reported by queue operations.
///
/// None of them is fatal: the queue (if any) is left exactly as it was
/// before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation was given no queue at all.
    #[error("no queue to operate on")]
    Absent,
    /// The queue exists but holds no element.
    #[error("queue is empty")]
    Empty,
    /// Memory for a new element could not be obtained.
    #[error("cannot allocate element: {0}")]
    Alloc(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A broken structural invariant found by [`List::check_integrity`].
///
/// [`List::check_integrity`]: crate::List::check_integrity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// `node.next.prev != node`.
    #[error("{node:?} is not the predecessor of its successor")]
    Asymmetric { node: NodeId },
    /// `node.next` refers to a released slot.
    #[error("{node:?} links to a released node")]
    Dangling { node: NodeId },
    /// Some owned nodes cannot be reached from the ghost node.
    #[error("{reachable} nodes reachable from the ghost, but {allocated} allocated")]
    Leaked { reachable: usize, allocated: usize },
}
