//! Operations on possibly absent queues.
//!
//! Each function mirrors a [`Queue`] (or [`Chain`]) method but takes an
//! `Option` in place of the receiver. A missing queue is reported as
//! [`Error::Absent`] and nothing else happens.
//!
//! ```
//! use cyclic_queue::{handle, Error};
//!
//! let mut queue = handle::new();
//! handle::insert_tail(Some(&mut queue), "x").unwrap();
//! assert_eq!(handle::size(Some(&queue)), Ok(1));
//! assert_eq!(handle::size(None), Err(Error::Absent));
//! assert_eq!(handle::insert_head(None, "y"), Err(Error::Absent));
//! handle::free(Some(queue));
//! ```

use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::queue::{Element, Queue};

fn present<Q>(queue: Option<Q>) -> Result<Q> {
    queue.ok_or(Error::Absent)
}

pub fn new() -> Queue {
    Queue::new()
}

/// Release the queue and every element it still owns.
pub fn free(queue: Option<Queue>) {
    drop(queue);
}

pub fn insert_head(queue: Option<&mut Queue>, value: &str) -> Result<()> {
    present(queue)?.insert_head(value)
}

pub fn insert_tail(queue: Option<&mut Queue>, value: &str) -> Result<()> {
    present(queue)?.insert_tail(value)
}

pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Result<Element> {
    present(queue)?.remove_head(buf)
}

pub fn remove_tail(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> Result<Element> {
    present(queue)?.remove_tail(buf)
}

pub fn size(queue: Option<&Queue>) -> Result<usize> {
    Ok(present(queue)?.size())
}

pub fn delete_mid(queue: Option<&mut Queue>) -> Result<()> {
    present(queue)?.delete_mid()
}

pub fn delete_dup(queue: Option<&mut Queue>) -> Result<usize> {
    present(queue)?.delete_dup()
}

pub fn swap(queue: Option<&mut Queue>) -> Result<()> {
    present(queue)?.swap();
    Ok(())
}

pub fn reverse(queue: Option<&mut Queue>) -> Result<()> {
    present(queue)?.reverse();
    Ok(())
}

pub fn reverse_k(queue: Option<&mut Queue>, k: usize) -> Result<()> {
    present(queue)?.reverse_k(k);
    Ok(())
}

pub fn ascend(queue: Option<&mut Queue>) -> Result<usize> {
    Ok(present(queue)?.ascend())
}

pub fn descend(queue: Option<&mut Queue>) -> Result<usize> {
    Ok(present(queue)?.descend())
}

pub fn sort(queue: Option<&mut Queue>, descend: bool) -> Result<()> {
    present(queue)?.sort(descend);
    Ok(())
}

pub fn merge(chain: Option<&mut Chain>, descend: bool) -> Result<usize> {
    present(chain)?.merge(descend)
}
