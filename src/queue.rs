//! The string queue built on [`List`].

use crate::error::{Error, Result};
use crate::list::{Link, LinkMut, Linked, List};
use crate::Iter;
use log::trace;
use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::fmt;

/// A queue element: one owned string plus the link that threads it into a
/// [`Queue`].
///
/// The string is always a private copy of what was inserted. Once removed
/// from a queue the element belongs to the caller, and dropping it releases
/// the string.
#[derive(Clone)]
pub struct Element {
    value: String,
    pub(crate) list: Link,
}

impl Element {
    /// Copy `value` into a new, unlinked element, or fail without allocating
    /// anything if there is no memory for the copy.
    pub fn try_new(value: &str) -> std::result::Result<Self, TryReserveError> {
        let mut owned = String::new();
        owned.try_reserve_exact(value.len())?;
        owned.push_str(value);
        Ok(Self {
            value: owned,
            list: Link::new(),
        })
    }

    pub(crate) fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            list: Link::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the value into `buf` as a NUL-terminated byte string.
    ///
    /// At most `buf.len() - 1` bytes are copied, so a longer value is
    /// truncated, and every byte after the copied ones is zeroed. Returns the
    /// number of value bytes copied. An empty `buf` is left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["gerbil"]);
    /// let mut buf = [0xffu8; 4];
    /// let removed = queue.remove_head(Some(&mut buf[..])).unwrap();
    /// assert_eq!(&buf, b"ger\0");
    /// assert_eq!(removed.value(), "gerbil");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let Some(room) = buf.len().checked_sub(1) else {
            return 0;
        };
        let bytes = self.value.as_bytes();
        let copied = bytes.len().min(room);
        buf[..copied].copy_from_slice(&bytes[..copied]);
        buf[copied..].fill(0);
        copied
    }
}

impl Linked for Element {
    fn link(&self) -> &Link {
        &self.list
    }
}

impl LinkMut for Element {
    fn link_mut(&mut self) -> &mut Link {
        &mut self.list
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

/// A circular doubly-linked queue of strings.
///
/// All reordering operations relink nodes and never copy a value. Operations
/// that discard elements (`delete_mid`, `delete_dup`, `ascend`, `descend`)
/// release them before returning.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("banana").unwrap();
/// queue.insert_tail("apple").unwrap();
/// queue.insert_head("cherry").unwrap();
/// queue.sort(false);
/// assert_eq!(queue.values(), vec!["apple", "banana", "cherry"]);
///
/// let head = queue.remove_head(None).unwrap();
/// assert_eq!(head.value(), "apple");
/// assert_eq!(queue.size(), 2);
/// ```
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Queue {
    list: List<Element>,
}

impl Queue {
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// The underlying list, for cursor access and integrity checks.
    pub fn as_list(&self) -> &List<Element> {
        &self.list
    }

    pub fn as_list_mut(&mut self) -> &mut List<Element> {
        &mut self.list
    }

    /// Insert a copy of `value` at the head.
    ///
    /// On allocation failure the queue is unchanged.
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let element = Element::try_new(value)?;
        self.list.try_push_front(element)?;
        self.list.verify_links();
        Ok(())
    }

    /// Insert a copy of `value` at the tail.
    ///
    /// On allocation failure the queue is unchanged.
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let element = Element::try_new(value)?;
        self.list.try_push_back(element)?;
        self.list.verify_links();
        Ok(())
    }

    /// Unlink the head element and hand it over to the caller.
    ///
    /// When `buf` is given, the value is also copied into it with
    /// [`Element::copy_to`].
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<Element> {
        let element = self.list.pop_front().ok_or(Error::Empty)?;
        self.list.verify_links();
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Ok(element)
    }

    /// Unlink the tail element and hand it over to the caller.
    ///
    /// When `buf` is given, the value is also copied into it with
    /// [`Element::copy_to`].
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Result<Element> {
        let element = self.list.pop_back().ok_or(Error::Empty)?;
        self.list.verify_links();
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Ok(element)
    }

    /// Number of elements, counted by walking the whole ring.
    pub fn size(&self) -> usize {
        self.list.size()
    }

    /// Number of elements the queue owns, in *O*(1).
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn front(&self) -> Option<&str> {
        self.list.front().map(Element::value)
    }

    pub fn back(&self) -> Option<&str> {
        self.list.back().map(Element::value)
    }

    pub fn iter(&self) -> Iter<'_, Element> {
        self.list.iter()
    }

    /// The values from head to tail.
    pub fn values(&self) -> Vec<&str> {
        self.iter().map(Element::value).collect()
    }

    /// Release every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Release the middle element: index `(n - 1) / 2` of `n` elements, so
    /// the lower one of the two middles when `n` is even.
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d"]);
    /// queue.delete_mid().unwrap();
    /// assert_eq!(queue.values(), vec!["a", "c", "d"]);
    /// ```
    pub fn delete_mid(&mut self) -> Result<()> {
        self.list.remove_middle().ok_or(Error::Empty)?;
        self.list.verify_links();
        Ok(())
    }

    /// Release every element whose value equals a neighbour's, so that no
    /// member of a run of equal values survives. Returns how many elements
    /// were released.
    ///
    /// The queue must already be sorted. On an unsorted queue only adjacent
    /// equal values are found; which elements survive is unspecified.
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "a", "b", "c", "c"]);
    /// assert_eq!(queue.delete_dup(), Ok(4));
    /// assert_eq!(queue.values(), vec!["b"]);
    /// ```
    pub fn delete_dup(&mut self) -> Result<usize> {
        if self.list.is_empty() {
            return Err(Error::Empty);
        }
        let removed = self.list.dedup_runs_by(|a, b| a.value == b.value);
        self.list.verify_links();
        Ok(removed)
    }

    /// Swap every two adjacent elements.
    pub fn swap(&mut self) {
        self.list.swap_pairs();
        self.list.verify_links();
    }

    /// Reverse the whole queue.
    pub fn reverse(&mut self) {
        self.list.reverse();
        self.list.verify_links();
    }

    /// Reverse each full group of `k` elements from the head; a shorter last
    /// group keeps its order.
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
    /// queue.reverse_k(2);
    /// assert_eq!(queue.values(), vec!["2", "1", "4", "3", "5"]);
    /// ```
    pub fn reverse_k(&mut self, k: usize) {
        self.list.reverse_groups(k);
        self.list.verify_links();
    }

    /// Release every element that has a strictly smaller value somewhere to
    /// its right, leaving a non-decreasing queue. Returns the number of
    /// elements left.
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["5", "2", "8", "1", "9"]);
    /// assert_eq!(queue.ascend(), 2);
    /// assert_eq!(queue.values(), vec!["1", "9"]);
    /// ```
    pub fn ascend(&mut self) -> usize {
        let len = self.list.retain_monotonic_by(|elt, min| elt.value > min.value);
        self.list.verify_links();
        len
    }

    /// Release every element that has a strictly greater value somewhere to
    /// its right, leaving a non-increasing queue. Returns the number of
    /// elements left.
    pub fn descend(&mut self) -> usize {
        let len = self.list.retain_monotonic_by(|elt, max| elt.value < max.value);
        self.list.verify_links();
        len
    }

    /// Stable merge sort by byte-wise string order, ascending unless
    /// `descend` is set.
    pub fn sort(&mut self, descend: bool) {
        trace!("sort {} elements, descend = {}", self.list.len(), descend);
        if descend {
            self.list.sort_by(|a, b| a.value > b.value);
        } else {
            self.list.sort_by(|a, b| a.value < b.value);
        }
    }

    /// Merge the sorted queue `other` into this sorted queue, both ordered
    /// as `descend` says. `other` is left empty. On ties, elements of this
    /// queue come first.
    ///
    /// On allocation failure neither queue is changed.
    pub fn merge_sorted(&mut self, other: &mut Queue, descend: bool) -> Result<()> {
        if descend {
            self.list
                .try_merge_by(&mut other.list, |a, b| a.value > b.value)?;
        } else {
            self.list
                .try_merge_by(&mut other.list, |a, b| a.value < b.value)?;
        }
        Ok(())
    }

    /// Reserve room for `additional` more elements.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.list.try_reserve(additional)?;
        Ok(())
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<'a> FromIterator<&'a str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a> Extend<&'a str> for Queue {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.list.extend(iter.into_iter().map(Element::new));
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a Element;
    type IntoIter = Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
