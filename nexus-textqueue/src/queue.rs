//! Singly-linked queue of owned strings.
//!
//! Nodes live in arena storage and link forward by [`Key`]. The queue tracks
//! head, tail and length, which gives O(1) push at either end and O(1) pop
//! from the front. Every pushed string is copied into storage the queue owns;
//! nothing the caller passes in is retained.
//!
//! # Chain Invariant
//!
//! - `len == 0` iff `head` is `NONE` iff `tail` is `NONE`
//! - following `next` from `head` reaches `tail` in exactly `len - 1` steps
//! - `tail.next` is `NONE`
//!
//! [`reverse`](TextQueue::reverse) and [`sort`](TextQueue::sort) preserve it
//! by rewriting `next` handles only. Neither allocates, frees, or moves a
//! node.
//!
//! # Example
//!
//! ```
//! use nexus_textqueue::TextQueue;
//!
//! let mut queue = TextQueue::new();
//! queue.try_push_back("banana").unwrap();
//! queue.try_push_back("Apple").unwrap();
//! queue.try_push_back("cherry").unwrap();
//!
//! queue.sort();
//! assert_eq!(queue, ["Apple", "banana", "cherry"]);
//!
//! queue.reverse();
//! assert_eq!(queue.pop_front().as_deref(), Some("cherry"));
//! assert_eq!(queue.len(), 2);
//! ```
//!
//! # Copying Out
//!
//! [`pop_front_into`](TextQueue::pop_front_into) copies the removed text into
//! a caller buffer as a NUL-terminated byte string, truncating silently to
//! fit. The returned [`Copied`] reports what was written.
//!
//! ```
//! use nexus_textqueue::TextQueue;
//!
//! let mut queue = TextQueue::new();
//! queue.try_push_front("abcdefgh").unwrap();
//!
//! let mut buf = [0xFFu8; 4];
//! let copied = queue.pop_front_into(&mut buf).unwrap();
//!
//! assert_eq!(&buf, b"abc\0");
//! assert!(copied.truncated);
//! assert!(queue.is_empty());
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::error::copy_text;
use crate::sort::merge_sort;
use crate::{AllocError, Key, SlabStorage, Storage};

/// Default storage for a [`TextQueue`] keyed by `K`.
pub type TextStorage<K = u32> = SlabStorage<TextNode<K>, K>;

/// One queued element: an owned string and the handle of its successor.
#[derive(Debug)]
pub struct TextNode<K: Key = u32> {
    text: String,
    next: K,
}

impl<K: Key> TextNode<K> {
    #[inline]
    pub(crate) fn new(text: String, next: K) -> Self {
        Self { text, next }
    }

    /// Returns the stored text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Returns the successor of `key`, or `NONE` if `key` is last or vacant.
#[inline]
pub(crate) fn next_of<K, S>(storage: &S, key: K) -> K
where
    K: Key,
    S: Storage<TextNode<K>, Key = K>,
{
    storage.get(key).map_or(K::NONE, |node| node.next)
}

#[inline]
pub(crate) fn set_next<K, S>(storage: &mut S, key: K, next: K)
where
    K: Key,
    S: Storage<TextNode<K>, Key = K>,
{
    if let Some(node) = storage.get_mut(key) {
        node.next = next;
    }
}

/// Result of copying a removed element into a caller buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Copied {
    /// Bytes of text written, not counting the terminator.
    pub len: usize,
    /// `true` if the text did not fit and was cut short.
    pub truncated: bool,
}

/// Writes as much of `text` as fits into `buf`, followed by a NUL.
///
/// At most `buf.len() - 1` bytes of text are written. An empty buffer
/// receives nothing. Truncation is by byte and may split a multi-byte
/// character.
pub(crate) fn copy_out(text: &str, buf: &mut [u8]) -> Copied {
    let Some(room) = buf.len().checked_sub(1) else {
        return Copied {
            len: 0,
            truncated: !text.is_empty(),
        };
    };

    let len = text.len().min(room);
    buf[..len].copy_from_slice(&text.as_bytes()[..len]);
    buf[len] = 0;

    Copied {
        len,
        truncated: len < text.len(),
    }
}

/// FIFO/LIFO queue of owned strings.
///
/// Push at either end, pop from the front, reverse and sort in place.
/// Dropping the queue drops every element.
///
/// # Type Parameters
///
/// - `K`: node handle type (default `u32`); bounds the element count
/// - `S`: node storage (default [`TextStorage<K>`])
///
/// # Example
///
/// ```
/// use nexus_textqueue::TextQueue;
///
/// let mut queue = TextQueue::new();
/// queue.try_push_front("a").unwrap();
/// queue.try_push_front("b").unwrap();
/// queue.try_push_front("c").unwrap();
/// assert_eq!(queue, ["c", "b", "a"]);
///
/// queue.reverse();
/// assert_eq!(queue, ["a", "b", "c"]);
/// ```
pub struct TextQueue<K: Key = u32, S = TextStorage<K>>
where
    S: Storage<TextNode<K>, Key = K>,
{
    storage: S,
    head: K,
    tail: K,
    len: usize,
}

impl TextQueue {
    /// Creates an empty queue. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: SlabStorage::new(),
            head: u32::NONE,
            tail: u32::NONE,
            len: 0,
        }
    }
}

impl<K: Key> TextQueue<K, TextStorage<K>> {
    /// Creates an empty queue with node storage for `capacity` elements.
    ///
    /// Only node slots are reserved; each string is still allocated when
    /// it is pushed.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the storage cannot be reserved, or if `K`
    /// cannot address `capacity` nodes.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self::with_storage(SlabStorage::try_with_capacity(capacity)?))
    }

    /// Returns the number of node slots available without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
}

impl<K: Key, S> Default for TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K> + Default,
{
    fn default() -> Self {
        Self::with_storage(S::default())
    }
}

impl<K: Key, S> TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    /// Creates an empty queue over the given storage.
    ///
    /// Anything already in `storage` is dropped.
    pub fn with_storage(mut storage: S) -> Self {
        storage.clear();
        Self {
            storage,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the front element.
    #[inline]
    pub fn front(&self) -> Option<&str> {
        self.storage.get(self.head).map(TextNode::text)
    }

    /// Returns the back element.
    #[inline]
    pub fn back(&self) -> Option<&str> {
        self.storage.get(self.tail).map(TextNode::text)
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Copies `text` into a new element at the front.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the element or its text cannot be
    /// allocated. The queue is unchanged.
    pub fn try_push_front(&mut self, text: &str) -> Result<(), AllocError> {
        let key = self.alloc_node(text, self.head)?;

        if self.tail.is_none() {
            self.tail = key;
        }
        self.head = key;
        self.len += 1;
        Ok(())
    }

    /// Copies `text` into a new element at the back.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if the element or its text cannot be
    /// allocated. The queue is unchanged.
    pub fn try_push_back(&mut self, text: &str) -> Result<(), AllocError> {
        let key = self.alloc_node(text, K::NONE)?;

        if self.tail.is_some() {
            set_next(&mut self.storage, self.tail, key);
        } else {
            self.head = key;
        }
        self.tail = key;
        self.len += 1;
        Ok(())
    }

    /// Pushes every item to the back, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first [`AllocError`]. Items pushed before the failure
    /// stay in the queue.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), AllocError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for text in iter {
            self.try_push_back(text.as_ref())?;
        }
        Ok(())
    }

    fn alloc_node(&mut self, text: &str, next: K) -> Result<K, AllocError> {
        let result = copy_text(text)
            .and_then(|owned| self.storage.try_insert(TextNode::new(owned, next)));

        if let Err(error) = &result {
            tracing::warn!(
                %error,
                len = self.len,
                text_len = text.len(),
                "failed to allocate queue element"
            );
        }
        result
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Removes the front element and returns its text.
    ///
    /// Returns `None` if the queue is empty.
    pub fn pop_front(&mut self) -> Option<String> {
        if self.head.is_none() {
            return None;
        }

        let node = self.storage.remove(self.head)?;
        self.head = node.next;
        self.len -= 1;
        if self.len == 0 {
            self.tail = K::NONE;
        }

        Some(node.text)
    }

    /// Removes the front element, copying its text into `buf`.
    ///
    /// Writes at most `buf.len() - 1` bytes of text followed by a NUL,
    /// truncating silently. An empty `buf` receives nothing, but the element
    /// is still removed.
    ///
    /// Returns `None` if the queue is empty; `buf` is left untouched.
    pub fn pop_front_into(&mut self, buf: &mut [u8]) -> Option<Copied> {
        let text = self.pop_front()?;
        Some(copy_out(&text, buf))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Reorder (relink only)
    // ========================================================================

    /// Reverses the queue in place.
    ///
    /// O(n) time, O(1) space. No element is allocated or freed.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }

        let mut prev = K::NONE;
        let mut current = self.head;
        while current.is_some() {
            let next = next_of(&self.storage, current);
            set_next(&mut self.storage, current, prev);
            prev = current;
            current = next;
        }

        self.tail = self.head;
        self.head = prev;
        tracing::debug!(len = self.len, "reversed queue");
    }

    /// Sorts the queue in ascending case-insensitive order.
    ///
    /// Uses [`cmp_ignore_case`](crate::cmp_ignore_case). The sort is stable:
    /// elements that compare equal keep their relative order.
    ///
    /// O(n log n) time, O(log n) stack. No element is allocated or freed.
    pub fn sort(&mut self) {
        if self.len < 2 {
            return;
        }

        self.head = merge_sort(&mut self.storage, self.head);

        let mut tail = self.head;
        loop {
            let next = next_of(&self.storage, tail);
            if next.is_none() {
                break;
            }
            tail = next;
        }
        self.tail = tail;

        tracing::debug!(len = self.len, "sorted queue");
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, S> {
        Iter {
            storage: &self.storage,
            next: self.head,
            remaining: self.len,
        }
    }
}

impl<K: Key, S> fmt::Debug for TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Key, S, K2: Key, S2> PartialEq<TextQueue<K2, S2>> for TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
    S2: Storage<TextNode<K2>, Key = K2>,
{
    fn eq(&self, other: &TextQueue<K2, S2>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Key, S> Eq for TextQueue<K, S> where S: Storage<TextNode<K>, Key = K> {}

impl<K: Key, S, T: AsRef<str>> PartialEq<[T]> for TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter().map(AsRef::as_ref))
    }
}

impl<K: Key, S, T: AsRef<str>, const N: usize> PartialEq<[T; N]> for TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<K: Key, S, T: AsRef<str>> PartialEq<Vec<T>> for TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<'a, K: Key, S> IntoIterator for &'a TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    type Item = &'a str;
    type IntoIter = Iter<'a, K, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Key, S> IntoIterator for TextQueue<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    type Item = String;
    type IntoIter = IntoIter<K, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the elements of a [`TextQueue`], front to back.
pub struct Iter<'a, K: Key, S> {
    storage: &'a S,
    next: K,
    remaining: usize,
}

impl<'a, K: Key, S> Iterator for Iter<'a, K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.storage.get(self.next)?;
        self.next = node.next;
        self.remaining -= 1;
        Some(node.text())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Key, S> ExactSizeIterator for Iter<'_, K, S> where S: Storage<TextNode<K>, Key = K> {}

impl<K: Key, S> FusedIterator for Iter<'_, K, S> where S: Storage<TextNode<K>, Key = K> {}

/// Owning iterator that pops elements from the front of a [`TextQueue`].
pub struct IntoIter<K: Key, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    queue: TextQueue<K, S>,
}

impl<K: Key, S> Iterator for IntoIter<K, S>
where
    S: Storage<TextNode<K>, Key = K>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<K: Key, S> ExactSizeIterator for IntoIter<K, S> where S: Storage<TextNode<K>, Key = K> {}

impl<K: Key, S> FusedIterator for IntoIter<K, S> where S: Storage<TextNode<K>, Key = K> {}
