//! Flat operation surface with nullable queues.
//!
//! These free functions mirror the classic `q_*` queue API used by test
//! harnesses: every mutator takes an `Option`, where `None` is an absent
//! queue, and reports failure as `false` instead of an error value. Nothing
//! here panics.
//!
//! | Function | Absent queue | Empty queue |
//! |----------|--------------|-------------|
//! | [`insert_front`] / [`insert_back`] | `false` | inserts |
//! | [`remove_front`] | `false` | `false`, buffer untouched |
//! | [`size`] | `0` | `0` |
//! | [`reverse`] / [`sort`] | no-op | no-op |
//! | [`destroy`] | no-op | drops |
//!
//! # Example
//!
//! ```
//! use nexus_textqueue::{TextQueue, compat};
//!
//! let mut queue = compat::create();
//! assert!(compat::insert_back(queue.as_mut(), "banana"));
//! assert!(compat::insert_back(queue.as_mut(), "Apple"));
//! compat::sort(queue.as_mut());
//!
//! let mut buf = [0u8; 16];
//! assert!(compat::remove_front(queue.as_mut(), Some(&mut buf[..])));
//! assert_eq!(&buf[..6], b"Apple\0");
//! assert_eq!(compat::size(queue.as_ref()), 1);
//!
//! compat::destroy(queue);
//! assert!(!compat::insert_front(None::<&mut TextQueue>, "x"));
//! ```

use crate::{Key, Storage, TextNode, TextQueue};

/// Creates an empty queue.
///
/// Always `Some`: an empty queue owns no allocation.
#[inline]
pub fn create() -> Option<TextQueue> {
    Some(TextQueue::new())
}

/// Drops the queue and every element it holds.
#[inline]
pub fn destroy<K: Key, S>(queue: Option<TextQueue<K, S>>)
where
    S: Storage<TextNode<K>, Key = K>,
{
    drop(queue);
}

/// Copies `text` into a new element at the front.
///
/// Returns `false` if the queue is absent or allocation fails; the queue is
/// unchanged in either case.
pub fn insert_front<K: Key, S>(queue: Option<&mut TextQueue<K, S>>, text: &str) -> bool
where
    S: Storage<TextNode<K>, Key = K>,
{
    queue.is_some_and(|queue| queue.try_push_front(text).is_ok())
}

/// Copies `text` into a new element at the back.
///
/// Returns `false` if the queue is absent or allocation fails; the queue is
/// unchanged in either case.
pub fn insert_back<K: Key, S>(queue: Option<&mut TextQueue<K, S>>, text: &str) -> bool
where
    S: Storage<TextNode<K>, Key = K>,
{
    queue.is_some_and(|queue| queue.try_push_back(text).is_ok())
}

/// Removes the front element.
///
/// With `out`, up to `out.len() - 1` bytes of the removed text are copied in
/// followed by a NUL, truncating silently. Without `out` the text is
/// discarded.
///
/// Returns `false` if the queue is absent or empty, in which case `out` is
/// not written.
pub fn remove_front<K: Key, S>(
    queue: Option<&mut TextQueue<K, S>>,
    out: Option<&mut [u8]>,
) -> bool
where
    S: Storage<TextNode<K>, Key = K>,
{
    let Some(queue) = queue else {
        return false;
    };

    match out {
        Some(buf) => queue.pop_front_into(buf).is_some(),
        None => queue.pop_front().is_some(),
    }
}

/// Returns the number of elements, or `0` for an absent queue.
#[inline]
pub fn size<K: Key, S>(queue: Option<&TextQueue<K, S>>) -> usize
where
    S: Storage<TextNode<K>, Key = K>,
{
    queue.map_or(0, TextQueue::len)
}

/// Reverses the queue in place. No-op for an absent queue.
#[inline]
pub fn reverse<K: Key, S>(queue: Option<&mut TextQueue<K, S>>)
where
    S: Storage<TextNode<K>, Key = K>,
{
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Sorts the queue case-insensitively in place. No-op for an absent queue.
#[inline]
pub fn sort<K: Key, S>(queue: Option<&mut TextQueue<K, S>>)
where
    S: Storage<TextNode<K>, Key = K>,
{
    if let Some(queue) = queue {
        queue.sort();
    }
}
