//! Case-insensitive merge sort over linked nodes.
//!
//! Sorting never moves or reallocates a node. The chain is split at its
//! midpoint with a slow/fast walk, each half is sorted recursively, and the
//! halves are merged by relinking `next` handles. Recursion depth is
//! `O(log n)`; the merge itself is iterative.
//!
//! The sort is stable: the left half always holds the earlier elements and
//! the merge prefers the left half on ties.

use core::cmp::Ordering;

use crate::queue::{TextNode, next_of, set_next};
use crate::{Key, Storage};

/// Compares two strings ignoring letter case.
///
/// Characters are compared one by one, by code point, after lowercasing.
/// For ASCII input this matches C `strcasecmp`. Non-ASCII characters use
/// Unicode lowercase mappings, so `"É"` and `"é"` compare equal.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use nexus_textqueue::cmp_ignore_case;
///
/// assert_eq!(cmp_ignore_case("Apple", "apple"), Ordering::Equal);
/// assert_eq!(cmp_ignore_case("apple", "Banana"), Ordering::Less);
/// assert_eq!(cmp_ignore_case("cherry", "BANANA"), Ordering::Greater);
/// ```
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        return a
            .bytes()
            .map(|c| c.to_ascii_lowercase())
            .cmp(b.bytes().map(|c| c.to_ascii_lowercase()));
    }

    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Sorts the chain starting at `head`, returning the new head.
///
/// The chain must be `NONE`-terminated. The caller is responsible for
/// recomputing the tail.
pub(crate) fn merge_sort<K, S>(storage: &mut S, head: K) -> K
where
    K: Key,
    S: Storage<TextNode<K>, Key = K>,
{
    if head.is_none() || next_of(storage, head).is_none() {
        return head;
    }

    let middle = split(storage, head);
    let left = merge_sort(storage, head);
    let right = merge_sort(storage, middle);
    merge(storage, left, right)
}

/// Cuts the chain after its midpoint and returns the head of the second half.
///
/// With an odd length the first half gets the extra node.
fn split<K, S>(storage: &mut S, head: K) -> K
where
    K: Key,
    S: Storage<TextNode<K>, Key = K>,
{
    let mut slow = head;
    let mut fast = next_of(storage, head);

    while fast.is_some() {
        let after = next_of(storage, fast);
        if after.is_none() {
            break;
        }
        slow = next_of(storage, slow);
        fast = next_of(storage, after);
    }

    let middle = next_of(storage, slow);
    set_next(storage, slow, K::NONE);
    middle
}

/// Merges two sorted chains into one, taking from `left` on ties.
fn merge<K, S>(storage: &mut S, mut left: K, mut right: K) -> K
where
    K: Key,
    S: Storage<TextNode<K>, Key = K>,
{
    let mut head = K::NONE;
    let mut tail = K::NONE;

    while left.is_some() && right.is_some() {
        let take_left =
            cmp_ignore_case(text_of(storage, left), text_of(storage, right)) != Ordering::Greater;

        let taken = if take_left {
            let key = left;
            left = next_of(storage, left);
            key
        } else {
            let key = right;
            right = next_of(storage, right);
            key
        };

        if tail.is_some() {
            set_next(storage, tail, taken);
        } else {
            head = taken;
        }
        tail = taken;
    }

    // One side is exhausted; the other is already sorted and terminated.
    let rest = if left.is_some() { left } else { right };
    if tail.is_some() {
        set_next(storage, tail, rest);
    } else {
        head = rest;
    }

    head
}

#[inline]
fn text_of<K, S>(storage: &S, key: K) -> &str
where
    K: Key,
    S: Storage<TextNode<K>, Key = K>,
{
    storage.get(key).map_or("", TextNode::text)
}
