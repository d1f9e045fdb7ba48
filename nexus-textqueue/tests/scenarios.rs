use nexus_textqueue::{Copied, TextQueue, compat};

// =============================================================================
// Insert / remove
// =============================================================================

#[test]
fn fifo_through_back() {
    let mut queue = TextQueue::new();
    for s in ["one", "two", "three"] {
        queue.try_push_back(s).unwrap();
    }
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.pop_front().as_deref(), Some("one"));
    assert_eq!(queue.pop_front().as_deref(), Some("two"));
    assert_eq!(queue.pop_front().as_deref(), Some("three"));
    assert_eq!(queue.pop_front(), None);
}

#[test]
fn lifo_through_front() {
    let mut queue = TextQueue::new();
    for s in ["one", "two", "three"] {
        queue.try_push_front(s).unwrap();
    }
    assert_eq!(queue.pop_front().as_deref(), Some("three"));
    assert_eq!(queue.pop_front().as_deref(), Some("two"));
    assert_eq!(queue.pop_front().as_deref(), Some("one"));
}

#[test]
fn push_front_then_pop_returns_same_text() {
    let mut queue = TextQueue::new();
    queue.try_extend(["x", "y"]).unwrap();

    queue.try_push_front("fresh").unwrap();
    assert_eq!(queue.pop_front().as_deref(), Some("fresh"));
    assert_eq!(queue, ["x", "y"]);
}

#[test]
fn inserted_text_is_copied() {
    let mut queue = TextQueue::new();
    let mut source = String::from("original");
    queue.try_push_back(&source).unwrap();

    source.clear();
    source.push_str("mutated");

    assert_eq!(queue.front(), Some("original"));
}

#[test]
fn remove_into_short_buffer_truncates() {
    let mut queue = TextQueue::new();
    queue.try_push_front("abcdefgh").unwrap();

    let mut buf = [0u8; 4];
    let copied = queue.pop_front_into(&mut buf);

    assert_eq!(
        copied,
        Some(Copied {
            len: 3,
            truncated: true
        })
    );
    assert_eq!(&buf, b"abc\0");
}

#[test]
fn remove_from_empty_leaves_buffer() {
    let mut queue = TextQueue::new();
    let mut buf = *b"keep";
    assert!(queue.pop_front_into(&mut buf).is_none());
    assert_eq!(&buf, b"keep");
}

#[test]
fn multibyte_text_copies_bytes() {
    let mut queue = TextQueue::new();
    queue.try_push_back("héllo").unwrap();

    let mut buf = [0u8; 16];
    let copied = queue.pop_front_into(&mut buf).unwrap();
    assert_eq!(copied.len, "héllo".len());
    assert!(!copied.truncated);
    assert_eq!(&buf[..copied.len], "héllo".as_bytes());
    assert_eq!(buf[copied.len], 0);
}

// =============================================================================
// Reverse / sort
// =============================================================================

#[test]
fn reverse_head_inserts() {
    let mut queue = TextQueue::new();
    for s in ["a", "b", "c"] {
        queue.try_push_front(s).unwrap();
    }
    assert_eq!(queue, ["c", "b", "a"]);

    queue.reverse();
    assert_eq!(queue, ["a", "b", "c"]);
    assert_eq!(queue.front(), Some("a"));
    assert_eq!(queue.back(), Some("c"));
}

#[test]
fn sort_tail_inserts() {
    let mut queue = TextQueue::new();
    for s in ["banana", "Apple", "cherry"] {
        queue.try_push_back(s).unwrap();
    }

    queue.sort();
    assert_eq!(queue, ["Apple", "banana", "cherry"]);
}

#[test]
fn sort_keeps_equal_elements_in_order() {
    let mut queue = TextQueue::new();
    queue
        .try_extend(["beta", "ALPHA", "Beta", "alpha", "BETA"])
        .unwrap();

    queue.sort();
    assert_eq!(queue, ["ALPHA", "alpha", "beta", "Beta", "BETA"]);
}

#[test]
fn sort_then_reverse_then_push() {
    let mut queue = TextQueue::new();
    queue.try_extend(["m", "z", "a"]).unwrap();

    queue.sort();
    queue.reverse();
    queue.try_push_back("0").unwrap();
    queue.try_push_front("~").unwrap();

    assert_eq!(queue, ["~", "z", "m", "a", "0"]);
}

#[test]
fn large_sort() {
    let mut queue = TextQueue::new();
    // Deterministic shuffle: 7919 is prime, so i * 7919 mod n visits every residue.
    let n = 5_000;
    for i in 0..n {
        queue.try_push_back(&format!("k{:05}", (i * 7919) % n)).unwrap();
    }

    queue.sort();

    let sorted: Vec<&str> = queue.iter().collect();
    assert_eq!(sorted.len(), n);
    assert!(sorted.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(queue.front(), Some("k00000"));
    assert_eq!(queue.back(), Some("k04999"));
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn clear_and_reuse() {
    let mut queue = TextQueue::new();
    queue.try_extend(["a", "b"]).unwrap();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.front(), None);

    queue.try_push_back("c").unwrap();
    assert_eq!(queue, ["c"]);
}

#[test]
fn owned_iteration() {
    let mut queue = TextQueue::new();
    queue.try_extend(["a", "b", "c"]).unwrap();
    let joined: String = queue.into_iter().collect();
    assert_eq!(joined, "abc");
}

#[cfg(feature = "slab")]
#[test]
fn slab_backed_queue() {
    let mut queue: TextQueue<usize, slab::Slab<nexus_textqueue::TextNode<usize>>> =
        TextQueue::default();
    queue.try_extend(["b", "a"]).unwrap();
    queue.sort();
    assert_eq!(queue, ["a", "b"]);
}

// =============================================================================
// Nullable surface
// =============================================================================

#[test]
fn compat_round_trip() {
    let mut queue = compat::create();
    assert!(compat::insert_front(queue.as_mut(), "a"));
    assert!(compat::insert_front(queue.as_mut(), "b"));
    assert!(compat::insert_back(queue.as_mut(), "C"));
    assert_eq!(compat::size(queue.as_ref()), 3);

    compat::reverse(queue.as_mut());
    compat::sort(queue.as_mut());

    let mut buf = [0u8; 8];
    let mut out = Vec::new();
    while compat::remove_front(queue.as_mut(), Some(&mut buf[..])) {
        let end = buf.iter().position(|&b| b == 0).unwrap();
        out.push(String::from_utf8(buf[..end].to_vec()).unwrap());
    }
    assert_eq!(out, ["a", "b", "C"]);
    assert_eq!(compat::size(queue.as_ref()), 0);

    compat::destroy(queue);
}

#[test]
fn compat_absent_queue() {
    let absent = || None::<&mut TextQueue>;
    assert!(!compat::insert_back(absent(), "a"));
    assert!(!compat::remove_front(absent(), None));
    assert_eq!(compat::size(None::<&TextQueue>), 0);
    compat::sort(absent());
    compat::reverse(absent());
}
