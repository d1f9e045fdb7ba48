//! Owned-string queue over index-linked arena storage.
//!
//! [`TextQueue`] is a singly-linked sequence of strings with head and tail
//! access. It pushes at either end, pops from the front, and reverses or
//! sorts itself in place without allocating.
//!
//! # Design
//!
//! Nodes are not boxed and chained by pointer. They live in an arena
//! ([`Storage`]) and link to each other by integer handle ([`Key`]):
//!
//! ```text
//! TextQueue { head, tail, len }
//!     │
//!     └── SlabStorage: [ node | node | vacant | node | ... ]
//!                         │ next   ▲                 │
//!                         └────────┘   free list ────┘
//! ```
//!
//! - **Single owner**: the arena owns every node and every string; dropping
//!   the queue drops them all
//! - **Relink, don't move**: reverse and sort only rewrite `next` handles
//! - **Fallible growth**: allocation failure is an [`AllocError`], never an
//!   abort, and leaves the queue unchanged
//! - **Slot reuse**: popped slots go on a free list for the next push
//!
//! # Quick Start
//!
//! ```
//! use nexus_textqueue::TextQueue;
//!
//! let mut queue = TextQueue::new();
//! queue.try_push_back("banana")?;
//! queue.try_push_back("Apple")?;
//! queue.try_push_back("cherry")?;
//!
//! queue.sort();
//! assert_eq!(queue, ["Apple", "banana", "cherry"]);
//!
//! let mut buf = [0u8; 4];
//! let copied = queue.pop_front_into(&mut buf).unwrap();
//! assert_eq!(&buf, b"App\0");
//! assert!(copied.truncated);
//! # Ok::<(), nexus_textqueue::AllocError>(())
//! ```
//!
//! # Ordering
//!
//! [`TextQueue::sort`] orders by [`cmp_ignore_case`] and is stable. Case
//! folding is exact for ASCII (matching C `strcasecmp`) and uses Unicode
//! lowercase mappings otherwise.
//!
//! # Nullable API
//!
//! The [`compat`] module exposes the same operations as free functions that
//! accept `Option`al queues and report failure as `bool`.
//!
//! # Logging
//!
//! Events are emitted through `tracing`: `warn` on allocation failure,
//! `debug` around sort and reverse, `trace` on arena growth. Install a
//! subscriber to see them.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod compat;
pub mod error;
pub mod key;
pub mod queue;
pub mod sort;
pub mod storage;

pub use error::AllocError;
pub use key::Key;
pub use queue::{Copied, IntoIter, Iter, TextNode, TextQueue, TextStorage};
pub use sort::cmp_ignore_case;
pub use storage::{SlabStorage, Storage};
