//! Allocation failure.

use thiserror::Error;

/// Storage for a new element or its text could not be obtained.
///
/// Returned by the fallible insert paths. When an insert fails the queue is
/// left exactly as it was: no node is linked and no slot is leaked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The allocator refused a request of this many bytes.
    #[error("failed to allocate {bytes} bytes")]
    OutOfMemory {
        /// Size of the refused request.
        bytes: usize,
    },

    /// The node handle type cannot address another slot.
    #[error("node keys exhausted at {slots} slots")]
    KeysExhausted {
        /// Number of slots the handle type can address.
        slots: usize,
    },
}

impl AllocError {
    pub(crate) fn out_of_memory<T>(count: usize) -> Self {
        Self::OutOfMemory {
            bytes: count.saturating_mul(core::mem::size_of::<T>()),
        }
    }
}

/// Copies `text` into a freshly allocated `String`, failing instead of
/// aborting when memory is unavailable.
pub(crate) fn copy_text(text: &str) -> Result<String, AllocError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|_| AllocError::out_of_memory::<u8>(text.len()))?;
    owned.push_str(text);
    Ok(owned)
}
