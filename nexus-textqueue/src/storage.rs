//! Arena storage for queue nodes.
//!
//! Storage hands out stable [`Key`]s for inserted values. A key stays valid
//! until the value is removed, after which its slot is recycled through a
//! free list. The queue links nodes by key, so relinking (reverse, sort)
//! never touches storage at all.
//!
//! # Implementations
//!
//! - [`SlabStorage`] - growable `Vec` arena with fallible growth (default)
//! - `slab::Slab<T>` - the `slab` crate (feature `slab`); insertion aborts
//!   instead of failing when memory runs out

use core::fmt;

use crate::{AllocError, Key};

/// Slab-like storage with stable keys.
///
/// # Requirements
///
/// - **Stable keys**: a key addresses the same value until it is removed
/// - **O(1)** insert, remove, get
/// - **Slot reuse**: removed slots are handed out again by later inserts
/// - **Clean failure**: a failed `try_insert` leaves storage unchanged
pub trait Storage<T> {
    /// Key type for this storage.
    type Key: Key;

    /// Inserts a value, returning its key.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if no slot can be obtained. The value is
    /// dropped.
    fn try_insert(&mut self, value: T) -> Result<Self::Key, AllocError>;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value.
    fn clear(&mut self);
}

// =============================================================================
// SlabStorage - growable arena, intrusive free list
// =============================================================================

enum Slot<T, K> {
    Occupied(T),
    Vacant { next_free: K },
}

/// Growable arena with an intrusive free list.
///
/// Vacant slots form a singly-linked stack threaded through the slots
/// themselves, so recycling a slot costs nothing extra. Growth goes through
/// `Vec::try_reserve`: running out of memory surfaces as
/// [`AllocError::OutOfMemory`] rather than an abort.
///
/// The key type bounds the number of live slots; see [`Key::MAX_SLOTS`].
///
/// # Example
///
/// ```
/// use nexus_textqueue::{SlabStorage, Storage};
///
/// let mut storage: SlabStorage<&str> = SlabStorage::new();
/// let a = storage.try_insert("a").unwrap();
/// let b = storage.try_insert("b").unwrap();
///
/// assert_eq!(storage.remove(a), Some("a"));
/// // Slot `a` is recycled
/// assert_eq!(storage.try_insert("c").unwrap(), a);
/// assert_eq!(storage.get(b), Some(&"b"));
/// ```
pub struct SlabStorage<T, K: Key = u32> {
    slots: Vec<Slot<T, K>>,
    free_head: K,
    len: usize,
}

impl<T, K: Key> SlabStorage<T, K> {
    /// Creates empty storage. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: K::NONE,
            len: 0,
        }
    }

    /// Creates storage with room for at least `capacity` values.
    ///
    /// # Errors
    ///
    /// - [`AllocError::KeysExhausted`] if `capacity` exceeds what `K` addresses
    /// - [`AllocError::OutOfMemory`] if the allocation fails
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        if capacity > K::MAX_SLOTS {
            return Err(AllocError::KeysExhausted {
                slots: K::MAX_SLOTS,
            });
        }

        let mut storage = Self::new();
        storage
            .slots
            .try_reserve_exact(capacity)
            .map_err(|_| AllocError::out_of_memory::<Slot<T, K>>(capacity))?;
        Ok(storage)
    }

    /// Returns the number of slots available without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn grow(&mut self) -> Result<(), AllocError> {
        let before = self.slots.capacity();
        self.slots
            .try_reserve(1)
            .map_err(|_| AllocError::out_of_memory::<Slot<T, K>>(before.max(1)))?;
        tracing::trace!(
            from = before,
            to = self.slots.capacity(),
            "grew node storage"
        );
        Ok(())
    }
}

impl<T, K: Key> Default for SlabStorage<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> fmt::Debug for SlabStorage<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlabStorage")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .field("capacity", &self.slots.capacity())
            .finish()
    }
}

impl<T, K: Key> Storage<T> for SlabStorage<T, K> {
    type Key = K;

    fn try_insert(&mut self, value: T) -> Result<K, AllocError> {
        let key = self.free_head;
        if let Some(slot) = self.slots.get_mut(key.as_usize())
            && let Slot::Vacant { next_free } = *slot
        {
            self.free_head = next_free;
            *slot = Slot::Occupied(value);
            self.len += 1;
            return Ok(key);
        }

        let index = self.slots.len();
        if index >= K::MAX_SLOTS {
            return Err(AllocError::KeysExhausted {
                slots: K::MAX_SLOTS,
            });
        }
        if index == self.slots.capacity() {
            self.grow()?;
        }

        self.slots.push(Slot::Occupied(value));
        self.len += 1;
        Ok(K::from_usize(index))
    }

    fn remove(&mut self, key: K) -> Option<T> {
        let slot = self.slots.get_mut(key.as_usize())?;
        if !matches!(slot, Slot::Occupied(_)) {
            return None;
        }

        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match core::mem::replace(slot, vacant) {
            Slot::Occupied(value) => {
                self.free_head = key;
                self.len -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.slots.get(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.slots.get_mut(key.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free_head = K::NONE;
        self.len = 0;
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn try_insert(&mut self, value: T) -> Result<usize, AllocError> {
        Ok(self.insert(value))
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        self.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.get_mut(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        self.clear();
    }
}
