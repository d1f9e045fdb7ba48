//! Node handles.
//!
//! Nodes live in arena storage and link to each other by integer handle
//! rather than by pointer. A handle type reserves one value, [`Key::NONE`],
//! to mean "no node" (the end of the chain, or an empty head/tail).

/// Integer handle addressing one slot of node storage.
///
/// `NONE` is the sentinel for an absent link. Every other value converts
/// losslessly to and from `usize`, which storage uses as a slot index.
///
/// The handle width bounds how many nodes a queue can hold at once: a
/// `u16`-keyed queue addresses at most `u16::MAX` slots, since the top value
/// is the sentinel.
///
/// # Example
///
/// ```
/// use nexus_textqueue::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::MAX_SLOTS, u32::MAX as usize);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug + 'static {
    /// Sentinel value for "no node".
    const NONE: Self;

    /// Number of addressable slots (every value except `NONE`).
    const MAX_SLOTS: usize;

    /// Creates a handle from a slot index.
    ///
    /// Callers must keep `val < Self::MAX_SLOTS`.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot index.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this addresses a slot.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;
                const MAX_SLOTS: usize = <$ty>::MAX as usize;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    debug_assert!(val < Self::MAX_SLOTS);
                    val as $ty
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key!(u16, u32, usize);

#[cfg(target_pointer_width = "64")]
impl_key!(u64);
