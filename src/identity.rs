//! `Identity` - the unforgeable marker behind every variable.
//!
//! An identity carries no data. Its only job is to answer "is this the same
//! unknown as that one?". Identities are minted from a single process-wide
//! counter, so the public face of an identity is its index: equality and
//! hashing are plain integer operations and no index is ever handed out twice.
//!
//! ## Core invariant (uniqueness)
//!
//! The only constructor is [`Identity::mint`]. There is no way to build an
//! identity from an integer, so two identities compare equal iff one was
//! copied from the other.

use core::fmt;
use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};
use crossbeam_utils::CachePadded;

/// Next index to hand out. Starts at 1 so indices fit in a `NonZeroU64`.
static NEXT_INDEX: CachePadded<AtomicU64> = CachePadded::new(AtomicU64::new(1));

/// An opaque identity token.
///
/// `Copy` because the token is just an index; shared ownership is therefore
/// free and lasts as long as the longest holder.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Identity(NonZeroU64);

impl Identity {
    /// Mints an identity distinct from every identity minted before it.
    #[inline]
    pub(crate) fn mint() -> Self {
        // Only the increment itself must be atomic.
        let raw = NEXT_INDEX.fetch_add(1, Ordering::Relaxed);
        match NonZeroU64::new(raw) {
            Some(index) => Identity(index),
            // The counter wrapped. Reusing an index would alias two unknowns.
            None => std::process::abort(),
        }
    }

    /// Returns the index of this identity.
    #[inline(always)]
    pub(crate) const fn index(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.0)
    }
}
