//! Usage counters for a heap space.
//!
//! Every space (young generation, old generation) owns one [`SpaceUsage`]
//! and keeps it current as objects are allocated, promoted and reclaimed.
//! The counters are measured in machine words:
//!
//! - **capacity**: memory reserved by the space
//! - **used**: memory occupied by live or not-yet-reclaimed objects
//! - **external**: memory attributed to the space but allocated outside of it,
//!   such as off-heap buffers referenced by managed objects
//!
//! # Memory Ordering
//!
//! Each counter is an independent atomic accessed with `Ordering::Relaxed`.
//! Updates to one counter are indivisible, but nothing orders them against
//! updates to the other two. A reader may observe `used` from before a
//! collection and `capacity` from after it. Callers that need a consistent
//! view of several counters must provide their own synchronization, usually
//! by reading at a safepoint.
//!
//! `used <= capacity` is maintained by the owning space, not checked here.

use crossbeam::utils::CachePadded;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Size of a machine word in bytes.
pub const WORD_SIZE: usize = std::mem::size_of::<usize>();

/// Converts a word count to bytes.
#[inline]
pub const fn words_to_bytes(words: usize) -> usize {
    words * WORD_SIZE
}

/// Converts a byte count to words, rounding up to a whole word.
#[inline]
pub const fn bytes_to_words(bytes: usize) -> usize {
    bytes.div_ceil(WORD_SIZE)
}

/// Usage counters for one heap space.
///
/// All methods take `&self` and may be called from any thread. No method
/// blocks or allocates.
///
/// # Examples
///
/// ```
/// use gc_accounting::SpaceUsage;
///
/// let usage = SpaceUsage::with_capacity_in_words(1000);
/// usage.set_used_in_words(600);
/// usage.add_external_in_words(50);
///
/// assert_eq!(usage.combined_used_in_words(), 650);
/// assert_eq!(usage.combined_capacity_in_words(), 1050);
/// ```
#[derive(Debug, Default)]
pub struct SpaceUsage {
    /// Reserved words
    capacity_in_words: AtomicUsize,
    /// Occupied words within the reservation
    used_in_words: AtomicUsize,
    /// Words allocated outside the space but charged to it.
    /// Registered from mutator threads, so it gets its own cache line.
    external_in_words: CachePadded<AtomicUsize>,
}

impl SpaceUsage {
    /// Creates a usage record with all counters at zero.
    pub fn new() -> Self {
        SpaceUsage {
            capacity_in_words: AtomicUsize::new(0),
            used_in_words: AtomicUsize::new(0),
            external_in_words: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a usage record for a space that starts with `capacity` words
    /// reserved and nothing used.
    pub fn with_capacity_in_words(capacity: usize) -> Self {
        let usage = SpaceUsage::new();
        usage.set_capacity_in_words(capacity);
        usage
    }

    /// Returns the reserved capacity in words.
    #[inline]
    pub fn capacity_in_words(&self) -> usize {
        self.capacity_in_words.load(Ordering::Relaxed)
    }

    /// Returns the used words.
    #[inline]
    pub fn used_in_words(&self) -> usize {
        self.used_in_words.load(Ordering::Relaxed)
    }

    /// Returns the external words charged to this space.
    #[inline]
    pub fn external_in_words(&self) -> usize {
        self.external_in_words.load(Ordering::Relaxed)
    }

    /// Overwrites the reserved capacity.
    #[inline]
    pub fn set_capacity_in_words(&self, words: usize) {
        self.capacity_in_words.store(words, Ordering::Relaxed);
    }

    /// Overwrites the used words.
    #[inline]
    pub fn set_used_in_words(&self, words: usize) {
        self.used_in_words.store(words, Ordering::Relaxed);
    }

    /// Overwrites the external words.
    #[inline]
    pub fn set_external_in_words(&self, words: usize) {
        self.external_in_words.store(words, Ordering::Relaxed);
    }

    /// Registers `words` of external memory. Returns the previous value.
    #[inline]
    pub fn add_external_in_words(&self, words: usize) -> usize {
        self.external_in_words.fetch_add(words, Ordering::Relaxed)
    }

    /// Deregisters `words` of external memory. Returns the previous value.
    ///
    /// Removing more than is registered is a caller bug. It is logged and
    /// asserted in debug builds; release builds do not clamp the counter.
    #[inline]
    pub fn sub_external_in_words(&self, words: usize) -> usize {
        let previous = self.external_in_words.fetch_sub(words, Ordering::Relaxed);
        if previous < words {
            log::error!(
                "external usage underflow: freeing {} words with only {} registered",
                words,
                previous
            );
            debug_assert!(
                previous >= words,
                "external usage underflow: {} - {}",
                previous,
                words
            );
        }
        previous
    }

    /// Returns `capacity + external`.
    ///
    /// The two counters are read independently and may come from different
    /// instants.
    #[inline]
    pub fn combined_capacity_in_words(&self) -> usize {
        self.capacity_in_words() + self.external_in_words()
    }

    /// Returns `used + external`, with the same caveat as
    /// [`combined_capacity_in_words`](Self::combined_capacity_in_words).
    #[inline]
    pub fn combined_used_in_words(&self) -> usize {
        self.used_in_words() + self.external_in_words()
    }

    /// Reads all three counters into a plain value for reporting.
    ///
    /// Each field is read separately; the result can be torn.
    pub fn stats(&self) -> UsageStats {
        UsageStats {
            capacity_in_words: self.capacity_in_words(),
            used_in_words: self.used_in_words(),
            external_in_words: self.external_in_words(),
        }
    }
}

impl Clone for SpaceUsage {
    fn clone(&self) -> Self {
        SpaceUsage {
            capacity_in_words: AtomicUsize::new(self.capacity_in_words()),
            used_in_words: AtomicUsize::new(self.used_in_words()),
            external_in_words: CachePadded::new(AtomicUsize::new(self.external_in_words())),
        }
    }
}

impl From<&SpaceUsage> for UsageStats {
    fn from(usage: &SpaceUsage) -> Self {
        usage.stats()
    }
}

/// Counter values read from a [`SpaceUsage`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    /// Reserved words
    pub capacity_in_words: usize,
    /// Occupied words
    pub used_in_words: usize,
    /// External words
    pub external_in_words: usize,
}

impl UsageStats {
    /// Returns `capacity + external`.
    pub fn combined_capacity_in_words(&self) -> usize {
        self.capacity_in_words + self.external_in_words
    }

    /// Returns `used + external`.
    pub fn combined_used_in_words(&self) -> usize {
        self.used_in_words + self.external_in_words
    }

    /// Returns the reserved capacity in bytes.
    pub fn capacity_in_bytes(&self) -> usize {
        words_to_bytes(self.capacity_in_words)
    }

    /// Returns the used memory in bytes.
    pub fn used_in_bytes(&self) -> usize {
        words_to_bytes(self.used_in_words)
    }

    /// Returns the external memory in bytes.
    pub fn external_in_bytes(&self) -> usize {
        words_to_bytes(self.external_in_words)
    }
}
