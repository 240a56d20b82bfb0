//! GC Accounting - Space usage counters and collection taxonomy
//!
//! This component provides:
//! - Per-space usage counters (capacity, used, external) in machine words
//! - Lock-free, relaxed-ordering updates from mutator and collector threads
//! - Collection mechanism and trigger reason tags for policy and tracing
//!
//! Heap spaces own a [`SpaceUsage`] and update it as they allocate, promote
//! and reclaim. The collector driver tags each cycle with a [`GcEvent`].

pub mod error;
pub mod gc_kind;
pub mod space_usage;

// Re-export main types
pub use error::TagError;
pub use gc_kind::{GcEvent, GcReason, GcType};
pub use space_usage::{bytes_to_words, words_to_bytes, SpaceUsage, UsageStats, WORD_SIZE};
