//! Collection taxonomy.
//!
//! Every collection cycle is tagged with exactly one [`GcType`] (how the heap
//! is collected) and one [`GcReason`] (why the cycle was started). The tags
//! carry no behavior; the collector driver picks them when it starts a cycle
//! and passes them to tracing and policy code as a [`GcEvent`].
//!
//! Any reason may accompany any type. Which pairings make sense is decided by
//! the driver.

use crate::error::TagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The collection mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GcType {
    /// Young generation copying collection
    Scavenge = 0,
    /// Full-heap mark and sweep
    MarkSweep = 1,
    /// Full-heap mark and compact
    MarkCompact = 2,
}

impl GcType {
    /// Number of mechanisms.
    pub const COUNT: usize = 3;

    /// Every mechanism, in discriminant order.
    pub const ALL: [GcType; GcType::COUNT] =
        [GcType::Scavenge, GcType::MarkSweep, GcType::MarkCompact];

    /// Returns the raw tag value.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the name used in GC traces.
    pub fn name(self) -> &'static str {
        match self {
            GcType::Scavenge => "Scavenge",
            GcType::MarkSweep => "MarkSweep",
            GcType::MarkCompact => "MarkCompact",
        }
    }

    /// Returns true if this mechanism collects the whole heap.
    pub fn is_full(self) -> bool {
        !matches!(self, GcType::Scavenge)
    }
}

impl TryFrom<u8> for GcType {
    type Error = TagError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GcType::ALL
            .get(value as usize)
            .copied()
            .ok_or(TagError::UnknownGcType(value))
    }
}

impl fmt::Display for GcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The condition that started a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GcReason {
    /// Young generation is full
    NewSpace = 0,
    /// Remembered set grew past its limit
    StoreBuffer = 1,
    /// Old generation limit crossed after a scavenge
    Promotion = 2,
    /// Old generation limit crossed
    OldSpace = 3,
    /// Concurrent marking finished
    Finalize = 4,
    /// Full-heap collection requested explicitly
    Full = 5,
    /// External memory pressure
    External = 6,
    /// Embedder reported idle time
    Idle = 7,
    /// Embedder reported low memory
    LowMemory = 8,
    /// Debugger or service request
    Debugging = 9,
    /// A message was handed off on a channel and the sender terminated
    SendAndExit = 10,
}

impl GcReason {
    /// Number of reasons.
    pub const COUNT: usize = 11;

    /// Every reason, in discriminant order.
    pub const ALL: [GcReason; GcReason::COUNT] = [
        GcReason::NewSpace,
        GcReason::StoreBuffer,
        GcReason::Promotion,
        GcReason::OldSpace,
        GcReason::Finalize,
        GcReason::Full,
        GcReason::External,
        GcReason::Idle,
        GcReason::LowMemory,
        GcReason::Debugging,
        GcReason::SendAndExit,
    ];

    /// Returns the raw tag value.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the name used in GC traces.
    pub fn name(self) -> &'static str {
        match self {
            GcReason::NewSpace => "new space",
            GcReason::StoreBuffer => "store buffer",
            GcReason::Promotion => "promotion",
            GcReason::OldSpace => "old space",
            GcReason::Finalize => "finalize",
            GcReason::Full => "full",
            GcReason::External => "external",
            GcReason::Idle => "idle",
            GcReason::LowMemory => "low memory",
            GcReason::Debugging => "debugging",
            GcReason::SendAndExit => "send and exit",
        }
    }
}

impl TryFrom<u8> for GcReason {
    type Error = TagError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GcReason::ALL
            .get(value as usize)
            .copied()
            .ok_or(TagError::UnknownGcReason(value))
    }
}

impl fmt::Display for GcReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The tags attached to one collection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GcEvent {
    /// How the heap is collected
    pub gc_type: GcType,
    /// Why the cycle started
    pub reason: GcReason,
}

impl GcEvent {
    /// Creates an event tag. Every pairing is accepted.
    pub fn new(gc_type: GcType, reason: GcReason) -> Self {
        GcEvent { gc_type, reason }
    }
}

impl fmt::Display for GcEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.gc_type, self.reason)
    }
}
