use std::sync::atomic::Ordering::{AcqRel, Acquire, Release};
use std::sync::atomic::{AtomicBool, AtomicUsize};

use super::Buffer::ExpanderPort;
use crate::Census::Structs::Message_Structs::ChainMessage;

impl ExpanderPort {
    /// A fresh port: both slots zeroed, slot 0 producing, no flip pending.
    pub const fn new() -> Self {
        Self {
            slots: [ChainMessage::new(), ChainMessage::new()],
            producer_slot: AtomicUsize::new(0),
            flip_requested: AtomicBool::new(false),
        }
    }

    /// The slot a neighbor writes into. Its contents become visible to the
    /// owner only once a requested flip has been applied.
    #[inline]
    pub fn producer(&self) -> &ChainMessage {
        &self.slots[self.producer_slot.load(Acquire)]
    }

    /// The slot the owner reads from. Always at least one cycle stale.
    #[inline]
    pub fn consumer(&self) -> &ChainMessage {
        &self.slots[self.producer_slot.load(Acquire) ^ 1]
    }

    /// Called by the writing neighbor once the producer slot holds a
    /// complete message. Publishes every field write that preceded it.
    pub fn request_flip(&self) {
        self.flip_requested.store(true, Release);
    }

    /// Host-side half of the handoff contract: must run before the owning
    /// module's next cycle, never during a cycle. Swaps the
    /// producer/consumer designations if a flip is pending.
    /// Returns whether a flip was applied.
    pub fn apply_flip(&self) -> bool {
        if self.flip_requested.swap(false, AcqRel) {
            self.producer_slot.fetch_xor(1, AcqRel);
            true
        } else {
            false
        }
    }

    /// Whether a neighbor has requested a flip that has not landed yet.
    pub fn flip_pending(&self) -> bool {
        self.flip_requested.load(Acquire)
    }
}

impl Default for ExpanderPort {
    fn default() -> Self {
        Self::new()
    }
}
