// This is the double-buffered message port - one per side of a module

use crate::Census::Structs::Message_Structs::ChainMessage;

use std::sync::atomic::{AtomicBool, AtomicUsize};

/// Number of message slots per port. One acts as producer, one as consumer;
/// at most one message is ever in flight per side at a time.
pub const PAIR_SLOTS: usize = 2;

/// A double-buffered message port for one side (left or right) of a module.
///
/// The owning module allocates both slots inline; a neighbor only ever holds
/// a shared reference to the port, never ownership.
///
/// ### Concurrency Design:
/// - **Neighbor (writes)**: writes into whichever slot currently carries the
///   producer designation, then raises `flip_requested`. It never touches
///   the consumer slot.
/// - **Owner (reads)**: reads only the slot currently designated consumer.
///   The host applies a pending flip before the owner's next cycle begins,
///   swapping the two designations. The deferred swap is the sole
///   synchronization primitive: the owner can never observe a message
///   mid-write, because visibility only changes at its own cycle boundary.
pub struct ExpanderPort {
    /// The two fixed slots. Which one is the producer is decided by
    /// `producer_slot`, not by position.
    pub(crate) slots: [ChainMessage; PAIR_SLOTS],

    /// Index of the slot currently acting as producer (0 or 1). The other
    /// slot is the consumer.
    pub(crate) producer_slot: AtomicUsize,

    /// Raised by the neighbor once the producer slot holds a complete
    /// message. Cleared by `apply_flip` at the owner's next cycle boundary.
    pub(crate) flip_requested: AtomicBool,
}
