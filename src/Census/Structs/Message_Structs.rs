// This is the message that rides an expander port - one struct, both directions

// no locks in ChainMessage; plain atomics keep it write-tearing-free without
// giving up the fixed ABI layout

use std::sync::atomic::AtomicU32;

/// The unit of exchange between two adjacent modules.
///
/// One `ChainMessage` carries both directions' fields at once, but each
/// direction's traffic only ever touches its own field: `rank_so_far` means
/// something on rightward trips, `total_count` on leftward trips. Whichever
/// field does not belong to the current transmission is stale leftovers and
/// must not be read.
/// Marked `#[repr(C)]` to ensure a defined and stable memory layout for
/// embedding hosts.
#[repr(C)]
#[derive(Debug, Default)]
pub struct ChainMessage {
    /// Count of modules from the left edge up to and including the sender.
    /// Travels rightward.
    pub rank_so_far: AtomicU32,

    /// Final chain length, known once the rightmost module has been reached.
    /// Travels leftward.
    pub total_count: AtomicU32,
}

impl ChainMessage {
    pub const fn new() -> Self {
        Self {
            rank_so_far: AtomicU32::new(0),
            total_count: AtomicU32::new(0),
        }
    }
}
