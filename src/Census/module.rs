// In src/Census/module.rs
use crate::Census::Buffer::Buffer::ExpanderPort;
use crate::Core::Module::{CycleArgs, Neighbors, RackModule};
use crossbeam_utils::CachePadded;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

/// Snapshot of a module's published census results, read by a display layer
/// at its own refresh rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusReadout {
    /// Stable identifier of the module instance, assigned by the rack.
    pub id: u64,
    /// 1-indexed position from the left edge of the contiguous chain.
    pub rank: u32,
    /// Number of cooperating modules in the contiguous chain.
    pub total: u32,
}

/// A chain-census module.
///
/// Every cycle it rediscovers its own 1-indexed rank within a contiguous run
/// of cooperating modules and the total length of that run, talking only to
/// its immediate neighbors through the two [`ExpanderPort`]s. Nothing is kept
/// between cycles beyond the two published integers; recomputation is total,
/// so topology changes need no notification and nothing can drift.
pub struct CensusModule {
    id: u64,

    /// Port facing the left neighbor. The left neighbor feeds our rank
    /// through its producer slot.
    left: CachePadded<ExpanderPort>,

    /// Port facing the right neighbor. The right neighbor feeds the
    /// converged total through its producer slot.
    right: CachePadded<ExpanderPort>,

    /// Published results, stored once per cycle, polled by the display
    /// layer at a lower rate. Padded away from the port traffic.
    rank: CachePadded<AtomicU32>,
    total: CachePadded<AtomicU32>,
}

impl CensusModule {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            left: CachePadded::new(ExpanderPort::new()),
            right: CachePadded::new(ExpanderPort::new()),
            rank: CachePadded::new(AtomicU32::new(0)),
            total: CachePadded::new(AtomicU32::new(0)),
        }
    }

    /// Port facing the left neighbor.
    #[inline]
    pub fn left_port(&self) -> &ExpanderPort {
        &self.left
    }

    /// Port facing the right neighbor.
    #[inline]
    pub fn right_port(&self) -> &ExpanderPort {
        &self.right
    }

    /// This module's 1-indexed position from the left edge of its chain.
    /// 0 until the first cycle has run.
    pub fn rank(&self) -> u32 {
        self.rank.load(Acquire)
    }

    /// Length of the contiguous chain this module belongs to, as currently
    /// converged. 0 until the first cycle has run.
    pub fn total(&self) -> u32 {
        self.total.load(Acquire)
    }

    /// Display-layer snapshot of the published results.
    pub fn readout(&self) -> CensusReadout {
        CensusReadout {
            id: self.id,
            rank: self.rank(),
            total: self.total(),
        }
    }
}

impl RackModule for CensusModule {
    fn id(&self) -> u64 {
        self.id
    }

    fn begin_cycle(&self) {
        // Host contract: pending flips land here, before the step, never
        // during it.
        self.left.apply_flip();
        self.right.apply_flip();
    }

    fn process(&self, _args: &CycleArgs, neighbors: Neighbors<'_>) {
        // Adjacency is re-derived every cycle; a neighbor that is not a
        // census peer counts the same as no neighbor at all.
        let left_peer = neighbors.left.and_then(|m| m.as_census());
        let right_peer = neighbors.right.and_then(|m| m.as_census());

        // Rightward pass: my rank is the left neighbor's running count plus
        // me, or 1 at the left edge.
        let rank = match left_peer {
            Some(_) => self.left.consumer().rank_so_far.load(Relaxed) + 1,
            None => 1,
        };

        let total = match right_peer {
            Some(peer) => {
                // Hand the running count to the right neighbor through ITS
                // left port, then tell it to flip that port.
                let sink = peer.left_port();
                sink.producer().rank_so_far.store(rank, Relaxed);
                sink.request_flip();
                // Last cycle's converged total. The flip just requested has
                // not landed on our side either; reading the consumer here
                // is one cycle stale on purpose, which keeps convergence at
                // one hop per cycle without a barrier.
                self.right.consumer().total_count.load(Relaxed)
            }
            // Right edge: the count stops with me.
            None => rank,
        };

        // Leftward pass: the total flows back through the left neighbor's
        // right port.
        if let Some(peer) = left_peer {
            let sink = peer.right_port();
            sink.producer().total_count.store(total, Relaxed);
            sink.request_flip();
        }

        self.rank.store(rank, Release);
        self.total.store(total, Release);
    }

    fn as_census(&self) -> Option<&CensusModule> {
        Some(self)
    }
}
