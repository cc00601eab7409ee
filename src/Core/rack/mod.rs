use crate::Census::{CensusModule, CensusReadout};
use crate::Core::Module::{BlankModule, CycleArgs, Neighbors, RackModule};
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
mod debug;
mod getters;

// Use parking_lot's RwLock: the engine thread and the display thread both
// take the read side; only topology edits take the write side.
use parking_lot::RwLock;

/// One physical position in the row. Removal leaves the slot empty rather
/// than sliding its neighbors together, so a mid-chain removal is a real
/// break, not a silent re-join.
pub type Slot = Option<Arc<dyn RackModule>>;

/// The host environment: a row of slots, stepped once per cycle.
///
/// The rack discharges the host half of the expander handoff contract: it
/// calls every module's `begin_cycle` (where pending flips are applied)
/// immediately before that module's `process`, so a neighbor's write can
/// never become visible mid-step. It also rebuilds each module's `Neighbors`
/// view fresh on every step; adjacency is never cached.
pub struct Rack {
    row: RwLock<Vec<Slot>>,
    sample_rate: f32,
    frame: AtomicU64,
    next_id: AtomicU64,
}

impl Rack {
    /// Create an empty rack running at the given sample rate.
    pub fn new(sample_rate: f32) -> io::Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Rack::new(): sample rate must be positive and finite, got {}",
                    sample_rate
                ),
            ));
        }

        Ok(Self {
            row: RwLock::new(Vec::new()),
            sample_rate,
            frame: AtomicU64::new(0),
            next_id: AtomicU64::new(1),
        })
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Splice a new slot holding a census module in at `position`, shifting
    /// that slot and everything right of it one position rightward. Returns
    /// the new module's id. The neighbors discover the newcomer on their own
    /// next cycle; no notification is sent.
    pub fn insert_census(&self, position: usize) -> io::Result<u64> {
        let id = self.allocate_id();
        self.insert_at(position, Some(Arc::new(CensusModule::new(id))))?;
        Ok(id)
    }

    /// Splice in a non-cooperating blank. Returns its id.
    pub fn insert_blank(&self, position: usize) -> io::Result<u64> {
        let id = self.allocate_id();
        self.insert_at(position, Some(Arc::new(BlankModule::new(id))))?;
        Ok(id)
    }

    /// Splice in an empty slot, pushing the two sides of the row apart.
    pub fn insert_gap(&self, position: usize) -> io::Result<()> {
        self.insert_at(position, None)
    }

    /// Splice in an externally built module at `position`.
    pub fn attach(&self, position: usize, module: Arc<dyn RackModule>) -> io::Result<()> {
        self.insert_at(position, Some(module))
    }

    fn insert_at(&self, position: usize, slot: Slot) -> io::Result<()> {
        let mut row = self.row.write();
        if position > row.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Insert position {} out of range (row holds {})",
                    position,
                    row.len()
                ),
            ));
        }
        row.insert(position, slot);
        Ok(())
    }

    /// Take the module out of `position`, leaving the slot empty. A chain
    /// broken this way splits; the break propagates outward on its own, one
    /// hop per cycle, until both sub-chains have reconverged.
    pub fn remove(&self, position: usize) -> io::Result<Arc<dyn RackModule>> {
        let mut row = self.row.write();
        match row.get_mut(position) {
            Some(slot) => slot.take().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Slot {} is already empty", position),
                )
            }),
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Remove position {} out of range (row holds {})",
                    position,
                    row.len()
                ),
            )),
        }
    }

    /// Delete the slot at `position` entirely, closing the gap. Whatever sat
    /// on either side becomes adjacent; two chains separated only by this
    /// slot merge over the following cycles.
    pub fn extract(&self, position: usize) -> io::Result<Slot> {
        let mut row = self.row.write();
        if position >= row.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Extract position {} out of range (row holds {})",
                    position,
                    row.len()
                ),
            ));
        }
        Ok(row.remove(position))
    }

    /// Move the slot at `from` so it ends up at `to`, reordering the row.
    pub fn relocate(&self, from: usize, to: usize) -> io::Result<()> {
        let mut row = self.row.write();
        if from >= row.len() || to >= row.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Relocate {} -> {} out of range (row holds {})",
                    from,
                    to,
                    row.len()
                ),
            ));
        }
        let slot = row.remove(from);
        row.insert(to, slot);
        Ok(())
    }

    /// Step every occupied slot once, left to right. This is the real-time
    /// path: no allocation, no blocking beyond the uncontended row read-lock
    /// taken once for the whole cycle.
    pub fn process_cycle(&self) {
        let row = self.row.read();
        let args = self.cycle_args();
        for index in 0..row.len() {
            Self::step_slot(&row, index, &args);
        }
    }

    /// Step every occupied slot once, in the given order. The order must
    /// name every slot exactly once; the protocol converges for any such
    /// order, and converges within one row-length of cycles for any order
    /// held fixed across cycles.
    pub fn process_cycle_ordered(&self, order: &[usize]) -> io::Result<()> {
        let row = self.row.read();
        if !is_permutation(order, row.len()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Cycle order must visit each of {} slots exactly once", row.len()),
            ));
        }
        let args = self.cycle_args();
        for &index in order {
            Self::step_slot(&row, index, &args);
        }
        Ok(())
    }

    fn cycle_args(&self) -> CycleArgs {
        let frame = self.frame.fetch_add(1, Ordering::Relaxed);
        CycleArgs {
            sample_time: 1.0 / self.sample_rate,
            frame,
        }
    }

    fn step_slot(row: &[Slot], index: usize, args: &CycleArgs) {
        let Some(module) = &row[index] else {
            return;
        };
        module.begin_cycle();
        let neighbors = Neighbors {
            left: index.checked_sub(1).and_then(|i| row[i].as_deref()),
            right: row.get(index + 1).and_then(|slot| slot.as_deref()),
        };
        module.process(args, neighbors);
    }

    /// Published results of the module at `position`, if that slot holds a
    /// census module. Display-side call; takes no part in the cycle.
    pub fn readout(&self, position: usize) -> Option<CensusReadout> {
        let row = self.row.read();
        row.get(position)?
            .as_deref()?
            .as_census()
            .map(|census| census.readout())
    }

    /// The module occupying `position`, if the slot exists and is occupied.
    pub fn module(&self, position: usize) -> Option<Arc<dyn RackModule>> {
        self.row.read().get(position)?.clone()
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &index in order {
        if index >= len || seen[index] {
            return false;
        }
        seen[index] = true;
    }
    true
}
