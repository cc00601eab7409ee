// Host-facing module abstraction - what a rack slot must implement

use crate::Census::CensusModule;
use std::fmt::Debug;

/// Per-cycle arguments handed to every module by the host scheduler.
/// The census engine has no use for the timing fields; they exist for
/// modules that do.
#[derive(Debug, Clone, Copy)]
pub struct CycleArgs {
    /// Seconds covered by one cycle.
    pub sample_time: f32,

    /// Monotonic cycle counter since the rack was created.
    pub frame: u64,
}

/// Borrowed view of the modules adjacent to the one being stepped.
/// Rebuilt by the host for every module on every cycle; adjacency is never
/// cached across cycles.
#[derive(Clone, Copy)]
pub struct Neighbors<'a> {
    pub left: Option<&'a dyn RackModule>,
    pub right: Option<&'a dyn RackModule>,
}

/// A module that can occupy a rack slot and be stepped once per cycle.
///
/// `process` runs on the real-time path: implementations must not block,
/// allocate, or suspend.
pub trait RackModule: Send + Sync + Debug {
    /// Stable identifier for this module instance, assigned by the rack.
    fn id(&self) -> u64;

    /// Host boundary hook, invoked before `process` on every cycle.
    /// Pending expander flips are applied here, so a message can never
    /// change visibility during the step itself.
    fn begin_cycle(&self) {}

    /// One processing step.
    fn process(&self, args: &CycleArgs, neighbors: Neighbors<'_>);

    /// Capability query: is this module a cooperating census peer?
    /// The default answer is no; only census modules opt in.
    fn as_census(&self) -> Option<&CensusModule> {
        None
    }
}

/// A slot filler that takes part in no protocol. Any census module next to
/// one of these sees the end of its chain.
#[derive(Debug)]
pub struct BlankModule {
    id: u64,
}

impl BlankModule {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl RackModule for BlankModule {
    fn id(&self) -> u64 {
        self.id
    }

    fn process(&self, _args: &CycleArgs, _neighbors: Neighbors<'_>) {}
}
