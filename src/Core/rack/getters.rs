use super::*;
use std::sync::atomic::Ordering;

/// Getter methods for Rack
///
/// These provide safe access to the rack's private state for display,
/// debugging and monitoring purposes.
impl Rack {
    /// Number of slots in the row, empty ones included.
    pub fn len(&self) -> usize {
        self.row.read().len()
    }

    /// Whether the row holds no slots at all.
    pub fn is_empty(&self) -> bool {
        self.row.read().is_empty()
    }

    /// Number of occupied slots.
    pub fn module_count(&self) -> usize {
        self.row.read().iter().filter(|slot| slot.is_some()).count()
    }

    /// Cycles processed since the rack was created.
    ///
    /// Loaded with relaxed ordering since this is primarily used for
    /// debugging and monitoring.
    pub fn frame(&self) -> u64 {
        self.frame.load(Ordering::Relaxed)
    }

    /// The sample rate this rack was created with.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Id of each slot's occupant, left to right; `None` marks an empty
    /// slot. Monitoring path; allocates, so never call it from a module
    /// step.
    pub fn ids(&self) -> Vec<Option<u64>> {
        self.row
            .read()
            .iter()
            .map(|slot| slot.as_ref().map(|module| module.id()))
            .collect()
    }
}
