use crate::Census::Buffer::Buffer::ExpanderPort;
use crate::Census::CensusModule;
use crate::Core::rack::Rack;
use std::fmt;
use std::sync::atomic::Ordering;

/// Debug function for Rack
///
/// Provides a safe debug representation that shows:
/// - Slot count and module ids, left to right
/// - Sample rate and cycle counter
/// Takes the row read-lock; never call it from a module step.
pub fn debug_rack(rack: &Rack, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Rack")
        .field("modules", &rack.len())
        .field("ids", &rack.ids())
        .field("sample_rate", &rack.sample_rate())
        .field("frame", &rack.frame())
        .finish()
}

/// Debug function for CensusModule
///
/// Shows:
/// - The published readout (id as the 16-hex badge the display uses)
/// - Whether either port has a flip waiting to land
pub fn debug_census_module(module: &CensusModule, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let readout = module.readout();
    f.debug_struct("CensusModule")
        .field("id", &format_args!("{:016x}", readout.id))
        .field("rank", &readout.rank)
        .field("total", &readout.total)
        .field("left_flip_pending", &module.left_port().flip_pending())
        .field("right_flip_pending", &module.right_port().flip_pending())
        .finish()
}

/// Debug function for ExpanderPort
///
/// Safely displays the port designations without exposing slot contents
/// (whatever is mid-handoff is the neighbor's business).
pub fn debug_expander_port(port: &ExpanderPort, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ExpanderPort")
        .field("producer_slot", &port.producer_slot.load(Ordering::Relaxed))
        .field("flip_requested", &port.flip_requested.load(Ordering::Relaxed))
        .finish_non_exhaustive()
}
