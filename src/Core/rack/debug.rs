use super::*;
use crate::Census::CensusModule;
use std::fmt;

// Debug proxy implementations that call the standalone debug functions
impl fmt::Debug for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_rack(self, f)
    }
}

impl fmt::Debug for CensusModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_census_module(self, f)
    }
}

impl fmt::Debug for crate::Census::Buffer::Buffer::ExpanderPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_expander_port(self, f)
    }
}
