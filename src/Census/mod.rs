mod builder;
mod module;

pub use builder::RackBuilder;
pub use module::{CensusModule, CensusReadout};

pub mod Buffer {
    pub mod Buffer;
    pub mod Buffer_impl;
    pub use Buffer::ExpanderPort; // re-export for stable path
}

pub mod Structs {
    pub mod Message_Structs;
    pub use Message_Structs::ChainMessage; // re-export for stable path
}
