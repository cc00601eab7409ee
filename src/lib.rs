// Module naming follows project convention (RXP = Rack eXpander Protocol)
#[allow(non_snake_case)]
pub mod Census;

#[allow(non_snake_case)]
pub mod Core {
    pub mod Module;
    pub use Module::{BlankModule, CycleArgs, Neighbors, RackModule};
    pub mod rack;
    pub use rack::Rack;
}

#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}

pub mod ffi;
