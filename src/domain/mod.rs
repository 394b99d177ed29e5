// Domain layer: records, classification windows and the ports the engine reads through.

pub mod model;
pub mod ports;
