// Domain layer: sheet model and the codec ports the gateway depends on.

pub mod model;
pub mod ports;
