// Domain layer: the listing record and the ports the adapters implement.

pub mod model;
pub mod ports;
