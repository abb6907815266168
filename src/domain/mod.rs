// Domain layer: stream models and ports. No I/O implementations here.

pub mod model;
pub mod ports;
