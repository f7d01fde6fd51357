// Domain layer: the car record, diagnostic results and ports. No I/O here.

pub mod model;
pub mod ports;
pub mod report;
