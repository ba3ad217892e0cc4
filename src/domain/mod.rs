// Domain layer: content shapes shared by the generators and the schema port.

pub mod model;
pub mod ports;
