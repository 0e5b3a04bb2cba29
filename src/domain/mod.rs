// Domain layer: the package list model and the fetch port. No I/O here.

pub mod model;
pub mod ports;
