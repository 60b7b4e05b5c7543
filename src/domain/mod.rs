// Domain layer: the road model and the port through which road descriptions are read.

pub mod model;
pub mod ports;
