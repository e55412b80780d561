// Domain layer: the demo catalogue and the port every Executor implements.

pub mod model;
pub mod ports;
