// Domain layer: request-scoped models and the ports the aggregator depends on.

pub mod model;
pub mod ports;
