// Domain layer: models and ports. No transform logic lives here.

pub mod model;
pub mod ports;
