// Domain layer: export/keychain models and the ports the pipeline runs against.

pub mod model;
pub mod ports;
