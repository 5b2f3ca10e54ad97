// Domain layer: entities, errors, ports and pure access policy.

pub mod access;
pub mod codes;
pub mod entities;
pub mod errors;
pub mod ports;
