pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{CreateServiceRequest, Service, ServiceLegacyKeys, UpdateServiceRequest};
pub use wire::{to_service, ServiceWire};
