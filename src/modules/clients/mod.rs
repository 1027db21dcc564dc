pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{Client, ClientLegacyKeys, CreateClientRequest, UpdateClientRequest};
pub use wire::{to_client, ClientWire};
