pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{AuthSession, CreateUserRequest, LoginOutcome, UpdateUserRequest, User};
pub use wire::{to_user, UserWire};
