pub mod config;
pub mod patch;
pub mod session;
pub mod upload;
pub mod wire;
