pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{CreateSlideRequest, Slide, UpdateSlideRequest};
pub use wire::{to_slide, SlideWire};
