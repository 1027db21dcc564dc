pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{CreateTestimonialRequest, MediaType, Testimonial, UpdateTestimonialRequest};
pub use wire::{to_testimonial, TestimonialWire};
