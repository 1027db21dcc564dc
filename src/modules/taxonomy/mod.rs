//! Categories and tags. Both are label sets attached many-to-many to blog
//! posts and share one shape.

pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{Category, Label, LabelKind, LabelRequest, Tag, UpdateLabelRequest};
pub use wire::{to_label, LabelWire};
