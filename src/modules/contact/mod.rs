pub mod api;
pub mod entities;
pub mod wire;

pub use entities::{ContactForm, ContactMessage, ContactMessageReply};
pub use wire::{to_contact_message, to_contact_message_reply, ContactMessageReplyWire, ContactMessageWire};
