//! Utilities for representing values from Discord's API.

pub mod datetime;
pub mod image_hash;

pub use self::{datetime::Timestamp, image_hash::ImageHash};
