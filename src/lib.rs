//! Typed, validated models of Discord API entities.
//!
//! Every entity decodes from the JSON Discord sends with
//! [`Entity::from_data`], checks its field constraints, and encodes back
//! with [`Entity::to_data`], optionally leaving out defaults and fields only
//! Discord may set. Entities Discord identifies by snowflake can also be
//! kept in process-wide caches through [`CachedEntity`].
//!
//! Networking is left to the caller: this crate only turns payloads into
//! values and back.
//!
//! [`CachedEntity`]: entity::CachedEntity
//! [`Entity::from_data`]: entity::Entity::from_data
//! [`Entity::to_data`]: entity::Entity::to_data

#[macro_use]
mod preinstanced;

pub mod application;
pub mod config;
pub mod emoji;
pub mod entity;
pub mod error;
pub mod events;
pub mod ext;
pub mod guild;
pub mod id;
pub mod integration;
pub mod interaction;
pub mod reaction;
pub mod team;
pub mod user;
pub mod util;
