//! The shared shape of every entity: decode, validate, encode, copy.
//!
//! Entities are plain structs deriving serde. [`Entity`] layers Discord's
//! conventions on top: payloads must be objects, decoded values are
//! validated, and encoding can leave out defaults and server-owned fields.

pub mod cache;
pub mod field;

pub use self::cache::{CachedEntity, EntityCache};

use crate::error::{EntityError, ValidationError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// Controls what [`Entity::to_data`] writes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PutOptions {
    /// Write fields even when they hold their default value.
    pub defaults: bool,
    /// Write identifiers and other fields only Discord may set.
    pub include_internals: bool,
}

impl PutOptions {
    /// Everything, suitable for a lossless round-trip.
    pub const FULL: Self = Self {
        defaults: true,
        include_internals: true,
    };

    /// Only the non-default, user-settable fields, as sent in edit requests.
    pub const MINIMAL: Self = Self {
        defaults: false,
        include_internals: false,
    };

    /// Set whether defaults are written.
    #[must_use]
    pub const fn defaults(mut self, defaults: bool) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set whether internal fields are written.
    #[must_use]
    pub const fn include_internals(mut self, include_internals: bool) -> Self {
        self.include_internals = include_internals;
        self
    }
}

/// A record mirroring a Discord API resource.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Keys only written with [`PutOptions::include_internals`].
    const INTERNAL_FIELDS: &'static [&'static str] = &[];

    /// Keys written even when they hold a default value.
    const REQUIRED_FIELDS: &'static [&'static str] = &[];

    /// Check every constrained field.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Decode and validate an entity from its wire JSON.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] if `data` is not an object, doesn't match
    /// the wire shape, or fails validation.
    fn from_data(data: &Value) -> Result<Self, EntityError> {
        if !data.is_object() {
            return Err(EntityError::NOT_AN_OBJECT);
        }

        let entity = Self::deserialize(data).map_err(EntityError::deserialize)?;
        entity.validate()?;

        Ok(entity)
    }

    /// Encode the entity into its wire JSON.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] if serde can't encode a field.
    fn to_data(&self, options: PutOptions) -> Result<Map<String, Value>, EntityError> {
        let mut data = match serde_json::to_value(self).map_err(EntityError::serialize)? {
            Value::Object(data) => data,
            _ => return Err(EntityError::NOT_AN_OBJECT),
        };

        if !options.include_internals {
            for key in Self::INTERNAL_FIELDS {
                data.remove(*key);
            }
        }

        if !options.defaults {
            data.retain(|key, value| {
                Self::REQUIRED_FIELDS.contains(&key.as_str()) || !field::is_default_value(value)
            });
        }

        Ok(data)
    }

    /// Clone the entity, apply `update` and validate the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the updated copy is invalid; `self`
    /// is left untouched either way.
    fn copy_with<F: FnOnce(&mut Self)>(&self, update: F) -> Result<Self, ValidationError> {
        let mut copy = self.clone();
        update(&mut copy);
        copy.validate()?;

        Ok(copy)
    }
}
