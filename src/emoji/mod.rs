//! Emoji as they appear in reactions, welcome screens and components.

use crate::{
    entity::{field, Entity},
    error::ValidationError,
    id::{marker::EmojiMarker, Id},
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};

/// A unicode emoji or a guild's custom emoji.
///
/// Custom emoji are identified by ID alone: their name can change and
/// reaction payloads sometimes leave it out. Unicode emoji have no ID and
/// are identified by their name, which is the emoji itself.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Emoji {
    #[serde(default)]
    pub id: Option<Id<EmojiMarker>>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub animated: bool,
}

impl Emoji {
    /// A unicode emoji.
    pub fn unicode(emoji: impl Into<String>) -> Self {
        Self {
            id: None,
            name: emoji.into(),
            animated: false,
        }
    }

    /// A custom emoji.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name isn't 2 to 32 characters.
    pub fn custom(
        id: Id<EmojiMarker>,
        name: impl Into<String>,
        animated: bool,
    ) -> Result<Self, ValidationError> {
        let emoji = Self {
            id: Some(id),
            name: name.into(),
            animated,
        };
        emoji.validate()?;

        Ok(emoji)
    }

    /// Whether this is a guild's custom emoji.
    pub const fn is_custom(&self) -> bool {
        self.id.is_some()
    }

    /// The form used in REST routes: the emoji itself, or `name:id`.
    pub fn as_reaction(&self) -> String {
        match self.id {
            Some(id) => format!("{}:{id}", self.name),
            None => self.name.clone(),
        }
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(id), Some(other_id)) => id == other_id,
            (None, None) => self.name == other.name,
            _ => false,
        }
    }
}

impl Eq for Emoji {}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.id {
            Some(id) => id.hash(state),
            None => self.name.hash(state),
        }
    }
}

impl Display for Emoji {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.id {
            Some(id) if self.animated => write!(f, "<a:{}:{id}>", self.name),
            Some(id) => write!(f, "<:{}:{id}>", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl Entity for Emoji {
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "name"];

    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_custom() {
            // Reaction payloads for deleted emoji carry no name.
            if self.name.is_empty() {
                return Ok(());
            }

            field::validate_length("name", &self.name, 2, 32)
        } else {
            field::validate_length("name", &self.name, 1, 32)
        }
    }
}
