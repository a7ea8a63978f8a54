use crate::{
    emoji::Emoji,
    entity::{field, Entity},
    error::ValidationError,
    id::{
        marker::{ChannelMarker, EmojiMarker},
        Id,
    },
};
use serde::{Deserialize, Serialize};

/// Screen shown to new members of a community guild.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WelcomeScreen {
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub welcome_channels: Vec<WelcomeScreenChannel>,
}

impl WelcomeScreen {
    /// Create a welcome screen.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the description is over 140
    /// characters, there are more than 5 channels, or a channel is invalid.
    pub fn new(
        description: Option<String>,
        welcome_channels: Vec<WelcomeScreenChannel>,
    ) -> Result<Self, ValidationError> {
        let screen = Self {
            description,
            welcome_channels,
        };
        screen.validate()?;

        Ok(screen)
    }
}

impl Entity for WelcomeScreen {
    const REQUIRED_FIELDS: &'static [&'static str] = &["description", "welcome_channels"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_optional_length("description", self.description.as_deref(), 0, 140)?;
        field::validate_count("welcome_channels", self.welcome_channels.len(), 5)?;

        self.welcome_channels
            .iter()
            .try_for_each(|channel| channel.validate())
    }
}

/// A channel suggested on a [`WelcomeScreen`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WelcomeScreenChannel {
    pub channel_id: Id<ChannelMarker>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji_id: Option<Id<EmojiMarker>>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub emoji_name: Option<String>,
}

impl WelcomeScreenChannel {
    /// Create a welcome channel.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the description isn't 1 to 42
    /// characters.
    pub fn new(
        channel_id: Id<ChannelMarker>,
        description: impl Into<String>,
        emoji: Option<&Emoji>,
    ) -> Result<Self, ValidationError> {
        let channel = Self {
            channel_id,
            description: description.into(),
            emoji_id: emoji.and_then(|emoji| emoji.id),
            emoji_name: emoji.map(|emoji| emoji.name.clone()),
        };
        channel.validate()?;

        Ok(channel)
    }

    /// The emoji shown next to the channel.
    pub fn emoji(&self) -> Option<Emoji> {
        match (self.emoji_id, &self.emoji_name) {
            (None, None) => None,
            (id, name) => Some(Emoji {
                id,
                name: name.clone().unwrap_or_default(),
                animated: false,
            }),
        }
    }
}

impl Entity for WelcomeScreenChannel {
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["channel_id", "description", "emoji_id", "emoji_name"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_length("description", &self.description, 1, 42)
    }
}
