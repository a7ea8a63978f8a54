use crate::{
    emoji::Emoji,
    entity::Entity,
    error::ValidationError,
    id::{
        marker::{ChannelMarker, GuildMarker, MessageMarker, UserMarker},
        Id,
    },
    reaction::{Reaction, ReactionMapping, ReactionType},
};
use serde::{Deserialize, Serialize};

/// A user reacted to a message.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReactionAddEvent {
    pub message_id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    #[serde(default)]
    pub guild_id: Option<Id<GuildMarker>>,
    pub user_id: Id<UserMarker>,
    #[serde(default)]
    pub message_author_id: Option<Id<UserMarker>>,
    pub emoji: Emoji,
    #[serde(default)]
    pub burst: bool,
    #[serde(rename = "type", default)]
    pub kind: ReactionType,
}

impl ReactionAddEvent {
    pub fn reaction(&self) -> Reaction {
        Reaction::new(self.emoji.clone(), self.kind)
    }

    /// Record the reaction. Returns whether the mapping changed.
    pub fn apply(&self, mapping: &mut ReactionMapping) -> bool {
        mapping.add(self.reaction(), self.user_id)
    }
}

impl Entity for ReactionAddEvent {
    fn validate(&self) -> Result<(), ValidationError> {
        self.emoji.validate()
    }
}

/// A user removed their reaction from a message.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReactionDeleteEvent {
    pub message_id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    #[serde(default)]
    pub guild_id: Option<Id<GuildMarker>>,
    pub user_id: Id<UserMarker>,
    pub emoji: Emoji,
    #[serde(default)]
    pub burst: bool,
    #[serde(rename = "type", default)]
    pub kind: ReactionType,
}

impl ReactionDeleteEvent {
    pub fn reaction(&self) -> Reaction {
        Reaction::new(self.emoji.clone(), self.kind)
    }

    /// Forget the reaction. Returns whether the mapping changed.
    pub fn apply(&self, mapping: &mut ReactionMapping) -> bool {
        mapping.remove(&self.reaction(), self.user_id)
    }
}

impl Entity for ReactionDeleteEvent {
    fn validate(&self) -> Result<(), ValidationError> {
        self.emoji.validate()
    }
}

/// Every reaction with one emoji was removed from a message.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReactionClearEmojiEvent {
    pub message_id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    #[serde(default)]
    pub guild_id: Option<Id<GuildMarker>>,
    pub emoji: Emoji,
}

impl ReactionClearEmojiEvent {
    pub fn apply(&self, mapping: &mut ReactionMapping) -> bool {
        mapping.remove_emoji(&self.emoji)
    }
}

impl Entity for ReactionClearEmojiEvent {
    fn validate(&self) -> Result<(), ValidationError> {
        self.emoji.validate()
    }
}

/// Every reaction was removed from a message.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReactionClearEvent {
    pub message_id: Id<MessageMarker>,
    pub channel_id: Id<ChannelMarker>,
    #[serde(default)]
    pub guild_id: Option<Id<GuildMarker>>,
}

impl ReactionClearEvent {
    pub fn apply(&self, mapping: &mut ReactionMapping) -> bool {
        let changed = !mapping.is_empty();
        mapping.clear();

        changed
    }
}

impl Entity for ReactionClearEvent {}
