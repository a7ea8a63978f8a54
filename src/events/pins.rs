use crate::{
    entity::Entity,
    id::{
        marker::{ChannelMarker, GuildMarker},
        Id,
    },
    util::Timestamp,
};
use serde::{Deserialize, Serialize};

/// A message was pinned or unpinned.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ChannelPinsUpdateEvent {
    pub channel_id: Id<ChannelMarker>,
    #[serde(default)]
    pub guild_id: Option<Id<GuildMarker>>,
    /// `None` once the last pin is removed.
    #[serde(default)]
    pub last_pin_timestamp: Option<Timestamp>,
}

impl Entity for ChannelPinsUpdateEvent {}
