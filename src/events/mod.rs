//! Typed channel events.
//!
//! A gateway client hands each dispatch's `t` name and `d` payload to
//! [`ChannelEvent::from_dispatch`] and pattern-matches on the result instead
//! of poking at raw JSON.

mod pins;
mod reaction;
mod typing;
mod voice;
mod webhooks;

pub use self::{
    pins::ChannelPinsUpdateEvent,
    reaction::{ReactionAddEvent, ReactionClearEmojiEvent, ReactionClearEvent, ReactionDeleteEvent},
    typing::TypingEvent,
    voice::VoiceServerUpdateEvent,
    webhooks::WebhookUpdateEvent,
};

use crate::{
    entity::Entity,
    id::{
        marker::{ChannelMarker, GuildMarker},
        Id,
    },
    reaction::ReactionMapping,
};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::warn;

// ---------------------------------------------------------------------------
// The top-level event enum
// ---------------------------------------------------------------------------

/// A parsed channel dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelEvent {
    /// `TYPING_START`
    Typing(TypingEvent),
    /// `CHANNEL_PINS_UPDATE`
    PinsUpdate(ChannelPinsUpdateEvent),
    /// `MESSAGE_REACTION_ADD`
    ReactionAdd(ReactionAddEvent),
    /// `MESSAGE_REACTION_REMOVE`
    ReactionDelete(ReactionDeleteEvent),
    /// `MESSAGE_REACTION_REMOVE_EMOJI`
    ReactionClearEmoji(ReactionClearEmojiEvent),
    /// `MESSAGE_REACTION_REMOVE_ALL`
    ReactionClear(ReactionClearEvent),
    /// `WEBHOOKS_UPDATE`
    WebhookUpdate(WebhookUpdateEvent),
    /// `VOICE_SERVER_UPDATE`
    VoiceServerUpdate(VoiceServerUpdateEvent),

    /// A dispatch without a typed variant, or one whose payload didn't
    /// parse. Carries the name and raw JSON so callers can still inspect it.
    Unknown { event_name: String, data: Value },
}

// ---------------------------------------------------------------------------
// Parsing from a dispatch
// ---------------------------------------------------------------------------

impl ChannelEvent {
    /// Parse a dispatch by its event name.
    ///
    /// This never fails: unrecognised names and malformed payloads become
    /// [`ChannelEvent::Unknown`], the latter logged at `warn`.
    pub fn from_dispatch(event_name: &str, data: Value) -> Self {
        match event_name {
            "TYPING_START" => Self::parse(event_name, data, Self::Typing),
            "CHANNEL_PINS_UPDATE" => Self::parse(event_name, data, Self::PinsUpdate),
            "MESSAGE_REACTION_ADD" => Self::parse(event_name, data, Self::ReactionAdd),
            "MESSAGE_REACTION_REMOVE" => Self::parse(event_name, data, Self::ReactionDelete),
            "MESSAGE_REACTION_REMOVE_EMOJI" => {
                Self::parse(event_name, data, Self::ReactionClearEmoji)
            }
            "MESSAGE_REACTION_REMOVE_ALL" => Self::parse(event_name, data, Self::ReactionClear),
            "WEBHOOKS_UPDATE" => Self::parse(event_name, data, Self::WebhookUpdate),
            "VOICE_SERVER_UPDATE" => Self::parse(event_name, data, Self::VoiceServerUpdate),
            _ => Self::Unknown {
                event_name: event_name.to_owned(),
                data,
            },
        }
    }

    fn parse<T: Entity>(event_name: &str, data: Value, wrap: fn(T) -> Self) -> Self {
        match T::from_data(&data) {
            Ok(event) => wrap(event),
            Err(e) => {
                warn!(event = event_name, error = %e, "failed to parse dispatch payload");
                Self::Unknown {
                    event_name: event_name.to_owned(),
                    data,
                }
            }
        }
    }

    /// The dispatch name this event is sent under.
    pub fn event_name(&self) -> &str {
        match self {
            Self::Typing(_) => "TYPING_START",
            Self::PinsUpdate(_) => "CHANNEL_PINS_UPDATE",
            Self::ReactionAdd(_) => "MESSAGE_REACTION_ADD",
            Self::ReactionDelete(_) => "MESSAGE_REACTION_REMOVE",
            Self::ReactionClearEmoji(_) => "MESSAGE_REACTION_REMOVE_EMOJI",
            Self::ReactionClear(_) => "MESSAGE_REACTION_REMOVE_ALL",
            Self::WebhookUpdate(_) => "WEBHOOKS_UPDATE",
            Self::VoiceServerUpdate(_) => "VOICE_SERVER_UPDATE",
            Self::Unknown { event_name, .. } => event_name,
        }
    }

    /// Channel the event happened in; `None` for voice server updates and
    /// unknown events.
    pub const fn channel_id(&self) -> Option<Id<ChannelMarker>> {
        match self {
            Self::Typing(event) => Some(event.channel_id),
            Self::PinsUpdate(event) => Some(event.channel_id),
            Self::ReactionAdd(event) => Some(event.channel_id),
            Self::ReactionDelete(event) => Some(event.channel_id),
            Self::ReactionClearEmoji(event) => Some(event.channel_id),
            Self::ReactionClear(event) => Some(event.channel_id),
            Self::WebhookUpdate(event) => Some(event.channel_id),
            Self::VoiceServerUpdate(_) | Self::Unknown { .. } => None,
        }
    }

    pub const fn guild_id(&self) -> Option<Id<GuildMarker>> {
        match self {
            Self::Typing(event) => event.guild_id,
            Self::PinsUpdate(event) => event.guild_id,
            Self::ReactionAdd(event) => event.guild_id,
            Self::ReactionDelete(event) => event.guild_id,
            Self::ReactionClearEmoji(event) => event.guild_id,
            Self::ReactionClear(event) => event.guild_id,
            Self::WebhookUpdate(event) => Some(event.guild_id),
            Self::VoiceServerUpdate(event) => Some(event.guild_id),
            Self::Unknown { .. } => None,
        }
    }

    /// Apply a reaction event to the mapping of the message it targets.
    ///
    /// Other events leave the mapping alone. Returns whether it changed.
    pub fn apply_to_reactions(&self, mapping: &mut ReactionMapping) -> bool {
        match self {
            Self::ReactionAdd(event) => event.apply(mapping),
            Self::ReactionDelete(event) => event.apply(mapping),
            Self::ReactionClearEmoji(event) => event.apply(mapping),
            Self::ReactionClear(event) => event.apply(mapping),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convenience trait for pulling a typed value out of an Unknown event's data.
pub trait UnknownEventExt {
    /// If this is an `Unknown` event, try to deserialise its `data` field.
    fn try_parse_data<T: DeserializeOwned>(&self) -> Option<T>;
}

impl UnknownEventExt for ChannelEvent {
    fn try_parse_data<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            Self::Unknown { data, .. } => T::deserialize(data).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelEvent, UnknownEventExt};
    use crate::{
        emoji::Emoji,
        id::Id,
        reaction::{Reaction, ReactionMapping},
    };
    use serde_json::json;

    fn ids() -> serde_json::Value {
        json!({
            "channel_id": "41771983423143937",
            "guild_id": "41771983423143939",
            "message_id": "41771983423143938"
        })
    }

    #[test]
    fn dispatch_names() {
        let cases = [
            (
                "TYPING_START",
                json!({"channel_id": "1", "user_id": "2", "timestamp": 1_628_000_000}),
            ),
            ("CHANNEL_PINS_UPDATE", json!({"channel_id": "1", "last_pin_timestamp": null})),
            ("MESSAGE_REACTION_REMOVE_ALL", ids()),
            ("WEBHOOKS_UPDATE", json!({"channel_id": "1", "guild_id": "2"})),
            (
                "VOICE_SERVER_UPDATE",
                json!({"guild_id": "2", "token": "t", "endpoint": null}),
            ),
        ];

        for (name, data) in cases {
            let event = ChannelEvent::from_dispatch(name, data);
            assert!(!matches!(event, ChannelEvent::Unknown { .. }), "{name}");
            assert_eq!(event.event_name(), name);
        }
    }

    #[test]
    fn malformed_and_unknown() {
        let event = ChannelEvent::from_dispatch("TYPING_START", json!({"channel_id": "x"}));
        assert!(matches!(event, ChannelEvent::Unknown { .. }));
        assert_eq!(event.event_name(), "TYPING_START");

        let event = ChannelEvent::from_dispatch("THREAD_CREATE", json!({"id": "5"}));
        assert!(event.channel_id().is_none());

        #[derive(serde::Deserialize)]
        struct Thread {
            id: String,
        }
        assert_eq!(event.try_parse_data::<Thread>().unwrap().id, "5");
    }

    #[test]
    fn reaction_events_update_mapping() {
        let mut add = ids();
        add["user_id"] = json!("80351110224678912");
        add["emoji"] = json!({"name": "🐼"});

        let mut mapping = ReactionMapping::new();
        let event = ChannelEvent::from_dispatch("MESSAGE_REACTION_ADD", add.clone());
        assert_eq!(event.guild_id(), Some(Id::new(41_771_983_423_143_939)));
        assert!(event.apply_to_reactions(&mut mapping));
        assert_eq!(mapping.total_count(), 1);

        let mut clear = ids();
        clear["emoji"] = json!({"name": "🐼"});
        let event = ChannelEvent::from_dispatch("MESSAGE_REACTION_REMOVE_EMOJI", clear);
        assert!(event.apply_to_reactions(&mut mapping));
        assert!(mapping
            .get(&Reaction::standard(Emoji::unicode("🐼")))
            .is_none());

        let event = ChannelEvent::from_dispatch("MESSAGE_REACTION_REMOVE", add);
        assert!(!event.apply_to_reactions(&mut mapping));
    }
}
