use crate::{
    entity::{field, Entity},
    id::{marker::GuildMarker, Id},
};
use serde::{Deserialize, Serialize};

/// Credentials for a guild's voice server.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VoiceServerUpdateEvent {
    pub guild_id: Id<GuildMarker>,
    pub token: String,
    /// `None` while the voice server is unavailable; a new event follows
    /// once one is allocated.
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub endpoint: Option<String>,
}

impl VoiceServerUpdateEvent {
    /// WebSocket URL of the voice server.
    pub fn url(&self) -> Option<String> {
        self.endpoint
            .as_deref()
            .map(|endpoint| format!("wss://{endpoint}"))
    }
}

impl Entity for VoiceServerUpdateEvent {
    const REQUIRED_FIELDS: &'static [&'static str] = &["guild_id", "token"];
}

#[cfg(test)]
mod tests {
    use super::VoiceServerUpdateEvent;
    use crate::{
        entity::{tests::assert_round_trip, Entity, PutOptions},
        id::Id,
    };
    use serde_json::{json, Value};

    #[test]
    fn endpoint() {
        let event = VoiceServerUpdateEvent::from_data(&json!({
            "token": "my_token",
            "guild_id": "41771983423143937",
            "endpoint": "smart.loyal.discord.gg"
        }))
        .unwrap();
        assert_eq!(event.url().as_deref(), Some("wss://smart.loyal.discord.gg"));
        assert_round_trip(&event);

        let pending = VoiceServerUpdateEvent::from_data(&json!({
            "token": "my_token",
            "guild_id": "41771983423143937",
            "endpoint": null
        }))
        .unwrap();
        assert!(pending.url().is_none());
    }

    #[test]
    fn minimal_keeps_empty_token() {
        let event = VoiceServerUpdateEvent {
            guild_id: Id::new(41_771_983_423_143_937),
            token: String::new(),
            endpoint: None,
        };

        let data = event.to_data(PutOptions::MINIMAL).unwrap();
        assert_eq!(
            Value::Object(data.clone()),
            json!({"guild_id": "41771983423143937", "token": ""})
        );
        assert_eq!(
            VoiceServerUpdateEvent::from_data(&Value::Object(data)).unwrap(),
            event
        );
    }
}
