use crate::{
    entity::Entity,
    id::{
        marker::{ChannelMarker, GuildMarker, UserMarker},
        Id,
    },
    util::Timestamp,
};
use serde::{Deserialize, Serialize};

/// A user started typing in a channel.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TypingEvent {
    pub channel_id: Id<ChannelMarker>,
    #[serde(default)]
    pub guild_id: Option<Id<GuildMarker>>,
    pub user_id: Id<UserMarker>,
    /// Sent as Unix seconds.
    #[serde(with = "unix_seconds")]
    pub timestamp: Timestamp,
}

impl Entity for TypingEvent {}

mod unix_seconds {
    use crate::util::Timestamp;
    use serde::{
        de::{Deserialize, Deserializer, Error as DeError},
        ser::Serializer,
    };

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        Timestamp::from_secs(i64::deserialize(deserializer)?).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::TypingEvent;
    use crate::entity::{tests::assert_round_trip, Entity};
    use serde_json::json;

    #[test]
    fn timestamp_is_unix_seconds() {
        let event = TypingEvent::from_data(&json!({
            "channel_id": "41771983423143937",
            "guild_id": "41771983423143938",
            "user_id": "80351110224678912",
            "timestamp": 1_628_000_000,
            "member": {"roles": []}
        }))
        .unwrap();

        assert_eq!(event.timestamp.as_secs(), 1_628_000_000);
        assert_round_trip(&event);
    }
}
