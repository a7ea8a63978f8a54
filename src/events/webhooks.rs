use crate::{
    entity::Entity,
    id::{
        marker::{ChannelMarker, GuildMarker},
        Id,
    },
};
use serde::{Deserialize, Serialize};

/// A channel's webhooks were created, updated or deleted.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct WebhookUpdateEvent {
    pub channel_id: Id<ChannelMarker>,
    pub guild_id: Id<GuildMarker>,
}

impl Entity for WebhookUpdateEvent {}

#[cfg(test)]
mod tests {
    use super::WebhookUpdateEvent;
    use crate::entity::{tests::assert_round_trip, Entity};
    use serde_json::json;

    #[test]
    fn decode() {
        let event = WebhookUpdateEvent::from_data(&json!({
            "guild_id": "41771983423143937",
            "channel_id": "41771983423143938"
        }))
        .unwrap();

        assert_eq!(event.channel_id.get(), 41_771_983_423_143_938);
        assert_round_trip(&event);
        assert!(WebhookUpdateEvent::from_data(&json!({"channel_id": "1"})).is_err());
    }
}
