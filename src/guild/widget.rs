use crate::{
    entity::{field, Entity},
    error::ValidationError,
    id::{
        marker::{ChannelMarker, GuildMarker},
        Id,
    },
    user::Status,
};
use serde::{Deserialize, Serialize};

/// The public widget of a guild.
///
/// Widget members are anonymised: their IDs are indices, not user IDs.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GuildWidget {
    pub id: Id<GuildMarker>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub instant_invite: Option<String>,
    #[serde(default)]
    pub presence_count: u64,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub channels: Vec<GuildWidgetChannel>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub members: Vec<GuildWidgetUser>,
}

impl GuildWidget {
    /// Members whose status isn't offline.
    pub fn online_members(&self) -> impl Iterator<Item = &GuildWidgetUser> {
        self.members.iter().filter(|member| member.status.is_online())
    }

    /// Channels in display order.
    pub fn sorted_channels(&self) -> Vec<&GuildWidgetChannel> {
        let mut channels: Vec<_> = self.channels.iter().collect();
        channels.sort_by_key(|channel| (channel.position, channel.id));

        channels
    }
}

impl Entity for GuildWidget {
    const INTERNAL_FIELDS: &'static [&'static str] = &["id"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "presence_count"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_length("name", &self.name, 0, 100)
    }
}

/// A voice channel listed on a [`GuildWidget`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GuildWidgetChannel {
    pub id: Id<ChannelMarker>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: i64,
}

impl Entity for GuildWidgetChannel {
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "name", "position"];
}

/// What a [`GuildWidgetUser`] is doing.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GuildWidgetActivity {
    #[serde(default)]
    pub name: String,
}

/// An online member listed on a [`GuildWidget`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GuildWidgetUser {
    /// Position in the widget's member list, not a user ID.
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub activity: Option<GuildWidgetActivity>,
}

impl GuildWidgetUser {
    pub fn activity_name(&self) -> Option<&str> {
        self.activity.as_ref().map(|activity| activity.name.as_str())
    }
}

impl Entity for GuildWidgetUser {
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "username", "status"];
}

#[cfg(test)]
mod tests {
    use super::GuildWidget;
    use crate::{
        entity::{tests::assert_round_trip, Entity, PutOptions},
        user::Status,
    };
    use serde_json::json;

    fn widget() -> GuildWidget {
        GuildWidget::from_data(&json!({
            "id": "290926798626357999",
            "name": "Pandas",
            "instant_invite": "https://discord.com/invite/pandas",
            "channels": [
                {"id": "705216630279993882", "name": "Chat", "position": 1},
                {"id": "705216630279993883", "name": "Lobby", "position": 0}
            ],
            "members": [
                {
                    "id": "0",
                    "username": "1234",
                    "discriminator": "0000",
                    "avatar": null,
                    "status": "online",
                    "avatar_url": "https://cdn.discordapp.com/widget-avatars/abc/def",
                    "activity": {"name": "Bamboo Simulator"}
                },
                {"id": "1", "username": "sleepy", "discriminator": "0000", "status": "idle"},
                {"id": "2", "username": "ghost", "discriminator": "0000", "status": "offline"}
            ],
            "presence_count": 2
        }))
        .unwrap()
    }

    #[test]
    fn decode() {
        let widget = widget();

        assert_eq!(widget.online_members().count(), 2);
        assert_eq!(widget.members[0].activity_name(), Some("Bamboo Simulator"));
        assert_eq!(widget.members[2].status, Status::Offline);
        assert_eq!(widget.sorted_channels()[0].name, "Lobby");
        assert_round_trip(&widget);
    }

    #[test]
    fn minimal_keeps_presence_count() {
        let widget = GuildWidget::from_data(&json!({"id": "1", "name": ""})).unwrap();
        let data = widget.to_data(PutOptions::MINIMAL).unwrap();

        assert_eq!(
            serde_json::Value::Object(data),
            json!({"name": "", "presence_count": 0})
        );
    }
}
