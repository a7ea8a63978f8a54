use super::{Status, StatusByPlatform};
use crate::{
    entity::{field, Entity},
    error::ValidationError,
    id::{
        marker::{GuildMarker, UserMarker},
        Id,
    },
};
use serde::{Deserialize, Serialize};

preinstanced! {
    /// What an activity represents.
    pub enum ActivityType: u8 {
        #[default]
        Playing = 0 => "playing",
        Streaming = 1 => "streaming",
        Listening = 2 => "listening",
        Watching = 3 => "watching",
        Custom = 4 => "custom",
        Competing = 5 => "competing",
    }
}

/// Something a user is doing, as shown under their name.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ActivityType,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub details: Option<String>,
    /// Unix milliseconds at which the activity was added to the session.
    #[serde(default)]
    pub created_at: Option<u64>,
}

impl Activity {
    /// Create an activity.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is empty or longer than 128
    /// characters.
    pub fn new(kind: ActivityType, name: impl Into<String>) -> Result<Self, ValidationError> {
        let activity = Self {
            name: name.into(),
            kind,
            url: None,
            state: None,
            details: None,
            created_at: None,
        };
        activity.validate()?;

        Ok(activity)
    }
}

impl Entity for Activity {
    const INTERNAL_FIELDS: &'static [&'static str] = &["created_at"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "type"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_length("name", &self.name, 1, 128)?;
        field::validate_optional_length("state", self.state.as_deref(), 0, 128)?;
        field::validate_optional_length("details", self.details.as_deref(), 0, 128)?;

        if self.url.is_some() && self.kind != ActivityType::Streaming {
            return Err(field::conflict_error(
                "url",
                "only streaming activities carry a url",
            ));
        }

        Ok(())
    }
}

/// The partial user carried by a presence.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PresenceUser {
    pub id: Id<UserMarker>,
}

/// A user's status and activities, as dispatched in `PRESENCE_UPDATE`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Presence {
    pub user: PresenceUser,
    #[serde(default)]
    pub guild_id: Option<Id<GuildMarker>>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub client_status: StatusByPlatform,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub activities: Vec<Activity>,
}

impl Presence {
    /// The custom status set by the user, if any.
    pub fn custom_activity(&self) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|activity| activity.kind == ActivityType::Custom)
    }
}

impl Entity for Presence {
    const INTERNAL_FIELDS: &'static [&'static str] = &["user", "guild_id"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["status"];

    fn validate(&self) -> Result<(), ValidationError> {
        self.activities
            .iter()
            .try_for_each(|activity| activity.validate())
    }
}
