use crate::entity::Entity;
use serde::{Deserialize, Serialize};

preinstanced! {
    /// Online status of a user.
    pub enum Status: str {
        Online = "online" => "online",
        Idle = "idle" => "idle",
        Dnd = "dnd" => "dnd",
        #[default]
        Offline = "offline" => "offline",
        Invisible = "invisible" => "invisible",
    }
}

impl Status {
    /// Rank used to pick the most "present" status across platforms.
    ///
    /// Invisible ranks with offline: other users can't tell them apart.
    pub const fn position(&self) -> u8 {
        match self {
            Self::Online => 0,
            Self::Dnd => 1,
            Self::Idle => 2,
            Self::Offline | Self::Invisible | Self::Unknown(_) => 3,
        }
    }

    /// Whether other users see the user as online in any way.
    pub const fn is_online(&self) -> bool {
        self.position() < 3
    }
}

/// Status of a user broken down by the platform they are connected from.
///
/// Platforms the user isn't connected from are `None`.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct StatusByPlatform {
    pub desktop: Option<Status>,
    pub mobile: Option<Status>,
    pub web: Option<Status>,
    pub embedded: Option<Status>,
}

impl StatusByPlatform {
    /// Statuses of every connected platform, in wire order.
    pub fn iter(&self) -> impl Iterator<Item = &Status> {
        [&self.desktop, &self.mobile, &self.web, &self.embedded]
            .into_iter()
            .flatten()
    }

    /// The most present status across platforms, offline if none.
    pub fn overall(&self) -> Status {
        self.iter()
            .min_by_key(|status| status.position())
            .cloned()
            .unwrap_or_default()
    }
}

impl Entity for StatusByPlatform {}

#[cfg(test)]
mod tests {
    use super::{Status, StatusByPlatform};
    use crate::entity::{tests::assert_round_trip, Entity, PutOptions};
    use serde_json::{json, Value};

    #[test]
    fn overall_picks_most_present() {
        let statuses = StatusByPlatform::from_data(&json!({
            "desktop": "idle",
            "mobile": "dnd",
        }))
        .unwrap();

        assert_eq!(statuses.overall(), Status::Dnd);
        assert_eq!(StatusByPlatform::default().overall(), Status::Offline);
    }

    #[test]
    fn unknown_status_round_trips() {
        let statuses = StatusByPlatform::from_data(&json!({"web": "streaming"})).unwrap();
        assert_eq!(statuses.web, Some(Status::Unknown("streaming".to_owned())));
        assert!(!statuses.overall().is_online());
        assert_round_trip(&statuses);
    }

    #[test]
    fn minimal_skips_disconnected_platforms() {
        let statuses = StatusByPlatform {
            mobile: Some(Status::Online),
            ..StatusByPlatform::default()
        };

        let data = statuses.to_data(PutOptions::MINIMAL).unwrap();
        assert_eq!(Value::Object(data), json!({"mobile": "online"}));
    }
}
