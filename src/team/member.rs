use crate::{
    entity::{field, Entity},
    error::ValidationError,
    id::{marker::TeamMarker, Id},
    user::User,
};
use serde::{Deserialize, Serialize};

preinstanced! {
    /// Access level of a team member.
    ///
    /// The team owner is not a role; see [`Team::owner`].
    ///
    /// [`Team::owner`]: super::Team::owner
    pub enum TeamMemberRole: str {
        Admin = "admin" => "admin",
        Developer = "developer" => "developer",
        #[default]
        ReadOnly = "read_only" => "read only",
    }
}

impl TeamMemberRole {
    /// Whether the role may manage the team's applications.
    pub fn can_manage(&self) -> bool {
        matches!(self, Self::Admin | Self::Developer)
    }
}

preinstanced! {
    /// Whether a member accepted the invite to a team.
    pub enum TeamMembershipState: u8 {
        #[default]
        None = 0 => "none",
        Invited = 1 => "invited",
        Accepted = 2 => "accepted",
    }
}

/// A user's membership in a [`Team`].
///
/// [`Team`]: super::Team
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TeamMember {
    pub user: User,
    #[serde(default)]
    pub role: TeamMemberRole,
    #[serde(default)]
    pub membership_state: TeamMembershipState,
    pub team_id: Id<TeamMarker>,
    /// Legacy permission list, always `["*"]`.
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub permissions: Vec<String>,
}

impl TeamMember {
    /// Create an invited member.
    pub fn new(team_id: Id<TeamMarker>, user: User, role: TeamMemberRole) -> Self {
        Self {
            user,
            role,
            membership_state: TeamMembershipState::Invited,
            team_id,
            permissions: vec!["*".to_owned()],
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.membership_state == TeamMembershipState::Accepted
    }
}

impl Entity for TeamMember {
    const INTERNAL_FIELDS: &'static [&'static str] = &["team_id", "permissions"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["user", "role"];

    fn validate(&self) -> Result<(), ValidationError> {
        self.user.validate()
    }
}
