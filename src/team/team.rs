use super::{TeamMember, TeamMemberRole};
use crate::{
    entity::{field, CachedEntity, Entity, EntityCache},
    error::ValidationError,
    id::{
        marker::{TeamMarker, UserMarker},
        Id,
    },
    util::ImageHash,
};
use serde::{Deserialize, Serialize};
use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

/// Every team decoded through [`CachedEntity::from_data_cached`].
pub static TEAMS: LazyLock<EntityCache<Team>> = LazyLock::new(|| EntityCache::new("teams"));

/// A group of developers sharing ownership of applications.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Team {
    pub id: Id<TeamMarker>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<ImageHash>,
    #[serde(default)]
    pub owner_user_id: Option<Id<UserMarker>>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Create a team without members.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name isn't 1 to 100 characters.
    pub fn new(id: Id<TeamMarker>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let team = Self {
            name: name.into(),
            ..Self::with_id(id)
        };
        field::validate_length("name", &team.name, 1, 100)?;
        team.validate()?;

        Ok(team)
    }

    /// The member owning the team, if listed.
    pub fn owner(&self) -> Option<&TeamMember> {
        let owner_id = self.owner_user_id?;

        self.members.iter().find(|member| member.user.id == owner_id)
    }

    pub fn accepted_members(&self) -> impl Iterator<Item = &TeamMember> {
        self.members.iter().filter(|member| member.is_accepted())
    }

    /// Members that have not accepted their invite yet.
    pub fn invited_members(&self) -> impl Iterator<Item = &TeamMember> {
        self.members.iter().filter(|member| !member.is_accepted())
    }

    /// Accepted members with the admin role, plus the owner.
    pub fn admins(&self) -> impl Iterator<Item = &TeamMember> {
        let owner_id = self.owner_user_id;

        self.accepted_members().filter(move |member| {
            member.role == TeamMemberRole::Admin || Some(member.user.id) == owner_id
        })
    }
}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Team {
    const INTERNAL_FIELDS: &'static [&'static str] = &["id", "owner_user_id", "members"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.name.is_empty() {
            field::validate_length("name", &self.name, 1, 100)?;
        }

        if self.members.iter().any(|member| member.team_id != self.id) {
            return Err(field::conflict_error(
                "members",
                "member belongs to another team",
            ));
        }

        self.members.iter().try_for_each(|member| member.validate())
    }
}

impl CachedEntity for Team {
    type Marker = TeamMarker;

    fn id(&self) -> Id<TeamMarker> {
        self.id
    }

    fn with_id(id: Id<TeamMarker>) -> Self {
        Self {
            id,
            name: String::new(),
            icon: None,
            owner_user_id: None,
            members: Vec::new(),
        }
    }

    fn cache() -> &'static EntityCache<Self> {
        &TEAMS
    }
}
