//! Developer teams that own applications.

mod member;
#[allow(clippy::module_inception)]
mod team;

pub use self::{
    member::{TeamMember, TeamMemberRole, TeamMembershipState},
    team::{Team, TEAMS},
};
