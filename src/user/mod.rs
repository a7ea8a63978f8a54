//! Users and what they are up to.

mod flags;
mod presence;
mod status;
#[allow(clippy::module_inception)]
mod user;

pub use self::{
    flags::UserFlags,
    presence::{Activity, ActivityType, Presence, PresenceUser},
    status::{Status, StatusByPlatform},
    user::{User, USERS},
};
