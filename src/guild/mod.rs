//! Guild sub-resources fetched on their own routes, and guild-wide value
//! types other modules share.

mod channel_type;
mod permissions;
mod verification_screen;
mod welcome_screen;
mod widget;

pub use self::{
    channel_type::ChannelType,
    permissions::Permissions,
    verification_screen::{VerificationFieldType, VerificationScreen, VerificationScreenStep},
    welcome_screen::{WelcomeScreen, WelcomeScreenChannel},
    widget::{GuildWidget, GuildWidgetActivity, GuildWidgetChannel, GuildWidgetUser},
};
