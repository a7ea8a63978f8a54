//! Markers for the resource types an [`Id`] may point at.
//!
//! Markers perform no logical action. They exist so that a role's ID can't be
//! used where a user's ID is required: only an ID with a [`RoleMarker`] fits
//! there.
//!
//! [`Id`]: super::Id

/// Marker for application IDs.
///
/// Types such as [`Application`] or [`IntegrationApplication`] use this ID
/// marker.
///
/// [`Application`]: crate::application::Application
/// [`IntegrationApplication`]: crate::integration::IntegrationApplication
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplicationMarker;

/// Marker for channel IDs.
///
/// Types such as [`TypingEvent`] or [`GuildWidgetChannel`] use this ID marker.
///
/// [`TypingEvent`]: crate::events::TypingEvent
/// [`GuildWidgetChannel`]: crate::guild::GuildWidgetChannel
#[derive(Debug)]
#[non_exhaustive]
pub struct ChannelMarker;

/// Marker for emoji IDs.
///
/// Types such as [`Emoji`] use this ID marker.
///
/// [`Emoji`]: crate::emoji::Emoji
#[derive(Debug)]
#[non_exhaustive]
pub struct EmojiMarker;

/// Marker for EULA IDs.
///
/// Types such as [`Eula`] use this ID marker.
///
/// [`Eula`]: crate::application::Eula
#[derive(Debug)]
#[non_exhaustive]
pub struct EulaMarker;

/// Marker for generic IDs, such as the value of a snowflake command option.
#[derive(Debug)]
#[non_exhaustive]
pub struct GenericMarker;

/// Marker for guild IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct GuildMarker;

/// Marker for integration IDs.
///
/// Types such as [`Integration`] use this ID marker.
///
/// [`Integration`]: crate::integration::Integration
#[derive(Debug)]
#[non_exhaustive]
pub struct IntegrationMarker;

/// Marker for message IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct MessageMarker;

/// Marker for role IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct RoleMarker;

/// Marker for SKU IDs.
///
/// Types such as [`Application`] use this ID marker for their primary SKU.
///
/// [`Application`]: crate::application::Application
#[derive(Debug)]
#[non_exhaustive]
pub struct SkuMarker;

/// Marker for team IDs.
///
/// Types such as [`Team`] or [`TeamMember`] use this ID marker.
///
/// [`Team`]: crate::team::Team
/// [`TeamMember`]: crate::team::TeamMember
#[derive(Debug)]
#[non_exhaustive]
pub struct TeamMarker;

/// Marker for user IDs.
///
/// Types such as [`User`] or [`ReactionMappingLine`] use this ID marker.
///
/// [`User`]: crate::user::User
/// [`ReactionMappingLine`]: crate::reaction::ReactionMappingLine
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;
