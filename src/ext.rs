//! Extension traits with URL and time helpers.
//!
//! These keep the entity structs themselves plain data: anything derived
//! from an entity rather than carried by it lives here. Import the traits
//! to bring `.tag()`, `.avatar_url()`, `.created_at()` and friends in scope.

use crate::{
    application::Application,
    emoji::Emoji,
    id::Id,
    team::Team,
    user::User,
    util::{ImageHash, Timestamp},
};

/// Root of Discord's CDN.
pub const CDN_URL: &str = "https://cdn.discordapp.com";

fn image_url(path: &str, id: impl std::fmt::Display, hash: ImageHash) -> String {
    let extension = if hash.is_animated() { "gif" } else { "png" };

    format!("{CDN_URL}/{path}/{id}/{hash}.{extension}")
}

// ===========================================================================
// UserExt
// ===========================================================================

/// Convenience methods on [`User`].
pub trait UserExt {
    /// Returns the CDN URL for the user's avatar, or `None` if no avatar is set.
    fn avatar_url(&self) -> Option<String>;

    /// CDN URL of the avatar every user without one gets.
    fn default_avatar_url(&self) -> String;

    fn banner_url(&self) -> Option<String>;

    /// `Username#Discriminator` or just `Username` for the new username system.
    fn tag(&self) -> String;

    /// Text that pings the user when sent in a message.
    fn mention(&self) -> String;
}

impl UserExt for User {
    fn avatar_url(&self) -> Option<String> {
        Some(image_url("avatars", self.id, self.avatar?))
    }

    fn default_avatar_url(&self) -> String {
        let index = if self.discriminator == 0 {
            (self.id.get() >> 22) % 6
        } else {
            u64::from(self.discriminator) % 5
        };

        format!("{CDN_URL}/embed/avatars/{index}.png")
    }

    fn banner_url(&self) -> Option<String> {
        Some(image_url("banners", self.id, self.banner?))
    }

    fn tag(&self) -> String {
        if self.discriminator == 0 {
            self.name.clone()
        } else {
            format!("{}#{:04}", self.name, self.discriminator)
        }
    }

    fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

// ===========================================================================
// Application and team images
// ===========================================================================

/// Convenience methods on [`Application`].
pub trait ApplicationExt {
    fn icon_url(&self) -> Option<String>;

    fn cover_url(&self) -> Option<String>;
}

impl ApplicationExt for Application {
    fn icon_url(&self) -> Option<String> {
        Some(image_url("app-icons", self.id, self.icon?))
    }

    fn cover_url(&self) -> Option<String> {
        Some(image_url("app-icons", self.id, self.cover?))
    }
}

/// Convenience methods on [`Team`].
pub trait TeamExt {
    fn icon_url(&self) -> Option<String>;
}

impl TeamExt for Team {
    fn icon_url(&self) -> Option<String> {
        Some(image_url("team-icons", self.id, self.icon?))
    }
}

// ===========================================================================
// EmojiExt
// ===========================================================================

/// Convenience methods on [`Emoji`].
pub trait EmojiExt {
    /// CDN URL of a custom emoji; unicode emoji have none.
    fn url(&self) -> Option<String>;
}

impl EmojiExt for Emoji {
    fn url(&self) -> Option<String> {
        let id = self.id?;
        let extension = if self.animated { "gif" } else { "png" };

        Some(format!("{CDN_URL}/emojis/{id}.{extension}"))
    }
}

// ===========================================================================
// SnowflakeExt
// ===========================================================================

/// Creation time of anything identified by a snowflake.
pub trait SnowflakeExt {
    /// When the snowflake was generated, or `None` if the embedded time is
    /// out of range.
    fn created_at(&self) -> Option<Timestamp>;
}

impl<T> SnowflakeExt for Id<T> {
    fn created_at(&self) -> Option<Timestamp> {
        let micros = i64::try_from(self.timestamp_ms()).ok()?.checked_mul(1000)?;

        Timestamp::from_micros(micros).ok()
    }
}
