use bitflags::bitflags;
use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

bitflags! {
    /// Capabilities and verification state of an application.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct ApplicationFlags: u64 {
        /// Has at least 100 auto moderation rules across all guilds.
        const APPLICATION_AUTO_MODERATION_RULE_CREATE_BADGE = 1 << 6;
        /// Verified and allowed to receive presence updates.
        const GATEWAY_PRESENCE = 1 << 12;
        /// Unverified and allowed to receive presence updates.
        const GATEWAY_PRESENCE_LIMITED = 1 << 13;
        /// Verified and allowed to receive guild member events.
        const GATEWAY_GUILD_MEMBERS = 1 << 14;
        /// Unverified and allowed to receive guild member events.
        const GATEWAY_GUILD_MEMBERS_LIMITED = 1 << 15;
        /// Pending verification with unusual growth.
        const VERIFICATION_PENDING_GUILD_LIMIT = 1 << 16;
        /// Embedded application within the client.
        const EMBEDDED = 1 << 17;
        /// Verified and allowed to read message content.
        const GATEWAY_MESSAGE_CONTENT = 1 << 18;
        /// Unverified and allowed to read message content.
        const GATEWAY_MESSAGE_CONTENT_LIMITED = 1 << 19;
        /// Has at least one global application command.
        const APPLICATION_COMMAND_BADGE = 1 << 23;
    }
}

impl ApplicationFlags {
    /// Whether the application may receive presence updates at all.
    pub const fn has_presence_intent(self) -> bool {
        self.intersects(Self::GATEWAY_PRESENCE.union(Self::GATEWAY_PRESENCE_LIMITED))
    }

    /// Whether the application may read message content at all.
    pub const fn has_message_content_intent(self) -> bool {
        self.intersects(
            Self::GATEWAY_MESSAGE_CONTENT.union(Self::GATEWAY_MESSAGE_CONTENT_LIMITED),
        )
    }
}

impl Default for ApplicationFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'de> Deserialize<'de> for ApplicationFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u64::deserialize(deserializer)?))
    }
}

impl Serialize for ApplicationFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}
