preinstanced! {
    /// Kind of a channel.
    pub enum ChannelType: u8 {
        #[default]
        GuildText = 0 => "guild text",
        Private = 1 => "private",
        GuildVoice = 2 => "guild voice",
        Group = 3 => "group",
        GuildCategory = 4 => "guild category",
        GuildAnnouncement = 5 => "guild announcement",
        AnnouncementThread = 10 => "announcement thread",
        PublicThread = 11 => "public thread",
        PrivateThread = 12 => "private thread",
        GuildStageVoice = 13 => "guild stage voice",
        GuildDirectory = 14 => "guild directory",
        GuildForum = 15 => "guild forum",
        GuildMedia = 16 => "guild media",
    }
}

impl ChannelType {
    pub const fn is_thread(self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }

    /// Whether members can connect to the channel.
    pub const fn is_voice(self) -> bool {
        matches!(self, Self::GuildVoice | Self::GuildStageVoice)
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelType;
    use serde_test::Token;

    #[test]
    fn variants() {
        serde_test::assert_tokens(&ChannelType::GuildForum, &[Token::U8(15)]);
        serde_test::assert_tokens(&ChannelType::Unknown(99), &[Token::U8(99)]);
        assert!(ChannelType::PublicThread.is_thread());
        assert!(ChannelType::GuildStageVoice.is_voice());
    }
}
