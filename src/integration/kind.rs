preinstanced! {
    /// Service an integration connects to.
    pub enum IntegrationType: str {
        #[default]
        Discord = "discord" => "discord",
        Twitch = "twitch" => "twitch",
        YouTube = "youtube" => "youtube",
        GuildSubscription = "guild_subscription" => "guild subscription",
    }
}

impl IntegrationType {
    /// Whether the integration syncs subscribers into a role.
    pub fn is_subscription(&self) -> bool {
        matches!(self, Self::Twitch | Self::YouTube)
    }
}
