preinstanced! {
    /// Category of an application.
    pub enum ApplicationType: u8 {
        #[default]
        None = 0 => "none",
        Game = 1 => "game",
        Music = 2 => "music",
        TicketedEvents = 3 => "ticketed events",
        CreatorMonetization = 4 => "creator monetization",
    }
}

preinstanced! {
    /// Operating system an executable runs on.
    pub enum OperatingSystem: str {
        #[default]
        None = "" => "none",
        Windows = "win32" => "windows",
        Mac = "darwin" => "mac",
        Linux = "linux" => "linux",
    }
}

preinstanced! {
    /// Store a third party SKU is sold on.
    pub enum SkuDistributor: str {
        #[default]
        None = "" => "none",
        Discord = "discord" => "discord",
        Steam = "steam" => "steam",
        Twitch = "twitch" => "twitch",
        Uplay = "uplay" => "uplay",
        BattleNet = "battlenet" => "battle net",
        Origin = "origin" => "origin",
        Gog = "gog" => "gog",
        Epic = "epic" => "epic",
        GooglePlay = "google_play" => "google play",
    }
}

preinstanced! {
    /// OAuth2 scope an application may request.
    pub enum OAuth2Scope: str {
        #[default]
        Bot = "bot" => "bot",
        ApplicationsCommands = "applications.commands" => "applications commands",
        ApplicationsCommandsUpdate = "applications.commands.update" => "applications commands update",
        ApplicationsEntitlements = "applications.entitlements" => "applications entitlements",
        Connections = "connections" => "connections",
        Email = "email" => "email",
        Guilds = "guilds" => "guilds",
        GuildsJoin = "guilds.join" => "guilds join",
        GuildsMembersRead = "guilds.members.read" => "guilds members read",
        Identify = "identify" => "identify",
        MessagesRead = "messages.read" => "messages read",
        RoleConnectionsWrite = "role_connections.write" => "role connections write",
        Rpc = "rpc" => "rpc",
        WebhookIncoming = "webhook.incoming" => "webhook incoming",
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplicationType, OAuth2Scope, OperatingSystem, SkuDistributor};
    use serde_test::Token;

    #[test]
    fn wire_values() {
        serde_test::assert_tokens(&ApplicationType::Music, &[Token::U8(2)]);
        serde_test::assert_tokens(&OperatingSystem::Windows, &[Token::Str("win32")]);
        serde_test::assert_tokens(&SkuDistributor::GooglePlay, &[Token::Str("google_play")]);
        serde_test::assert_tokens(&OAuth2Scope::GuildsJoin, &[Token::Str("guilds.join")]);
    }

    #[test]
    fn names() {
        assert_eq!(ApplicationType::TicketedEvents.name(), "ticketed events");
        assert_eq!(OperatingSystem::Mac.to_string(), "mac");
        assert_eq!(ApplicationType::from(9).name(), "undefined");
    }
}
