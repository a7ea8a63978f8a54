preinstanced! {
    /// Type of an application command option.
    pub enum ApplicationCommandOptionType: u8 {
        #[default]
        None = 0 => "none",
        SubCommand = 1 => "sub command",
        SubCommandGroup = 2 => "sub command group",
        String = 3 => "string",
        Integer = 4 => "integer",
        Boolean = 5 => "boolean",
        User = 6 => "user",
        Channel = 7 => "channel",
        Role = 8 => "role",
        Mentionable = 9 => "mentionable",
        Number = 10 => "number",
        Attachment = 11 => "attachment",
    }
}

impl ApplicationCommandOptionType {
    /// Whether options of this type nest other options.
    pub const fn is_sub_command(self) -> bool {
        matches!(self, Self::SubCommand | Self::SubCommandGroup)
    }

    /// Whether options of this type may offer choices or autocomplete.
    pub const fn has_choices(self) -> bool {
        matches!(self, Self::String | Self::Integer | Self::Number)
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Number)
    }
}
