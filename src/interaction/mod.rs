//! Application command options as registered, and as received back in an
//! interaction.

mod choice;
mod option;
mod option_type;
mod received;

pub use self::{
    choice::{ApplicationCommandOptionChoice, ChoiceValue},
    option::{ApplicationCommandOption, ApplicationCommandOptionBuilder, CommandOptionValue},
    option_type::ApplicationCommandOptionType,
    received::{InteractionOption, OptionValue},
};
