use super::ApplicationCommandOptionType;
use crate::{
    entity::{field, Entity},
    id::Id,
};
use serde::{Deserialize, Serialize};

/// Value a user entered for an option.
///
/// Users, channels, roles, mentionables and attachments arrive as snowflake
/// strings; see [`OptionValue::as_id`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl OptionValue {
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as a float; integers convert.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Parse a snowflake value into an ID of the expected kind.
    ///
    /// Mentionables may be users or roles; parse those with
    /// [`GenericMarker`] and [`Id::cast`] once the kind is known.
    ///
    /// [`GenericMarker`]: crate::id::marker::GenericMarker
    pub fn as_id<T>(&self) -> Option<Id<T>> {
        self.as_str()?.parse().ok()
    }
}

/// An option as filled in by a user, received with an interaction.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct InteractionOption {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ApplicationCommandOptionType,
    #[serde(default)]
    pub value: Option<OptionValue>,
    /// Set on the option being typed in during autocomplete.
    #[serde(default)]
    pub focused: bool,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub options: Vec<InteractionOption>,
}

impl InteractionOption {
    /// Nested option with the given name.
    pub fn get(&self, name: &str) -> Option<&InteractionOption> {
        self.options.iter().find(|option| option.name == name)
    }

    /// The option the user is typing in, searching nested options too.
    pub fn focused_option(&self) -> Option<&InteractionOption> {
        if self.focused {
            return Some(self);
        }

        self.options.iter().find_map(InteractionOption::focused_option)
    }

    /// The sub command that was invoked, walking through a group.
    ///
    /// Returns `None` unless this option is a sub command or a group.
    pub fn sub_command(&self) -> Option<&InteractionOption> {
        match self.kind {
            ApplicationCommandOptionType::SubCommand => Some(self),
            ApplicationCommandOptionType::SubCommandGroup => {
                self.options.iter().find_map(InteractionOption::sub_command)
            }
            _ => None,
        }
    }
}

impl Entity for InteractionOption {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "type"];
}

#[cfg(test)]
mod tests {
    use super::{InteractionOption, OptionValue};
    use crate::{
        entity::{tests::assert_round_trip, Entity},
        id::{
            marker::{GenericMarker, UserMarker},
            Id,
        },
        interaction::ApplicationCommandOptionType,
    };
    use serde_json::json;

    fn received() -> InteractionOption {
        InteractionOption::from_data(&json!({
            "name": "panda",
            "type": 2,
            "options": [{
                "name": "feed",
                "type": 1,
                "options": [
                    {"name": "who", "type": 6, "value": "80351110224678912"},
                    {"name": "amount", "type": 10, "value": 2.5},
                    {"name": "count", "type": 4, "value": 3},
                    {"name": "food", "type": 3, "value": "bam", "focused": true},
                    {"name": "loud", "type": 5, "value": false}
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn walks_sub_commands() {
        let option = received();
        let feed = option.sub_command().unwrap();

        assert_eq!(feed.name, "feed");
        assert_eq!(feed.kind, ApplicationCommandOptionType::SubCommand);
        assert_eq!(option.focused_option().unwrap().name, "food");
        assert!(feed.get("food").unwrap().sub_command().is_none());
        assert_round_trip(&option);
    }

    #[test]
    fn values() {
        let option = received();
        let feed = option.sub_command().unwrap();
        let value = |name: &str| feed.get(name).unwrap().value.clone().unwrap();

        assert_eq!(
            value("who").as_id::<UserMarker>(),
            Some(Id::new(80_351_110_224_678_912))
        );
        assert_eq!(
            value("who").as_id::<GenericMarker>().map(Id::cast),
            Some(Id::<UserMarker>::new(80_351_110_224_678_912))
        );
        assert_eq!(value("amount").as_f64(), Some(2.5));
        assert_eq!(value("count"), OptionValue::Integer(3));
        assert_eq!(value("count").as_f64(), Some(3.0));
        assert_eq!(value("food").as_str(), Some("bam"));
        assert_eq!(value("loud").as_bool(), Some(false));
    }
}
