use super::{ApplicationCommandOptionChoice, ApplicationCommandOptionType, ChoiceValue};
use crate::{
    entity::{field, Entity},
    error::ValidationError,
    guild::ChannelType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Most choices or nested options an option may carry.
pub const OPTIONS_MAX: usize = 25;

/// Longest string a string option may be limited to.
pub const OPTION_LENGTH_MAX: u16 = 6000;

/// Bound of a numeric option.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOptionValue {
    Integer(i64),
    Number(f64),
}

impl CommandOptionValue {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Number(value) => value,
        }
    }
}

/// A parameter of an application command.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApplicationCommandOption {
    #[serde(rename = "type", default)]
    pub kind: ApplicationCommandOptionType,
    pub name: String,
    #[serde(default)]
    pub name_localizations: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_localizations: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub autocomplete: bool,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub choices: Vec<ApplicationCommandOptionChoice>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub options: Vec<ApplicationCommandOption>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub channel_types: Vec<ChannelType>,
    #[serde(default)]
    pub min_value: Option<CommandOptionValue>,
    #[serde(default)]
    pub max_value: Option<CommandOptionValue>,
    #[serde(default)]
    pub min_length: Option<u16>,
    #[serde(default)]
    pub max_length: Option<u16>,
}

impl ApplicationCommandOption {
    /// Nested option with the given name.
    pub fn get(&self, name: &str) -> Option<&ApplicationCommandOption> {
        self.options.iter().find(|option| option.name == name)
    }

    fn validate_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
        field::validate_length(field, name, 1, 32)?;

        if name
            .chars()
            .all(|c| (c.is_alphanumeric() && !c.is_uppercase()) || c == '-' || c == '_')
        {
            Ok(())
        } else {
            Err(field::format_error(
                field,
                "only lowercase letters, digits, '-' and '_' are allowed",
            ))
        }
    }

    fn validate_choices(&self) -> Result<(), ValidationError> {
        if self.choices.is_empty() {
            return Ok(());
        }

        if !self.kind.has_choices() {
            return Err(field::conflict_error(
                "choices",
                "only string, integer and number options have choices",
            ));
        }

        if self.autocomplete {
            return Err(field::conflict_error(
                "autocomplete",
                "choices and autocomplete are exclusive",
            ));
        }

        field::validate_count("choices", self.choices.len(), OPTIONS_MAX)?;

        for choice in &self.choices {
            choice.validate()?;

            let matches = match (self.kind, &choice.value) {
                (ApplicationCommandOptionType::String, ChoiceValue::String(_)) => true,
                (ApplicationCommandOptionType::Integer, ChoiceValue::Integer(_)) => true,
                (
                    ApplicationCommandOptionType::Number,
                    ChoiceValue::Integer(_) | ChoiceValue::Float(_),
                ) => true,
                _ => false,
            };

            if !matches {
                return Err(field::format_error(
                    "choices",
                    "choice value doesn't match the option type",
                ));
            }
        }

        Ok(())
    }

    fn validate_options(&self) -> Result<(), ValidationError> {
        if self.options.is_empty() {
            return Ok(());
        }

        if !self.kind.is_sub_command() {
            return Err(field::conflict_error(
                "options",
                "only sub commands and groups have nested options",
            ));
        }

        field::validate_count("options", self.options.len(), OPTIONS_MAX)?;

        for option in &self.options {
            let allowed = match self.kind {
                ApplicationCommandOptionType::SubCommandGroup => {
                    option.kind == ApplicationCommandOptionType::SubCommand
                }
                _ => !option.kind.is_sub_command(),
            };

            if !allowed {
                return Err(field::conflict_error(
                    "options",
                    "groups hold sub commands, sub commands hold values",
                ));
            }
        }

        let first_optional = self.options.iter().position(|option| !option.required);

        if let Some(first_optional) = first_optional {
            if self.options[first_optional..].iter().any(|option| option.required) {
                return Err(field::format_error(
                    "options",
                    "required options must come before optional ones",
                ));
            }
        }

        self.options.iter().try_for_each(|option| option.validate())
    }

    fn validate_bounds(&self) -> Result<(), ValidationError> {
        if self.min_value.is_some() || self.max_value.is_some() {
            if !self.kind.is_numeric() {
                return Err(field::conflict_error(
                    "min_value",
                    "only integer and number options have value bounds",
                ));
            }

            let integers = [self.min_value, self.max_value]
                .into_iter()
                .flatten()
                .all(|bound| matches!(bound, CommandOptionValue::Integer(_)));

            if self.kind == ApplicationCommandOptionType::Integer && !integers {
                return Err(field::format_error(
                    "min_value",
                    "integer options need integer bounds",
                ));
            }

            if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
                if min.as_f64() > max.as_f64() {
                    return Err(field::conflict_error(
                        "min_value",
                        "min_value is greater than max_value",
                    ));
                }
            }
        }

        if self.min_length.is_some() || self.max_length.is_some() {
            if self.kind != ApplicationCommandOptionType::String {
                return Err(field::conflict_error(
                    "min_length",
                    "only string options have length bounds",
                ));
            }

            if let Some(min) = self.min_length {
                field::validate_range(
                    "min_length",
                    i64::from(min),
                    0,
                    i64::from(OPTION_LENGTH_MAX),
                )?;
            }

            if let Some(max) = self.max_length {
                field::validate_range(
                    "max_length",
                    i64::from(max),
                    1,
                    i64::from(OPTION_LENGTH_MAX),
                )?;
            }

            if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
                if min > max {
                    return Err(field::conflict_error(
                        "min_length",
                        "min_length is greater than max_length",
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Entity for ApplicationCommandOption {
    const REQUIRED_FIELDS: &'static [&'static str] = &["type", "name", "description"];

    fn validate(&self) -> Result<(), ValidationError> {
        Self::validate_name("name", &self.name)?;

        for name in self.name_localizations.iter().flat_map(BTreeMap::values) {
            Self::validate_name("name_localizations", name)?;
        }

        field::validate_length("description", &self.description, 1, 100)?;

        for description in self.description_localizations.iter().flat_map(BTreeMap::values) {
            field::validate_length("description_localizations", description, 1, 100)?;
        }

        if self.autocomplete && !self.kind.has_choices() {
            return Err(field::conflict_error(
                "autocomplete",
                "only string, integer and number options autocomplete",
            ));
        }

        if !self.channel_types.is_empty() && self.kind != ApplicationCommandOptionType::Channel {
            return Err(field::conflict_error(
                "channel_types",
                "only channel options filter channel types",
            ));
        }

        self.validate_choices()?;
        self.validate_options()?;
        self.validate_bounds()
    }
}

/// Builder for an [`ApplicationCommandOption`], validated on [`build`].
///
/// ```
/// use discord_entities::interaction::{
///     ApplicationCommandOptionBuilder, ApplicationCommandOptionType,
/// };
///
/// let option = ApplicationCommandOptionBuilder::new(
///     ApplicationCommandOptionType::Integer,
///     "count",
///     "How many pandas",
/// )
/// .required(true)
/// .min_value(1_i64)
/// .max_value(10_i64)
/// .build()
/// .unwrap();
///
/// assert!(option.required);
/// ```
///
/// [`build`]: Self::build
#[derive(Debug)]
#[must_use = "builders have no effect unless built"]
pub struct ApplicationCommandOptionBuilder {
    inner: ApplicationCommandOption,
}

impl ApplicationCommandOptionBuilder {
    pub fn new(
        kind: ApplicationCommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            inner: ApplicationCommandOption {
                kind,
                name: name.into(),
                name_localizations: None,
                description: description.into(),
                description_localizations: None,
                required: false,
                autocomplete: false,
                choices: Vec::new(),
                options: Vec::new(),
                channel_types: Vec::new(),
                min_value: None,
                max_value: None,
                min_length: None,
                max_length: None,
            },
        }
    }

    pub const fn required(mut self, required: bool) -> Self {
        self.inner.required = required;
        self
    }

    pub const fn autocomplete(mut self, autocomplete: bool) -> Self {
        self.inner.autocomplete = autocomplete;
        self
    }

    /// Add a choice.
    pub fn choice(mut self, choice: ApplicationCommandOptionChoice) -> Self {
        self.inner.choices.push(choice);
        self
    }

    /// Add a nested option.
    pub fn option(mut self, option: ApplicationCommandOption) -> Self {
        self.inner.options.push(option);
        self
    }

    pub fn channel_types(mut self, channel_types: impl IntoIterator<Item = ChannelType>) -> Self {
        self.inner.channel_types = channel_types.into_iter().collect();
        self
    }

    pub fn min_value(mut self, min_value: impl Into<CommandOptionValue>) -> Self {
        self.inner.min_value = Some(min_value.into());
        self
    }

    pub fn max_value(mut self, max_value: impl Into<CommandOptionValue>) -> Self {
        self.inner.max_value = Some(max_value.into());
        self
    }

    pub const fn min_length(mut self, min_length: u16) -> Self {
        self.inner.min_length = Some(min_length);
        self
    }

    pub const fn max_length(mut self, max_length: u16) -> Self {
        self.inner.max_length = Some(max_length);
        self
    }

    /// Localize the name for a locale such as `de`.
    pub fn name_localization(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.inner
            .name_localizations
            .get_or_insert_with(BTreeMap::new)
            .insert(locale.into(), name.into());
        self
    }

    pub fn description_localization(
        mut self,
        locale: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.inner
            .description_localizations
            .get_or_insert_with(BTreeMap::new)
            .insert(locale.into(), description.into());
        self
    }

    /// Validate and return the option.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn build(self) -> Result<ApplicationCommandOption, ValidationError> {
        self.inner.validate()?;

        Ok(self.inner)
    }
}

impl From<i64> for CommandOptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CommandOptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplicationCommandOption, ApplicationCommandOptionBuilder};
    use crate::{
        entity::{tests::assert_round_trip, Entity, PutOptions},
        error::ValidationErrorType,
        guild::ChannelType,
        interaction::{ApplicationCommandOptionChoice, ApplicationCommandOptionType as Type},
    };
    use serde_json::json;

    fn string(name: &str) -> ApplicationCommandOptionBuilder {
        ApplicationCommandOptionBuilder::new(Type::String, name, "A string")
    }

    fn field_of(result: Result<ApplicationCommandOption, crate::error::ValidationError>) -> &'static str {
        result.unwrap_err().field()
    }

    #[test]
    fn decode_nested() {
        let option = ApplicationCommandOption::from_data(&json!({
            "type": 2,
            "name": "panda",
            "description": "Panda commands",
            "options": [{
                "type": 1,
                "name": "feed",
                "description": "Feed a panda",
                "options": [
                    {"type": 3, "name": "food", "description": "What", "required": true,
                     "choices": [{"name": "Bamboo", "value": "bamboo"}]},
                    {"type": 10, "name": "amount", "description": "How much",
                     "min_value": 0.5, "max_value": 10},
                    {"type": 7, "name": "where", "description": "Channel", "channel_types": [0, 15]}
                ]
            }]
        }))
        .unwrap();

        let feed = option.get("feed").unwrap();
        assert_eq!(feed.get("food").unwrap().choices.len(), 1);
        assert_eq!(feed.get("where").unwrap().channel_types[1], ChannelType::GuildForum);
        assert_round_trip(&option);
    }

    #[test]
    fn names() {
        assert!(string("tag-name_2").build().is_ok());
        assert!(string("größe").build().is_ok());
        assert_eq!(field_of(string("Upper").build()), "name");
        assert_eq!(field_of(string("has space").build()), "name");
        assert_eq!(field_of(string("").build()), "name");
        assert_eq!(field_of(string(&"x".repeat(33)).build()), "name");
        assert_eq!(
            field_of(string("ok").name_localization("de", "Nope").build()),
            "name_localizations"
        );
    }

    #[test]
    fn choices() {
        let choice = |value: &str| ApplicationCommandOptionChoice::new(value, value).unwrap();

        assert!(string("pick").choice(choice("a")).build().is_ok());
        assert_eq!(
            field_of(string("pick").choice(choice("a")).autocomplete(true).build()),
            "autocomplete"
        );
        assert_eq!(
            field_of(
                ApplicationCommandOptionBuilder::new(Type::Integer, "n", "Number")
                    .choice(choice("a"))
                    .build()
            ),
            "choices"
        );
        assert_eq!(
            field_of(
                ApplicationCommandOptionBuilder::new(Type::Boolean, "b", "Bool")
                    .choice(choice("a"))
                    .build()
            ),
            "choices"
        );

        let mut many = string("many");
        for i in 0..26 {
            many = many.choice(choice(&i.to_string()));
        }
        assert!(matches!(
            many.build().unwrap_err().kind(),
            ValidationErrorType::Count { field: "choices", .. }
        ));
    }

    #[test]
    fn nesting() {
        let value = string("value").build().unwrap();
        let sub = ApplicationCommandOptionBuilder::new(Type::SubCommand, "sub", "Sub")
            .option(value.clone())
            .build()
            .unwrap();

        assert!(
            ApplicationCommandOptionBuilder::new(Type::SubCommandGroup, "group", "Group")
                .option(sub.clone())
                .build()
                .is_ok()
        );
        assert_eq!(
            field_of(
                ApplicationCommandOptionBuilder::new(Type::SubCommandGroup, "group", "Group")
                    .option(value.clone())
                    .build()
            ),
            "options"
        );
        assert_eq!(
            field_of(
                ApplicationCommandOptionBuilder::new(Type::SubCommand, "sub", "Sub")
                    .option(sub)
                    .build()
            ),
            "options"
        );
        assert_eq!(field_of(string("s").option(value).build()), "options");
    }

    #[test]
    fn required_first() {
        let required = string("a").required(true).build().unwrap();
        let optional = string("b").build().unwrap();

        let sub = |first: &ApplicationCommandOption, second: &ApplicationCommandOption| {
            ApplicationCommandOptionBuilder::new(Type::SubCommand, "sub", "Sub")
                .option(first.clone())
                .option(second.clone())
                .build()
        };

        assert!(sub(&required, &optional).is_ok());
        assert_eq!(field_of(sub(&optional, &required)), "options");
    }

    #[test]
    fn bounds() {
        let integer = || ApplicationCommandOptionBuilder::new(Type::Integer, "n", "Number");

        assert!(integer().min_value(1_i64).max_value(1_i64).build().is_ok());
        assert_eq!(field_of(integer().min_value(2_i64).max_value(1_i64).build()), "min_value");
        assert_eq!(field_of(integer().min_value(0.5).build()), "min_value");
        assert_eq!(field_of(string("s").min_value(1_i64).build()), "min_value");
        assert_eq!(field_of(integer().min_length(1).build()), "min_length");

        assert!(string("s").min_length(0).max_length(6000).build().is_ok());
        assert_eq!(field_of(string("s").max_length(0).build()), "max_length");
        assert_eq!(field_of(string("s").min_length(6001).build()), "min_length");
        assert_eq!(
            field_of(string("s").min_length(10).max_length(5).build()),
            "min_length"
        );
    }

    #[test]
    fn channel_types_only_on_channels() {
        assert_eq!(
            field_of(string("s").channel_types([ChannelType::GuildText]).build()),
            "channel_types"
        );
    }

    #[test]
    fn minimal_drops_defaults() {
        let option = string("tag").build().unwrap();
        let data = option.to_data(PutOptions::MINIMAL).unwrap();

        assert_eq!(
            serde_json::Value::Object(data),
            json!({"type": 3, "name": "tag", "description": "A string"})
        );
    }
}
