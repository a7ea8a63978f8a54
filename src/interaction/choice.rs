use crate::{
    entity::{field, Entity},
    error::ValidationError,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a predefined choice.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    String(String),
    Integer(i64),
    Float(f64),
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ChoiceValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A predefined value a user can pick for an option.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApplicationCommandOptionChoice {
    pub name: String,
    #[serde(default)]
    pub name_localizations: Option<BTreeMap<String, String>>,
    pub value: ChoiceValue,
}

impl ApplicationCommandOptionChoice {
    /// Create a choice.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name isn't 1 to 100 characters
    /// or a string value is longer than 100 characters.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<ChoiceValue>,
    ) -> Result<Self, ValidationError> {
        let choice = Self {
            name: name.into(),
            name_localizations: None,
            value: value.into(),
        };
        choice.validate()?;

        Ok(choice)
    }
}

impl Entity for ApplicationCommandOptionChoice {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "value"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_length("name", &self.name, 1, 100)?;

        for name in self.name_localizations.iter().flat_map(BTreeMap::values) {
            field::validate_length("name_localizations", name, 1, 100)?;
        }

        match &self.value {
            ChoiceValue::String(value) => field::validate_length("value", value, 0, 100),
            ChoiceValue::Integer(_) | ChoiceValue::Float(_) => Ok(()),
        }
    }
}
