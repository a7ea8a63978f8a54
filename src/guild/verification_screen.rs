use crate::{
    entity::{field, Entity},
    error::ValidationError,
    util::Timestamp,
};
use serde::{Deserialize, Serialize};

preinstanced! {
    /// Kind of a membership screening step.
    pub enum VerificationFieldType: str {
        #[default]
        Terms = "TERMS" => "terms",
    }
}

/// A guild's membership screening form.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VerificationScreen {
    /// When the form was last edited.
    pub version: Timestamp,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub form_fields: Vec<VerificationScreenStep>,
}

impl VerificationScreen {
    /// Steps the member must complete.
    pub fn required_steps(&self) -> impl Iterator<Item = &VerificationScreenStep> {
        self.form_fields.iter().filter(|step| step.required)
    }
}

impl Entity for VerificationScreen {
    const INTERNAL_FIELDS: &'static [&'static str] = &["version"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["form_fields"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_optional_length("description", self.description.as_deref(), 0, 300)?;

        self.form_fields.iter().try_for_each(|step| step.validate())
    }
}

/// A single field of a [`VerificationScreen`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VerificationScreenStep {
    #[serde(default)]
    pub field_type: VerificationFieldType,
    #[serde(default)]
    pub label: String,
    /// For `TERMS`, the rules the member has to agree to.
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub values: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl VerificationScreenStep {
    /// Create a rules step.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the label isn't 1 to 300 characters
    /// or there are more than 16 rules.
    pub fn terms(
        label: impl Into<String>,
        rules: Vec<String>,
        required: bool,
    ) -> Result<Self, ValidationError> {
        let step = Self {
            field_type: VerificationFieldType::Terms,
            label: label.into(),
            values: rules,
            required,
        };
        step.validate()?;

        Ok(step)
    }
}

impl Entity for VerificationScreenStep {
    const REQUIRED_FIELDS: &'static [&'static str] = &["field_type", "label", "required"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_length("label", &self.label, 1, 300)?;
        field::validate_count("values", self.values.len(), 16)?;

        self.values
            .iter()
            .try_for_each(|value| field::validate_length("values", value, 1, 300))
    }
}
