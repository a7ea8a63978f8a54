use super::OAuth2Scope;
use crate::{
    entity::{field, Entity},
    error::ValidationError,
    guild::Permissions,
};
use serde::{Deserialize, Serialize};

/// What the in-app "Add to server" button asks for.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ApplicationInstallParameters {
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub scopes: Vec<OAuth2Scope>,
}

impl ApplicationInstallParameters {
    /// Create install parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `scopes` is empty, or if permissions
    /// are requested without the `bot` scope.
    pub fn new(
        scopes: Vec<OAuth2Scope>,
        permissions: Permissions,
    ) -> Result<Self, ValidationError> {
        let parameters = Self {
            permissions,
            scopes,
        };
        parameters.validate()?;

        Ok(parameters)
    }
}

impl Entity for ApplicationInstallParameters {
    const REQUIRED_FIELDS: &'static [&'static str] = &["permissions", "scopes"];

    fn validate(&self) -> Result<(), ValidationError> {
        if self.scopes.is_empty() {
            return Err(field::format_error(
                "scopes",
                "at least one scope is required",
            ));
        }

        if !self.permissions.is_empty() && !self.scopes.contains(&OAuth2Scope::Bot) {
            return Err(field::conflict_error(
                "permissions",
                "permissions are only granted with the bot scope",
            ));
        }

        Ok(())
    }
}
