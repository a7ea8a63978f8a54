use super::OperatingSystem;
use crate::{
    entity::{field, Entity},
    error::ValidationError,
};
use serde::{Deserialize, Serialize};

/// A binary a game application ships, used for game detection.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ApplicationExecutable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub os: OperatingSystem,
    #[serde(rename = "is_launcher", default)]
    pub launcher: bool,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub arguments: Option<String>,
}

impl ApplicationExecutable {
    /// Create an executable entry.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is empty or longer than 1024
    /// characters.
    pub fn new(name: impl Into<String>, os: OperatingSystem) -> Result<Self, ValidationError> {
        let executable = Self {
            name: name.into(),
            os,
            ..Self::default()
        };
        executable.validate()?;

        Ok(executable)
    }
}

impl Entity for ApplicationExecutable {
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "os"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_length("name", &self.name, 1, 1024)?;
        field::validate_optional_length("arguments", self.arguments.as_deref(), 0, 1024)
    }
}

#[cfg(test)]
mod tests {
    use super::ApplicationExecutable;
    use crate::{
        application::OperatingSystem,
        entity::{tests::assert_round_trip, Entity},
    };
    use serde_json::json;

    #[test]
    fn decode() {
        let executable = ApplicationExecutable::from_data(&json!({
            "name": "game/bin/game.exe",
            "os": "win32",
            "is_launcher": true
        }))
        .unwrap();

        assert_eq!(executable.os, OperatingSystem::Windows);
        assert!(executable.launcher);
        assert_round_trip(&executable);
    }

    #[test]
    fn rejects_empty_name() {
        assert!(ApplicationExecutable::new("", OperatingSystem::Linux).is_err());
    }
}
