use crate::{
    entity::{field, Entity},
    error::ValidationError,
    id::{marker::ApplicationMarker, Id},
    user::User,
    util::ImageHash,
};
use serde::{Deserialize, Serialize};

/// The application behind a `discord` integration.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct IntegrationApplication {
    pub id: Id<ApplicationMarker>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<ImageHash>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bot: Option<User>,
}

impl IntegrationApplication {
    pub fn new(id: Id<ApplicationMarker>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            description: String::new(),
            bot: None,
        }
    }
}

impl Entity for IntegrationApplication {
    const INTERNAL_FIELDS: &'static [&'static str] = &["id", "bot"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "description"];

    fn validate(&self) -> Result<(), ValidationError> {
        field::validate_length("description", &self.description, 0, 400)?;

        match &self.bot {
            Some(bot) => bot.validate(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IntegrationApplication;
    use crate::{
        entity::{tests::assert_round_trip, Entity},
        id::Id,
    };
    use serde_json::json;

    #[test]
    fn with_bot() {
        let application = IntegrationApplication::from_data(&json!({
            "id": "379286843112406016",
            "name": "Pandas",
            "icon": "8342729096ea3675442027381ff50dfe",
            "description": "Feeds the pandas",
            "bot": {"id": "379286843112406016", "username": "Pandas", "bot": true}
        }))
        .unwrap();

        assert!(application.bot.as_ref().is_some_and(|bot| bot.bot));
        assert!(application.icon.is_some());
        assert_round_trip(&application);
    }

    #[test]
    fn validates_description() {
        let application = IntegrationApplication::new(Id::new(379_286_843_112_406_016), "Pandas");
        assert!(application
            .copy_with(|application| application.description = "x".repeat(401))
            .is_err());
    }
}
