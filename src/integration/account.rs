use crate::entity::Entity;
use serde::{Deserialize, Serialize};

/// Account on the integrated service.
///
/// The ID belongs to the other service and isn't a snowflake.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct IntegrationAccount {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl IntegrationAccount {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Entity for IntegrationAccount {
    const REQUIRED_FIELDS: &'static [&'static str] = &["id", "name"];
}

#[cfg(test)]
mod tests {
    use super::IntegrationAccount;
    use crate::entity::{tests::assert_round_trip, Entity, PutOptions};
    use serde_json::{json, Value};

    #[test]
    fn twitch_account() {
        let account = IntegrationAccount::from_data(&json!({
            "id": "123456789",
            "name": "twitchusername"
        }))
        .unwrap();

        assert_eq!(account, IntegrationAccount::new("123456789", "twitchusername"));
        assert_round_trip(&account);
    }

    #[test]
    fn minimal_keeps_blank_account() {
        let data = IntegrationAccount::default()
            .to_data(PutOptions::MINIMAL)
            .unwrap();

        assert_eq!(Value::Object(data), json!({"id": "", "name": ""}));
    }
}
