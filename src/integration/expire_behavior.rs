use serde_repr::{Deserialize_repr, Serialize_repr};

/// What happens to a subscriber once their subscription lapses.
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, Eq, Hash, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum IntegrationExpireBehavior {
    /// Remove the integration's role.
    #[default]
    RemoveRole = 0,
    Kick = 1,
}
