use super::SkuDistributor;
use crate::entity::{field, Entity};
use serde::{Deserialize, Serialize};

/// A listing of an application on another store.
///
/// `id` and `sku` are store specific and not necessarily snowflakes.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ThirdPartySku {
    #[serde(default)]
    pub distributor: SkuDistributor,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub sku: Option<String>,
}

impl ThirdPartySku {
    /// Create a listing.
    pub fn new(distributor: SkuDistributor, id: Option<String>, sku: Option<String>) -> Self {
        Self {
            distributor,
            id,
            sku,
        }
    }
}

impl Entity for ThirdPartySku {
    const REQUIRED_FIELDS: &'static [&'static str] = &["distributor"];
}
