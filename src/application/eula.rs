use crate::{
    entity::{CachedEntity, Entity, EntityCache},
    id::{marker::EulaMarker, Id},
};
use serde::{Deserialize, Serialize};
use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

/// Every EULA decoded through [`CachedEntity::from_data_cached`].
pub static EULAS: LazyLock<EntityCache<Eula>> = LazyLock::new(|| EntityCache::new("eulas"));

/// End user license agreement attached to a game application.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Eula {
    pub id: Id<EulaMarker>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl Eula {
    /// Create a EULA.
    pub fn new(id: Id<EulaMarker>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: content.into(),
        }
    }
}

impl Hash for Eula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Eula {
    const INTERNAL_FIELDS: &'static [&'static str] = &["id"];
}

impl CachedEntity for Eula {
    type Marker = EulaMarker;

    fn id(&self) -> Id<EulaMarker> {
        self.id
    }

    fn with_id(id: Id<EulaMarker>) -> Self {
        Self::new(id, "", "")
    }

    fn cache() -> &'static EntityCache<Self> {
        &EULAS
    }
}

#[cfg(test)]
mod tests {
    use super::{Eula, EULAS};
    use crate::{
        entity::{tests::assert_round_trip, CachedEntity, Entity},
        id::Id,
    };
    use serde_json::json;

    #[test]
    fn cached_decode() {
        let eula = Eula::from_data_cached(&json!({
            "id": "542074049984200704",
            "name": "Game EULA",
            "content": "Be nice."
        }))
        .unwrap();

        assert_eq!(EULAS.get(Id::new(542_074_049_984_200_704)).unwrap(), eula);
        assert_round_trip(&*eula);
    }

    #[test]
    fn precreate_then_fill() {
        let id = Id::new(542_074_049_984_200_705);
        assert!(Eula::precreate(id).content.is_empty());

        let (eula, old) = EULAS
            .update(id, &json!({"content": "Updated"}))
            .unwrap()
            .unwrap();
        assert_eq!(eula.content, "Updated");
        assert_eq!(old["content"], json!(""));
    }
}
