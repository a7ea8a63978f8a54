use super::UserFlags;
use crate::{
    entity::{field, CachedEntity, Entity, EntityCache},
    error::ValidationError,
    id::{marker::UserMarker, Id},
    util::ImageHash,
};
use serde::{Deserialize, Serialize};
use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

/// Every user decoded through [`CachedEntity::from_data_cached`].
pub static USERS: LazyLock<EntityCache<User>> = LazyLock::new(|| EntityCache::new("users"));

/// A Discord user.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    pub id: Id<UserMarker>,
    #[serde(rename = "username")]
    pub name: String,
    /// Legacy four digit tag; `0` for users on the unique username system.
    #[serde(default, with = "discriminator")]
    pub discriminator: u16,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<ImageHash>,
    #[serde(default)]
    pub banner: Option<ImageHash>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
    #[serde(default)]
    pub public_flags: UserFlags,
}

impl User {
    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name isn't 2 to 32 characters.
    pub fn new(id: Id<UserMarker>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let user = Self {
            name: name.into(),
            ..Self::with_id(id)
        };
        field::validate_length("username", &user.name, 2, 32)?;
        user.validate()?;

        Ok(user)
    }

    /// Name shown in clients: the global name if set, else the username.
    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.name)
    }
}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for User {
    const INTERNAL_FIELDS: &'static [&'static str] = &["id", "bot", "system", "public_flags"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["username"];

    fn validate(&self) -> Result<(), ValidationError> {
        // Precreated users have no name until an update fills it in.
        if !self.name.is_empty() {
            field::validate_length("username", &self.name, 2, 32)?;
        }

        field::validate_optional_length("global_name", self.global_name.as_deref(), 1, 32)?;
        field::validate_range("discriminator", i64::from(self.discriminator), 0, 9999)
    }
}

impl CachedEntity for User {
    type Marker = UserMarker;

    fn id(&self) -> Id<UserMarker> {
        self.id
    }

    fn with_id(id: Id<UserMarker>) -> Self {
        Self {
            id,
            name: String::new(),
            discriminator: 0,
            global_name: None,
            avatar: None,
            banner: None,
            bot: false,
            system: false,
            public_flags: UserFlags::empty(),
        }
    }

    fn cache() -> &'static EntityCache<Self> {
        &USERS
    }
}

/// Discriminators travel as zero padded strings (`"0001"`), or `"0"` for
/// unique usernames.
mod discriminator {
    use serde::{
        de::{Deserializer, Error as DeError, Unexpected, Visitor},
        ser::Serializer,
    };
    use std::fmt::{Formatter, Result as FmtResult};

    pub fn serialize<S: Serializer>(value: &u16, serializer: S) -> Result<S::Ok, S::Error> {
        if *value == 0 {
            serializer.serialize_str("0")
        } else {
            serializer.collect_str(&format_args!("{value:04}"))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
        struct DiscriminatorVisitor;

        impl Visitor<'_> for DiscriminatorVisitor {
            type Value = u16;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a discriminator as a string or integer")
            }

            fn visit_u64<E: DeError>(self, value: u64) -> Result<Self::Value, E> {
                u16::try_from(value)
                    .map_err(|_| DeError::invalid_value(Unexpected::Unsigned(value), &self))
            }

            fn visit_str<E: DeError>(self, value: &str) -> Result<Self::Value, E> {
                value
                    .parse()
                    .map_err(|_| DeError::invalid_value(Unexpected::Str(value), &self))
            }

            fn visit_unit<E: DeError>(self) -> Result<Self::Value, E> {
                Ok(0)
            }
        }

        deserializer.deserialize_any(DiscriminatorVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{User, USERS};
    use crate::{
        entity::{tests::assert_round_trip, CachedEntity, Entity, PutOptions},
        id::Id,
    };
    use serde_json::json;
    use static_assertions::assert_impl_all;
    use std::{fmt::Debug, hash::Hash};

    assert_impl_all!(User: Clone, Debug, Eq, Hash, Send, Sync);

    #[test]
    fn decode_legacy_user() {
        let user = User::from_data(&json!({
            "id": "80351110224678912",
            "username": "Nelly",
            "discriminator": "1337",
            "avatar": "8342729096ea3675442027381ff50dfe",
            "public_flags": 64
        }))
        .unwrap();

        assert_eq!(user.discriminator, 1337);
        assert_eq!(user.display_name(), "Nelly");
        assert!(user.avatar.is_some());
        assert_round_trip(&user);
    }

    #[test]
    fn discriminator_is_zero_padded() {
        let user = User::new(Id::new(5), "nelly")
            .unwrap()
            .copy_with(|user| user.discriminator = 7)
            .unwrap();

        let data = user.to_data(PutOptions::FULL).unwrap();
        assert_eq!(data["discriminator"], json!("0007"));

        let unique = User::new(Id::new(5), "nelly").unwrap();
        let data = unique.to_data(PutOptions::FULL).unwrap();
        assert_eq!(data["discriminator"], json!("0"));
    }

    #[test]
    fn validates_name() {
        assert!(User::new(Id::new(5), "").is_err());
        assert!(User::new(Id::new(5), "n").is_err());
        assert!(User::from_data(&json!({"id": "5", "username": "n"})).is_err());
        assert!(User::from_data(&json!({"id": "5", "username": "x".repeat(33)})).is_err());
    }

    #[test]
    fn minimal_omits_internals() {
        let user = User::new(Id::new(5), "nelly").unwrap();
        let data = user.to_data(PutOptions::MINIMAL).unwrap();

        assert_eq!(
            serde_json::Value::Object(data),
            json!({"username": "nelly", "discriminator": "0"})
        );
    }

    #[test]
    fn cached_decode_and_update() {
        let id = Id::new(401_000_000_000_000_001);
        let user = User::from_data_cached(&json!({
            "id": id.to_string(),
            "username": "before",
        }))
        .unwrap();
        assert_eq!(USERS.get(id).unwrap(), user);

        let (updated, old) = USERS
            .update(id, &json!({"username": "after", "global_name": "After"}))
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "after");
        assert_eq!(old["username"], json!("before"));
        assert_eq!(old["global_name"], json!(null));
        assert_eq!(old.len(), 2);
        assert_eq!(user.name, "before");
    }

    #[test]
    fn precreate_reuses_cached() {
        let id = Id::new(401_000_000_000_000_002);
        let blank = User::precreate(id);
        assert!(blank.name.is_empty());
        assert!(USERS.contains(id));

        USERS.remove(id);
        assert!(!USERS.contains(id));
    }

    #[test]
    fn precreated_user_accepts_partial_updates() {
        let id = Id::new(401_000_000_000_000_003);
        let blank = User::precreate(id);
        assert_round_trip(&*blank);

        let (updated, old) = USERS
            .update(id, &json!({"avatar": null, "global_name": "Panda"}))
            .unwrap()
            .unwrap();
        assert!(updated.name.is_empty());
        assert_eq!(updated.display_name(), "Panda");
        assert_eq!(old["global_name"], json!(null));
        assert_round_trip(&*updated);

        let (named, _) = USERS
            .update(id, &json!({"username": "panda"}))
            .unwrap()
            .unwrap();
        assert_eq!(named.name, "panda");
        assert_eq!(named.global_name.as_deref(), Some("Panda"));
        assert!(USERS.update(id, &json!({"username": "p"})).is_err());

        USERS.remove(id);
    }
}
