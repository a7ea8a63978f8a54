use super::{
    ApplicationExecutable, ApplicationFlags, ApplicationInstallParameters, ApplicationType,
    ThirdPartySku,
};
use crate::{
    entity::{field, CachedEntity, Entity, EntityCache},
    error::ValidationError,
    id::{
        marker::{ApplicationMarker, EulaMarker, GuildMarker, SkuMarker},
        Id,
    },
    team::Team,
    user::User,
    util::ImageHash,
};
use serde::{Deserialize, Serialize};
use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

/// Every application decoded through [`CachedEntity::from_data_cached`].
pub static APPLICATIONS: LazyLock<EntityCache<Application>> =
    LazyLock::new(|| EntityCache::new("applications"));

/// A Discord application: a bot, a game, or both.
///
/// Partial applications, like the one in the gateway's `READY` payload, only
/// carry `id` and `flags`; their `name` is empty.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Application {
    pub id: Id<ApplicationMarker>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<ImageHash>,
    #[serde(rename = "cover_image", default)]
    pub cover: Option<ImageHash>,
    #[serde(default)]
    pub flags: ApplicationFlags,
    #[serde(rename = "type", default, deserialize_with = "field::null_as_default")]
    pub kind: ApplicationType,
    #[serde(default)]
    pub bot_public: bool,
    #[serde(default)]
    pub bot_require_code_grant: bool,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub verify_key: String,
    #[serde(default)]
    pub primary_sku_id: Option<Id<SkuMarker>>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub guild_id: Option<Id<GuildMarker>>,
    #[serde(default)]
    pub eula_id: Option<Id<EulaMarker>>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub rpc_origins: Vec<String>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub terms_of_service_url: Option<String>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub privacy_policy_url: Option<String>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub custom_install_url: Option<String>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub role_connections_verification_url: Option<String>,
    #[serde(default, deserialize_with = "field::empty_as_none")]
    pub interactions_endpoint_url: Option<String>,
    #[serde(default)]
    pub install_params: Option<ApplicationInstallParameters>,
    #[serde(default)]
    pub approximate_guild_count: Option<u64>,
    /// `-1` means unlimited.
    #[serde(default)]
    pub max_participants: Option<i64>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub executables: Vec<ApplicationExecutable>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub third_party_skus: Vec<ThirdPartySku>,
    #[serde(default)]
    pub hook: bool,
}

impl Application {
    /// Whether members of the owning team share ownership.
    pub const fn is_team_owned(&self) -> bool {
        self.team.is_some()
    }

    /// Whether the application is a game sold or detected by Discord.
    pub fn is_game(&self) -> bool {
        self.kind == ApplicationType::Game || !self.executables.is_empty()
    }
}

impl Hash for Application {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Application {
    const INTERNAL_FIELDS: &'static [&'static str] = &[
        "id",
        "owner",
        "team",
        "verify_key",
        "primary_sku_id",
        "slug",
        "guild_id",
        "eula_id",
        "approximate_guild_count",
        "hook",
        "executables",
        "third_party_skus",
    ];
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];

    fn validate(&self) -> Result<(), ValidationError> {
        if !self.name.is_empty() {
            field::validate_length("name", &self.name, 2, 32)?;
        }

        field::validate_length("description", &self.description, 0, 400)?;
        field::validate_count("tags", self.tags.len(), 5)?;

        for tag in &self.tags {
            field::validate_length("tags", tag, 1, 20)?;
        }

        if let Some(max_participants) = self.max_participants {
            field::validate_range("max_participants", max_participants, -1, i64::MAX)?;
        }

        if let Some(install_params) = &self.install_params {
            install_params.validate()?;

            if self.custom_install_url.is_some() {
                return Err(field::conflict_error(
                    "install_params",
                    "install parameters and a custom install URL are exclusive",
                ));
            }
        }

        if let Some(team) = &self.team {
            team.validate()?;
        }

        self.executables
            .iter()
            .try_for_each(|executable| executable.validate())
    }
}

impl CachedEntity for Application {
    type Marker = ApplicationMarker;

    fn id(&self) -> Id<ApplicationMarker> {
        self.id
    }

    fn with_id(id: Id<ApplicationMarker>) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            icon: None,
            cover: None,
            flags: ApplicationFlags::empty(),
            kind: ApplicationType::None,
            bot_public: false,
            bot_require_code_grant: false,
            owner: None,
            team: None,
            verify_key: String::new(),
            primary_sku_id: None,
            slug: None,
            guild_id: None,
            eula_id: None,
            tags: Vec::new(),
            rpc_origins: Vec::new(),
            terms_of_service_url: None,
            privacy_policy_url: None,
            custom_install_url: None,
            role_connections_verification_url: None,
            interactions_endpoint_url: None,
            install_params: None,
            approximate_guild_count: None,
            max_participants: None,
            executables: Vec::new(),
            third_party_skus: Vec::new(),
            hook: false,
        }
    }

    fn cache() -> &'static EntityCache<Self> {
        &APPLICATIONS
    }
}

/// Builder for an [`Application`], validated on [`build`].
///
/// ```
/// use discord_entities::{application::ApplicationBuilder, id::Id};
///
/// let application = ApplicationBuilder::new(Id::new(1), "Bamboo")
///     .description("Feeds pandas.")
///     .tags(["fun", "utility"])
///     .build()
///     .unwrap();
///
/// assert_eq!(application.tags.len(), 2);
/// ```
///
/// [`build`]: Self::build
#[derive(Debug)]
#[must_use = "builders have no effect unless built"]
pub struct ApplicationBuilder {
    inner: Application,
}

impl ApplicationBuilder {
    /// Start an application with the given ID and name.
    pub fn new(id: Id<ApplicationMarker>, name: impl Into<String>) -> Self {
        Self {
            inner: Application {
                name: name.into(),
                ..Application::with_id(id)
            },
        }
    }

    /// Set the description shown on the application's profile.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    pub fn icon(mut self, icon: ImageHash) -> Self {
        self.inner.icon = Some(icon);
        self
    }

    pub fn cover(mut self, cover: ImageHash) -> Self {
        self.inner.cover = Some(cover);
        self
    }

    pub fn flags(mut self, flags: ApplicationFlags) -> Self {
        self.inner.flags = flags;
        self
    }

    pub fn kind(mut self, kind: ApplicationType) -> Self {
        self.inner.kind = kind;
        self
    }

    /// Let anyone, not just the owner, add the bot to a guild.
    pub const fn bot_public(mut self, bot_public: bool) -> Self {
        self.inner.bot_public = bot_public;
        self
    }

    pub const fn bot_require_code_grant(mut self, bot_require_code_grant: bool) -> Self {
        self.inner.bot_require_code_grant = bot_require_code_grant;
        self
    }

    /// Replace the discovery tags.
    pub fn tags<I: IntoIterator<Item = T>, T: Into<String>>(mut self, tags: I) -> Self {
        self.inner.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn rpc_origins<I: IntoIterator<Item = T>, T: Into<String>>(mut self, origins: I) -> Self {
        self.inner.rpc_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn terms_of_service_url(mut self, url: impl Into<String>) -> Self {
        self.inner.terms_of_service_url = Some(url.into());
        self
    }

    pub fn privacy_policy_url(mut self, url: impl Into<String>) -> Self {
        self.inner.privacy_policy_url = Some(url.into());
        self
    }

    /// Send users to a custom URL instead of the default install flow.
    pub fn custom_install_url(mut self, url: impl Into<String>) -> Self {
        self.inner.custom_install_url = Some(url.into());
        self
    }

    pub fn role_connections_verification_url(mut self, url: impl Into<String>) -> Self {
        self.inner.role_connections_verification_url = Some(url.into());
        self
    }

    /// Receive interactions over HTTP at this URL instead of the gateway.
    pub fn interactions_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.inner.interactions_endpoint_url = Some(url.into());
        self
    }

    pub fn install_params(mut self, install_params: ApplicationInstallParameters) -> Self {
        self.inner.install_params = Some(install_params);
        self
    }

    pub const fn max_participants(mut self, max_participants: i64) -> Self {
        self.inner.max_participants = Some(max_participants);
        self
    }

    /// Validate and return the application.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn build(self) -> Result<Application, ValidationError> {
        self.inner.validate()?;

        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{Application, ApplicationBuilder, APPLICATIONS};
    use crate::{
        application::{
            ApplicationFlags, ApplicationInstallParameters, ApplicationType, OAuth2Scope,
            OperatingSystem,
        },
        entity::{tests::assert_round_trip, CachedEntity, Entity, PutOptions},
        error::ValidationErrorType,
        guild::Permissions,
        id::Id,
    };
    use serde_json::{json, Value};
    use static_assertions::assert_impl_all;
    use std::{fmt::Debug, hash::Hash};

    assert_impl_all!(Application: Clone, Debug, Eq, Hash, Send, Sync);

    fn payload() -> Value {
        json!({
            "id": "172150183260323840",
            "name": "Baba O-Riley",
            "description": "Test",
            "icon": null,
            "cover_image": "8342729096ea3675442027381ff50dfe",
            "flags": 8_392_704,
            "type": null,
            "bot_public": true,
            "bot_require_code_grant": false,
            "verify_key": "1e0a356058d627ca38a5c8c9648818061d49e49bd9da9e3ab17d98ad4d6bg2u8",
            "owner": {
                "id": "172150183260323840",
                "username": "i own a bot",
                "discriminator": "1738",
                "avatar": null
            },
            "team": {
                "id": "531992624043786253",
                "name": "Ducks",
                "icon": "dd9b7dcfdf5351b9c3de0fe167bacbe1",
                "owner_user_id": "511972282709709995",
                "members": [{
                    "user": {
                        "id": "511972282709709995",
                        "username": "Mr Owner",
                        "discriminator": "4444",
                        "avatar": null
                    },
                    "membership_state": 2,
                    "permissions": ["*"],
                    "team_id": "531992624043786253",
                    "role": "admin"
                }]
            },
            "tags": ["music", "fun"],
            "install_params": {
                "scopes": ["bot", "applications.commands"],
                "permissions": "2048"
            },
            "executables": [{"name": "baba.exe", "os": "win32", "is_launcher": false}],
            "third_party_skus": [{"distributor": "steam", "id": "130", "sku": "130"}],
            "approximate_guild_count": 12,
            "hook": true
        })
    }

    #[test]
    fn decode_full() {
        let application = Application::from_data(&payload()).unwrap();

        assert!(application.flags.has_presence_intent());
        assert_eq!(application.kind, ApplicationType::None);
        assert!(application.is_team_owned());
        assert!(application.is_game());
        assert_eq!(application.executables[0].os, OperatingSystem::Windows);
        assert_eq!(
            application.install_params.as_ref().unwrap().permissions,
            Permissions::SEND_MESSAGES
        );
        assert_round_trip(&application);
    }

    #[test]
    fn partial_application() {
        let application = Application::from_data(&json!({
            "id": "172150183260323840",
            "flags": 0
        }))
        .unwrap();

        assert!(application.name.is_empty());
        assert_round_trip(&application);
    }

    #[test]
    fn minimal_is_editable_fields_only() {
        let application = Application::from_data(&payload()).unwrap();
        let data = application.to_data(PutOptions::MINIMAL).unwrap();

        for key in Application::INTERNAL_FIELDS {
            assert!(!data.contains_key(*key), "{key} written");
        }

        assert_eq!(data["tags"], json!(["music", "fun"]));
        assert!(!data.contains_key("icon"));
        assert!(!data.contains_key("bot_require_code_grant"));
    }

    #[test]
    fn builder_validates() {
        let error = ApplicationBuilder::new(Id::new(1), "ok")
            .tags(["a", "b", "c", "d", "e", "f"])
            .build()
            .unwrap_err();
        assert!(matches!(
            error.kind(),
            ValidationErrorType::Count { field: "tags", .. }
        ));

        assert!(ApplicationBuilder::new(Id::new(1), "x").build().is_err());
        assert!(ApplicationBuilder::new(Id::new(1), "ok")
            .max_participants(-2)
            .build()
            .is_err());

        let install_params =
            ApplicationInstallParameters::new(vec![OAuth2Scope::Bot], Permissions::empty())
                .unwrap();
        assert!(ApplicationBuilder::new(Id::new(1), "ok")
            .install_params(install_params)
            .custom_install_url("https://example.com")
            .build()
            .is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let application = ApplicationBuilder::new(Id::new(1), "Bamboo")
            .flags(ApplicationFlags::GATEWAY_GUILD_MEMBERS_LIMITED)
            .kind(ApplicationType::Game)
            .bot_public(true)
            .max_participants(-1)
            .build()
            .unwrap();

        assert!(application.bot_public);
        assert_eq!(application.max_participants, Some(-1));
        assert_round_trip(&application);
    }

    #[test]
    fn copy_with_keeps_original() {
        let application = ApplicationBuilder::new(Id::new(1), "Bamboo").build().unwrap();
        let renamed = application
            .copy_with(|application| application.name = "Bamboo 2".to_owned())
            .unwrap();

        assert_eq!(application.name, "Bamboo");
        assert_eq!(renamed.name, "Bamboo 2");
        assert_eq!(renamed.id, application.id);
    }

    #[test]
    fn cached_decode() {
        let application = Application::from_data_cached(&payload()).unwrap();
        let cached = APPLICATIONS.get(application.id()).unwrap();

        assert_eq!(cached, application);
    }
}
