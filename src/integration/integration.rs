use super::{IntegrationAccount, IntegrationApplication, IntegrationExpireBehavior, IntegrationType};
use crate::{
    application::OAuth2Scope,
    entity::{field, CachedEntity, Entity, EntityCache},
    error::ValidationError,
    id::{
        marker::{IntegrationMarker, RoleMarker},
        Id,
    },
    user::User,
    util::Timestamp,
};
use serde::{Deserialize, Serialize};
use std::{
    hash::{Hash, Hasher},
    sync::LazyLock,
};

/// Every integration decoded through [`CachedEntity::from_data_cached`].
pub static INTEGRATIONS: LazyLock<EntityCache<Integration>> =
    LazyLock::new(|| EntityCache::new("integrations"));

/// Grace periods, in days, Discord accepts for lapsed subscribers.
pub const EXPIRE_GRACE_PERIODS: [u8; 5] = [1, 3, 7, 14, 30];

/// A guild integration.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Integration {
    pub id: Id<IntegrationMarker>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: IntegrationType,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub syncing: bool,
    #[serde(default)]
    pub role_id: Option<Id<RoleMarker>>,
    #[serde(default)]
    pub enable_emoticons: bool,
    #[serde(default)]
    pub expire_behavior: Option<IntegrationExpireBehavior>,
    #[serde(default)]
    pub expire_grace_period: Option<u8>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub account: IntegrationAccount,
    #[serde(default)]
    pub synced_at: Option<Timestamp>,
    #[serde(default)]
    pub subscriber_count: Option<u64>,
    #[serde(default)]
    pub revoked: bool,
    #[serde(default)]
    pub application: Option<IntegrationApplication>,
    #[serde(default, deserialize_with = "field::null_as_default")]
    pub scopes: Vec<OAuth2Scope>,
}

impl Hash for Integration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Integration {
    const INTERNAL_FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "type",
        "syncing",
        "role_id",
        "user",
        "account",
        "synced_at",
        "subscriber_count",
        "revoked",
        "application",
        "scopes",
    ];

    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(period) = self.expire_grace_period {
            if !EXPIRE_GRACE_PERIODS.contains(&period) {
                return Err(field::format_error(
                    "expire_grace_period",
                    "must be 1, 3, 7, 14 or 30 days",
                ));
            }
        }

        if !self.kind.is_subscription()
            && (self.expire_behavior.is_some() || self.expire_grace_period.is_some())
        {
            return Err(field::conflict_error(
                "expire_behavior",
                "only subscription integrations expire",
            ));
        }

        if let Some(application) = &self.application {
            application.validate()?;
        }

        Ok(())
    }
}

impl CachedEntity for Integration {
    type Marker = IntegrationMarker;

    fn id(&self) -> Id<IntegrationMarker> {
        self.id
    }

    fn with_id(id: Id<IntegrationMarker>) -> Self {
        Self {
            id,
            name: String::new(),
            kind: IntegrationType::default(),
            enabled: false,
            syncing: false,
            role_id: None,
            enable_emoticons: false,
            expire_behavior: None,
            expire_grace_period: None,
            user: None,
            account: IntegrationAccount::default(),
            synced_at: None,
            subscriber_count: None,
            revoked: false,
            application: None,
            scopes: Vec::new(),
        }
    }

    fn cache() -> &'static EntityCache<Self> {
        &INTEGRATIONS
    }
}
