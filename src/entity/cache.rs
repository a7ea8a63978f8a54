//! Process-wide, identifier keyed entity caches.
//!
//! A cache holds immutable `Arc` snapshots. Updating an entity replaces its
//! snapshot; holders of the previous `Arc` keep seeing the old state.

use super::{Entity, PutOptions};
use crate::{config, error::EntityError, id::Id};
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::{collections::BTreeMap, sync::Arc};
use tracing::debug;

/// Identifier keyed map of shared entity snapshots.
#[derive(Debug)]
pub struct EntityCache<T: CachedEntity> {
    name: &'static str,
    entries: DashMap<Id<T::Marker>, Arc<T>>,
}

impl<T: CachedEntity> EntityCache<T> {
    /// Create an empty cache; `name` only shows up in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: DashMap::new(),
        }
    }

    /// Snapshot of the entity with the given ID.
    pub fn get(&self, id: Id<T::Marker>) -> Option<Arc<T>> {
        self.entries.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Whether an entity with the given ID is cached.
    pub fn contains(&self, id: Id<T::Marker>) -> bool {
        self.entries.contains_key(&id)
    }

    /// Insert or replace an entity, returning the new snapshot.
    pub fn insert(&self, entity: T) -> Arc<T> {
        let id = entity.id();
        let entity = Arc::new(entity);

        if self.entries.insert(id, Arc::clone(&entity)).is_some() {
            debug!(cache = self.name, %id, "replaced cached entity");
        } else {
            debug!(cache = self.name, %id, "cached entity");
        }

        entity
    }

    /// Snapshot of the cached entity, inserting the result of `create` first
    /// if there is none.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&self, id: Id<T::Marker>, create: F) -> Arc<T> {
        let entry = self.entries.entry(id).or_insert_with(|| {
            debug!(cache = self.name, %id, "precreated entity");
            Arc::new(create())
        });

        Arc::clone(entry.value())
    }

    /// Apply a partial update to a cached entity.
    ///
    /// Returns `None` if the entity isn't cached, otherwise the new snapshot
    /// and the previous wire values of every field that changed.
    ///
    /// The entry stays locked while the update is applied, so concurrent
    /// updates to one ID are serialized.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] if the merged data doesn't decode.
    pub fn update(
        &self,
        id: Id<T::Marker>,
        data: &Value,
    ) -> Result<Option<(Arc<T>, BTreeMap<String, Value>)>, EntityError> {
        let Some(mut entry) = self.entries.get_mut(&id) else {
            return Ok(None);
        };

        let mut entity = T::clone(entry.value());
        let old_attributes = entity.difference_update(data)?;
        let entity = Arc::new(entity);
        *entry.value_mut() = Arc::clone(&entity);
        debug!(cache = self.name, %id, changed = old_attributes.len(), "updated cached entity");

        Ok(Some((entity, old_attributes)))
    }

    /// Evict an entity, returning its last snapshot.
    pub fn remove(&self, id: Id<T::Marker>) -> Option<Arc<T>> {
        let removed = self.entries.remove(&id).map(|(_, entity)| entity);

        if removed.is_some() {
            debug!(cache = self.name, %id, "evicted entity");
        }

        removed
    }

    /// Number of cached entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entity.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

/// An entity Discord identifies by snowflake and this crate caches.
pub trait CachedEntity: Entity + Send + Sync + 'static {
    /// Marker type of the entity's ID.
    type Marker;

    /// The entity's ID.
    fn id(&self) -> Id<Self::Marker>;

    /// A blank entity carrying only its ID.
    fn with_id(id: Id<Self::Marker>) -> Self;

    /// The global cache this entity type lives in.
    fn cache() -> &'static EntityCache<Self>;

    /// Decode an entity and store it in its cache.
    ///
    /// When caching is turned off in [`config`] the entity is decoded but
    /// not stored.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] if decoding fails.
    fn from_data_cached(data: &Value) -> Result<Arc<Self>, EntityError> {
        let entity = Self::from_data(data)?;

        if config::get().cache_entities {
            Ok(Self::cache().insert(entity))
        } else {
            Ok(Arc::new(entity))
        }
    }

    /// The cached entity with the given ID, or a blank one that is cached
    /// for later updates.
    fn precreate(id: Id<Self::Marker>) -> Arc<Self> {
        if config::get().cache_entities {
            Self::cache().get_or_insert_with(id, || Self::with_id(id))
        } else {
            Arc::new(Self::with_id(id))
        }
    }

    /// Overlay `data` onto the entity and return the old wire values of the
    /// fields that changed.
    ///
    /// Keys missing from `data` keep their current value. A field that was
    /// absent before the update shows up with an old value of `null`.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] if `data` isn't an object or the merged
    /// payload doesn't decode; `self` is left untouched.
    fn difference_update(&mut self, data: &Value) -> Result<BTreeMap<String, Value>, EntityError> {
        let Value::Object(update) = data else {
            return Err(EntityError::NOT_AN_OBJECT);
        };

        let old = self.to_data(PutOptions::FULL)?;
        let mut merged: Map<String, Value> = old.clone();
        merged.extend(update.iter().map(|(key, value)| (key.clone(), value.clone())));

        let entity = Self::from_data(&Value::Object(merged))?;
        let new = entity.to_data(PutOptions::FULL)?;

        let changed = new
            .iter()
            .filter(|(key, value)| old.get(key.as_str()) != Some(*value))
            .map(|(key, _)| (key.clone(), old.get(key).cloned().unwrap_or(Value::Null)))
            .collect();

        *self = entity;

        Ok(changed)
    }
}
