//! In-process image store with IndexedDB key semantics.
//!
//! Mirrors the browser backend closely enough to exercise schema upgrades and
//! the render loaders without a browser: versioned open, per-collection key
//! policies, and key-ordered reads. The `add`/`put` seeding helpers stand in
//! for the admin dashboard that owns population of the real store, and
//! `reject_create` stands in for a browser refusing to create a collection.
//!
//! Upgrades are staged and only committed when every creation succeeds, the
//! way an aborted IndexedDB version change leaves the database untouched.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::BTreeMap;

use super::schema::{self, CollectionSchema, KeyPolicy};
use super::{Collection, ImageRecord, ImageStore, StoreError};

#[derive(Clone, Debug)]
struct MemoryCollection {
    schema: CollectionSchema,
    records: BTreeMap<u32, ImageRecord>,
    next_key: u32,
}

/// Image store held entirely in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryImageStore {
    version: u32,
    collections: BTreeMap<&'static str, MemoryCollection>,
    rejected: Option<Collection>,
}

impl MemoryImageStore {
    /// A database that has never been opened (version 0, no collections).
    pub fn new() -> Self {
        Self::default()
    }

    /// Open at `version`, running the upgrade step when the stored version is
    /// older. Returns the collections the upgrade created.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Request`] when asked to open below the stored
    /// version, or when a creation fails. A failed upgrade changes nothing.
    pub fn open(&mut self, version: u32) -> Result<Vec<CollectionSchema>, StoreError> {
        if version < self.version {
            return Err(StoreError::Request(format!(
                "requested version {version} is older than stored version {}",
                self.version
            )));
        }
        if version == self.version {
            return Ok(Vec::new());
        }

        let existing: Vec<&str> = self.collections.keys().copied().collect();
        let mut staged = self.collections.clone();
        let rejected = self.rejected;
        let created = schema::apply_pending(&existing, version, |schema| {
            if rejected == Some(schema.collection) {
                return Err(StoreError::Request(format!("cannot create {}", schema.name())));
            }
            log::debug!("creating collection {}", schema.name());
            staged.insert(
                schema.name(),
                MemoryCollection {
                    schema: *schema,
                    records: BTreeMap::new(),
                    next_key: 1,
                },
            );
            Ok(())
        })
        .inspect_err(|err| log::warn!("upgrade to v{version} aborted: {err}"))?;

        self.collections = staged;
        self.version = version;
        Ok(created)
    }

    /// Make creating `collection` fail during upgrades (`None` clears it).
    pub fn reject_create(&mut self, collection: Option<Collection>) {
        self.rejected = collection;
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Names of the collections currently present, sorted.
    pub fn collection_names(&self) -> Vec<&'static str> {
        self.collections.keys().copied().collect()
    }

    /// Key policy of an existing collection.
    pub fn key_policy(&self, collection: Collection) -> Option<KeyPolicy> {
        self.collections
            .get(collection.store_name())
            .map(|c| c.schema.key_policy)
    }

    /// Insert `data` under the next auto-assigned key.
    ///
    /// # Errors
    ///
    /// Fails if the collection is missing or requires explicit keys.
    pub fn add(&mut self, collection: Collection, data: impl Into<String>) -> Result<u32, StoreError> {
        let entry = self.collection_mut(collection)?;
        if entry.schema.key_policy != KeyPolicy::AutoIncrement {
            return Err(StoreError::Request(format!(
                "collection {} requires an explicit key",
                collection.store_name()
            )));
        }
        let id = entry.next_key;
        entry.next_key += 1;
        entry.records.insert(id, ImageRecord::new(id, data));
        Ok(id)
    }

    /// Insert or replace `record` under its own key.
    ///
    /// # Errors
    ///
    /// Fails if the collection is missing.
    pub fn put(&mut self, collection: Collection, record: ImageRecord) -> Result<(), StoreError> {
        let entry = self.collection_mut(collection)?;
        if entry.schema.key_policy == KeyPolicy::AutoIncrement && record.id >= entry.next_key {
            entry.next_key = record.id + 1;
        }
        entry.records.insert(record.id, record);
        Ok(())
    }

    fn collection(&self, collection: Collection) -> Result<&MemoryCollection, StoreError> {
        self.collections
            .get(collection.store_name())
            .ok_or(StoreError::MissingCollection(collection.store_name()))
    }

    fn collection_mut(&mut self, collection: Collection) -> Result<&mut MemoryCollection, StoreError> {
        self.collections
            .get_mut(collection.store_name())
            .ok_or(StoreError::MissingCollection(collection.store_name()))
    }
}

impl ImageStore for MemoryImageStore {
    async fn get(&self, collection: Collection, id: u32) -> Result<Option<ImageRecord>, StoreError> {
        Ok(self.collection(collection)?.records.get(&id).cloned())
    }

    async fn get_all(&self, collection: Collection) -> Result<Vec<ImageRecord>, StoreError> {
        Ok(self.collection(collection)?.records.values().cloned().collect())
    }
}
