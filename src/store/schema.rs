//! Versioned schema for the image store.
//!
//! DESIGN
//! ======
//! Each [`Migration`] declares the collections introduced at its version. An
//! upgrade from `old` to `new` creates every collection declared at or below
//! `new` that does not already exist, so reopening a current store is a no-op
//! and a partially created store is repaired rather than rejected.
//!
//! A failed creation must abort the whole upgrade. Committing it would stamp
//! the new version over a partial layout and no later open would repair it.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use super::Collection;

/// Key path shared by every collection.
pub const KEY_PATH: &str = "id";

/// How a collection assigns record keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPolicy {
    /// The writer supplies the key (single-slot logo uses `1`).
    Explicit,
    /// The store assigns increasing keys in insertion order.
    AutoIncrement,
}

/// Declared layout of one collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionSchema {
    pub collection: Collection,
    pub key_path: &'static str,
    pub key_policy: KeyPolicy,
}

impl CollectionSchema {
    pub fn name(&self) -> &'static str {
        self.collection.store_name()
    }

    pub fn auto_increment(&self) -> bool {
        self.key_policy == KeyPolicy::AutoIncrement
    }
}

/// Collections introduced at a schema version.
#[derive(Clone, Copy, Debug)]
pub struct Migration {
    pub version: u32,
    pub creates: &'static [CollectionSchema],
}

/// Every migration, in ascending version order.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    creates: &[
        CollectionSchema {
            collection: Collection::Gallery,
            key_path: KEY_PATH,
            key_policy: KeyPolicy::AutoIncrement,
        },
        CollectionSchema {
            collection: Collection::Home,
            key_path: KEY_PATH,
            key_policy: KeyPolicy::AutoIncrement,
        },
        CollectionSchema {
            collection: Collection::Logo,
            key_path: KEY_PATH,
            key_policy: KeyPolicy::Explicit,
        },
    ],
}];

/// All collections that should exist at `version`.
pub fn declared(version: u32) -> Vec<CollectionSchema> {
    MIGRATIONS
        .iter()
        .filter(|m| m.version <= version)
        .flat_map(|m| m.creates.iter().copied())
        .collect()
}

/// Collections that an upgrade to `new_version` must create, given the names
/// of collections already present.
pub fn pending<S: AsRef<str>>(existing: &[S], new_version: u32) -> Vec<CollectionSchema> {
    declared(new_version)
        .into_iter()
        .filter(|schema| !existing.iter().any(|name| name.as_ref() == schema.name()))
        .collect()
}

/// Run `create` for each collection an upgrade to `new_version` is missing,
/// stopping at the first failure. On `Err` the caller aborts the upgrade.
///
/// # Errors
///
/// Returns the first error `create` reports.
pub fn apply_pending<S, E, F>(existing: &[S], new_version: u32, mut create: F) -> Result<Vec<CollectionSchema>, E>
where
    S: AsRef<str>,
    F: FnMut(&CollectionSchema) -> Result<(), E>,
{
    let created = pending(existing, new_version);
    for schema in &created {
        create(schema)?;
    }
    Ok(created)
}
