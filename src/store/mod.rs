//! Browser-local image storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three independent collections (logo, gallery, home) live in one local
//! database that an external admin dashboard populates. The site only reads:
//! a single-key lookup for the logo and whole-collection reads for the rest.
//!
//! `schema` owns the versioned collection layout and `idb` is the IndexedDB
//! backend used in the browser. Tests use `memory`, an in-process store with
//! the same key semantics.


#[cfg(feature = "csr")]
pub mod idb;
#[cfg(test)]
pub mod memory;
pub mod schema;

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Key of the single logo record.
pub const LOGO_KEY: u32 = 1;

/// One stored image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique key within the owning collection.
    pub id: u32,
    /// Image payload, usually a data URI. Never validated.
    #[serde(default)]
    pub data: String,
}

impl ImageRecord {
    pub fn new(id: u32, data: impl Into<String>) -> Self {
        Self { id, data: data.into() }
    }

    /// Whether the payload is usable as an image source.
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}

/// The named partitions of the image store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Single-slot site logo.
    Logo,
    /// Photos shown in the gallery grid.
    Gallery,
    /// Backgrounds cycled by the hero slideshow.
    Home,
}

impl Collection {
    /// Object store name shared with the admin dashboard.
    pub fn store_name(self) -> &'static str {
        match self {
            Self::Logo => "websiteLogo",
            Self::Gallery => "galleryImages",
            Self::Home => "homeImages",
        }
    }
}

/// Error returned by [`ImageStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The browser refused or lacks local persistent storage.
    #[error("image store unavailable: {0}")]
    Unavailable(String),
    /// A transaction or request against an open store failed.
    #[error("image store request failed: {0}")]
    Request(String),
    /// A read targeted a collection the schema never created.
    #[error("collection {0} does not exist")]
    MissingCollection(&'static str),
    /// A stored value did not have the `{ id, data }` shape.
    #[error("malformed image record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to an opened image store.
///
/// Every call opens its own read transaction; nothing is cached between calls.
pub trait ImageStore {
    /// Fetch one record by key.
    fn get(&self, collection: Collection, id: u32) -> impl Future<Output = Result<Option<ImageRecord>, StoreError>>;

    /// Fetch every record of a collection in key order.
    fn get_all(&self, collection: Collection) -> impl Future<Output = Result<Vec<ImageRecord>, StoreError>>;
}
