//! IndexedDB-backed image store (browser only).
//!
//! ARCHITECTURE
//! ============
//! `IdbRequest` callbacks are bridged into futures with a oneshot channel so
//! the page controller can `await` open and read requests. Upgrade handling
//! delegates to [`schema::apply_pending`] so only missing collections are
//! created. A failed creation aborts the version change, which fails the open
//! and leaves the stored version untouched for the next page load to retry.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    IdbDatabase, IdbObjectStore, IdbObjectStoreParameters, IdbOpenDbRequest, IdbRequest, IdbTransactionMode,
    IdbVersionChangeEvent,
};

use super::schema;
use super::{Collection, ImageRecord, ImageStore, StoreError};

/// Open handle to the site's IndexedDB database.
pub struct IdbImageStore {
    db: IdbDatabase,
}

impl IdbImageStore {
    /// Open (or create) database `name` at `version`, creating any declared
    /// collections that are missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the browser has no IndexedDB or
    /// denies access, and [`StoreError::Request`] if the open request fails.
    pub async fn open(name: &str, version: u32) -> Result<Self, StoreError> {
        let factory = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window object".to_owned()))?
            .indexed_db()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("IndexedDB not supported".to_owned()))?;

        let request = factory
            .open_with_u32(name, version)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?;

        let on_upgrade = Closure::<dyn FnMut(IdbVersionChangeEvent)>::new(move |event: IdbVersionChangeEvent| {
            if let Err(err) = apply_upgrade(&event, version) {
                log::error!("image store upgrade failed, aborting: {err}");
                abort_upgrade(&event);
            }
        });
        request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));

        let result = await_request(&request).await;
        request.set_onupgradeneeded(None);
        drop(on_upgrade);

        let db: IdbDatabase = result?.unchecked_into();
        log::info!("opened image store {name} v{version}");
        Ok(Self { db })
    }

    fn object_store(&self, collection: Collection) -> Result<IdbObjectStore, StoreError> {
        let name = collection.store_name();
        if !self.db.object_store_names().contains(name) {
            return Err(StoreError::MissingCollection(name));
        }
        let transaction = self
            .db
            .transaction_with_str_and_mode(name, IdbTransactionMode::Readonly)
            .map_err(js_err)?;
        transaction.object_store(name).map_err(js_err)
    }
}

impl ImageStore for IdbImageStore {
    async fn get(&self, collection: Collection, id: u32) -> Result<Option<ImageRecord>, StoreError> {
        let store = self.object_store(collection)?;
        let request = store.get(&JsValue::from(id)).map_err(js_err)?;
        let value = await_request(&request).await?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        decode_record(&value).map(Some)
    }

    async fn get_all(&self, collection: Collection) -> Result<Vec<ImageRecord>, StoreError> {
        let store = self.object_store(collection)?;
        let request = store.get_all().map_err(js_err)?;
        let value = await_request(&request).await?;
        let records = js_sys::Array::from(&value)
            .iter()
            .filter_map(|item| match decode_record(&item) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("skipping record in {}: {err}", collection.store_name());
                    None
                }
            })
            .collect();
        Ok(records)
    }
}

fn apply_upgrade(event: &IdbVersionChangeEvent, version: u32) -> Result<(), StoreError> {
    let request: IdbOpenDbRequest = event
        .target()
        .ok_or_else(|| StoreError::Request("upgrade event has no target".to_owned()))?
        .unchecked_into();
    let db: IdbDatabase = request.result().map_err(js_err)?.unchecked_into();

    let names = db.object_store_names();
    let existing: Vec<String> = (0..names.length()).filter_map(|i| names.item(i)).collect();
    log::info!("upgrading image store from v{} to v{version}", event.old_version());

    schema::apply_pending(&existing, version, |pending| {
        let params = IdbObjectStoreParameters::new();
        params.set_key_path(&JsValue::from_str(pending.key_path));
        params.set_auto_increment(pending.auto_increment());
        db.create_object_store_with_optional_parameters(pending.name(), &params)
            .map_err(js_err)?;
        log::debug!("created collection {}", pending.name());
        Ok(())
    })?;
    Ok(())
}

/// Abort the version-change transaction so nothing from the upgrade commits.
fn abort_upgrade(event: &IdbVersionChangeEvent) {
    let transaction = event
        .target()
        .map(|target| target.unchecked_into::<IdbOpenDbRequest>())
        .and_then(|request| request.transaction());
    match transaction {
        Some(transaction) => {
            if let Err(err) = transaction.abort() {
                log::error!("could not abort image store upgrade: {err:?}");
            }
        }
        None => log::error!("upgrade event has no transaction to abort"),
    }
}

fn decode_record(value: &JsValue) -> Result<ImageRecord, StoreError> {
    let json: String = js_sys::JSON::stringify(value).map_err(js_err)?.into();
    Ok(serde_json::from_str(&json)?)
}

/// Resolve once `request` fires `success` or `error`, yielding its result.
async fn await_request(request: &IdbRequest) -> Result<JsValue, StoreError> {
    let (sender, receiver) = oneshot::channel::<Result<(), String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let success_sender = Rc::clone(&sender);
    let on_success = Closure::once(move |_event: web_sys::Event| settle(&success_sender, Ok(())));
    let error_sender = Rc::clone(&sender);
    let on_error = Closure::once(move |_event: web_sys::Event| {
        settle(&error_sender, Err("IndexedDB request failed".to_owned()));
    });

    request.set_onsuccess(Some(on_success.as_ref().unchecked_ref()));
    request.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let outcome = receiver.await;
    request.set_onsuccess(None);
    request.set_onerror(None);

    outcome
        .map_err(|_| StoreError::Request("request callback dropped".to_owned()))?
        .map_err(StoreError::Request)?;
    request.result().map_err(js_err)
}

type Settle = Rc<RefCell<Option<oneshot::Sender<Result<(), String>>>>>;

fn settle(sender: &Settle, outcome: Result<(), String>) {
    if let Some(sender) = sender.borrow_mut().take() {
        if sender.send(outcome).is_err() {
            log::debug!("IndexedDB request settled after its waiter went away");
        }
    }
}

fn js_err(err: JsValue) -> StoreError {
    StoreError::Request(format!("{err:?}"))
}
