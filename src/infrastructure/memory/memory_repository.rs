//! Mutex-guarded in-memory implementation of `ItemRepository`.
//!
//! The id counter and the map share one lock, so id assignment and insertion
//! happen as a single step even when requests are served concurrently.

use chrono::{Local, NaiveDateTime, Timelike};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{Item, ItemChanges, ItemRepository, NewItem, StoreError};

#[derive(Default)]
struct Inner {
    items: BTreeMap<u64, Item>,
    last_id: u64,
}

/// In-memory item store keyed by id.
#[derive(Default)]
pub struct InMemoryRepository {
    // ---
    inner: Mutex<Inner>,
}

impl InMemoryRepository {
    // ---
    pub fn new() -> Self {
        // ---
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Every mutation is a single infallible step, so a panic elsewhere
        // cannot leave the map half-written.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

fn require_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::InvalidInput("name must not be empty".to_string()));
    }
    Ok(())
}

impl ItemRepository for InMemoryRepository {
    // ---
    fn list(&self) -> Vec<Item> {
        // ---
        self.lock().items.values().cloned().collect()
    }

    fn get(&self, id: u64) -> Result<Item, StoreError> {
        // ---
        self.lock()
            .items
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&self, new_item: NewItem) -> Result<Item, StoreError> {
        // ---
        require_name(&new_item.name)?;

        let mut inner = self.lock();
        inner.last_id += 1;

        let item = Item {
            id: inner.last_id,
            name: new_item.name,
            description: new_item.description.unwrap_or_default(),
            created_at: now(),
        };
        inner.items.insert(item.id, item.clone());

        Ok(item)
    }

    fn update(&self, id: u64, changes: ItemChanges) -> Result<Item, StoreError> {
        // ---
        let mut inner = self.lock();
        let item = inner.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if let Some(name) = &changes.name {
            require_name(name)?;
        }
        if let Some(name) = changes.name {
            item.name = name;
        }
        if let Some(description) = changes.description {
            item.description = description;
        }

        Ok(item.clone())
    }

    fn delete(&self, id: u64) -> Result<(), StoreError> {
        // ---
        self.lock()
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
