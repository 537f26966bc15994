//! Generic CRUD over a JSON array document.

use std::fmt::Display;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use super::JsonFile;
use crate::errors::AppError;

/// A record stored in a [`Collection`], identified by a unique id.
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: PartialEq + Display + ?Sized;

    fn id(&self) -> &Self::Id;
}

/// An array of records persisted as one JSON file.
pub struct Collection<R> {
    file: JsonFile<Vec<R>>,
    label: &'static str,
}

impl<R: Record> Collection<R> {
    /// `label` names the record type in not-found and conflict messages.
    pub fn new(path: impl Into<PathBuf>, seed: fn() -> Vec<R>, label: &'static str) -> Self {
        Self {
            file: JsonFile::new(path, seed),
            label,
        }
    }

    pub fn file(&self) -> &JsonFile<Vec<R>> {
        &self.file
    }

    fn not_found(&self, id: &R::Id) -> AppError {
        AppError::NotFound(format!("{} {} not found", self.label, id))
    }

    /// All records in stored order.
    pub async fn list(&self) -> Result<Vec<R>, AppError> {
        self.file.read().await
    }

    /// Linear scan for a record by id.
    pub async fn get(&self, id: &R::Id) -> Result<Option<R>, AppError> {
        Ok(self.list().await?.into_iter().find(|r| r.id() == id))
    }

    /// Append a record built from the current contents.
    ///
    /// `build` runs under the file lock, so ids derived from the existing
    /// records cannot be handed out twice.
    pub async fn create<F>(&self, build: F) -> Result<R, AppError>
    where
        F: FnOnce(&[R]) -> Result<R, AppError>,
    {
        let label = self.label;
        self.file
            .update(|items| {
                let record = build(items)?;
                if items.iter().any(|r| r.id() == record.id()) {
                    return Err(AppError::Conflict(format!(
                        "{} {} already exists",
                        label,
                        record.id()
                    )));
                }
                items.push(record.clone());
                Ok(record)
            })
            .await
    }

    /// Replace the record with the same id, or append it. Returns `true`
    /// when the record was inserted.
    pub async fn upsert(&self, record: R) -> Result<bool, AppError> {
        self.file
            .update(|items| match items.iter().position(|r| r.id() == record.id()) {
                Some(index) => {
                    items[index] = record;
                    Ok(false)
                }
                None => {
                    items.push(record);
                    Ok(true)
                }
            })
            .await
    }

    /// Replace a record with the result of `f` applied to it.
    pub async fn modify<F>(&self, id: &R::Id, f: F) -> Result<R, AppError>
    where
        F: FnOnce(&R) -> Result<R, AppError>,
    {
        let not_found = self.not_found(id);
        self.file
            .update(|items| {
                let slot = items
                    .iter_mut()
                    .find(|r| r.id() == id)
                    .ok_or(not_found)?;
                let updated = f(slot)?;
                *slot = updated.clone();
                Ok(updated)
            })
            .await
    }

    /// Remove a record. Returns whether the collection shrank; the file is
    /// only rewritten when it did.
    pub async fn remove(&self, id: &R::Id) -> Result<bool, AppError> {
        let guard = self.file.lock().await;
        let mut items = guard.load().await?;
        let before = items.len();
        items.retain(|r| r.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        guard.store(&items).await?;
        Ok(true)
    }
}

/// One more than the largest id, or 1 when there are none.
pub fn next_numeric_id(ids: impl IntoIterator<Item = u64>) -> Result<u64, AppError> {
    match ids.into_iter().max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| AppError::Storage(format!("No id left after {}", max))),
    }
}

/// `<prefix>-<millis>`, moved forward one millisecond at a time until it
/// is not taken.
pub fn timestamp_id(prefix: &str, now_millis: i64, taken: impl Fn(&str) -> bool) -> String {
    let mut stamp = now_millis;
    loop {
        let id = format!("{}-{}", prefix, stamp);
        if !taken(&id) {
            return id;
        }
        stamp += 1;
    }
}
