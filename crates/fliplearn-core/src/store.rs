//! Set Store: the durable sequence of word sets.
//!
//! The whole sequence lives as one JSON array under a single key. Every
//! mutation is a full read-modify-write with no locking; concurrent writers
//! can lose updates.

use fliplearn_types::WordSet;

use crate::error::CoreError;
use crate::storage::{KeyValueStore, StorageError};

pub struct SetStore<S> {
    backend: S,
    key: String,
    sets: Vec<WordSet>,
}

impl<S: KeyValueStore> SetStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            sets: Vec::new(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Sets as last loaded or written
    pub fn sets(&self) -> &[WordSet] {
        &self.sets
    }

    pub fn get(&self, index: usize) -> Option<&WordSet> {
        self.sets.get(index)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Read the persisted document. A missing key is an empty store.
    async fn read_document(&self) -> Result<Vec<WordSet>, StorageError> {
        let Some(raw) = self.backend.get_item(&self.key).await? else {
            return Ok(Vec::new());
        };

        if raw.trim().is_empty() || raw.trim() == "null" {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: self.key.clone(),
            source,
        })
    }

    async fn write_document(&self, sets: &[WordSet]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(sets).map_err(StorageError::Encode)?;
        self.backend.set_item(&self.key, &raw).await
    }

    /// Load every stored set. A corrupt document is logged and read as empty.
    pub async fn load_all(&mut self) -> Result<&[WordSet], CoreError> {
        let sets = match self.read_document().await {
            Ok(sets) => sets,
            Err(e @ StorageError::Corrupt { .. }) => {
                tracing::warn!("Ignoring unreadable set document: {}", e);
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Failed to load sets: {}", e);
                return Err(e.into());
            }
        };

        tracing::debug!("Loaded {} sets", sets.len());
        self.sets = sets;
        Ok(&self.sets)
    }

    /// Replace the set named `match_name` in place, or append `set`.
    ///
    /// Fails with [`CoreError::NameTaken`] when `set.name` belongs to a
    /// different stored set. Nothing is written on failure.
    pub async fn save_or_update(
        &mut self,
        set: WordSet,
        match_name: Option<&str>,
    ) -> Result<(), CoreError> {
        if set.name.trim().is_empty() {
            return Err(CoreError::EmptyInput { field: "set name" });
        }

        let mut updated = self.read_document().await?;

        let target = match_name.and_then(|name| updated.iter().position(|s| s.name == name));
        let clash = updated
            .iter()
            .enumerate()
            .any(|(i, s)| s.name == set.name && Some(i) != target);
        if clash {
            return Err(CoreError::NameTaken(set.name));
        }

        let name = set.name.clone();
        match target {
            Some(index) => updated[index] = set,
            None => updated.push(set),
        }

        self.write_document(&updated).await?;
        self.sets = updated;

        match target {
            Some(index) => tracing::info!("Updated set '{}' at {}", name, index),
            None => tracing::info!("Saved new set '{}'", name),
        }
        Ok(())
    }

    /// Remove the set at `index` of the in-memory sequence and persist.
    /// In-memory state is untouched if the write fails.
    pub async fn delete_at(&mut self, index: usize) -> Result<WordSet, CoreError> {
        if index >= self.sets.len() {
            return Err(CoreError::IndexOutOfBounds {
                index,
                len: self.sets.len(),
            });
        }

        let mut updated = self.sets.clone();
        let removed = updated.remove(index);

        if let Err(e) = self.write_document(&updated).await {
            tracing::error!("Failed to delete set '{}': {}", removed.name, e);
            return Err(e.into());
        }

        self.sets = updated;
        tracing::info!("Deleted set '{}'", removed.name);
        Ok(removed)
    }
}
