//! Favorites management
//!
//! Named lists of favorite artists, kept in one key-value slot.
//!
//! Every operation reads the slot, works on the decoded collection and, if
//! anything changed, writes it straight back. Nothing is cached between
//! calls, so two stores sharing one slot always see each other's writes but
//! can lose updates when they interleave (last writer wins).

use crate::config::favorites::STORAGE_KEY;
use crate::data::types::{ArtistId, FavoriteList, FavoritesData, generate_id};
use crate::storage::KeyValueStore;
use tracing::{debug, warn};

/// Manages favorite lists on top of a key-value store
///
/// Nothing here returns an error: unreadable data is treated as an empty
/// collection and failed writes are logged and dropped. When the backend
/// read itself fails, mutations are skipped so the stored record survives.
pub struct FavoritesStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Create a store using the default slot key
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Create a store using a specific slot key
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Slot key this store reads and writes
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying storage backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Mutable access to the underlying storage backend
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Consume the store, returning the backend
    pub fn into_inner(self) -> S {
        self.backend
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Read and decode the slot
    ///
    /// Absent or corrupted data is an empty collection. `None` means the
    /// backend read failed, so the stored record must not be overwritten.
    fn load(&self) -> Option<FavoritesData> {
        let raw = match self.backend.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read favorites");
                return None;
            }
        };

        match FavoritesData::decode(raw.as_deref()) {
            Some(data) => Some(data),
            None => {
                if raw.is_some_and(|r| !r.trim().is_empty()) {
                    warn!(key = %self.key, "stored favorites are corrupted, using empty collection");
                }
                Some(FavoritesData::default())
            }
        }
    }

    /// Current collection for read-only queries
    fn snapshot(&self) -> FavoritesData {
        self.load().unwrap_or_default()
    }

    fn save(&mut self, data: &FavoritesData) {
        let encoded = match data.encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to encode favorites");
                return;
            }
        };

        if let Err(e) = self.backend.set(&self.key, &encoded) {
            warn!(key = %self.key, error = %e, "failed to write favorites");
        }
    }

    // =========================================================================
    // Core operations
    // =========================================================================

    /// Get all lists in creation order
    pub fn get_favorite_lists(&self) -> Vec<FavoriteList> {
        self.snapshot().lists
    }

    /// Create a new empty list and append it
    pub fn create_list(&mut self, name: &str) -> FavoriteList {
        let Some(mut data) = self.load() else {
            // Handed back unsaved
            return FavoriteList::new(generate_id(), name);
        };
        let list = FavoriteList::new(data.fresh_id(), name);
        data.lists.push(list.clone());
        self.save(&data);
        debug!(list_id = %list.id, "created favorites list");
        list
    }

    /// Add an artist to a list
    ///
    /// Unknown lists and existing members are ignored.
    pub fn add_to_list(&mut self, list_id: &str, artist_id: ArtistId) {
        let Some(mut data) = self.load() else {
            return;
        };
        let Some(list) = data.find_mut(list_id) else {
            debug!(list_id, "add to unknown favorites list ignored");
            return;
        };

        if list.insert(artist_id) {
            self.save(&data);
        }
    }

    /// Remove an artist from a list
    ///
    /// Unknown lists and non-members are ignored.
    pub fn remove_from_list(&mut self, list_id: &str, artist_id: ArtistId) {
        let Some(mut data) = self.load() else {
            return;
        };
        let Some(list) = data.find_mut(list_id) else {
            debug!(list_id, "remove from unknown favorites list ignored");
            return;
        };

        if list.remove(artist_id) {
            self.save(&data);
        }
    }

    /// Check if any list contains the artist
    pub fn is_in_any_list(&self, artist_id: ArtistId) -> bool {
        self.snapshot().contains_artist(artist_id)
    }

    /// Flip the artist's favorited status
    ///
    /// A favorited artist is removed from every list. Otherwise it is added
    /// to the first list, or to a new list named `display_name` when there
    /// are no lists yet. Returns the new status, or false without touching
    /// storage when the current state can't be read.
    pub fn toggle_favorite(&mut self, artist_id: ArtistId, display_name: &str) -> bool {
        let Some(mut data) = self.load() else {
            return false;
        };

        if data.contains_artist(artist_id) {
            for list in &mut data.lists {
                list.remove(artist_id);
            }
            self.save(&data);
            return false;
        }

        match data.lists.first_mut() {
            Some(first) => {
                first.insert(artist_id);
            }
            None => {
                let mut list = FavoriteList::new(data.fresh_id(), display_name);
                list.insert(artist_id);
                data.lists.push(list);
            }
        }
        self.save(&data);
        true
    }

    // =========================================================================
    // List management
    // =========================================================================

    /// Get a list by ID
    pub fn get_list(&self, list_id: &str) -> Option<FavoriteList> {
        self.snapshot().find(list_id).cloned()
    }

    /// Rename a list
    ///
    /// Returns false if the list doesn't exist.
    pub fn rename_list(&mut self, list_id: &str, name: &str) -> bool {
        let Some(mut data) = self.load() else {
            return false;
        };
        let Some(list) = data.find_mut(list_id) else {
            return false;
        };

        if list.name != name {
            list.name = name.to_string();
            self.save(&data);
        }
        true
    }

    /// Delete a list, returning it
    pub fn delete_list(&mut self, list_id: &str) -> Option<FavoriteList> {
        let mut data = self.load()?;
        let index = data.lists.iter().position(|l| l.id == list_id)?;
        let removed = data.lists.remove(index);
        self.save(&data);
        debug!(list_id, "deleted favorites list");
        Some(removed)
    }

    /// Get every list containing the artist, in stored order
    pub fn lists_containing(&self, artist_id: ArtistId) -> Vec<FavoriteList> {
        self.snapshot()
            .lists
            .into_iter()
            .filter(|l| l.contains(artist_id))
            .collect()
    }

    /// Get every favorited artist once, in first-seen order
    pub fn favorite_artist_ids(&self) -> Vec<ArtistId> {
        let mut ids = Vec::new();
        for list in self.snapshot().lists {
            for id in list.artist_ids {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Drop the whole collection
    pub fn clear(&mut self) {
        if let Err(e) = self.backend.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to clear favorites");
        }
    }
}
