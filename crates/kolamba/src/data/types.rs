//! Common data types for favorites
//!
//! The persisted collection shape and identifier generation.

use crate::config::favorites::{LIST_ID_ALPHABET, LIST_ID_LEN};
use crate::error::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Artist identifier as issued by the marketplace backend
pub type ArtistId = i64;

// =============================================================================
// Helper functions
// =============================================================================

/// Generate a short random list ID (lowercase base36)
///
/// Not cryptographically meaningful; IDs only need to be unique within one
/// stored collection.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..LIST_ID_LEN)
        .map(|_| LIST_ID_ALPHABET[rng.random_range(0..LIST_ID_ALPHABET.len())] as char)
        .collect()
}

// =============================================================================
// FavoriteList
// =============================================================================

/// A named list of favorite artists
///
/// `artist_ids` behaves as an ordered set: insertion order is kept for
/// display, duplicates are never added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteList {
    /// Opaque list ID
    pub id: String,
    /// Display name (not unique)
    pub name: String,
    /// Member artists in insertion order
    pub artist_ids: Vec<ArtistId>,
}

impl FavoriteList {
    /// Create an empty list with the given ID
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist_ids: Vec::new(),
        }
    }

    /// Check if the artist is a member
    pub fn contains(&self, artist_id: ArtistId) -> bool {
        self.artist_ids.contains(&artist_id)
    }

    /// Append the artist unless already present
    ///
    /// Returns true if the list changed.
    pub fn insert(&mut self, artist_id: ArtistId) -> bool {
        if self.contains(artist_id) {
            return false;
        }
        self.artist_ids.push(artist_id);
        true
    }

    /// Remove the artist, keeping the order of the others
    ///
    /// Returns true if the list changed.
    pub fn remove(&mut self, artist_id: ArtistId) -> bool {
        let before = self.artist_ids.len();
        self.artist_ids.retain(|&id| id != artist_id);
        self.artist_ids.len() != before
    }

    /// Number of member artists
    pub fn len(&self) -> usize {
        self.artist_ids.len()
    }

    /// Check if the list has no members
    pub fn is_empty(&self) -> bool {
        self.artist_ids.is_empty()
    }
}

// =============================================================================
// FavoritesData - persisted root
// =============================================================================

/// The whole favorites collection as stored in one slot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoritesData {
    /// Lists in creation order
    pub lists: Vec<FavoriteList>,
}

impl FavoritesData {
    /// Decode a stored value
    ///
    /// Returns `None` when the slot is absent, blank, or doesn't parse as the
    /// expected shape.
    pub fn decode(raw: Option<&str>) -> Option<Self> {
        let raw = raw?;
        if raw.trim().is_empty() {
            return None;
        }
        serde_json::from_str(raw).ok()
    }

    /// Encode for storage
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Generate a list ID not used by any list in this collection
    pub fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.find(&id).is_none() {
                return id;
            }
        }
    }

    /// Find a list by ID
    pub fn find(&self, list_id: &str) -> Option<&FavoriteList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    /// Find a mutable list by ID
    pub fn find_mut(&mut self, list_id: &str) -> Option<&mut FavoriteList> {
        self.lists.iter_mut().find(|l| l.id == list_id)
    }

    /// Check if any list contains the artist
    pub fn contains_artist(&self, artist_id: ArtistId) -> bool {
        self.lists.iter().any(|l| l.contains(artist_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), LIST_ID_LEN);
        assert!(id.bytes().all(|b| LIST_ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generate_id_varies() {
        let ids: std::collections::HashSet<_> = (0..100).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_list_insert_is_idempotent() {
        let mut list = FavoriteList::new("a", "Favs");
        assert!(list.insert(42));
        assert!(!list.insert(42));
        assert_eq!(list.artist_ids, vec![42]);
    }

    #[test]
    fn test_list_remove_keeps_order() {
        let mut list = FavoriteList::new("a", "Favs");
        list.insert(1);
        list.insert(2);
        list.insert(3);

        assert!(list.remove(2));
        assert!(!list.remove(99));
        assert_eq!(list.artist_ids, vec![1, 3]);
    }

    #[test]
    fn test_decode_browser_record() {
        let raw = r#"{"lists":[{"id":"abc","name":"My List","artistIds":[1,2]}]}"#;
        let data = FavoritesData::decode(Some(raw)).unwrap();

        assert_eq!(data.lists.len(), 1);
        assert_eq!(data.lists[0].name, "My List");
        assert_eq!(data.lists[0].artist_ids, vec![1, 2]);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let raw = r#"{"lists":[{"id":"a","name":"n","artistIds":[],"color":"red"}],"v":2}"#;
        assert!(FavoritesData::decode(Some(raw)).is_some());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(FavoritesData::decode(None), None);
        assert_eq!(FavoritesData::decode(Some("")), None);
        assert_eq!(FavoritesData::decode(Some("not-json")), None);
        assert_eq!(FavoritesData::decode(Some("null")), None);
        assert_eq!(FavoritesData::decode(Some("[]")), None);
        assert_eq!(FavoritesData::decode(Some(r#"{"lists":{}}"#)), None);
        assert_eq!(
            FavoritesData::decode(Some(r#"{"lists":[{"id":"a","name":"n","artistIds":["x"]}]}"#)),
            None
        );
    }

    #[test]
    fn test_encode_uses_camel_case() {
        let mut data = FavoritesData::default();
        let mut list = FavoriteList::new("abc", "Favs");
        list.insert(7);
        data.lists.push(list);

        let encoded = data.encode().unwrap();
        assert_eq!(encoded, r#"{"lists":[{"id":"abc","name":"Favs","artistIds":[7]}]}"#);
        assert_eq!(FavoritesData::decode(Some(&encoded)), Some(data));
    }

    #[test]
    fn test_fresh_id_unused() {
        let mut data = FavoritesData::default();
        for _ in 0..20 {
            let id = data.fresh_id();
            assert!(data.find(&id).is_none());
            data.lists.push(FavoriteList::new(id, "x"));
        }
    }
}
