//! Kolamba favorites
//!
//! Named lists of favorite artists, persisted write-through into a single
//! key-value slot.
//!
//! ## Quick start
//!
//! ```
//! use kolamba::data::FavoritesStore;
//! use kolamba::storage::MemoryStore;
//!
//! let mut store = FavoritesStore::new(MemoryStore::new());
//! assert!(store.toggle_favorite(42, "Klezmer Nights"));
//! assert!(store.is_in_any_list(42));
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod storage;
