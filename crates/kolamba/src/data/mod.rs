//! Favorites data
//!
//! The persisted collection types and the store that manages them.

pub mod favorites;
pub mod types;

// Re-export common types
pub use favorites::FavoritesStore;
pub use types::{ArtistId, FavoriteList, FavoritesData, generate_id};
