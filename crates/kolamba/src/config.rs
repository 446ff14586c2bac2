//! Configuration constants for kolamba

/// Application metadata
pub mod app {
    /// Application name (used for the data directory, etc.)
    pub const NAME: &str = "kolamba";
}

/// Favorites-related configuration
pub mod favorites {
    /// Storage slot holding the favorites collection
    pub const STORAGE_KEY: &str = "kolamba_favorites";

    /// Length of generated list identifiers
    pub const LIST_ID_LEN: usize = 9;

    /// Characters used for generated list identifiers (base36)
    pub const LIST_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
}

/// File storage configuration
pub mod storage {
    /// Extension appended to a key to form its file name
    pub const FILE_EXTENSION: &str = "json";

    /// Environment variable overriding the data directory
    pub const DATA_DIR_ENV: &str = "KOLAMBA_DATA_DIR";
}
