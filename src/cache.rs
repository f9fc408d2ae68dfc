//! Cache storage module
//!
//! This module provides persistent caching functionality using the system's
//! standard cache directory. Data is serialized to JSON format for storage.
//! Entries may carry a time-to-live after which they read as absent.

use serde::{Deserialize, Serialize};
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    /// Failed to determine cache directory location
    #[error("Failed to determine cache directory location")]
    CacheDirectoryNotFound,

    /// Failed to create or access cache directory
    #[error("Failed to create cache directory at {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read cached data
    #[error("Failed to read cache file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write cached data
    #[error("Failed to write cache file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to deserialize cached data
    #[error("Failed to deserialize cache file {path}: {source}")]
    DeserializationFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to serialize data for caching
    #[error("Failed to serialize data: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// A generic cache storage for serializable data
///
/// This structure provides persistent caching of data that implements
/// `Serialize` and `Deserialize`. Data is stored as JSON files in the
/// system's standard cache directory. An optional time-to-live controls
/// how long stored entries stay valid; expired entries behave as if they
/// were never stored.
pub struct CacheStorage<T> {
    /// The directory where cached data is stored
    cache_dir: PathBuf,
    /// Maximum age of entries; None means entries never expire
    ttl: Option<Duration>,
    /// Phantom data for the generic type
    _phantom: PhantomData<T>,
}

impl<T> CacheStorage<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    /// Opens or creates a cache storage with the given name
    ///
    /// The cache will be stored in the system's standard cache directory
    /// under a subdirectory named after the application and the provided
    /// name. The name will be sanitized (lowercased, non-alphanumeric
    /// characters replaced with underscores).
    ///
    /// # Arguments
    ///
    /// * `name` - The name for this cache storage
    /// * `ttl` - Maximum age of entries, or None for no expiry
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let cache: CacheStorage<Vec<Episode>> =
    ///     CacheStorage::open("episodes", Some(Duration::from_secs(24 * 60 * 60)))?;
    /// ```
    pub fn open(name: &str, ttl: Option<Duration>) -> Result<Self, CacheError> {
        // Get the cache directory for this application
        let proj_dirs = directories::ProjectDirs::from("io", "showsleuth", "showsleuth")
            .ok_or(CacheError::CacheDirectoryNotFound)?;

        Self::open_in(proj_dirs.cache_dir().to_path_buf(), name, ttl)
    }

    /// Opens or creates a cache storage below an explicit base directory
    ///
    /// Behaves like [`CacheStorage::open`] but does not consult the
    /// platform directory lookup. Tests use this to cache into a
    /// temporary location.
    pub(crate) fn open_in(
        base_dir: PathBuf,
        name: &str,
        ttl: Option<Duration>,
    ) -> Result<Self, CacheError> {
        let sanitized_name = sanitize_name(name);
        let cache_dir = base_dir.join(&sanitized_name);

        // Create the directory if it doesn't exist
        fs::create_dir_all(&cache_dir).map_err(|e| CacheError::DirectoryCreationFailed {
            path: cache_dir.clone(),
            source: e,
        })?;

        Ok(Self {
            cache_dir,
            ttl,
            _phantom: PhantomData,
        })
    }

    /// Loads cached data for the given identifier
    ///
    /// Returns None if no entry exists or the entry's age exceeds the
    /// configured TTL. Returns an error if the entry exists but cannot
    /// be read or deserialized.
    pub fn load(&self, identifier: &str) -> Result<Option<T>, CacheError> {
        let file_path = self.entry_path(identifier);

        // If file doesn't exist, return None
        if !file_path.exists() {
            return Ok(None);
        }

        if self.is_expired(&file_path) {
            return Ok(None);
        }

        // Read the file
        let content = fs::read_to_string(&file_path).map_err(|e| CacheError::ReadFailed {
            path: file_path.clone(),
            source: e,
        })?;

        // Deserialize the JSON
        let data =
            serde_json::from_str(&content).map_err(|e| CacheError::DeserializationFailed {
                path: file_path,
                source: e,
            })?;

        Ok(Some(data))
    }

    /// Stores data in the cache with the given identifier
    pub fn store(&self, identifier: &str, data: &T) -> Result<(), CacheError> {
        let file_path = self.entry_path(identifier);

        // Serialize to JSON
        let content = serde_json::to_string_pretty(data)?;

        // Write to file
        fs::write(&file_path, content).map_err(|e| CacheError::WriteFailed {
            path: file_path,
            source: e,
        })?;

        Ok(())
    }

    /// Returns the path to the cache directory
    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    /// Builds the file path for an identifier
    fn entry_path(&self, identifier: &str) -> PathBuf {
        let sanitized_id = sanitize_name(identifier);
        self.cache_dir.join(format!("{}.json", sanitized_id))
    }

    /// Checks whether an entry file is older than the configured TTL
    ///
    /// Entries with unreadable timestamps count as fresh; a broken clock
    /// must not wipe the cache.
    fn is_expired(&self, file_path: &PathBuf) -> bool {
        let Some(ttl) = self.ttl else {
            return false;
        };

        fs::metadata(file_path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|modified| modified.elapsed().ok())
            .map(|age| age > ttl)
            .unwrap_or(false)
    }
}

/// Sanitizes a name for use in file paths
///
/// Converts to lowercase and replaces all characters that are not
/// a-z, 0-9, or hyphen with underscores.
fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(name: &str, ttl: Option<Duration>) -> CacheStorage<Vec<String>> {
        let base = std::env::temp_dir().join(format!("show_sleuth_test_{}", name));
        CacheStorage::open_in(base, name, ttl).unwrap()
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Simple"), "simple");
        assert_eq!(sanitize_name("With Spaces"), "with_spaces");
        assert_eq!(sanitize_name("With-Hyphens"), "with-hyphens");
        assert_eq!(sanitize_name("Special!@#$%"), "special_____");
        assert_eq!(sanitize_name("Mixed123ABC"), "mixed123abc");
    }

    #[test]
    fn test_store_and_load_roundtrip() {
        let cache = temp_cache("roundtrip", None);
        let data = vec!["one".to_string(), "two".to_string()];

        cache.store("some key", &data).unwrap();
        assert_eq!(cache.load("some key").unwrap(), Some(data));
    }

    #[test]
    fn test_load_missing_entry_returns_none() {
        let cache = temp_cache("missing", None);
        assert_eq!(cache.load("never stored").unwrap(), None);
    }

    #[test]
    fn test_zero_ttl_expires_entries_immediately() {
        let cache = temp_cache("expiry", Some(Duration::ZERO));
        let data = vec!["stale".to_string()];

        cache.store("entry", &data).unwrap();
        // With a zero TTL any measurable age exceeds the limit
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.load("entry").unwrap(), None);
    }
}
