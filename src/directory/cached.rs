//! Caching directory wrapper
//!
//! This module provides a caching wrapper for show directories that
//! automatically stores and retrieves search results and episode lists
//! from a local cache.

use super::{DirectoryError, Episode, ShowDirectory, ShowId, ShowSummary};
use crate::cache::CacheStorage;

/// A caching wrapper for show directories
///
/// This directory wraps another directory backend and caches its answers
/// to avoid redundant network requests. The cache is persistent across
/// application runs; entries expire according to the storage's TTL.
pub struct CachedDirectory<D>
where
    D: ShowDirectory,
{
    /// The underlying directory backend
    directory: D,
    /// Cache storage for search result sets, keyed by search term
    search_cache: CacheStorage<Vec<ShowSummary>>,
    /// Cache storage for episode lists, keyed by show id
    episode_cache: CacheStorage<Vec<Episode>>,
}

impl<D> CachedDirectory<D>
where
    D: ShowDirectory,
{
    /// Creates a new cached directory wrapping the given backend
    ///
    /// # Arguments
    ///
    /// * `directory` - The directory backend to wrap
    /// * `search_cache` - Storage for cached search result sets
    /// * `episode_cache` - Storage for cached episode lists
    pub fn new(
        directory: D,
        search_cache: CacheStorage<Vec<ShowSummary>>,
        episode_cache: CacheStorage<Vec<Episode>>,
    ) -> Self {
        Self {
            directory,
            search_cache,
            episode_cache,
        }
    }
}

impl<D> ShowDirectory for CachedDirectory<D>
where
    D: ShowDirectory,
{
    fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, DirectoryError> {
        // Cache read errors must never prevent a search
        if let Ok(Some(shows)) = self.search_cache.load(term) {
            return Ok(shows);
        }

        let shows = self.directory.search_shows(term)?;

        // Store in cache (ignore errors to avoid failing the request)
        let _ = self.search_cache.store(term, &shows);

        Ok(shows)
    }

    fn list_episodes(&self, id: ShowId) -> Result<Vec<Episode>, DirectoryError> {
        let cache_key = format!("episodes_{}", id);

        if let Ok(Some(episodes)) = self.episode_cache.load(&cache_key) {
            return Ok(episodes);
        }

        let episodes = self.directory.list_episodes(id)?;

        let _ = self.episode_cache.store(&cache_key, &episodes);

        Ok(episodes)
    }
}
