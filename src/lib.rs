//! ShowSleuth - Search TV shows and browse their episode lists
//!
//! This library provides the core functionality for querying a public
//! TV-show directory, rendering the results as a text page, and toggling
//! per-show episode panels in an interactive session.

mod browser;
mod cache;
mod directory;
mod render;

// Re-export error types
pub use browser::BrowseError;
pub use cache::CacheError;
pub use directory::DirectoryError;

// Re-export the browsing session and its building blocks
pub use browser::{BrowserSession, Toggle};
pub use cache::CacheStorage;
pub use directory::{
    CachedDirectory, DEFAULT_IMAGE_URL, Episode, NO_SUMMARY_PLACEHOLDER, ShowDirectory, ShowId,
    ShowSummary, TvMazeDirectory,
};
pub use render::{EpisodePanel, ShowBlock, ShowListView, ToggleLabel, format_episode, write_page};

use std::io;
use thiserror::Error;

/// Top-level error type for ShowSleuth operations
#[derive(Debug, Error)]
pub enum ShowSleuthError {
    /// Error while talking to the show directory
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Error during a browsing operation
    #[error("Browse error: {0}")]
    Browse(#[from] BrowseError),

    /// Error during cache operations
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
