/// Data structures and traits for querying the TV-show directory.
///
/// This module provides structures to represent show search results and
/// episode listings, as well as a trait for implementing directory
/// backends (remote APIs, caches, test fakes).
mod cached;
mod tvmaze;
mod tvmaze_types;

pub use cached::CachedDirectory;
pub use tvmaze::TvMazeDirectory;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fallback image URL used when a show has no artwork of its own.
pub const DEFAULT_IMAGE_URL: &str = "https://store-images.s-microsoft.com/image/apps.65316.13510798887490672.6e1ebb25-96c8-4504-b714-1f7cbca3c5ad.f9514a23-1eb8-4916-a18e-99b1a9817d15?mode=scale&q=90&h=300&w=300";

/// Fallback summary text used when a show carries no summary.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No Summary Available";

/// Errors that can occur while talking to the show directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request could not be completed (DNS, connect, timeout, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// The directory answered with a non-success status code
    #[error("Directory returned HTTP {status} {reason}")]
    RemoteStatus { status: u16, reason: String },

    /// Failed to decode the directory's JSON response
    #[error("Failed to parse directory response: {0}")]
    Parse(String),
}

/// Opaque identifier of a show within the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowId(pub u64);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single show as it appears in a search result set.
///
/// Summaries and image URLs are normalized at construction: absent values
/// are replaced by [`NO_SUMMARY_PLACEHOLDER`] and [`DEFAULT_IMAGE_URL`],
/// and rich-text summaries are flattened to plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// Directory identifier of the show
    pub id: ShowId,
    /// The show's title
    pub name: String,
    /// Plain-text summary (never empty; falls back to the placeholder)
    pub summary: String,
    /// Artwork URL (falls back to the default image)
    pub image_url: String,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Directory identifier of the episode
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season this episode belongs to
    pub season: u32,
    /// The episode number within its season
    pub number: u32,
}

/// Trait for backends that can search shows and list their episodes.
///
/// Implementors of this trait answer free-text show searches and per-show
/// episode queries. Besides the remote TVMaze backend this seam carries
/// the caching wrapper and the fakes used in tests.
pub trait ShowDirectory {
    /// Searches the directory for shows matching a free-text term.
    ///
    /// No validation is applied to the term locally; whatever the user
    /// typed is handed to the backend as-is. The result preserves the
    /// backend's ordering.
    fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, DirectoryError>;

    /// Lists all episodes of the given show.
    ///
    /// An empty result is valid and means the directory knows no episodes
    /// for this show. Ordering is the backend's (season/episode ascending
    /// for TVMaze).
    fn list_episodes(&self, id: ShowId) -> Result<Vec<Episode>, DirectoryError>;
}

impl<D> ShowDirectory for Box<D>
where
    D: ShowDirectory + ?Sized,
{
    fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, DirectoryError> {
        (**self).search_shows(term)
    }

    fn list_episodes(&self, id: ShowId) -> Result<Vec<Episode>, DirectoryError> {
        (**self).list_episodes(id)
    }
}
