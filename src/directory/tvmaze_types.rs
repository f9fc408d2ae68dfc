/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format of the TVMaze search
/// and episode endpoints.
use serde::Deserialize;

/// One entry of the `/search/shows` response array.
///
/// The API wraps each matched show in a scoring record; only the nested
/// show is of interest here.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show record as returned by the TVMaze API.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// Numeric show identifier
    pub id: u64,
    /// The show's title
    pub name: String,
    /// Show summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Artwork URLs (may be null for shows without artwork)
    pub image: Option<TvMazeImage>,
}

/// Artwork URLs attached to a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// URL of the full-resolution artwork
    pub original: String,
}

/// A single episode from the `/shows/{id}/episodes` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// Numeric episode identifier
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number (0 for specials)
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}
