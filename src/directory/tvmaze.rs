/// TVMaze directory backend implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult, TvMazeShow};
use super::{
    DEFAULT_IMAGE_URL, DirectoryError, Episode, NO_SUMMARY_PLACEHOLDER, ShowDirectory, ShowId,
    ShowSummary,
};

/// Show directory backed by the TVMaze API.
///
/// This backend queries https://api.tvmaze.com using the show search
/// endpoint and the per-show episode listing endpoint.
pub struct TvMazeDirectory {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeDirectory {
    /// Creates a new TVMaze directory instance.
    pub fn new() -> Self {
        Self::with_base_url("https://api.tvmaze.com")
    }

    /// Creates an instance talking to a different base URL.
    ///
    /// Used to point the backend at a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Performs a GET request and decodes the JSON response.
    fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, DirectoryError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| DirectoryError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::RemoteStatus {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        response
            .json()
            .map_err(|e| DirectoryError::Parse(e.to_string()))
    }

    /// Converts a TVMaze show record to a normalized summary.
    ///
    /// Missing artwork and summaries are replaced by the fixed fallbacks;
    /// HTML summaries are flattened to plain text.
    fn convert_show(show: TvMazeShow) -> ShowSummary {
        ShowSummary {
            id: ShowId(show.id),
            name: show.name,
            summary: show
                .summary
                .map(|s| nanohtml2text::html2text(&s).trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_SUMMARY_PLACEHOLDER.to_string()),
            image_url: show
                .image
                .map(|i| i.original)
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        }
    }

    /// Converts a TVMaze episode record to our internal Episode structure.
    fn convert_episode(episode: TvMazeEpisode) -> Episode {
        Episode {
            id: episode.id,
            name: episode.name.unwrap_or_else(|| "Unknown".to_string()),
            season: episode.season,
            number: episode.number,
        }
    }
}

impl Default for TvMazeDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowDirectory for TvMazeDirectory {
    fn search_shows(&self, term: &str) -> Result<Vec<ShowSummary>, DirectoryError> {
        let url = format!("{}/search/shows", self.base_url);
        let results: Vec<TvMazeSearchResult> = self.get_json(&url, &[("q", term)])?;

        Ok(results
            .into_iter()
            .map(|r| Self::convert_show(r.show))
            .collect())
    }

    fn list_episodes(&self, id: ShowId) -> Result<Vec<Episode>, DirectoryError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, id);
        let episodes: Vec<TvMazeEpisode> = self.get_json(&url, &[])?;

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_show(json: &str) -> TvMazeShow {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_convert_show_with_full_data() {
        let show = parse_show(
            r#"{
                "id": 169,
                "name": "Breaking Bad",
                "summary": "<p>A chemistry teacher turns to crime.</p>",
                "image": {
                    "medium": "https://static.tvmaze.com/m.jpg",
                    "original": "https://static.tvmaze.com/o.jpg"
                }
            }"#,
        );

        let summary = TvMazeDirectory::convert_show(show);
        assert_eq!(summary.id, ShowId(169));
        assert_eq!(summary.name, "Breaking Bad");
        assert_eq!(summary.summary, "A chemistry teacher turns to crime.");
        assert_eq!(summary.image_url, "https://static.tvmaze.com/o.jpg");
    }

    #[test]
    fn test_convert_show_without_image_uses_default() {
        let show = parse_show(
            r#"{"id": 1, "name": "Obscure Show", "summary": "<p>Hi</p>", "image": null}"#,
        );

        let summary = TvMazeDirectory::convert_show(show);
        assert_eq!(summary.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_convert_show_without_summary_uses_placeholder() {
        let show = parse_show(r#"{"id": 2, "name": "Silent Show", "summary": null, "image": null}"#);

        let summary = TvMazeDirectory::convert_show(show);
        assert_eq!(summary.summary, NO_SUMMARY_PLACEHOLDER);
    }

    #[test]
    fn test_convert_show_with_empty_html_summary_uses_placeholder() {
        // Some shows carry summaries that collapse to nothing once the
        // markup is stripped.
        let show = parse_show(r#"{"id": 3, "name": "Empty", "summary": "<p></p>", "image": null}"#);

        let summary = TvMazeDirectory::convert_show(show);
        assert_eq!(summary.summary, NO_SUMMARY_PLACEHOLDER);
    }

    #[test]
    fn test_convert_episode_fills_missing_name() {
        let episode: TvMazeEpisode =
            serde_json::from_str(r#"{"id": 7, "name": null, "season": 2, "number": 4}"#).unwrap();

        let episode = TvMazeDirectory::convert_episode(episode);
        assert_eq!(episode.name, "Unknown");
        assert_eq!(episode.season, 2);
        assert_eq!(episode.number, 4);
    }
}
