//! Interactive browsing session
//!
//! This module owns the session state machine: searching repaints the show
//! list and hides the episode panel; toggling a show either opens its
//! episode list (moving the shared panel under it) or closes it again.
//!
//! All mutation goes through `&mut self`, so operations are serialized by
//! construction. A failed directory call returns before any state is
//! touched, leaving the page exactly as it was.

use crate::directory::{DirectoryError, Episode, ShowDirectory, ShowId, ShowSummary};
use crate::render::{EpisodePanel, ShowListView, ToggleLabel, write_page};
use std::io::{self, Write};
use thiserror::Error;

/// Errors that can occur during a browsing operation
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The directory request failed
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The toggled show is not part of the current result set
    #[error("No show with id {0} in the current results")]
    UnknownShow(ShowId),
}

/// Outcome of a toggle operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle {
    /// The panel opened under the toggled show
    Opened {
        /// Episodes now on display (empty when the directory knows none)
        episodes: Vec<Episode>,
    },
    /// The panel was open for the toggled show and is now hidden
    Closed,
}

/// A show search and episode browsing session.
///
/// The session owns the directory backend, the current result set, the
/// rendered show list, and the single shared episode panel.
pub struct BrowserSession<D>
where
    D: ShowDirectory,
{
    directory: D,
    shows: Vec<ShowSummary>,
    list: ShowListView,
    panel: EpisodePanel,
}

impl<D> BrowserSession<D>
where
    D: ShowDirectory,
{
    /// Creates a session with an empty result set.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            shows: Vec::new(),
            list: ShowListView::new(),
            panel: EpisodePanel::new(),
        }
    }

    /// Searches the directory and repaints the show list.
    ///
    /// The episode panel is hidden and detached; it only reappears once
    /// the user asks for episodes again. On error the previous result set
    /// and page state stay untouched.
    ///
    /// Returns the shows now on display.
    pub fn search(&mut self, term: &str) -> Result<&[ShowSummary], BrowseError> {
        let shows = self.directory.search_shows(term)?;

        self.panel.hide();
        self.panel.detach();
        self.list.render(&shows);
        self.shows = shows;

        Ok(&self.shows)
    }

    /// Opens or closes the episode panel for the given show.
    ///
    /// Closing requires no network round trip. Opening fetches the show's
    /// episodes, repaints the panel body and header, moves the panel under
    /// the show, and adjusts the toggle labels: the previous owner's label
    /// reverts to "Show Episodes" and the new owner's becomes
    /// "Hide Episodes". A directory with no episodes for the show yields
    /// the "{name} Not Available" header over an empty body.
    pub fn toggle_episodes(&mut self, id: ShowId) -> Result<Toggle, BrowseError> {
        let show = self
            .shows
            .iter()
            .find(|s| s.id == id)
            .ok_or(BrowseError::UnknownShow(id))?;
        let name = show.name.clone();

        // Second toggle on the owning show closes the panel
        if self.panel.attached_to() == Some(id) && self.panel.is_visible() {
            self.panel.hide();
            self.panel.detach();
            self.list.set_toggle_label(id, ToggleLabel::ShowEpisodes);
            return Ok(Toggle::Closed);
        }

        // Fetch before mutating anything, so a failure leaves the page as
        // it was
        let episodes = self.directory.list_episodes(id)?;

        if episodes.is_empty() {
            self.panel.set_header(format!("{} Not Available", name));
            self.panel.clear_items();
        } else {
            self.panel.set_header(format!("Episode List for {}", name));
            self.panel.render(&episodes);
        }

        if let Some(previous) = self.panel.attached_to() {
            self.list.set_toggle_label(previous, ToggleLabel::ShowEpisodes);
        }
        self.list.set_toggle_label(id, ToggleLabel::HideEpisodes);
        self.panel.attach(id);
        self.panel.show();

        Ok(Toggle::Opened { episodes })
    }

    /// Returns the current search result set.
    pub fn shows(&self) -> &[ShowSummary] {
        &self.shows
    }

    /// Returns the show the panel is currently open for, if any.
    pub fn open_show(&self) -> Option<ShowId> {
        self.panel.attached_to().filter(|_| self.panel.is_visible())
    }

    /// Returns the rendered show list.
    pub fn list(&self) -> &ShowListView {
        &self.list
    }

    /// Returns the shared episode panel.
    pub fn panel(&self) -> &EpisodePanel {
        &self.panel
    }

    /// Writes the current page to the given writer.
    pub fn write_page<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_page(&self.list, &self.panel, writer)
    }
}
