//! Terminal rendering of the show list and the episode panel
//!
//! The original page structure is modeled as explicit owned state: a
//! [`ShowListView`] holding one block per show and a single shared
//! [`EpisodePanel`] that is attached to at most one show at a time.
//! Renderers fully replace their content on every call; writing the page
//! splices the panel's lines under the block that currently owns it.

use crate::directory::{Episode, ShowId, ShowSummary};
use std::fmt;
use std::io::{self, Write};

/// Widest a summary snippet gets before it is cut off.
const SUMMARY_SNIPPET_WIDTH: usize = 160;

/// Label of a per-show toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleLabel {
    /// The show's episodes are not on display
    ShowEpisodes,
    /// The show currently owns the visible episode panel
    HideEpisodes,
}

impl fmt::Display for ToggleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleLabel::ShowEpisodes => write!(f, "Show Episodes"),
            ToggleLabel::HideEpisodes => write!(f, "Hide Episodes"),
        }
    }
}

/// One display block of the show list.
///
/// Blocks are tagged with their show's identifier so the toggle logic can
/// address them without relying on list positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowBlock {
    /// Identifier of the show this block displays
    pub show_id: ShowId,
    /// The show's title, rendered verbatim
    pub name: String,
    /// Artwork URL, rendered verbatim
    pub image_url: String,
    /// Summary snippet (whitespace collapsed, cut off past a fixed width)
    pub summary: String,
    /// Current label of the block's toggle control
    pub toggle_label: ToggleLabel,
}

/// The rendered show list.
///
/// Each call to [`ShowListView::render`] fully replaces the previous
/// content, so repeated renders of the same input are idempotent.
#[derive(Debug, Default)]
pub struct ShowListView {
    blocks: Vec<ShowBlock>,
}

impl ShowListView {
    /// Creates an empty show list view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the list and appends one block per show, in input order.
    ///
    /// All toggle controls start out labeled "Show Episodes".
    pub fn render(&mut self, shows: &[ShowSummary]) {
        self.blocks.clear();
        for show in shows {
            self.blocks.push(ShowBlock {
                show_id: show.id,
                name: show.name.clone(),
                image_url: show.image_url.clone(),
                summary: snippet(&show.summary, SUMMARY_SNIPPET_WIDTH),
                toggle_label: ToggleLabel::ShowEpisodes,
            });
        }
    }

    /// Returns the rendered blocks in display order.
    pub fn blocks(&self) -> &[ShowBlock] {
        &self.blocks
    }

    /// Looks up the block displaying the given show.
    pub fn block(&self, id: ShowId) -> Option<&ShowBlock> {
        self.blocks.iter().find(|b| b.show_id == id)
    }

    /// Relabels the toggle control of the given show's block.
    ///
    /// Blocks of shows that are no longer displayed are silently skipped.
    pub fn set_toggle_label(&mut self, id: ShowId, label: ToggleLabel) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.show_id == id) {
            block.toggle_label = label;
        }
    }
}

/// The single shared episode panel.
///
/// Exactly one panel exists per session. It is attached to at most one
/// show at a time; opening it elsewhere moves it rather than duplicating
/// it. The owner is tracked explicitly instead of being inferred from the
/// rendered page.
#[derive(Debug, Default)]
pub struct EpisodePanel {
    header: String,
    items: Vec<String>,
    visible: bool,
    attached_to: Option<ShowId>,
}

impl EpisodePanel {
    /// Creates the panel in its initial state: detached and hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header label shown above the episode list.
    pub fn set_header(&mut self, text: impl Into<String>) {
        self.header = text.into();
    }

    /// Clears the list body and appends one line per episode, in input
    /// order.
    pub fn render(&mut self, episodes: &[Episode]) {
        self.items.clear();
        for episode in episodes {
            self.items.push(format_episode(episode));
        }
    }

    /// Empties the list body without touching the header.
    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Attaches the panel under the given show.
    pub fn attach(&mut self, id: ShowId) {
        self.attached_to = Some(id);
    }

    /// Detaches the panel from whichever show owns it.
    pub fn detach(&mut self) {
        self.attached_to = None;
    }

    /// Makes the panel visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the panel.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Returns whether the panel is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the show currently owning the panel, if any.
    pub fn attached_to(&self) -> Option<ShowId> {
        self.attached_to
    }

    /// Returns the current header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the rendered episode lines in display order.
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// Formats one episode line.
pub fn format_episode(episode: &Episode) -> String {
    format!(
        "• {} (Season {}, Episode {})",
        episode.name, episode.season, episode.number
    )
}

/// Writes the full page: every show block in order, with the panel's
/// lines spliced under the block that owns it while it is visible.
pub fn write_page<W: Write>(
    list: &ShowListView,
    panel: &EpisodePanel,
    writer: &mut W,
) -> io::Result<()> {
    for (index, block) in list.blocks().iter().enumerate() {
        writeln!(writer, "{}. {} [{}]", index + 1, block.name, block.toggle_label)?;
        writeln!(writer, "   {}", block.image_url)?;
        writeln!(writer, "   {}", block.summary)?;

        if panel.is_visible() && panel.attached_to() == Some(block.show_id) {
            writeln!(writer, "     {}", panel.header())?;
            for item in panel.items() {
                writeln!(writer, "     {}", item)?;
            }
        }

        writeln!(writer)?;
    }

    Ok(())
}

/// Collapses whitespace and cuts the text off past `width` characters.
fn snippet(text: &str, width: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let cut: String = collapsed.chars().take(width).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DEFAULT_IMAGE_URL, NO_SUMMARY_PLACEHOLDER};

    fn show(id: u64, name: &str) -> ShowSummary {
        ShowSummary {
            id: ShowId(id),
            name: name.to_string(),
            summary: NO_SUMMARY_PLACEHOLDER.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }

    fn episode(id: u64, name: &str, season: u32, number: u32) -> Episode {
        Episode {
            id,
            name: name.to_string(),
            season,
            number,
        }
    }

    #[test]
    fn test_render_produces_one_block_per_show_in_order() {
        let shows = vec![show(1, "First"), show(2, "Second"), show(3, "Third")];
        let mut view = ShowListView::new();

        view.render(&shows);

        let ids: Vec<ShowId> = view.blocks().iter().map(|b| b.show_id).collect();
        assert_eq!(ids, vec![ShowId(1), ShowId(2), ShowId(3)]);
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let mut view = ShowListView::new();
        view.render(&[show(1, "First"), show(2, "Second")]);
        view.render(&[show(3, "Third")]);

        assert_eq!(view.blocks().len(), 1);
        assert_eq!(view.blocks()[0].show_id, ShowId(3));
    }

    #[test]
    fn test_render_preserves_placeholder_and_default_image() {
        let mut view = ShowListView::new();
        view.render(&[show(1, "Bare")]);

        let block = &view.blocks()[0];
        assert_eq!(block.summary, NO_SUMMARY_PLACEHOLDER);
        assert_eq!(block.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_render_keeps_short_summaries_verbatim_and_cuts_long_ones() {
        let mut short = show(1, "Short");
        short.summary = "A compact description.".to_string();
        let mut long = show(2, "Long");
        long.summary = "word ".repeat(100);

        let mut view = ShowListView::new();
        view.render(&[short, long]);

        assert_eq!(view.blocks()[0].summary, "A compact description.");
        assert!(view.blocks()[1].summary.ends_with('…'));
        assert!(view.blocks()[1].summary.chars().count() <= SUMMARY_SNIPPET_WIDTH + 1);
    }

    #[test]
    fn test_set_toggle_label_targets_the_right_block() {
        let mut view = ShowListView::new();
        view.render(&[show(1, "First"), show(2, "Second")]);

        view.set_toggle_label(ShowId(2), ToggleLabel::HideEpisodes);

        assert_eq!(view.blocks()[0].toggle_label, ToggleLabel::ShowEpisodes);
        assert_eq!(view.blocks()[1].toggle_label, ToggleLabel::HideEpisodes);
    }

    #[test]
    fn test_format_episode() {
        let line = format_episode(&episode(1, "Pilot", 1, 1));
        assert_eq!(line, "• Pilot (Season 1, Episode 1)");
    }

    #[test]
    fn test_panel_render_replaces_items() {
        let mut panel = EpisodePanel::new();
        panel.render(&[episode(1, "Pilot", 1, 1), episode(2, "Fallout", 1, 2)]);
        panel.render(&[episode(3, "Finale", 5, 16)]);

        assert_eq!(panel.items(), ["• Finale (Season 5, Episode 16)"]);
    }

    #[test]
    fn test_panel_starts_detached_and_hidden() {
        let panel = EpisodePanel::new();
        assert!(!panel.is_visible());
        assert_eq!(panel.attached_to(), None);
    }

    #[test]
    fn test_write_page_splices_panel_under_its_owner() {
        let mut view = ShowListView::new();
        view.render(&[show(1, "First"), show(2, "Second")]);
        view.set_toggle_label(ShowId(2), ToggleLabel::HideEpisodes);

        let mut panel = EpisodePanel::new();
        panel.set_header("Episode List for Second");
        panel.render(&[episode(9, "Pilot", 1, 1)]);
        panel.attach(ShowId(2));
        panel.show();

        let mut out = Vec::new();
        write_page(&view, &panel, &mut out).unwrap();
        let page = String::from_utf8(out).unwrap();

        let first_pos = page.find("1. First").unwrap();
        let second_pos = page.find("2. Second [Hide Episodes]").unwrap();
        let header_pos = page.find("Episode List for Second").unwrap();
        assert!(first_pos < second_pos);
        assert!(second_pos < header_pos);
        assert!(page.contains("• Pilot (Season 1, Episode 1)"));
    }

    #[test]
    fn test_write_page_omits_hidden_panel() {
        let mut view = ShowListView::new();
        view.render(&[show(1, "First")]);

        let mut panel = EpisodePanel::new();
        panel.set_header("Episode List for First");
        panel.attach(ShowId(1));
        // Never shown

        let mut out = Vec::new();
        write_page(&view, &panel, &mut out).unwrap();
        let page = String::from_utf8(out).unwrap();

        assert!(!page.contains("Episode List for First"));
    }
}
