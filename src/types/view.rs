use serde::{Deserialize, Serialize};

use super::bookmark::SortMode;

/// Control attached to a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    ToggleImportant,
    EditTag,
    Archive,
    Restore,
    Delete,
}

/// One displayed bookmark: a link plus its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkRow {
    pub name: String,
    pub href: String,
    pub important: bool,
    /// Tag badge; absent when the bookmark is untagged.
    pub tag: Option<String>,
    pub actions: Vec<RowAction>,
    /// The link opens in a new browsing context (`target="_blank"`).
    pub open_in_new_context: bool,
}

/// One displayed archive entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRow {
    pub name: String,
    pub href: String,
    pub tag: Option<String>,
    pub actions: Vec<RowAction>,
    pub open_in_new_context: bool,
}

/// Everything a rendering surface needs to draw the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub sort_mode: SortMode,
    pub filter_text: String,
    pub bookmarks: Vec<BookmarkRow>,
    pub archive: Vec<ArchiveRow>,
    pub archive_visible: bool,
    pub archive_toggle_label: String,
}
