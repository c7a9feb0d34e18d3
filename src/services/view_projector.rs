// Shelfmark View Projector
// Turns stored collections plus the current sort mode and filter into display rows.
// Everything here is pure: inputs are never mutated, results are fresh copies.

use std::cmp::Ordering;

use crate::types::bookmark::{ArchivedBookmark, Bookmark, SortMode};
use crate::types::view::{ArchiveRow, BookmarkRow, RowAction, View};

pub const SHOW_ARCHIVE_LABEL: &str = "Show Archive";
pub const HIDE_ARCHIVE_LABEL: &str = "Hide Archive";

/// Case-insensitive substring match on name or tag. A blank filter matches everything.
pub fn matches_filter(name: &str, tag: &str, filter_text: &str) -> bool {
    let needle = filter_text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&needle) || tag.to_lowercase().contains(&needle)
}

/// Approximates locale collation: case-folded first, then raw code points.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn comparator(mode: SortMode) -> fn(&Bookmark, &Bookmark) -> Ordering {
    match mode {
        SortMode::Important => |a, b| b.important.cmp(&a.important),
        SortMode::AlphabeticalAsc => |a, b| compare_names(&a.name, &b.name),
        SortMode::AlphabeticalDesc => |a, b| compare_names(&b.name, &a.name),
        SortMode::DateNewest => |a, b| b.added_at_millis().cmp(&a.added_at_millis()),
        SortMode::DateOldest => |a, b| a.added_at_millis().cmp(&b.added_at_millis()),
    }
}

/// Filters then sorts bookmarks for display. The sort is stable.
pub fn project(records: &[Bookmark], sort_mode: SortMode, filter_text: &str) -> Vec<Bookmark> {
    let mut projected: Vec<Bookmark> = records
        .iter()
        .filter(|b| matches_filter(&b.name, &b.tag, filter_text))
        .cloned()
        .collect();
    projected.sort_by(comparator(sort_mode));
    projected
}

/// Applies the same name/tag filter to the archive, keeping stored order.
pub fn filter_archive(records: &[ArchivedBookmark], filter_text: &str) -> Vec<ArchivedBookmark> {
    records
        .iter()
        .filter(|a| matches_filter(&a.name, &a.tag, filter_text))
        .cloned()
        .collect()
}

fn tag_badge(tag: &str) -> Option<String> {
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}

pub fn bookmark_row(bookmark: &Bookmark) -> BookmarkRow {
    BookmarkRow {
        name: bookmark.name.clone(),
        href: bookmark.url.clone(),
        important: bookmark.important,
        tag: tag_badge(&bookmark.tag),
        actions: vec![RowAction::ToggleImportant, RowAction::EditTag, RowAction::Archive],
        open_in_new_context: true,
    }
}

pub fn archive_row(entry: &ArchivedBookmark) -> ArchiveRow {
    ArchiveRow {
        name: entry.name.clone(),
        href: entry.url.clone(),
        tag: tag_badge(&entry.tag),
        actions: vec![RowAction::Restore, RowAction::Delete],
        open_in_new_context: true,
    }
}

/// Builds the complete view from freshly loaded collections.
pub fn render_view(
    sort_mode: SortMode,
    filter_text: &str,
    archive_visible: bool,
    bookmarks: &[Bookmark],
    archive: &[ArchivedBookmark],
) -> View {
    View {
        sort_mode,
        filter_text: filter_text.to_string(),
        bookmarks: project(bookmarks, sort_mode, filter_text)
            .iter()
            .map(bookmark_row)
            .collect(),
        archive: filter_archive(archive, filter_text)
            .iter()
            .map(archive_row)
            .collect(),
        archive_visible,
        archive_toggle_label: if archive_visible {
            HIDE_ARCHIVE_LABEL.to_string()
        } else {
            SHOW_ARCHIVE_LABEL.to_string()
        },
    }
}
