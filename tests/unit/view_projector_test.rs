//! Unit tests for filtering, sorting and row rendering.

use rstest::rstest;
use shelfmark::services::view_projector::{
    filter_archive, project, render_view, HIDE_ARCHIVE_LABEL, SHOW_ARCHIVE_LABEL,
};
use shelfmark::types::bookmark::{ArchivedBookmark, Bookmark, SortMode};
use shelfmark::types::view::RowAction;

fn bm(name: &str, important: bool, tag: &str, added_at: &str) -> Bookmark {
    Bookmark {
        name: name.to_string(),
        url: format!("https://{}.example", name.to_lowercase()),
        important,
        tag: tag.to_string(),
        added_at: added_at.to_string(),
    }
}

fn sample() -> Vec<Bookmark> {
    vec![
        bm("Rust", false, "lang", "2024-02-01T00:00:00.000Z"),
        bm("Docs", true, "", "2024-01-01T00:00:00.000Z"),
        bm("blog", false, "Reading", "2024-03-01T00:00:00.000Z"),
        bm("Apple", true, "shop", ""),
    ]
}

fn names(records: &[Bookmark]) -> Vec<&str> {
    records.iter().map(|b| b.name.as_str()).collect()
}

#[rstest]
#[case(SortMode::Important, vec!["Docs", "Apple", "Rust", "blog"])]
#[case(SortMode::AlphabeticalAsc, vec!["Apple", "blog", "Docs", "Rust"])]
#[case(SortMode::AlphabeticalDesc, vec!["Rust", "Docs", "blog", "Apple"])]
#[case(SortMode::DateNewest, vec!["blog", "Rust", "Docs", "Apple"])]
#[case(SortMode::DateOldest, vec!["Apple", "Docs", "Rust", "blog"])]
fn test_sort_modes(#[case] mode: SortMode, #[case] expected: Vec<&str>) {
    assert_eq!(names(&project(&sample(), mode, "")), expected);
}

#[test]
fn test_filter_matches_name_or_tag_case_insensitively() {
    let records = sample();
    assert_eq!(names(&project(&records, SortMode::AlphabeticalAsc, "READ")), vec!["blog"]);
    assert_eq!(names(&project(&records, SortMode::AlphabeticalAsc, "do")), vec!["Docs"]);
    assert!(project(&records, SortMode::Important, "zzz").is_empty());
}

#[test]
fn test_blank_filter_keeps_everything() {
    assert_eq!(project(&sample(), SortMode::Important, "   ").len(), 4);
}

#[test]
fn test_project_leaves_input_untouched() {
    let records = sample();
    let before = records.clone();
    let _ = project(&records, SortMode::AlphabeticalDesc, "o");
    assert_eq!(records, before);
}

#[test]
fn test_filter_archive_keeps_stored_order() {
    let at = chrono::Utc::now();
    let archive: Vec<ArchivedBookmark> = sample()
        .iter()
        .map(|b| ArchivedBookmark::from_bookmark(b, at))
        .collect();
    let filtered = filter_archive(&archive, "s");
    let names: Vec<&str> = filtered.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Rust", "Docs", "Apple"]);
}

#[test]
fn test_render_view_builds_rows_and_label() {
    let at = chrono::Utc::now();
    let archive = vec![ArchivedBookmark::from_bookmark(&bm("Old", false, "x", ""), at)];

    let hidden = render_view(SortMode::Important, "", false, &sample(), &archive);
    assert_eq!(hidden.archive_toggle_label, SHOW_ARCHIVE_LABEL);
    assert_eq!(hidden.bookmarks.len(), 4);
    assert_eq!(hidden.bookmarks[0].name, "Docs");
    assert!(hidden.bookmarks[0].important);
    assert_eq!(hidden.bookmarks[0].tag, None);
    assert_eq!(
        hidden.bookmarks[0].actions,
        vec![RowAction::ToggleImportant, RowAction::EditTag, RowAction::Archive]
    );
    assert_eq!(hidden.archive[0].tag.as_deref(), Some("x"));
    assert_eq!(hidden.archive[0].actions, vec![RowAction::Restore, RowAction::Delete]);
    assert!(hidden.bookmarks.iter().all(|row| row.open_in_new_context));
    assert!(hidden.archive[0].open_in_new_context);

    let shown = render_view(SortMode::Important, "", true, &sample(), &archive);
    assert_eq!(shown.archive_toggle_label, HIDE_ARCHIVE_LABEL);
}
