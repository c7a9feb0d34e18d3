//! Property-based tests for the View Projector.

use std::collections::HashSet;

use proptest::prelude::*;
use shelfmark::services::view_projector::project;
use shelfmark::types::bookmark::{Bookmark, SortMode};

fn arb_sort_mode() -> impl Strategy<Value = SortMode> {
    prop_oneof![
        Just(SortMode::Important),
        Just(SortMode::AlphabeticalAsc),
        Just(SortMode::AlphabeticalDesc),
        Just(SortMode::DateNewest),
        Just(SortMode::DateOldest),
    ]
}

fn arb_bookmark() -> impl Strategy<Value = Bookmark> {
    (
        "[a-zA-Z]{1,8}",
        any::<bool>(),
        "[a-zA-Z]{0,5}",
        prop_oneof![
            Just(String::new()),
            (2000i32..2030, 1u32..13, 1u32..29)
                .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}T00:00:00.000Z", y, m, d)),
        ],
    )
        .prop_map(|(name, important, tag, added_at)| Bookmark {
            url: format!("https://{}.example", name.to_lowercase()),
            name,
            important,
            tag,
            added_at,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn important_sort_is_stable(records in proptest::collection::vec(arb_bookmark(), 0..20)) {
        let projected = project(&records, SortMode::Important, "");

        let expected: Vec<Bookmark> = records
            .iter()
            .filter(|b| b.important)
            .chain(records.iter().filter(|b| !b.important))
            .cloned()
            .collect();
        prop_assert_eq!(projected, expected);
    }

    #[test]
    fn alphabetical_desc_reverses_asc(records in proptest::collection::vec(arb_bookmark(), 0..20)) {
        let mut seen = HashSet::new();
        let unique: Vec<Bookmark> = records
            .into_iter()
            .filter(|b| seen.insert(b.name.clone()))
            .collect();

        let asc: Vec<String> = project(&unique, SortMode::AlphabeticalAsc, "")
            .into_iter()
            .map(|b| b.name)
            .collect();
        let mut desc: Vec<String> = project(&unique, SortMode::AlphabeticalDesc, "")
            .into_iter()
            .map(|b| b.name)
            .collect();
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn filter_keeps_only_matches_for_any_mode(
        records in proptest::collection::vec(arb_bookmark(), 0..20),
        filter in "[a-zA-Z]{1,3}",
        mode in arb_sort_mode(),
    ) {
        let needle = filter.to_lowercase();
        let projected = project(&records, mode, &filter);

        for b in &projected {
            prop_assert!(
                b.name.to_lowercase().contains(&needle) || b.tag.to_lowercase().contains(&needle)
            );
        }
        let expected = records
            .iter()
            .filter(|b| {
                b.name.to_lowercase().contains(&needle) || b.tag.to_lowercase().contains(&needle)
            })
            .count();
        prop_assert_eq!(projected.len(), expected);

        // Same membership regardless of sort mode.
        let mut by_mode: Vec<Bookmark> = project(&records, SortMode::Important, &filter);
        let mut this_mode = projected.clone();
        by_mode.sort_by(|a, b| (&a.name, &a.added_at).cmp(&(&b.name, &b.added_at)));
        this_mode.sort_by(|a, b| (&a.name, &a.added_at).cmp(&(&b.name, &b.added_at)));
        prop_assert_eq!(
            by_mode.iter().map(|b| &b.name).collect::<Vec<_>>(),
            this_mode.iter().map(|b| &b.name).collect::<Vec<_>>()
        );
    }
}
