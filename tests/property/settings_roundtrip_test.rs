//! Property-based tests for ShelfSettings serialization round-trip.

use proptest::prelude::*;
use shelfmark::types::bookmark::SortMode;
use shelfmark::types::settings::{LoggingSettings, ShelfSettings, StorageSettings, ViewSettings};

fn arb_sort_mode() -> impl Strategy<Value = SortMode> {
    proptest::sample::select(SortMode::ALL.to_vec())
}

fn arb_settings() -> impl Strategy<Value = ShelfSettings> {
    (
        proptest::option::of("/[a-z]{1,10}/[a-z]{1,10}\\.db"),
        arb_sort_mode(),
        any::<bool>(),
        prop_oneof![Just("trace"), Just("debug"), Just("info"), Just("warn"), Just("error")],
        any::<bool>(),
    )
        .prop_map(|(database_path, default_sort, show_archive, level, json)| ShelfSettings {
            storage: StorageSettings { database_path },
            view: ViewSettings { default_sort, show_archive },
            logging: LoggingSettings { level: level.to_string(), json },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).expect("serialize");
        let back: ShelfSettings = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(back, settings);
    }
}
