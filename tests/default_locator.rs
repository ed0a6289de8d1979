// Default locator resolution — what production callers hit when they pass
// no dataset path.
//
// Kept as a single test in its own binary because it manipulates
// process-wide environment variables, which would race with parallel
// tests sharing the process.

use std::env;
use std::path::PathBuf;

use profanity_filter::blocklist::locate::{resolve_default_locator, DATASET_FILE};
use profanity_filter::ProfanityFilter;

#[test]
fn env_override_then_data_dir_fallback() {
    // Explicit override wins
    env::set_var("PROFANITY_DATA_PATH", "/tmp/custom-blocklist.parquet");
    assert_eq!(
        resolve_default_locator(),
        Some(PathBuf::from("/tmp/custom-blocklist.parquet"))
    );

    // Without the override, the platform data directory is used
    env::remove_var("PROFANITY_DATA_PATH");
    if let Some(path) = resolve_default_locator() {
        assert!(path.ends_with(PathBuf::from("profanity-filter").join(DATASET_FILE)));
    }

    // An override pointing at a missing file still constructs an open
    // filter — the default path is as fail-open as an explicit one
    env::set_var("PROFANITY_DATA_PATH", "/tmp/missing-blocklist.parquet");
    let filter = ProfanityFilter::new("en", None).unwrap();
    assert!(filter.is_open());
    assert!(filter.is_clean("badword"));
    env::remove_var("PROFANITY_DATA_PATH");
}
