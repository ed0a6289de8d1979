// Default dataset location.
//
// Where the dataset gets installed is a packaging concern; the default
// maps to the platform data directory (~/.local/share/profanity-filter/
// on Linux), written once and shared by every consumer.
// PROFANITY_DATA_PATH overrides it for alternate deployments.

use std::env;
use std::path::PathBuf;

/// File name of the shared multi-language dataset.
pub const DATASET_FILE: &str = "profanity.parquet";

/// Resolve the default dataset locator.
///
/// Checks `PROFANITY_DATA_PATH` first, then the platform data directory.
/// Returns `None` when neither yields a location; the loader treats that
/// the same as a missing file (open filter), never as a hard error.
pub fn resolve_default_locator() -> Option<PathBuf> {
    if let Ok(path) = env::var("PROFANITY_DATA_PATH") {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::data_dir().map(|dir| dir.join("profanity-filter").join(DATASET_FILE))
}
