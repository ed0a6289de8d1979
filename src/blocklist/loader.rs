// Blocklist loading from the shared Parquet dataset.
//
// The dataset tags every row with a language code, so a filter for one
// language must not pay for the others: the lazy scan pushes the
// `lang == code` predicate and the `word` projection down into the Parquet
// reader and only matching rows are materialized.
//
// Loading never fails. A missing or unreadable dataset produces an empty
// set and a logged warning, which leaves the filter open (permissive).
// A content filter whose backend is unhealthy should degrade to allowing
// words, not take its caller down.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::{debug, warn};

use super::locate::resolve_default_locator;

/// Load the blocklist for one language code.
///
/// `path` is the dependency-injection seam: tests and alternate deployments
/// pass an explicit dataset path, production callers pass `None` and get
/// the default locator. Returns an empty set on any environmental failure.
pub fn load(lang_code: &str, path: Option<&Path>) -> HashSet<String> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => match resolve_default_locator() {
            Some(p) => p,
            None => {
                warn!(
                    lang = lang_code,
                    "No default blocklist dataset could be located; filter will be open"
                );
                return HashSet::new();
            }
        },
    };

    if !path.is_file() {
        warn!(
            lang = lang_code,
            path = %path.display(),
            "Blocklist dataset not found; filter will be open"
        );
        return HashSet::new();
    }

    match read_words(lang_code, &path) {
        Ok(words) => {
            debug!(
                lang = lang_code,
                entries = words.len(),
                path = %path.display(),
                "Loaded blocklist"
            );
            words
        }
        Err(err) => {
            warn!(
                lang = lang_code,
                path = %path.display(),
                "Failed to read blocklist ({err:#}); filter will be open"
            );
            HashSet::new()
        }
    }
}

/// Read and normalize the `word` column for one language.
///
/// Separated from `load` so the fail-open policy lives in exactly one
/// place: any error bubbling out of here is caught there and logged.
fn read_words(lang_code: &str, path: &Path) -> Result<HashSet<String>> {
    let df = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
        .with_context(|| format!("Failed to open Parquet dataset at {}", path.display()))?
        .filter(col("lang").eq(lit(lang_code.to_string())))
        .select([col("word")])
        .collect()
        .with_context(|| format!("Failed to read blocklist rows for '{lang_code}'"))?;

    let words = df
        .column("word")
        .context("Dataset has no 'word' column")?
        .str()
        .context("'word' column is not a string column")?;

    // Nulls come out of the chunked array as None and are dropped along
    // with empty strings; duplicates collapse through set insertion.
    Ok(words
        .into_iter()
        .flatten()
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect())
}
