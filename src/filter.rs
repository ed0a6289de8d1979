// Case-insensitive word checks against a per-language blocklist.
//
// A filter is a value computed once: construction validates the language
// code, loads the blocklist, and nothing mutates afterward. `is_clean` is
// a pure set lookup, safe to call from concurrent readers.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::blocklist;
use crate::languages::{is_supported, supported_list};

#[derive(Debug)]
pub struct ProfanityFilter {
    lang_code: String,
    blocked: HashSet<String>,
}

impl ProfanityFilter {
    /// Build a filter for one language.
    ///
    /// The language code is the only input validated eagerly; an
    /// unsupported code is rejected before any I/O happens. Dataset
    /// problems never fail construction — they leave the filter open
    /// (see `blocklist::load`).
    pub fn new(lang_code: &str, dataset_path: Option<&Path>) -> Result<Self> {
        if !is_supported(lang_code) {
            anyhow::bail!(
                "Unsupported language code: {lang_code}. Supported: {}",
                supported_list()
            );
        }

        let blocked = blocklist::load(lang_code, dataset_path);
        info!(
            lang = lang_code,
            entries = blocked.len(),
            "Profanity filter ready"
        );

        Ok(Self {
            lang_code: lang_code.to_string(),
            blocked,
        })
    }

    /// Whether `word` passes the filter.
    ///
    /// Case-insensitive: `BadWord` and `badword` classify identically.
    /// An empty blocklist blocks nothing, so an unhealthy dataset degrades
    /// to a permissive filter rather than a broken caller.
    pub fn is_clean(&self, word: &str) -> bool {
        if self.blocked.is_empty() {
            return true;
        }
        !self.blocked.contains(&word.to_lowercase())
    }

    /// The language this filter was built for.
    pub fn lang_code(&self) -> &str {
        &self.lang_code
    }

    /// Number of blocklist entries loaded for this language.
    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// True when no entries loaded — the filter passes everything.
    pub fn is_open(&self) -> bool {
        self.blocked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn unsupported_code_is_rejected_before_io() {
        // A dataset path that doesn't exist — validation must fire first,
        // so the error is about the code, not the file.
        let err = ProfanityFilter::new("zz", Some(Path::new("/tmp/nope.parquet"))).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unsupported language code: zz"), "{msg}");
        assert!(msg.contains("en"), "{msg}");
        assert!(msg.contains("nl"), "{msg}");
    }

    #[test]
    fn missing_dataset_fails_open() {
        let path = PathBuf::from("/tmp/does-not-exist.parquet");
        let filter = ProfanityFilter::new("en", Some(&path)).unwrap();
        assert!(filter.is_open());
        assert_eq!(filter.blocked_count(), 0);
        assert!(filter.is_clean("badword"));
        assert!(filter.is_clean(""));
    }

    #[test]
    fn lang_code_is_stored() {
        let filter = ProfanityFilter::new("nl", Some(Path::new("/tmp/nope.parquet"))).unwrap();
        assert_eq!(filter.lang_code(), "nl");
    }
}
