use std::env;
use std::path::PathBuf;

/// CLI configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Nothing here is
/// required — both values have fallbacks, and a missing dataset only
/// makes the filter permissive.
pub struct Config {
    /// Explicit dataset path (PROFANITY_DATA_PATH). When unset the
    /// default locator under the platform data directory is used.
    pub data_path: Option<PathBuf>,
    /// Language the CLI filters with by default (PROFANITY_LANG).
    pub lang_code: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            data_path: env::var("PROFANITY_DATA_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            lang_code: env::var("PROFANITY_LANG").unwrap_or_else(|_| "en".to_string()),
        }
    }
}
