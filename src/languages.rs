// Supported language codes.
//
// The shared dataset tags rows for more languages than any one deployment
// uses; this allow-list is what constructor validation checks against.
// Kept as a compile-time constant so the supported set cannot drift at
// runtime.

/// Language codes with blocklist coverage in the bundled dataset.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "de", "en", "es", "fr", "hi", "it", "ja", "nl", "pt", "ru", "zh",
];

/// Whether `code` names a supported blocklist language.
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

/// The supported codes as one comma-separated string, sorted so the
/// rejection message stays deterministic.
pub fn supported_list() -> String {
    let mut codes: Vec<&str> = SUPPORTED_LANGUAGES.to_vec();
    codes.sort_unstable();
    codes.join(", ")
}
