// Profanity filter: per-language word blocklists backed by a shared
// multi-language Parquet dataset.
//
// The whole crate is one short path: resolve where the dataset lives,
// read the rows for a single language, answer membership queries.

pub mod blocklist;
pub mod config;
pub mod filter;
pub mod languages;

pub use filter::ProfanityFilter;
pub use languages::SUPPORTED_LANGUAGES;
