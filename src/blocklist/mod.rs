// Blocklist loading — locator resolution and the filtered Parquet read.

pub mod loader;
pub mod locate;

pub use loader::load;
