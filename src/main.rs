use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use profanity_filter::config::Config;
use profanity_filter::{ProfanityFilter, SUPPORTED_LANGUAGES};

/// Check words against a per-language profanity blocklist.
#[derive(Parser)]
#[command(name = "profanity-filter", version, about)]
struct Cli {
    /// Language code to filter with (overrides PROFANITY_LANG)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Path to the blocklist Parquet dataset (overrides PROFANITY_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more words as clean or blocked
    Check {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List the supported language codes
    Languages,

    /// Show how many blocklist entries the current language loads
    Stats,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("profanity_filter=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    let lang = cli.lang.unwrap_or(config.lang_code);
    let data = cli.data.or(config.data_path);

    match cli.command {
        Commands::Check { words } => {
            let filter = ProfanityFilter::new(&lang, data.as_deref())?;
            if filter.is_open() {
                eprintln!("{}", "Blocklist is empty; every word passes.".yellow());
            }
            for word in &words {
                if filter.is_clean(word) {
                    println!("{}  {}", "clean  ".green(), word);
                } else {
                    println!("{}  {}", "blocked".red(), word);
                }
            }
        }

        Commands::Languages => {
            for code in SUPPORTED_LANGUAGES {
                println!("{code}");
            }
        }

        Commands::Stats => {
            let filter = ProfanityFilter::new(&lang, data.as_deref())?;
            println!("language: {}", filter.lang_code());
            println!("entries:  {}", filter.blocked_count());
        }
    }

    Ok(())
}
