use clap::{ArgAction, Parser};

use crate::error::EXIT_FAILURE;

/// Fetch movie/TV data for a single item from TMDB and output to STDOUT in either JSON or YAML.
#[derive(Parser, Debug)]
#[command(name = "tmdbget", version)]
#[command(
    about = "Fetch movie/TV data for a single item from TMDB and output to STDOUT in either JSON or YAML",
    long_about = None
)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// The movie or show title to search for
    pub title: String,

    /// Display this help output
    #[arg(short = 'h', long = "help", alias = "h", action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Year of release. This may do nothing for TV search
    #[arg(short, long)]
    pub year: Option<String>,

    /// Output in YAML for easier human-reading
    #[arg(long)]
    pub yaml: bool,

    /// TMDB API key or the path to a file containing such a key
    #[arg(short, long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Present search results for selection on STDERR, printing the final selection to STDOUT
    #[arg(short, long)]
    pub interactive: bool,

    /// Limit the number of search results considered
    #[arg(
        short,
        long = "maxshow",
        value_name = "MAXSHOW",
        default_value_t = 4,
        allow_negative_numbers = true
    )]
    pub maxshow: i64,

    /// Disable pretty-printing of JSON output
    #[arg(long = "nopretty")]
    pub nopretty: bool,

    /// Search TV instead of movies
    #[arg(short, long)]
    pub tv: bool,

    /// Comma-separated sub-resources to bundle into the detail record, or "all"
    #[arg(short, long, value_name = "LIST", default_value = "")]
    pub append: String,

    /// Wrap the output record in an object keyed by its title
    #[arg(long)]
    pub title_keyed: bool,

    /// Emit the selected search result without fetching the full detail record
    #[arg(long)]
    pub search_only: bool,
}

/// Help and version output succeed; every real parse failure is a usage error.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        0
    }
}
