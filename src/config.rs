use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::models::{MediaKind, Query};
use crate::output::OutputFormat;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Fully resolved run configuration. The API key is resolved here, before any request.
#[derive(Debug, Clone)]
pub struct Config {
    pub query: Query,
    pub api_key: String,
    pub base_url: String,
    pub interactive: bool,
    pub max_show: i64,
    pub format: OutputFormat,
    pub append: String,
    pub title_keyed: bool,
    pub search_only: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let api_key = resolve_api_key(&cli.key)?;
        let kind = if cli.tv { MediaKind::Tv } else { MediaKind::Movie };
        let format = if cli.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Json {
                pretty: !cli.nopretty,
            }
        };
        let base_url = env::var("TMDB_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            query: Query {
                kind,
                title: cli.title,
                year: cli.year.filter(|y| !y.is_empty()),
            },
            api_key,
            base_url,
            interactive: cli.interactive,
            max_show: cli.maxshow,
            format,
            append: cli.append,
            title_keyed: cli.title_keyed,
            search_only: cli.search_only,
        })
    }
}

/// A value naming an existing file is read and its first line (trimmed) becomes the key.
/// Anything else is taken literally.
pub fn resolve_api_key(value: &str) -> Result<String> {
    let path = Path::new(value);
    if !path.is_file() {
        return Ok(value.to_string());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read key file {}", path.display()))?;
    let key = contents.lines().next().unwrap_or_default().trim();
    if key.is_empty() {
        return Err(ConfigError::EmptyKeyFile(path.display().to_string()).into());
    }
    Ok(key.to_string())
}
