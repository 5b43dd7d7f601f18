use anyhow::Result;
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::enrich::enrich;
use crate::output::{render, shape};
use crate::select::{limit_results, select};
use crate::tmdb::TmdbApi;

/// Runs search, selection, enrichment and formatting once, returning the document to
/// print on stdout. `input`/`prompt` stand in for stdin/stderr during interactive picks.
pub async fn run<R, W>(
    api: &dyn TmdbApi,
    config: &Config,
    input: &mut R,
    prompt: &mut W,
) -> Result<String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let query = &config.query;
    let kind = query.kind;
    info!(title = %query.title, year = ?query.year, %kind, "searching TMDB");

    let results = api.search(query).await?;
    debug!(count = results.len(), "search returned");
    let results = limit_results(results, config.max_show);

    let selection = select(results, kind, config.interactive, input, prompt).await?;
    info!(id = selection.id, title = %selection.title(kind), "selected");

    let record = if config.search_only {
        if !config.append.is_empty() {
            warn!("--append is ignored together with --search-only");
        }
        selection
    } else {
        enrich(api, kind, &selection, &config.append).await?
    };

    let document = shape(record, kind, config.title_keyed)?;
    render(&document, config.format)
}
