use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::error::SelectError;
use crate::models::{MediaKind, MediaRecord};
use crate::text::{release_year, truncate};

const OVERVIEW_LIMIT: usize = 200;

/// Keeps at most `max_show` results; zero or negative caps keep nothing.
pub fn limit_results(mut results: Vec<MediaRecord>, max_show: i64) -> Vec<MediaRecord> {
    let cap = usize::try_from(max_show).unwrap_or(0);
    results.truncate(cap);
    results
}

/// Picks one record: the top hit, or the user's choice when `interactive`.
/// Listing and prompt go to `prompt`, never to stdout.
pub async fn select<R, W>(
    mut results: Vec<MediaRecord>,
    kind: MediaKind,
    interactive: bool,
    input: &mut R,
    prompt: &mut W,
) -> Result<MediaRecord>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if results.is_empty() {
        return Err(SelectError::NoResults.into());
    }
    if !interactive {
        return Ok(results.swap_remove(0));
    }

    list_candidates(&results, kind, prompt)?;
    loop {
        write!(prompt, "Select a title by [index]: ")?;
        prompt.flush()?;
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .await
            .context("Failed to read selection")?;
        if read == 0 {
            return Err(SelectError::NoSelection.into());
        }
        let answer = line.trim();
        match parse_index(answer, results.len()) {
            Some(idx) => {
                info!(index = idx + 1, "selection made");
                return Ok(results.swap_remove(idx));
            }
            None => writeln!(
                prompt,
                "Invalid selection '{}': enter a number from 1 to {}",
                answer,
                results.len()
            )?,
        }
    }
}

fn list_candidates<W: Write>(results: &[MediaRecord], kind: MediaKind, out: &mut W) -> Result<()> {
    writeln!(out, "Interactive mode selected. Showing top results...")?;
    for (idx, record) in results.iter().enumerate() {
        writeln!(
            out,
            "[{}] {}: {}",
            idx + 1,
            record.title(kind),
            release_year(record.date(kind))
        )?;
        writeln!(out, "      \"{}\"", truncate(record.overview(), OVERVIEW_LIMIT))?;
    }
    Ok(())
}

/// 1-based user input to a 0-based index within `len`.
fn parse_index(answer: &str, len: usize) -> Option<usize> {
    answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
