use anyhow::Result;
use tracing::info;

use crate::models::{MediaKind, MediaRecord};
use crate::tmdb::TmdbApi;

/// Directive that expands to every sub-resource the media kind supports.
pub const APPEND_ALL: &str = "all";

pub fn resolve_append(directive: &str, kind: MediaKind) -> String {
    if directive == APPEND_ALL {
        kind.sub_resources().join(",")
    } else {
        directive.to_string()
    }
}

/// Fetches the full record behind `selection`, with the requested sub-resources
/// bundled server-side.
pub async fn enrich(
    api: &dyn TmdbApi,
    kind: MediaKind,
    selection: &MediaRecord,
    directive: &str,
) -> Result<MediaRecord> {
    let append = resolve_append(directive, kind);
    info!(id = selection.id, %kind, append = %append, "fetching detail record");
    api.detail(kind, selection.id, &append).await
}
