const ELLIPSIS: &str = "...";

/// Shortens `input` to exactly `limit` characters (ellipsis included) when it would not
/// fit alongside the ellipsis; otherwise returns it unchanged.
pub fn truncate(input: &str, limit: usize) -> String {
    let len = input.chars().count();
    let marker = ELLIPSIS.chars().count();
    if len + marker <= limit {
        return input.to_string();
    }
    let keep = limit.saturating_sub(marker);
    let mut out: String = input.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Year portion of a `YYYY-MM-DD` style date. Empty input yields an empty string.
pub fn release_year(date: &str) -> String {
    date.split('-').next().unwrap_or_default().to_string()
}
