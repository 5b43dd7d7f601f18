//! Error classes surfaced by the pipeline and the exit codes they map to.

use thiserror::Error;

pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NO_RESULTS: i32 = 3;
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug, Error)]
pub enum TmdbError {
    /// The body decoded to an error envelope (`status_code` present).
    #[error("{message} (TMDB status {status_code})")]
    Api { status_code: i64, message: String },

    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} -> HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    pub fn is_transport(&self) -> bool {
        matches!(self, TmdbError::Transport { .. } | TmdbError::Status { .. })
    }
}

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("zero results")]
    NoResults,

    #[error("no selection made")]
    NoSelection,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("key file {0} has an empty first line")]
    EmptyKeyFile(String),
}

pub fn exit_code(err: &anyhow::Error) -> i32 {
    let no_results = err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<SelectError>(), Some(SelectError::NoResults)));
    if no_results {
        EXIT_NO_RESULTS
    } else {
        EXIT_FAILURE
    }
}

/// Lines to show on stderr for a fatal error, paired with the process exit code.
pub fn failure_report(err: &anyhow::Error) -> (Vec<String>, i32) {
    let transport = err
        .chain()
        .any(|cause| cause.downcast_ref::<TmdbError>().is_some_and(TmdbError::is_transport));
    let mut lines = Vec::new();
    if transport {
        lines.push("TMDB request failed".to_string());
    }
    lines.push(format!("Error: {err:#}"));
    (lines, exit_code(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn transport_failures_are_announced() {
        let err = anyhow::Error::new(TmdbError::Status {
            endpoint: "/search/movie?query=Heat".into(),
            status: 502,
            body: "bad gateway".into(),
        });
        let (lines, code) = failure_report(&err);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(lines[0], "TMDB request failed");
        assert!(lines[1].starts_with("Error: /search/movie?query=Heat -> HTTP 502"));
    }

    #[test]
    fn api_errors_report_only_the_message() {
        let err = anyhow::Error::new(TmdbError::Api {
            status_code: 34,
            message: "The resource you requested could not be found.".into(),
        });
        let (lines, code) = failure_report(&err);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("could not be found"));
    }

    #[test]
    fn no_results_report_exits_three() {
        let (lines, code) = failure_report(&anyhow::Error::new(SelectError::NoResults));
        assert_eq!(code, EXIT_NO_RESULTS);
        assert_eq!(lines, vec!["Error: zero results".to_string()]);
    }

    #[test]
    fn no_results_maps_to_three() {
        let err = anyhow::Error::new(SelectError::NoResults);
        assert_eq!(exit_code(&err), EXIT_NO_RESULTS);
    }

    #[test]
    fn wrapped_no_results_still_maps_to_three() {
        let err: anyhow::Result<()> =
            Err(SelectError::NoResults).context("selecting result");
        assert_eq!(exit_code(&err.unwrap_err()), EXIT_NO_RESULTS);
    }

    #[test]
    fn api_errors_map_to_one() {
        let err = anyhow::Error::new(TmdbError::Api {
            status_code: 7,
            message: "Invalid API key: You must be granted a valid key.".into(),
        });
        assert_eq!(exit_code(&err), EXIT_FAILURE);
        assert!(err.to_string().starts_with("Invalid API key"));
    }

    #[test]
    fn status_errors_count_as_transport() {
        let err = TmdbError::Status {
            endpoint: "/search/movie".into(),
            status: 502,
            body: "bad gateway".into(),
        };
        assert!(err.is_transport());
        let api = TmdbError::Api {
            status_code: 34,
            message: "not found".into(),
        };
        assert!(!api.is_transport());
    }
}
