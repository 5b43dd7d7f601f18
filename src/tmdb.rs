use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::TmdbError;
use crate::models::{MediaKind, MediaRecord, Query};

#[async_trait]
pub trait TmdbApi: Send + Sync {
    /// First page of ranked search hits for `query`.
    async fn search(&self, query: &Query) -> Result<Vec<MediaRecord>>;
    /// Full record for `id`, with the comma-separated `append` sub-resources merged in.
    async fn detail(&self, kind: MediaKind, id: i64, append: &str) -> Result<MediaRecord>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MediaRecord>,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let user_agent = format!("tmdbget/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build TMDB HTTP client")?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    fn url_for(&self, endpoint: &str) -> String {
        let sep = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}api_key={}",
            self.base_url,
            endpoint,
            sep,
            urlencoding::encode(&self.api_key)
        )
    }

    /// `endpoint` never carries the key, so it is safe to log and to put in errors.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, TmdbError> {
        debug!(endpoint, "GET");
        let transport = |source: reqwest::Error| TmdbError::Transport {
            endpoint: endpoint.to_string(),
            source: source.without_url(),
        };
        let res = self
            .client
            .get(self.url_for(endpoint))
            .send()
            .await
            .map_err(transport)?;
        let status = res.status();
        let text = res.text().await.map_err(transport)?;
        debug!(endpoint, status = status.as_u16(), bytes = text.len(), "response");
        decode_envelope(endpoint, status.as_u16(), &text)
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn search(&self, query: &Query) -> Result<Vec<MediaRecord>> {
        let data: SearchResponse = self.get_json(&search_endpoint(query)).await?;
        Ok(data.results)
    }

    async fn detail(&self, kind: MediaKind, id: i64, append: &str) -> Result<MediaRecord> {
        let record = self.get_json(&detail_endpoint(kind, id, append)).await?;
        Ok(record)
    }
}

pub fn search_endpoint(query: &Query) -> String {
    let mut endpoint = format!(
        "/search/{}?query={}",
        query.kind.as_path(),
        urlencoding::encode(&query.title)
    );
    if let Some(year) = &query.year {
        endpoint.push_str("&year=");
        endpoint.push_str(&urlencoding::encode(year));
    }
    endpoint
}

pub fn detail_endpoint(kind: MediaKind, id: i64, append: &str) -> String {
    let mut endpoint = format!("/{}/{id}", kind.as_path());
    if !append.is_empty() {
        endpoint.push_str("?append_to_response=");
        endpoint.push_str(&urlencoding::encode(append));
    }
    endpoint
}

/// An error envelope (`status_code` present) wins over the transport status so the
/// API's own message reaches the user; other non-2xx bodies are transport failures.
pub(crate) fn decode_envelope<T: DeserializeOwned>(
    endpoint: &str,
    status: u16,
    body: &str,
) -> Result<T, TmdbError> {
    let success = (200..300).contains(&status);
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) if !success => {
            return Err(TmdbError::Status {
                endpoint: endpoint.to_string(),
                status,
                body: body.to_string(),
            })
        }
        Err(source) => {
            return Err(TmdbError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })
        }
    };

    if let Some(code) = value.get("status_code").filter(|v| !v.is_null()) {
        let message = value
            .get("status_message")
            .and_then(Value::as_str)
            .unwrap_or("TMDB returned an error without a message")
            .to_string();
        return Err(TmdbError::Api {
            status_code: code.as_i64().unwrap_or_default(),
            message,
        });
    }

    if !success {
        return Err(TmdbError::Status {
            endpoint: endpoint.to_string(),
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|source| TmdbError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
