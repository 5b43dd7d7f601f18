use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Tv,
}

const MOVIE_SUB_RESOURCES: &[&str] = &[
    "alternative_titles",
    "changes",
    "credits",
    "external_ids",
    "images",
    "keywords",
    "lists",
    "recommendations",
    "release_dates",
    "reviews",
    "similar",
    "translations",
    "videos",
    "watch/providers",
];

const TV_SUB_RESOURCES: &[&str] = &[
    "aggregate_credits",
    "alternative_titles",
    "changes",
    "content_ratings",
    "credits",
    "episode_groups",
    "external_ids",
    "images",
    "keywords",
    "recommendations",
    "reviews",
    "screened_theatrically",
    "similar",
    "translations",
    "videos",
    "watch/providers",
];

impl MediaKind {
    /// Path segment used by both `/search/{kind}` and `/{kind}/{id}`.
    pub fn as_path(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    pub fn title_field(&self) -> &'static str {
        match self {
            MediaKind::Movie => "title",
            MediaKind::Tv => "name",
        }
    }

    pub fn date_field(&self) -> &'static str {
        match self {
            MediaKind::Movie => "release_date",
            MediaKind::Tv => "first_air_date",
        }
    }

    /// Every sub-resource the detail endpoint can bundle through `append_to_response`.
    pub fn sub_resources(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Movie => MOVIE_SUB_RESOURCES,
            MediaKind::Tv => TV_SUB_RESOURCES,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub kind: MediaKind,
    pub title: String,
    pub year: Option<String>,
}

/// A search hit or detail payload. Only `id` is typed; everything else the API sends
/// (including appended sub-resources) is kept verbatim in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MediaRecord {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    pub fn title(&self, kind: MediaKind) -> &str {
        self.str_field(kind.title_field()).unwrap_or_default()
    }

    pub fn date(&self, kind: MediaKind) -> &str {
        self.str_field(kind.date_field()).unwrap_or_default()
    }

    pub fn overview(&self) -> &str {
        self.str_field("overview").unwrap_or_default()
    }
}
