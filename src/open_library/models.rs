use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

pub const DEFAULT_API_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_COVERS_BASE_URL: &str = "https://covers.openlibrary.org";
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150?text=No+Cover";

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_YEAR: &str = "Unknown Year";

/// Body of `GET /search.json`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub docs: Vec<SearchDoc>,
    #[serde(rename = "numFound", alias = "num_found", default)]
    pub num_found: Option<u64>,
}

/// One document from the search response. Every field may be missing, and a
/// field of an unexpected type is read as missing rather than failing the
/// whole response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SearchDoc {
    #[serde(default, deserialize_with = "lenient_text")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_names")]
    pub author_name: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub first_publish_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_i: Option<CoverId>,
}

/// Any value that does not fit `T` becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Strings as-is, numbers in their decimal form.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Keeps the string entries of a list and skips the rest.
fn lenient_names<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Whole numbers, including ones sent as `1965.0`.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    })
}

/// Cover identifier, sent as a number by the live API but treated as opaque.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CoverId {
    Number(i64),
    Text(String),
}

impl CoverId {
    /// `0` and `""` mean "no cover".
    pub fn is_present(&self) -> bool {
        match self {
            CoverId::Number(n) => *n != 0,
            CoverId::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for CoverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverId::Number(n) => write!(f, "{}", n),
            CoverId::Text(s) => f.write_str(s),
        }
    }
}

/// Base URLs used to turn a document into links
#[derive(Debug, Clone, PartialEq)]
pub struct LinkBases {
    pub site: String,
    pub covers: String,
}

impl Default for LinkBases {
    fn default() -> Self {
        Self {
            site: DEFAULT_API_BASE_URL.to_string(),
            covers: DEFAULT_COVERS_BASE_URL.to_string(),
        }
    }
}

impl LinkBases {
    pub fn cover_url(&self, cover: Option<&CoverId>) -> String {
        match cover.filter(|c| c.is_present()) {
            Some(id) => format!("{}/b/id/{}-M.jpg", self.covers.trim_end_matches('/'), id),
            None => PLACEHOLDER_COVER_URL.to_string(),
        }
    }

    /// Keys come back as paths (`/works/OL45804W`), so they are appended as-is.
    pub fn detail_url(&self, key: &str) -> String {
        format!("{}{}", self.site.trim_end_matches('/'), key)
    }
}

/// A search document normalized for display
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub key: String,
    pub title: String,
    pub authors: String,
    pub year: String,
    pub cover_url: String,
    pub detail_url: String,
}

impl BookRecord {
    pub fn from_doc(doc: SearchDoc, links: &LinkBases) -> Self {
        let title = doc
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        let authors = match doc.author_name {
            Some(names) if !names.is_empty() => names.join(", "),
            _ => UNKNOWN_AUTHOR.to_string(),
        };

        let year = doc
            .first_publish_year
            .filter(|y| *y != 0)
            .map(|y| y.to_string())
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string());

        let cover_url = links.cover_url(doc.cover_i.as_ref());
        let key = doc.key.unwrap_or_default();
        let detail_url = links.detail_url(&key);

        Self {
            key,
            title,
            authors,
            year,
            cover_url,
            detail_url,
        }
    }
}
