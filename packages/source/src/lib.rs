#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Feed loading for the safety map overlay.
//!
//! Two JSON feeds drive the overlay: one of crime records and one of
//! 911 emergency-call records. Each feed can live on disk or behind an
//! HTTP endpoint. The two loads are joined — both complete before the
//! records flow into normalization — and a failed feed degrades to an
//! empty record set with a warning, never a crash.

use std::path::PathBuf;

use safety_map_overlay_models::RawRecord;

/// Where a feed's JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document behind an HTTP(S) endpoint.
    Url(String),
}

impl FeedSource {
    /// Parses a CLI-style feed argument: anything starting with
    /// `http://` or `https://` is a URL, everything else a file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Errors that can occur while loading a feed.
#[derive(Debug, thiserror::Error)]
pub enum DataFetchError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Both feeds' records, ready for normalization.
///
/// A feed that failed to load is represented by an empty record set —
/// the affected layers simply receive no markers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeedBatch {
    /// Records from the crime feed.
    pub crimes: Vec<RawRecord>,
    /// Records from the emergency-call feed.
    pub calls: Vec<RawRecord>,
}

/// Loads and parses one feed.
///
/// # Errors
///
/// Returns [`DataFetchError`] if the file read, HTTP request, or JSON
/// parse fails.
pub async fn load_feed(source: &FeedSource) -> Result<Vec<RawRecord>, DataFetchError> {
    let body = match source {
        FeedSource::File(path) => tokio::fs::read_to_string(path).await?,
        FeedSource::Url(url) => reqwest::get(url).await?.error_for_status()?.text().await?,
    };
    Ok(serde_json::from_str(&body)?)
}

/// Loads the crime and emergency-call feeds, joined.
///
/// The two fetches run concurrently and both complete before this
/// returns. A failed feed is logged and degrades to an empty record set
/// (non-fatal).
pub async fn load_feeds(crimes: &FeedSource, calls: &FeedSource) -> FeedBatch {
    let (crimes_result, calls_result) = tokio::join!(load_feed(crimes), load_feed(calls));
    FeedBatch {
        crimes: records_or_empty(crimes_result, crimes),
        calls: records_or_empty(calls_result, calls),
    }
}

fn records_or_empty(
    result: Result<Vec<RawRecord>, DataFetchError>,
    source: &FeedSource,
) -> Vec<RawRecord> {
    match result {
        Ok(records) => {
            log::debug!("loaded {} records from {source}", records.len());
            records
        }
        Err(error) => {
            log::warn!("failed to load feed {source}: {error}");
            Vec::new()
        }
    }
}
