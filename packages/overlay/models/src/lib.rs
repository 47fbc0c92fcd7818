#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Overlay data model types.
//!
//! Defines the shapes flowing through the overlay pipeline: the lenient
//! [`RawRecord`] as it arrives from a data feed, the fully-populated
//! [`CanonicalRecord`] produced by normalization, the fixed [`LayerId`]
//! set, and the renderable [`Marker`].

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Default description for records that arrive without one.
pub const DEFAULT_DESCRIPTION: &str = " ";
/// Default date/time string for records that arrive without one.
pub const UNKNOWN_DATE_TIME: &str = "Unknown";
/// Default location name for records that arrive without one.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// A WGS84 longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

/// Nested location object as it appears in the raw feeds.
///
/// Both fields are optional — a record missing either coordinate is
/// malformed and gets skipped during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLocation {
    /// Longitude in degrees, if present.
    pub longitude: Option<f64>,
    /// Latitude in degrees, if present.
    pub latitude: Option<f64>,
}

/// A record exactly as it arrives from a data feed.
///
/// Every field is optional and unknown fields are ignored, so arbitrary
/// or incomplete feed payloads never fail deserialization. Strictness
/// lives in normalization, not parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecord {
    /// Nested coordinate object. Required for the record to survive
    /// normalization.
    pub location: Option<RawLocation>,
    /// Human-readable place name (e.g., "5th Ave").
    pub location_name: Option<String>,
    /// Free-text description of the incident.
    pub description: Option<String>,
    /// Date string as provided by the feed.
    pub date: Option<String>,
    /// Time string as provided by the feed.
    pub time: Option<String>,
    /// Whether the incident is currently active.
    pub active: Option<bool>,
}

/// A feed record normalized to the canonical schema.
///
/// Every field is present and typed after normalization, regardless of
/// how incomplete the [`RawRecord`] was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Human-readable place name. Defaults to [`UNKNOWN_LOCATION`].
    pub location_name: String,
    /// Incident description. Defaults to [`DEFAULT_DESCRIPTION`].
    pub description: String,
    /// Date string. Defaults to [`UNKNOWN_DATE_TIME`].
    pub date: String,
    /// Time string. Defaults to [`UNKNOWN_DATE_TIME`].
    pub time: String,
    /// Whether the incident is currently active. Defaults to `false`.
    pub active: bool,
}

impl CanonicalRecord {
    /// Returns the record's position as a [`Coordinate`].
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        Coordinate {
            lon: self.lon,
            lat: self.lat,
        }
    }

    /// Returns the human status string rendered in marker popups.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }
}

/// Which feed a record came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SourceCategory {
    /// The crime feed.
    Crime,
    /// The 911 emergency-call feed.
    EmergencyCall,
}

impl SourceCategory {
    /// Returns the layers this feed rebuilds on every data-ready event.
    ///
    /// A crime refresh rebuilds both threat layers wholesale, even when
    /// one of them ends up empty.
    #[must_use]
    pub const fn layers(self) -> &'static [LayerId] {
        match self {
            Self::Crime => &[LayerId::ActiveThreat, LayerId::PastThreat],
            Self::EmergencyCall => &[LayerId::EmergencyCalls],
        }
    }
}

/// Identity of an overlay layer.
///
/// Serializes to the camelCase ids the toggle surface uses
/// (`"activeThreat"`, `"pastThreat"`, `"emergencyCalls"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum LayerId {
    /// Crimes flagged as currently active.
    ActiveThreat,
    /// Crimes no longer active.
    PastThreat,
    /// 911 emergency calls.
    EmergencyCalls,
}

impl LayerId {
    /// Returns all layers, in toggle-menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::ActiveThreat, Self::PastThreat, Self::EmergencyCalls]
    }

    /// Returns the human-readable label shown next to the layer's
    /// checkbox.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ActiveThreat => "Active Threats",
            Self::PastThreat => "Past Threats",
            Self::EmergencyCalls => "911 Calls",
        }
    }
}

/// Marker colors in the overlay palette.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MarkerColor {
    /// Active threats.
    Red,
    /// Past threats.
    Orange,
    /// Emergency calls.
    Purple,
    /// The user's own location.
    Teal,
}

/// A renderable marker built from a classified record.
///
/// This is pure data — the opaque on-surface handle lives alongside the
/// marker in the layer store, present only while the marker is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// The layer this marker belongs to.
    pub layer: LayerId,
    /// Where on the map the marker sits.
    pub position: Coordinate,
    /// Marker color from the per-layer palette.
    pub color: MarkerColor,
    /// Deterministic popup text block.
    pub popup: String,
}

/// One entry of the user-facing toggle surface: a checkbox row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerToggle {
    /// The layer this checkbox controls.
    pub id: LayerId,
    /// Label rendered next to the checkbox.
    pub label: String,
    /// Whether the layer is currently shown.
    pub checked: bool,
}
