//! Marker building.
//!
//! Turns a classified record into a renderable [`Marker`]: position,
//! a color from the per-layer palette, and a deterministic popup text
//! block. Building has no side effects — nothing touches the map surface
//! until the visibility controller shows the marker.

use std::collections::BTreeMap;

use safety_map_overlay_models::{CanonicalRecord, LayerId, Marker, MarkerColor};

/// Configurable LayerId → color mapping.
///
/// Starts from the fixed default palette (active threats red, past
/// threats orange, emergency calls purple) and lets callers override
/// individual layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerPalette {
    overrides: BTreeMap<LayerId, MarkerColor>,
}

impl LayerPalette {
    /// Creates the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the color for one layer.
    #[must_use]
    pub fn with_color(mut self, layer: LayerId, color: MarkerColor) -> Self {
        self.overrides.insert(layer, color);
        self
    }

    /// Returns the color for a layer.
    #[must_use]
    pub fn color_for(&self, layer: LayerId) -> MarkerColor {
        self.overrides
            .get(&layer)
            .copied()
            .unwrap_or_else(|| default_color(layer))
    }
}

/// The fixed default color per layer.
#[must_use]
pub const fn default_color(layer: LayerId) -> MarkerColor {
    match layer {
        LayerId::ActiveThreat => MarkerColor::Red,
        LayerId::PastThreat => MarkerColor::Orange,
        LayerId::EmergencyCalls => MarkerColor::Purple,
    }
}

/// Builds the renderable marker for a classified record.
#[must_use]
pub fn build(record: &CanonicalRecord, layer: LayerId, palette: &LayerPalette) -> Marker {
    Marker {
        layer,
        position: record.position(),
        color: palette.color_for(layer),
        popup: popup_content(record),
    }
}

/// Formats the deterministic popup text block for a record.
#[must_use]
pub fn popup_content(record: &CanonicalRecord) -> String {
    format!(
        "Date and Time: {}\nLocation: {}\nStatus: {}\nDescription: {}",
        record.time,
        record.location_name,
        record.status(),
        record.description,
    )
}

#[cfg(test)]
mod tests {
    use safety_map_overlay_models::{DEFAULT_DESCRIPTION, UNKNOWN_DATE_TIME};

    use super::*;

    fn record(active: bool) -> CanonicalRecord {
        CanonicalRecord {
            lon: -73.99,
            lat: 40.74,
            location_name: "5th Ave".to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            date: UNKNOWN_DATE_TIME.to_string(),
            time: UNKNOWN_DATE_TIME.to_string(),
            active,
        }
    }

    #[test]
    fn default_palette_matches_layer_colors() {
        let palette = LayerPalette::new();
        assert_eq!(palette.color_for(LayerId::ActiveThreat), MarkerColor::Red);
        assert_eq!(palette.color_for(LayerId::PastThreat), MarkerColor::Orange);
        assert_eq!(
            palette.color_for(LayerId::EmergencyCalls),
            MarkerColor::Purple
        );
    }

    #[test]
    fn palette_overrides_one_layer_only() {
        let palette = LayerPalette::new().with_color(LayerId::PastThreat, MarkerColor::Teal);
        assert_eq!(palette.color_for(LayerId::PastThreat), MarkerColor::Teal);
        assert_eq!(palette.color_for(LayerId::ActiveThreat), MarkerColor::Red);
    }

    #[test]
    fn builds_red_marker_with_active_status() {
        let marker = build(&record(true), LayerId::ActiveThreat, &LayerPalette::new());
        assert_eq!(marker.layer, LayerId::ActiveThreat);
        assert_eq!(marker.color, MarkerColor::Red);
        assert_eq!(marker.position.lon, -73.99);
        assert_eq!(marker.position.lat, 40.74);
        assert!(marker.popup.contains("Status: Active"));
    }

    #[test]
    fn popup_block_is_deterministic() {
        assert_eq!(
            popup_content(&record(false)),
            "Date and Time: Unknown\nLocation: 5th Ave\nStatus: Inactive\nDescription:  "
        );
    }
}
