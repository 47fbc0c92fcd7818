//! Feed → layers pipeline.
//!
//! Runs one feed's raw records through normalize → classify → build and
//! groups the resulting markers by layer, ready to hand to
//! [`VisibilityController::on_layer_data_ready`].
//!
//! [`VisibilityController::on_layer_data_ready`]: crate::visibility::VisibilityController::on_layer_data_ready

use std::collections::BTreeMap;

use safety_map_overlay_models::{LayerId, Marker, RawRecord, SourceCategory};

use crate::marker::LayerPalette;
use crate::{classify, marker, normalize};

/// Builds the per-layer marker sets for one feed's records.
///
/// Every layer the category rebuilds is present in the result even when
/// it ends up empty — a crime refresh with no active crimes still
/// replaces the active-threat layer wholesale with an empty set.
#[must_use]
pub fn build_layer_markers(
    raw: &[RawRecord],
    category: SourceCategory,
    palette: &LayerPalette,
) -> BTreeMap<LayerId, Vec<Marker>> {
    let mut layers: BTreeMap<LayerId, Vec<Marker>> = category
        .layers()
        .iter()
        .map(|layer| (*layer, Vec::new()))
        .collect();

    for record in normalize(raw) {
        let layer = classify(&record, category);
        let built = marker::build(&record, layer, palette);
        layers.entry(layer).or_default().push(built);
    }

    layers
}

#[cfg(test)]
mod tests {
    use safety_map_overlay_models::{MarkerColor, RawLocation};

    use super::*;

    fn crime(lon: f64, active: bool) -> RawRecord {
        RawRecord {
            location: Some(RawLocation {
                longitude: Some(lon),
                latitude: Some(40.74),
            }),
            location_name: Some("5th Ave".to_string()),
            active: Some(active),
            ..RawRecord::default()
        }
    }

    #[test]
    fn splits_crimes_by_active_flag() {
        let layers = build_layer_markers(
            &[crime(1.0, true), crime(2.0, false), crime(3.0, true)],
            SourceCategory::Crime,
            &LayerPalette::new(),
        );

        assert_eq!(layers[&LayerId::ActiveThreat].len(), 2);
        assert_eq!(layers[&LayerId::PastThreat].len(), 1);
        assert!(!layers.contains_key(&LayerId::EmergencyCalls));
    }

    #[test]
    fn rebuilt_layers_are_present_even_when_empty() {
        let layers = build_layer_markers(&[], SourceCategory::Crime, &LayerPalette::new());
        assert!(layers[&LayerId::ActiveThreat].is_empty());
        assert!(layers[&LayerId::PastThreat].is_empty());
    }

    #[test]
    fn end_to_end_active_crime_builds_red_active_marker() {
        let raw = RawRecord {
            location: Some(RawLocation {
                longitude: Some(-73.99),
                latitude: Some(40.74),
            }),
            location_name: Some("5th Ave".to_string()),
            active: Some(true),
            ..RawRecord::default()
        };

        let layers = build_layer_markers(&[raw], SourceCategory::Crime, &LayerPalette::new());
        let markers = &layers[&LayerId::ActiveThreat];
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].color, MarkerColor::Red);
        assert!(markers[0].popup.contains("Status: Active"));
        assert!(markers[0].popup.contains("Date and Time: Unknown"));
        assert!(markers[0].popup.contains("Description:  "));
    }

    #[test]
    fn malformed_records_are_dropped_not_fatal() {
        let layers = build_layer_markers(
            &[crime(1.0, false), RawRecord::default()],
            SourceCategory::Crime,
            &LayerPalette::new(),
        );
        assert_eq!(layers[&LayerId::PastThreat].len(), 1);
    }

    #[test]
    fn emergency_calls_land_in_one_purple_layer() {
        let layers = build_layer_markers(
            &[crime(1.0, true), crime(2.0, false)],
            SourceCategory::EmergencyCall,
            &LayerPalette::new(),
        );

        let markers = &layers[&LayerId::EmergencyCalls];
        assert_eq!(markers.len(), 2);
        assert!(
            markers
                .iter()
                .all(|marker| marker.color == MarkerColor::Purple)
        );
    }
}
