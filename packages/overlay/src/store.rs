//! Layer store.
//!
//! Source of truth for which markers *exist* per layer, independent of
//! whether they are currently shown. Marker sets are replaced wholesale
//! — at most one sequence per layer, last write wins, no accumulation
//! across refreshes.

use std::collections::BTreeMap;

use safety_map_overlay_models::{LayerId, Marker};
use safety_map_surface::MarkerHandle;

/// A stored marker paired with its on-surface handle.
///
/// The handle is present only while the marker is shown; the map surface
/// owns the rendered object behind it.
#[derive(Debug, Clone)]
pub struct StoredMarker {
    /// The marker data.
    pub marker: Marker,
    /// Handle to the rendered object, while shown.
    pub handle: Option<MarkerHandle>,
}

/// Per-layer ordered marker sets.
#[derive(Debug, Default)]
pub struct LayerStore {
    layers: BTreeMap<LayerId, Vec<StoredMarker>>,
}

impl LayerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces the full marker set for a layer.
    ///
    /// Returns the live handles stripped from the discarded markers so
    /// the caller can release them on the surface.
    pub fn replace_layer(&mut self, layer: LayerId, markers: Vec<Marker>) -> Vec<MarkerHandle> {
        let stored = markers
            .into_iter()
            .map(|marker| StoredMarker {
                marker,
                handle: None,
            })
            .collect();
        self.layers
            .insert(layer, stored)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|discarded| discarded.handle)
            .collect()
    }

    /// Returns the layer's markers, in insertion order.
    #[must_use]
    pub fn markers(&self, layer: LayerId) -> &[StoredMarker] {
        self.layers.get(&layer).map_or(&[], Vec::as_slice)
    }

    /// Mutable access for the visibility controller to attach and clear
    /// handles.
    pub(crate) fn markers_mut(&mut self, layer: LayerId) -> &mut [StoredMarker] {
        self.layers.get_mut(&layer).map_or(&mut [], Vec::as_mut_slice)
    }

    /// Returns how many markers the layer holds.
    #[must_use]
    pub fn len(&self, layer: LayerId) -> usize {
        self.markers(layer).len()
    }

    /// Returns `true` if the layer holds no markers.
    #[must_use]
    pub fn is_empty(&self, layer: LayerId) -> bool {
        self.markers(layer).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use safety_map_overlay_models::{Coordinate, MarkerColor};

    use super::*;

    fn marker(layer: LayerId, lon: f64) -> Marker {
        Marker {
            layer,
            position: Coordinate { lon, lat: 40.74 },
            color: MarkerColor::Red,
            popup: String::new(),
        }
    }

    #[test]
    fn last_write_wins() {
        let mut store = LayerStore::new();
        store.replace_layer(LayerId::ActiveThreat, vec![marker(LayerId::ActiveThreat, 1.0)]);
        store.replace_layer(
            LayerId::ActiveThreat,
            vec![
                marker(LayerId::ActiveThreat, 2.0),
                marker(LayerId::ActiveThreat, 3.0),
            ],
        );

        let lons: Vec<f64> = store
            .markers(LayerId::ActiveThreat)
            .iter()
            .map(|stored| stored.marker.position.lon)
            .collect();
        assert_eq!(lons, vec![2.0, 3.0]);
    }

    #[test]
    fn replace_returns_live_handles_of_discarded_markers() {
        let mut store = LayerStore::new();
        store.replace_layer(
            LayerId::PastThreat,
            vec![
                marker(LayerId::PastThreat, 1.0),
                marker(LayerId::PastThreat, 2.0),
            ],
        );

        let shown = MarkerHandle::new();
        store.markers_mut(LayerId::PastThreat)[0].handle = Some(shown);

        let released = store.replace_layer(LayerId::PastThreat, vec![]);
        assert_eq!(released, vec![shown]);
        assert!(store.is_empty(LayerId::PastThreat));
    }

    #[test]
    fn layers_are_independent() {
        let mut store = LayerStore::new();
        store.replace_layer(LayerId::ActiveThreat, vec![marker(LayerId::ActiveThreat, 1.0)]);
        store.replace_layer(
            LayerId::EmergencyCalls,
            vec![marker(LayerId::EmergencyCalls, 2.0)],
        );

        assert_eq!(store.len(LayerId::ActiveThreat), 1);
        assert_eq!(store.len(LayerId::EmergencyCalls), 1);
        assert!(store.is_empty(LayerId::PastThreat));
    }

    #[test]
    fn unknown_layer_reads_as_empty() {
        let store = LayerStore::new();
        assert!(store.markers(LayerId::EmergencyCalls).is_empty());
        assert_eq!(store.len(LayerId::EmergencyCalls), 0);
    }
}
