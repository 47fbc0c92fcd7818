//! Visibility control.
//!
//! Per-layer `Hidden`/`Shown` state machine reconciling the layer store
//! against the map surface. Every layer starts `Hidden`. Toggling flips
//! the state and shows or hides the stored markers; a data refresh for a
//! `Shown` layer re-shows the rebuilt markers immediately, so visibility
//! outlives the refresh.
//!
//! Invariants: a marker is never shown twice without an intervening
//! hide, and no marker keeps a stale handle after it is hidden or
//! discarded.

use std::collections::BTreeMap;

use safety_map_overlay_models::{LayerId, LayerToggle, Marker};
use safety_map_surface::MapSurface;

use crate::store::LayerStore;

/// State change notifications for rendering layers.
///
/// The core is render-agnostic: anything that wants to react to toggle
/// or refresh activity subscribes here instead of the core knowing about
/// a UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// A layer's visibility flag flipped.
    VisibilityChanged {
        /// The layer that changed.
        layer: LayerId,
        /// The new visibility.
        visible: bool,
    },
    /// A layer's marker set was rebuilt wholesale.
    LayerReplaced {
        /// The layer that was rebuilt.
        layer: LayerId,
        /// How many markers the layer now holds.
        marker_count: usize,
    },
}

/// All mutation happens on the single event-processing thread, so
/// listeners are plain boxed closures.
type Listener = Box<dyn FnMut(&OverlayEvent)>;

/// Owns the layer store and the per-layer visibility flags, and drives
/// the map surface to match.
pub struct VisibilityController<S: MapSurface> {
    surface: S,
    store: LayerStore,
    visible: BTreeMap<LayerId, bool>,
    listeners: Vec<Listener>,
}

impl<S: MapSurface> VisibilityController<S> {
    /// Creates a controller with every layer `Hidden` and an empty
    /// store.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            store: LayerStore::new(),
            visible: LayerId::all().iter().map(|layer| (*layer, false)).collect(),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for [`OverlayEvent`]s.
    pub fn subscribe(&mut self, listener: impl FnMut(&OverlayEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns whether a layer is currently `Shown`.
    #[must_use]
    pub fn is_visible(&self, layer: LayerId) -> bool {
        self.visible.get(&layer).copied().unwrap_or(false)
    }

    /// Projects the controller state onto the user-facing toggle
    /// surface: one `{id, label, checked}` row per layer, in menu order.
    #[must_use]
    pub fn toggles(&self) -> Vec<LayerToggle> {
        LayerId::all()
            .iter()
            .map(|layer| LayerToggle {
                id: *layer,
                label: layer.label().to_string(),
                checked: self.is_visible(*layer),
            })
            .collect()
    }

    /// Read access to the layer store.
    #[must_use]
    pub const fn store(&self) -> &LayerStore {
        &self.store
    }

    /// Read access to the map surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the map surface, for boundary work like the
    /// initial view and the self marker.
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Flips a layer between `Hidden` and `Shown`, reconciling the
    /// surface, and returns the new visibility.
    ///
    /// Safe to fire repeatedly: toggling twice restores the original
    /// state with zero stale handles.
    pub fn toggle(&mut self, layer: LayerId) -> bool {
        let show = !self.is_visible(layer);
        self.visible.insert(layer, show);
        if show {
            self.show_layer(layer);
        } else {
            self.hide_layer(layer);
        }
        self.emit(&OverlayEvent::VisibilityChanged {
            layer,
            visible: show,
        });
        show
    }

    /// Handles a data-ready event: replaces the layer's marker set
    /// wholesale and, if the layer is `Shown`, immediately shows the new
    /// markers. The visibility flag itself is never touched here.
    pub fn on_layer_data_ready(&mut self, layer: LayerId, markers: Vec<Marker>) {
        let marker_count = markers.len();
        let released = self.store.replace_layer(layer, markers);
        for handle in released {
            self.surface.remove_marker(handle);
        }
        if self.is_visible(layer) {
            self.show_layer(layer);
        }
        self.emit(&OverlayEvent::LayerReplaced {
            layer,
            marker_count,
        });
    }

    /// Shows every stored marker of the layer that is not already on the
    /// surface. The handle guard prevents double-shows.
    fn show_layer(&mut self, layer: LayerId) {
        for stored in self.store.markers_mut(layer) {
            if stored.handle.is_none() {
                stored.handle = Some(self.surface.show_marker(
                    stored.marker.position,
                    stored.marker.color,
                    &stored.marker.popup,
                ));
            }
        }
    }

    /// Hides every shown marker of the layer and clears the handles.
    fn hide_layer(&mut self, layer: LayerId) {
        for stored in self.store.markers_mut(layer) {
            if let Some(handle) = stored.handle.take() {
                self.surface.remove_marker(handle);
            }
        }
    }

    fn emit(&mut self, event: &OverlayEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}
