//! In-memory [`MapSurface`] implementation.
//!
//! Records every command it receives so callers can inspect exactly what
//! would be on screen. The CLI uses it as its rendering host and the
//! overlay test suites use it as their recording double.

use std::collections::HashMap;

use safety_map_overlay_models::{Coordinate, MarkerColor};

use crate::{MapSurface, MarkerHandle};

/// A marker currently rendered on the headless surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMarker {
    /// Where the marker sits.
    pub position: Coordinate,
    /// The marker's color.
    pub color: MarkerColor,
    /// The popup text attached to the marker.
    pub popup: String,
}

/// An in-memory map surface that records every command.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    view: Option<(Coordinate, f64, String)>,
    navigation_controls: usize,
    rendered: HashMap<MarkerHandle, RenderedMarker>,
    removed: usize,
}

impl HeadlessSurface {
    /// Creates an empty surface with no view and no markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current map center, if the map has been created.
    #[must_use]
    pub fn center(&self) -> Option<Coordinate> {
        self.view.as_ref().map(|(center, _, _)| *center)
    }

    /// Returns the current zoom level, if the map has been created.
    #[must_use]
    pub fn zoom(&self) -> Option<f64> {
        self.view.as_ref().map(|(_, zoom, _)| *zoom)
    }

    /// Returns the style reference the map was created with.
    #[must_use]
    pub fn style(&self) -> Option<&str> {
        self.view.as_ref().map(|(_, _, style)| style.as_str())
    }

    /// Returns how many navigation controls have been added.
    #[must_use]
    pub const fn navigation_controls(&self) -> usize {
        self.navigation_controls
    }

    /// Returns the number of markers currently rendered.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered.len()
    }

    /// Returns the marker behind `handle`, if it is still rendered.
    #[must_use]
    pub fn rendered(&self, handle: MarkerHandle) -> Option<&RenderedMarker> {
        self.rendered.get(&handle)
    }

    /// Returns the markers currently rendered, in no particular order.
    pub fn rendered_markers(&self) -> impl Iterator<Item = &RenderedMarker> {
        self.rendered.values()
    }

    /// Returns how many markers rendered with the given color.
    #[must_use]
    pub fn rendered_with_color(&self, color: MarkerColor) -> usize {
        self.rendered
            .values()
            .filter(|marker| marker.color == color)
            .count()
    }

    /// Returns the total number of `remove_marker` calls that hit a live
    /// handle.
    #[must_use]
    pub const fn removed_count(&self) -> usize {
        self.removed
    }
}

impl MapSurface for HeadlessSurface {
    fn create_map(&mut self, center: Coordinate, zoom: f64, style: &str) {
        self.view = Some((center, zoom, style.to_string()));
    }

    fn add_navigation_control(&mut self) {
        self.navigation_controls += 1;
    }

    fn show_marker(
        &mut self,
        position: Coordinate,
        color: MarkerColor,
        popup: &str,
    ) -> MarkerHandle {
        let handle = MarkerHandle::new();
        self.rendered.insert(
            handle,
            RenderedMarker {
                position,
                color,
                popup: popup.to_string(),
            },
        );
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        if self.rendered.remove(&handle).is_some() {
            self.removed += 1;
        } else {
            log::warn!("remove_marker called with unknown handle {handle:?}");
        }
    }
}
