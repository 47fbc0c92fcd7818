#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Map surface and location provider abstractions.
//!
//! The overlay core is render-agnostic: it drives any rendering host
//! through the [`MapSurface`] trait and obtains the initial position
//! through the [`LocationProvider`] trait. [`HeadlessSurface`] is the
//! in-repo implementation — an in-memory surface that records every
//! command, used by the CLI and the test suites.

pub mod headless;
pub mod location;

pub use headless::HeadlessSurface;
pub use location::{
    LocationError, LocationProvider, PositionRequest, StaticLocationProvider,
    UnavailableLocationProvider,
};

use safety_map_overlay_models::{Coordinate, MarkerColor};
use uuid::Uuid;

/// Opaque reference to a marker currently rendered on a map surface.
///
/// Minted by the surface on `show_marker` and invalidated by
/// `remove_marker`. The overlay core never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(Uuid);

impl MarkerHandle {
    /// Mints a fresh handle. Intended for [`MapSurface`] implementations.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MarkerHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendering host the overlay can drive.
///
/// All calls run on the single event-processing thread; implementations
/// need no internal synchronization.
pub trait MapSurface {
    /// Creates the map view centered at `center` with the given zoom and
    /// style reference.
    fn create_map(&mut self, center: Coordinate, zoom: f64, style: &str);

    /// Adds the navigation control (zoom/rotate widget).
    fn add_navigation_control(&mut self);

    /// Renders a marker and returns the opaque handle to the rendered
    /// object.
    fn show_marker(&mut self, position: Coordinate, color: MarkerColor, popup: &str)
    -> MarkerHandle;

    /// Removes a previously shown marker. Unknown handles are ignored.
    fn remove_marker(&mut self, handle: MarkerHandle);
}
