#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Startup sequence for the safety map overlay.
//!
//! Two independent asynchronous flows run at startup, joined but
//! unordered with respect to each other:
//!
//! - the location fix, bounded by a hard timeout, falling back to a
//!   fixed coordinate when the provider errors or times out;
//! - the data flow, loading the crime and emergency-call feeds jointly
//!   and pushing the built markers into the visibility controller.
//!
//! Map initialization always completes — a missing location fix only
//! costs the user their own position. The warning travels out through
//! [`Bootstrap::warning`] so the caller surfaces it exactly once.

use std::time::Duration;

use safety_map_overlay::{LayerPalette, VisibilityController, build_layer_markers};
use safety_map_overlay_models::{Coordinate, MarkerColor, SourceCategory};
use safety_map_source::{FeedSource, load_feeds};
use safety_map_surface::{LocationError, LocationProvider, MapSurface, PositionRequest};

/// Where the map centers when no location fix arrives (the Flatiron
/// building).
pub const FALLBACK_CENTER: Coordinate = Coordinate {
    lon: -73.989699,
    lat: 40.741061,
};

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 14.0;

/// Map style reference handed to the surface.
pub const MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v12";

/// Popup text on the user's own marker.
pub const SELF_MARKER_POPUP: &str = " My Location ";

/// Startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The crime feed.
    pub crime_feed: FeedSource,
    /// The emergency-call feed.
    pub call_feed: FeedSource,
    /// Parameters for the position fix request.
    pub position: PositionRequest,
}

/// Outcome of the position fix, always usable.
#[derive(Debug, Clone, PartialEq)]
pub struct StartPosition {
    /// Where to center the map.
    pub center: Coordinate,
    /// User-facing warning when the fallback path was taken. Present at
    /// most once per startup.
    pub warning: Option<String>,
}

/// A started overlay: the controller plus any startup warning to
/// surface to the user.
pub struct Bootstrap<S: MapSurface> {
    /// The visibility controller driving the surface.
    pub controller: VisibilityController<S>,
    /// User-facing warning from the location flow, if any.
    pub warning: Option<String>,
}

/// Requests a fresh position fix with a hard timeout cap.
///
/// On provider error or timeout the fallback coordinate is returned
/// unconditionally, with a warning message for the user.
pub async fn resolve_start_position(
    provider: &dyn LocationProvider,
    request: &PositionRequest,
) -> StartPosition {
    let fix = match tokio::time::timeout(request.timeout, provider.current_position(request)).await
    {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout(request.timeout)),
    };

    match fix {
        Ok(center) => StartPosition {
            center,
            warning: None,
        },
        Err(error) => StartPosition {
            center: FALLBACK_CENTER,
            warning: Some(format!(
                "Problem getting location ({error}). Check your location permissions; \
                 showing the default area instead."
            )),
        },
    }
}

/// Runs the full startup sequence and returns the live controller.
///
/// The location fix and the joined feed load run concurrently; they
/// update disjoint state. All layers start hidden — markers are stored
/// but nothing is shown until the user toggles a layer.
pub async fn start<S: MapSurface>(
    surface: S,
    provider: &dyn LocationProvider,
    config: &AppConfig,
) -> Bootstrap<S> {
    let (position, batch) = tokio::join!(
        resolve_start_position(provider, &config.position),
        load_feeds(&config.crime_feed, &config.call_feed),
    );

    let mut controller = VisibilityController::new(surface);
    {
        let surface = controller.surface_mut();
        surface.create_map(position.center, DEFAULT_ZOOM, MAP_STYLE);
        surface.add_navigation_control();
        // the self marker marks an actual fix; the fallback center is
        // not where the user is
        if position.warning.is_none() {
            surface.show_marker(position.center, MarkerColor::Teal, SELF_MARKER_POPUP);
        }
    }

    let palette = LayerPalette::new();
    let feeds = [
        (SourceCategory::Crime, &batch.crimes),
        (SourceCategory::EmergencyCall, &batch.calls),
    ];
    for (category, records) in feeds {
        for (layer, markers) in build_layer_markers(records, category, &palette) {
            controller.on_layer_data_ready(layer, markers);
        }
    }

    Bootstrap {
        controller,
        warning: position.warning,
    }
}

/// Convenience for the default 10 s position request with a custom
/// timeout.
#[must_use]
pub fn position_request(timeout_ms: u64) -> PositionRequest {
    PositionRequest {
        timeout: Duration::from_millis(timeout_ms),
        ..PositionRequest::default()
    }
}
