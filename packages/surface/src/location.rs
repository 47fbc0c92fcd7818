//! Location provider abstraction.
//!
//! The startup sequence requests a single fresh position fix through
//! [`LocationProvider`]. The request is bounded: callers wrap the call in
//! a hard timeout and fall back to a fixed coordinate when the provider
//! errors or the timeout fires, so map initialization never blocks on
//! location.

use std::time::Duration;

use async_trait::async_trait;
use safety_map_overlay_models::Coordinate;

/// Default bounded wait for a position fix.
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Errors from a location provider.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// The provider did not produce a fix within the bounded wait.
    #[error("location request timed out after {0:?}")]
    Timeout(Duration),

    /// The provider failed outright (permissions, no signal, ...).
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Parameters for a position fix request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    /// Request the most accurate fix the provider can produce.
    pub high_accuracy: bool,
    /// Bounded wait before the request is abandoned.
    pub timeout: Duration,
    /// Maximum age of a cached fix the provider may return. Zero means
    /// a cached result is never accepted — always request fresh.
    pub max_cache_age: Duration,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_LOCATION_TIMEOUT,
            max_cache_age: Duration::ZERO,
        }
    }
}

/// A source of position fixes.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Requests a single position fix.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] if the provider cannot produce a fix.
    async fn current_position(&self, request: &PositionRequest)
    -> Result<Coordinate, LocationError>;
}

/// A provider that always returns the same coordinate. Used by the CLI
/// to simulate a position fix.
#[derive(Debug, Clone, Copy)]
pub struct StaticLocationProvider(pub Coordinate);

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> Result<Coordinate, LocationError> {
        Ok(self.0)
    }
}

/// A provider with no location source. Sleeps out the full bounded wait
/// and then reports a timeout, like a geolocation request that never
/// gets an answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocationProvider;

#[async_trait]
impl LocationProvider for UnavailableLocationProvider {
    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> Result<Coordinate, LocationError> {
        tokio::time::sleep(request.timeout).await;
        Err(LocationError::Timeout(request.timeout))
    }
}
