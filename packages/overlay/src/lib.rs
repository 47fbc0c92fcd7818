#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Overlay core.
//!
//! Turns raw feed records into per-layer markers and keeps on-map
//! visibility synchronized with user toggles and asynchronous data
//! arrival:
//!
//! raw records → [`normalize()`] → [`classify()`] → [`marker::build`] →
//! [`LayerStore`] → [`VisibilityController`] → map surface.
//!
//! The store is the source of truth for what *exists* per layer; the
//! controller decides what is *shown*. Marker sets are rebuilt wholesale
//! on every data-ready event, while each layer's visibility flag is
//! mutated only by user toggles and therefore survives refreshes.

pub mod classify;
pub mod marker;
pub mod normalize;
pub mod pipeline;
pub mod store;
pub mod visibility;

pub use classify::classify;
pub use marker::LayerPalette;
pub use normalize::{MalformedRecordError, normalize, normalize_record};
pub use pipeline::build_layer_markers;
pub use store::{LayerStore, StoredMarker};
pub use visibility::{OverlayEvent, VisibilityController};
