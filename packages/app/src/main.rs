#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Interactive CLI for the safety map overlay.
//!
//! Runs the startup sequence against the in-memory [`HeadlessSurface`],
//! then presents the layer checkboxes as an interactive menu: each
//! selection toggles that layer and reports what is on the map.

use clap::Parser;
use dialoguer::Select;
use safety_map_app::{AppConfig, position_request, start};
use safety_map_overlay_models::Coordinate;
use safety_map_source::FeedSource;
use safety_map_surface::{
    HeadlessSurface, LocationProvider, StaticLocationProvider, UnavailableLocationProvider,
};

/// Safety map overlay: crime, past-threat, and 911-call layers with
/// per-layer visibility toggles.
#[derive(Debug, Parser)]
#[command(name = "safety_map_app")]
struct Args {
    /// Crime feed (file path or http(s) URL).
    #[arg(long, default_value = "packages/app/data/crimes.json")]
    crimes: String,

    /// Emergency-call feed (file path or http(s) URL).
    #[arg(long, default_value = "packages/app/data/emergency_calls.json")]
    calls: String,

    /// Bounded wait for the location fix, in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    location_timeout_ms: u64,

    /// Simulated position fix as `lon,lat`. Without it the location
    /// flow times out and the map centers on the fallback coordinate.
    #[arg(long, value_parser = parse_coordinate)]
    position: Option<Coordinate>,
}

fn parse_coordinate(raw: &str) -> Result<Coordinate, String> {
    let (lon, lat) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `lon,lat`, got `{raw}`"))?;
    Ok(Coordinate {
        lon: lon
            .trim()
            .parse()
            .map_err(|error| format!("bad longitude: {error}"))?,
        lat: lat
            .trim()
            .parse()
            .map_err(|error| format!("bad latitude: {error}"))?,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let provider: Box<dyn LocationProvider> = args.position.map_or_else(
        || Box::new(UnavailableLocationProvider) as Box<dyn LocationProvider>,
        |position| Box::new(StaticLocationProvider(position)),
    );
    let config = AppConfig {
        crime_feed: FeedSource::parse(&args.crimes),
        call_feed: FeedSource::parse(&args.calls),
        position: position_request(args.location_timeout_ms),
    };

    let mut bootstrap = start(HeadlessSurface::new(), provider.as_ref(), &config).await;
    if let Some(warning) = &bootstrap.warning {
        println!("! {warning}");
    }
    let controller = &mut bootstrap.controller;

    if let Some(center) = controller.surface().center() {
        println!(
            "Map centered at ({:.6}, {:.6}), zoom {}",
            center.lon,
            center.lat,
            controller.surface().zoom().unwrap_or_default()
        );
    }
    println!();

    loop {
        let toggles = controller.toggles();
        let mut items: Vec<String> = toggles
            .iter()
            .map(|toggle| {
                let mark = if toggle.checked { 'x' } else { ' ' };
                let count = controller.store().len(toggle.id);
                format!("[{mark}] {} ({count} markers)", toggle.label)
            })
            .collect();
        items.push("Quit".to_string());

        let selection = Select::new()
            .with_prompt("Surroundings")
            .items(&items)
            .default(0)
            .interact()?;

        if selection == toggles.len() {
            break;
        }

        let layer = toggles[selection].id;
        let shown = controller.toggle(layer);
        println!(
            "{} {} — {} markers on the map",
            if shown { "Showing" } else { "Hiding" },
            toggles[selection].label,
            controller.surface().rendered_count(),
        );
    }

    Ok(())
}
