//! Record normalization.
//!
//! Converts lenient [`RawRecord`]s into fully-populated
//! [`CanonicalRecord`]s. The nested coordinate pair is the only required
//! input; every other field gets a documented default. A record missing
//! its coordinates is skipped, never fatal to the batch.

use safety_map_overlay_models::{
    CanonicalRecord, DEFAULT_DESCRIPTION, RawRecord, UNKNOWN_DATE_TIME, UNKNOWN_LOCATION,
};

/// Error for a record that lacks the required coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecordError {
    /// The record's location name, when it had one, for log context.
    pub location_name: Option<String>,
}

impl std::fmt::Display for MalformedRecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location_name {
            Some(name) => write!(f, "record at \"{name}\" is missing location coordinates"),
            None => write!(f, "record is missing location coordinates"),
        }
    }
}

impl std::error::Error for MalformedRecordError {}

/// Normalizes a single raw record.
///
/// # Errors
///
/// Returns [`MalformedRecordError`] if the record lacks
/// `location.longitude` or `location.latitude`.
pub fn normalize_record(raw: &RawRecord) -> Result<CanonicalRecord, MalformedRecordError> {
    let malformed = || MalformedRecordError {
        location_name: raw.location_name.clone(),
    };
    let location = raw.location.ok_or_else(malformed)?;
    let lon = location.longitude.ok_or_else(malformed)?;
    let lat = location.latitude.ok_or_else(malformed)?;

    Ok(CanonicalRecord {
        lon,
        lat,
        location_name: raw
            .location_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
        description: raw
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        date: raw
            .date
            .clone()
            .unwrap_or_else(|| UNKNOWN_DATE_TIME.to_string()),
        time: raw
            .time
            .clone()
            .unwrap_or_else(|| UNKNOWN_DATE_TIME.to_string()),
        active: raw.active.unwrap_or(false),
    })
}

/// Normalizes a batch of raw records, preserving input order.
///
/// Malformed records (no coordinates) are logged and skipped so one bad
/// record never blocks an entire layer's data.
#[must_use]
pub fn normalize(raw: &[RawRecord]) -> Vec<CanonicalRecord> {
    raw.iter()
        .filter_map(|record| match normalize_record(record) {
            Ok(canonical) => Some(canonical),
            Err(error) => {
                log::warn!("skipping malformed feed record: {error}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use safety_map_overlay_models::RawLocation;

    use super::*;

    fn raw_at(lon: f64, lat: f64) -> RawRecord {
        RawRecord {
            location: Some(RawLocation {
                longitude: Some(lon),
                latitude: Some(lat),
            }),
            ..RawRecord::default()
        }
    }

    #[test]
    fn substitutes_documented_defaults() {
        let raw = RawRecord {
            location_name: Some("5th Ave".to_string()),
            active: Some(true),
            ..raw_at(-73.99, 40.74)
        };

        let canonical = normalize_record(&raw).unwrap();
        assert_eq!(canonical.lon, -73.99);
        assert_eq!(canonical.lat, 40.74);
        assert_eq!(canonical.location_name, "5th Ave");
        assert_eq!(canonical.description, " ");
        assert_eq!(canonical.date, "Unknown");
        assert_eq!(canonical.time, "Unknown");
        assert!(canonical.active);
    }

    #[test]
    fn active_defaults_to_false() {
        let canonical = normalize_record(&raw_at(0.1, 0.2)).unwrap();
        assert!(!canonical.active);
        assert_eq!(canonical.location_name, "Unknown");
    }

    #[test]
    fn keeps_provided_optional_fields() {
        let raw = RawRecord {
            description: Some("Stolen bicycle".to_string()),
            date: Some("2024-06-01".to_string()),
            time: Some("13:45".to_string()),
            ..raw_at(-73.98, 40.75)
        };

        let canonical = normalize_record(&raw).unwrap();
        assert_eq!(canonical.description, "Stolen bicycle");
        assert_eq!(canonical.date, "2024-06-01");
        assert_eq!(canonical.time, "13:45");
    }

    #[test]
    fn missing_location_is_malformed() {
        let raw = RawRecord {
            location_name: Some("nowhere".to_string()),
            ..RawRecord::default()
        };
        let error = normalize_record(&raw).unwrap_err();
        assert_eq!(error.location_name.as_deref(), Some("nowhere"));
    }

    #[test]
    fn partial_coordinates_are_malformed() {
        let raw = RawRecord {
            location: Some(RawLocation {
                longitude: Some(-73.99),
                latitude: None,
            }),
            ..RawRecord::default()
        };
        assert!(normalize_record(&raw).is_err());
    }

    #[test]
    fn batch_skips_malformed_and_preserves_order() {
        let batch = vec![
            raw_at(1.0, 1.0),
            RawRecord::default(),
            raw_at(2.0, 2.0),
            raw_at(3.0, 3.0),
        ];

        let canonical = normalize(&batch);
        let lons: Vec<f64> = canonical.iter().map(|record| record.lon).collect();
        assert_eq!(lons, vec![1.0, 2.0, 3.0]);
    }
}
