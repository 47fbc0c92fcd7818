//! Layer classification.

use safety_map_overlay_models::{CanonicalRecord, LayerId, SourceCategory};

/// Assigns a canonical record to exactly one layer.
///
/// Emergency-call records always land in [`LayerId::EmergencyCalls`].
/// Crime records split on the `active` flag: active crimes are
/// [`LayerId::ActiveThreat`], everything else [`LayerId::PastThreat`].
/// Total — no record is ever dropped here.
#[must_use]
pub const fn classify(record: &CanonicalRecord, category: SourceCategory) -> LayerId {
    match category {
        SourceCategory::EmergencyCall => LayerId::EmergencyCalls,
        SourceCategory::Crime => {
            if record.active {
                LayerId::ActiveThreat
            } else {
                LayerId::PastThreat
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use safety_map_overlay_models::{DEFAULT_DESCRIPTION, UNKNOWN_DATE_TIME, UNKNOWN_LOCATION};

    use super::*;

    fn record(active: bool) -> CanonicalRecord {
        CanonicalRecord {
            lon: -73.99,
            lat: 40.74,
            location_name: UNKNOWN_LOCATION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            date: UNKNOWN_DATE_TIME.to_string(),
            time: UNKNOWN_DATE_TIME.to_string(),
            active,
        }
    }

    #[test]
    fn active_crime_is_active_threat() {
        assert_eq!(
            classify(&record(true), SourceCategory::Crime),
            LayerId::ActiveThreat
        );
    }

    #[test]
    fn inactive_crime_is_past_threat() {
        // covers both `active: false` in the feed and the defaulted-false
        // case, since normalization already collapsed them
        assert_eq!(
            classify(&record(false), SourceCategory::Crime),
            LayerId::PastThreat
        );
    }

    #[test]
    fn emergency_calls_ignore_the_active_flag() {
        assert_eq!(
            classify(&record(true), SourceCategory::EmergencyCall),
            LayerId::EmergencyCalls
        );
        assert_eq!(
            classify(&record(false), SourceCategory::EmergencyCall),
            LayerId::EmergencyCalls
        );
    }
}
