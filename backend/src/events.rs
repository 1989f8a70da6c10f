//! Race event extraction
//!
//! Maps the session-level safety-car intervals reported by telemetry into
//! typed [`RaceEvent`]s. Only full safety-car periods are produced; VSC and
//! red-flag extraction are future extensions.
//!
//! This stage never aborts a request: a telemetry failure is logged and
//! yields an empty event list.

use crate::models::strategy::{RaceEvent, RaceEventKind};
use crate::telemetry::{SafetyCarPeriod, TelemetrySource};

/// One typed event per safety-car interval, lap bounds copied verbatim
pub fn events_from_periods(periods: &[SafetyCarPeriod]) -> Vec<RaceEvent> {
    periods
        .iter()
        .map(|period| RaceEvent {
            kind: RaceEventKind::SafetyCar,
            start_lap: period.start_lap,
            end_lap: period.end_lap,
        })
        .collect()
}

/// Extract race events for a session, degrading to empty on failure
pub fn extract_race_events<T: TelemetrySource>(
    telemetry: &T,
    year: u16,
    race_id: &str,
) -> Vec<RaceEvent> {
    match telemetry.safety_car_periods(year, race_id) {
        Ok(periods) => events_from_periods(&periods),
        Err(err) => {
            tracing::warn!(year, race_id, error = %err, "race event extraction failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{InMemoryTelemetry, RaceSession};

    #[test]
    fn maps_each_period_to_a_safety_car_event() {
        let events = events_from_periods(&[
            SafetyCarPeriod::new(3, 6),
            SafetyCarPeriod::new(40, 42),
        ]);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, RaceEventKind::SafetyCar);
        assert_eq!(events[0].start_lap, 3);
        assert_eq!(events[0].end_lap, 6);
        assert_eq!(events[1].start_lap, 40);
    }

    #[test]
    fn telemetry_failure_degrades_to_empty() {
        let telemetry = InMemoryTelemetry::new();
        // No session loaded: the lookup fails, the extractor must not.
        assert!(extract_race_events(&telemetry, 2024, "1").is_empty());
    }

    #[test]
    fn session_without_periods_yields_no_events() {
        let mut telemetry = InMemoryTelemetry::new();
        telemetry.insert_session(2024, "1", RaceSession::new());
        assert!(extract_race_events(&telemetry, 2024, "1").is_empty());
    }
}
