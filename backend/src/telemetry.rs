//! Telemetry ingest boundary
//!
//! The simulation core never loads session data itself; it consumes an
//! implementation of [`TelemetrySource`]. Production implementations wrap a
//! historical-timing backend and may memoize sessions behind a bounded
//! cache; that cache's capacity and eviction policy live entirely on their
//! side of this trait. [`InMemoryTelemetry`] is the reference
//! implementation used by tests and embedders that already hold the laps.

use crate::models::lap::LapRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A full-safety-car interval reported for a session, in laps inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyCarPeriod {
    pub start_lap: u32,
    pub end_lap: u32,
}

impl SafetyCarPeriod {
    pub fn new(start_lap: u32, end_lap: u32) -> Self {
        Self { start_lap, end_lap }
    }
}

/// Errors surfaced by a telemetry source
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TelemetryError {
    #[error("no session data for {year} race {race_id}")]
    RaceNotFound { year: u16, race_id: String },

    #[error("no laps recorded for driver {driver_id} in {year} race {race_id}")]
    DriverNotFound {
        year: u16,
        race_id: String,
        driver_id: String,
    },

    /// The backing store failed in a way that is not a missing entity
    #[error("telemetry source failure: {0}")]
    Source(String),
}

/// Contract the simulation core requires from its telemetry collaborator
pub trait TelemetrySource {
    /// One driver's full lap sequence for a race, ordered by lap number
    fn driver_laps(
        &self,
        year: u16,
        race_id: &str,
        driver_id: &str,
    ) -> Result<Vec<LapRecord>, TelemetryError>;

    /// Safety-car intervals recorded for the session
    fn safety_car_periods(
        &self,
        year: u16,
        race_id: &str,
    ) -> Result<Vec<SafetyCarPeriod>, TelemetryError>;
}

/// One loaded race session: laps per driver plus session-level intervals
#[derive(Debug, Clone, Default)]
pub struct RaceSession {
    laps_by_driver: HashMap<String, Vec<LapRecord>>,
    safety_car_periods: Vec<SafetyCarPeriod>,
}

impl RaceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one driver's lap history to the session
    pub fn with_driver(mut self, driver_id: impl Into<String>, laps: Vec<LapRecord>) -> Self {
        self.laps_by_driver.insert(driver_id.into(), laps);
        self
    }

    /// Add the session's safety-car intervals
    pub fn with_safety_car_periods(mut self, periods: Vec<SafetyCarPeriod>) -> Self {
        self.safety_car_periods = periods;
        self
    }
}

/// In-memory telemetry source keyed by (year, race id)
///
/// # Example
/// ```
/// use race_strategy_core_rs::telemetry::{InMemoryTelemetry, RaceSession, TelemetrySource};
/// use race_strategy_core_rs::{Compound, LapRecord};
///
/// let mut telemetry = InMemoryTelemetry::new();
/// telemetry.insert_session(
///     2024,
///     "5",
///     RaceSession::new().with_driver(
///         "VER",
///         vec![LapRecord::new(1, Some(92.3), Compound::Soft, 1)],
///     ),
/// );
///
/// let laps = telemetry.driver_laps(2024, "5", "VER").unwrap();
/// assert_eq!(laps.len(), 1);
/// assert!(telemetry.driver_laps(2024, "5", "HAM").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryTelemetry {
    sessions: HashMap<(u16, String), RaceSession>,
}

impl InMemoryTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a session
    pub fn insert_session(&mut self, year: u16, race_id: impl Into<String>, session: RaceSession) {
        self.sessions.insert((year, race_id.into()), session);
    }

    fn session(&self, year: u16, race_id: &str) -> Result<&RaceSession, TelemetryError> {
        self.sessions
            .get(&(year, race_id.to_string()))
            .ok_or_else(|| TelemetryError::RaceNotFound {
                year,
                race_id: race_id.to_string(),
            })
    }
}

impl TelemetrySource for InMemoryTelemetry {
    fn driver_laps(
        &self,
        year: u16,
        race_id: &str,
        driver_id: &str,
    ) -> Result<Vec<LapRecord>, TelemetryError> {
        let session = self.session(year, race_id)?;
        session
            .laps_by_driver
            .get(driver_id)
            .cloned()
            .ok_or_else(|| TelemetryError::DriverNotFound {
                year,
                race_id: race_id.to_string(),
                driver_id: driver_id.to_string(),
            })
    }

    fn safety_car_periods(
        &self,
        year: u16,
        race_id: &str,
    ) -> Result<Vec<SafetyCarPeriod>, TelemetryError> {
        Ok(self.session(year, race_id)?.safety_car_periods.clone())
    }
}
