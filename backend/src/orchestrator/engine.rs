//! Orchestrator engine
//!
//! Implements the full request pipeline:
//!
//! ```text
//! For each request:
//! 1. Resolve the driver's lap history (NotFound if race/driver absent)
//! 2. Derive total_laps (max lap number) and base_lap_time (fastest
//!    recorded lap)
//! 3. Reconstruct the actual strategy, fit the degradation model, extract
//!    race events — each independent of the requested scenarios
//! 4. Reject an empty scenario list (InvalidRequest)
//! 5. Simulate every scenario; any simulator failure aborts the request
//! 6. Select the optimal scenario (minimum total time, first wins ties)
//!    and assemble the response
//! ```
//!
//! Partial-failure policy: actual-strategy reconstruction and race-event
//! extraction degrade to zero/empty results instead of failing the request.
//! Scenario simulation is not isolated that way: one bad scenario fails
//! everything and no partial scenario results are returned.

use crate::degradation::DegradationModel;
use crate::events::extract_race_events;
use crate::models::request::{SimulationRequest, SimulationResponse, SimulationResults};
use crate::models::strategy::StrategyResult;
use crate::strategy::actual::extract_actual_strategy;
use crate::strategy::simulator::{simulate_strategy, SimulateError};
use crate::telemetry::{TelemetryError, TelemetrySource};
use thiserror::Error;
use uuid::Uuid;

/// Name given to the winning scenario in the response
const OPTIMAL_RESULT_NAME: &str = "Optimal";

/// Request-level failure taxonomy
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Race or driver has no telemetry
    #[error("not found: {0}")]
    NotFound(String),

    /// The request itself cannot be simulated
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Unexpected failure inside modeling or simulation
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SimulateError> for SimulationError {
    fn from(err: SimulateError) -> Self {
        SimulationError::Internal(err.to_string())
    }
}

/// Runs simulation requests against a telemetry source
///
/// Stateless apart from the telemetry handle; one orchestrator can serve
/// any number of requests.
pub struct SimulationOrchestrator<T: TelemetrySource> {
    telemetry: T,
}

impl<T: TelemetrySource> SimulationOrchestrator<T> {
    pub fn new(telemetry: T) -> Self {
        Self { telemetry }
    }

    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    /// Run one simulation request end to end
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResponse, SimulationError> {
        let laps = self
            .telemetry
            .driver_laps(request.year, &request.race_id, &request.driver_id)
            .map_err(map_telemetry_error)?;
        if laps.is_empty() {
            return Err(SimulationError::NotFound(format!(
                "no laps recorded for driver {} in {} race {}",
                request.driver_id, request.year, request.race_id
            )));
        }

        let total_laps = laps
            .iter()
            .map(|lap| lap.lap_number())
            .max()
            .unwrap_or_default();
        let base_lap_time = laps
            .iter()
            .filter_map(|lap| lap.lap_time())
            .fold(f64::INFINITY, f64::min);
        if !base_lap_time.is_finite() {
            return Err(SimulationError::Internal(format!(
                "driver {} has laps but no recorded lap times",
                request.driver_id
            )));
        }

        let actual = extract_actual_strategy(&laps);
        let model = DegradationModel::fit(&laps);
        let race_events = extract_race_events(&self.telemetry, request.year, &request.race_id);

        if request.scenarios.is_empty() {
            return Err(SimulationError::InvalidRequest(
                "no scenarios to simulate".to_string(),
            ));
        }

        let mut scenarios = Vec::with_capacity(request.scenarios.len());
        for scenario in &request.scenarios {
            let result = simulate_strategy(
                scenario,
                total_laps,
                base_lap_time,
                &model,
                request.pit_loss_seconds,
            )?;
            scenarios.push(result);
        }

        let mut optimal = select_optimal(&scenarios).clone();
        optimal.name = OPTIMAL_RESULT_NAME.to_string();

        tracing::debug!(
            driver = %request.driver_id,
            total_laps,
            base_lap_time,
            optimal_total = optimal.total_time,
            "simulation complete"
        );

        Ok(SimulationResponse {
            report_id: Uuid::new_v4().to_string(),
            results: SimulationResults {
                actual,
                optimal,
                scenarios,
            },
            race_events,
        })
    }
}

fn map_telemetry_error(err: TelemetryError) -> SimulationError {
    match err {
        TelemetryError::RaceNotFound { .. } | TelemetryError::DriverNotFound { .. } => {
            SimulationError::NotFound(err.to_string())
        }
        TelemetryError::Source(_) => SimulationError::Internal(err.to_string()),
    }
}

/// Minimum total time; a tie keeps the earliest scenario in request order
///
/// Callers guarantee a non-empty slice (the empty scenario list is rejected
/// before simulation).
fn select_optimal(results: &[StrategyResult]) -> &StrategyResult {
    let mut best = &results[0];
    for candidate in &results[1..] {
        if candidate.total_time < best.total_time {
            best = candidate;
        }
    }
    best
}
