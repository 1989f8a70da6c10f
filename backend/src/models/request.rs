//! Simulation request and response wire shapes
//!
//! These are the JSON bodies exchanged at the service boundary. Field names
//! are camelCase on the wire. The `results` record is fixed-shape: actual,
//! optimal, and the per-scenario list each have their own field rather than
//! sharing a dynamically-keyed map.

use crate::models::strategy::{RaceEvent, Scenario, StrategyResult};
use serde::{Deserialize, Serialize};

/// A "what if" request for one driver in one race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Season year, e.g. 2024
    pub year: u16,

    /// Race identifier within the season (round number as a string)
    pub race_id: String,

    /// Driver identifier (three-letter abbreviation, e.g. "VER")
    pub driver_id: String,

    /// Time penalty added to the lap on which a pit stop occurs, seconds
    pub pit_loss_seconds: f64,

    /// Alternative strategies to evaluate; must be non-empty
    pub scenarios: Vec<Scenario>,
}

/// Fixed-shape bundle of every strategy outcome in a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    /// Reconstruction of the strategy actually driven
    pub actual: StrategyResult,

    /// Best-performing requested scenario, renamed "Optimal"
    pub optimal: StrategyResult,

    /// Every requested scenario, in request order, under its own name
    pub scenarios: Vec<StrategyResult>,
}

/// Response to a [`SimulationRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    /// Fresh UUID identifying this report
    pub report_id: String,

    pub results: SimulationResults,

    /// Anomalous track periods extracted from the session
    pub race_events: Vec<RaceEvent>,
}
