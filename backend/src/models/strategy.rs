//! Strategy plans, strategy results and race events
//!
//! A [`Scenario`] is the caller's abstract stint plan; a [`StrategyResult`]
//! is what the simulator (or the actual-strategy extractor) produces from
//! it. Results obey two structural invariants:
//!
//! 1. Tire stints partition `[1, total_laps]` with no gaps or overlaps
//! 2. `pit_laps.len() == tire_stints.len() - 1` whenever there is a stint

use crate::models::lap::Compound;
use serde::{Deserialize, Serialize};

/// One requested stint within a scenario
///
/// The lap boundaries are advisory: the simulator currently places pit
/// stops by stint count alone (see the simulator's pit-placement policy)
/// and a lone stint has its end lap forced to the race distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StintSpec {
    /// Compound to fit for this stint
    pub compound: Compound,

    /// Requested first lap of the stint, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_lap: Option<u32>,

    /// Requested last lap of the stint, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_lap: Option<u32>,
}

impl StintSpec {
    pub fn new(compound: Compound) -> Self {
        Self {
            compound,
            start_lap: None,
            end_lap: None,
        }
    }
}

/// A named, ordered stint plan to simulate
///
/// Order defines the stint sequence; it does not pin lap numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Caller-chosen label, e.g. "S-M-H"
    pub name: String,

    /// Stints in running order
    pub stints: Vec<StintSpec>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, stints: Vec<StintSpec>) -> Self {
        Self {
            name: name.into(),
            stints,
        }
    }
}

/// A contiguous run of laps on one compound, inclusive on both ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireStint {
    pub compound: Compound,
    pub start_lap: u32,
    pub end_lap: u32,
}

impl TireStint {
    pub fn new(compound: Compound, start_lap: u32, end_lap: u32) -> Self {
        Self {
            compound,
            start_lap,
            end_lap,
        }
    }

    /// Number of laps covered by this stint
    pub fn len(&self) -> u32 {
        self.end_lap.saturating_sub(self.start_lap) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end_lap < self.start_lap
    }
}

/// Outcome of one strategy, real or simulated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyResult {
    /// "Actual", "Optimal", or the scenario's request name
    pub name: String,

    /// Sum of all lap times in seconds
    pub total_time: f64,

    /// Laps on which a pit stop occurred, strictly increasing
    pub pit_laps: Vec<u32>,

    /// Per-lap times in seconds, one entry per simulated lap
    pub lap_times: Vec<f64>,

    /// Stints in running order
    pub tire_stints: Vec<TireStint>,
}

impl StrategyResult {
    /// The zero-value result used when reconstruction fails: zero total,
    /// empty lists, keeping only the name
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_time: 0.0,
            pit_laps: Vec::new(),
            lap_times: Vec::new(),
            tire_stints: Vec::new(),
        }
    }
}

/// Kind tag for an anomalous track period
///
/// Only full safety-car periods are extracted today. VSC and red-flag
/// periods are future extensions; there is deliberately no variant for
/// them so support cannot be claimed by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceEventKind {
    #[serde(rename = "SC")]
    SafetyCar,
}

/// An anomalous track period, in laps inclusive on both ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceEvent {
    #[serde(rename = "type")]
    pub kind: RaceEventKind,
    pub start_lap: u32,
    pub end_lap: u32,
}
