//! Per-lap telemetry records
//!
//! A race/driver history is an ordered sequence of [`LapRecord`]s keyed by
//! lap number. Records are immutable once produced by the telemetry
//! collaborator; gaps are possible (a lap may lack a recorded time).
//!
//! # Critical Invariants
//!
//! 1. Lap numbers are positive and ascending within one history
//! 2. Lap times are seconds as f64, `None` when the timing data is missing
//! 3. Tire age counts laps since the tire was fitted

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tire compound fitted for a lap
///
/// SOFT/MEDIUM/HARD are the modeled slick compounds. Anything else the
/// telemetry reports (intermediates, wets, unknowns) is carried through as
/// `Other` so histories never fail to parse on exotic compounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Compound {
    Soft,
    Medium,
    Hard,
    /// Any compound string outside the three slicks (e.g. "INTERMEDIATE")
    #[serde(untagged)]
    Other(String),
}

impl Compound {
    /// Upper-case compound name as reported on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Compound::Soft => "SOFT",
            Compound::Medium => "MEDIUM",
            Compound::Hard => "HARD",
            Compound::Other(name) => name,
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Track status for one lap
///
/// Degradation fitting only trusts green-flag laps; everything neutralized
/// (safety car, virtual safety car, yellow) collapses to `Caution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackStatus {
    Green,
    Caution,
}

/// One driver's telemetry for a single lap
///
/// # Example
/// ```
/// use race_strategy_core_rs::{Compound, LapRecord};
///
/// let lap = LapRecord::new(12, Some(93.411), Compound::Medium, 11)
///     .with_pit_in();
/// assert_eq!(lap.lap_number(), 12);
/// assert!(lap.is_pit_transition());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    /// Lap number within the race (1-based)
    lap_number: u32,

    /// Lap time in seconds, `None` if timing data is missing
    lap_time: Option<f64>,

    /// Compound fitted for this lap
    compound: Compound,

    /// Tire age in laps at the start of this lap
    tyre_life: u32,

    /// Track status during this lap
    track_status: TrackStatus,

    /// Whether the timing system flagged this lap as accurate
    is_accurate: bool,

    /// Driver entered the pit lane on this lap
    pit_in: bool,

    /// Driver left the pit lane on this lap (a pit stop completed here)
    pit_out: bool,
}

impl LapRecord {
    /// Create a green-flag, accurate, non-pit lap
    ///
    /// Use the `with_*` builders to mark pit transitions, caution periods
    /// and inaccurate timing.
    pub fn new(lap_number: u32, lap_time: Option<f64>, compound: Compound, tyre_life: u32) -> Self {
        Self {
            lap_number,
            lap_time,
            compound,
            tyre_life,
            track_status: TrackStatus::Green,
            is_accurate: true,
            pit_in: false,
            pit_out: false,
        }
    }

    /// Mark the lap as run under a non-green track status
    pub fn with_caution(mut self) -> Self {
        self.track_status = TrackStatus::Caution;
        self
    }

    /// Mark the lap's timing as inaccurate
    pub fn with_inaccurate_timing(mut self) -> Self {
        self.is_accurate = false;
        self
    }

    /// Mark the lap as a pit-entry lap
    pub fn with_pit_in(mut self) -> Self {
        self.pit_in = true;
        self
    }

    /// Mark the lap as a pit-exit lap
    pub fn with_pit_out(mut self) -> Self {
        self.pit_out = true;
        self
    }

    pub fn lap_number(&self) -> u32 {
        self.lap_number
    }

    pub fn lap_time(&self) -> Option<f64> {
        self.lap_time
    }

    pub fn compound(&self) -> &Compound {
        &self.compound
    }

    pub fn tyre_life(&self) -> u32 {
        self.tyre_life
    }

    pub fn track_status(&self) -> TrackStatus {
        self.track_status
    }

    pub fn is_accurate(&self) -> bool {
        self.is_accurate
    }

    pub fn is_pit_in(&self) -> bool {
        self.pit_in
    }

    pub fn is_pit_out(&self) -> bool {
        self.pit_out
    }

    /// Whether this lap crosses the pit lane in either direction
    pub fn is_pit_transition(&self) -> bool {
        self.pit_in || self.pit_out
    }

    /// Whether this lap qualifies for degradation fitting: green flag,
    /// accurate timing, no pit transition, and a recorded time
    pub fn is_clean(&self) -> bool {
        self.track_status == TrackStatus::Green
            && self.is_accurate
            && !self.is_pit_transition()
            && self.lap_time.is_some()
    }
}
