//! Actual strategy reconstruction
//!
//! Rebuilds the strategy a driver really drove from raw laps: pit stops,
//! tire stints, and total time. Laps without a recorded time are silently
//! dropped from both the lap-time list and the total, so the total is a sum
//! of *known* laps, not true elapsed time when data is missing.
//!
//! This stage never aborts a request: any processing failure is logged and
//! converted into the zero-value "Actual" result.

use crate::models::lap::LapRecord;
use crate::models::strategy::{StrategyResult, TireStint};
use thiserror::Error;

/// Name carried by every actual-strategy result
const ACTUAL_RESULT_NAME: &str = "Actual";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActualStrategyError {
    #[error("driver history contains no laps")]
    NoLaps,
}

/// Reconstruct the driven strategy, degrading to the zero-value result on
/// failure
pub fn extract_actual_strategy(laps: &[LapRecord]) -> StrategyResult {
    match try_extract_actual_strategy(laps) {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(error = %err, "actual strategy reconstruction failed");
            StrategyResult::empty(ACTUAL_RESULT_NAME)
        }
    }
}

/// Fallible reconstruction; callers wanting the degrade policy use
/// [`extract_actual_strategy`]
pub fn try_extract_actual_strategy(
    laps: &[LapRecord],
) -> Result<StrategyResult, ActualStrategyError> {
    if laps.is_empty() {
        return Err(ActualStrategyError::NoLaps);
    }

    // A pit stop completes on the lap carrying the pit-out marker.
    let pit_laps: Vec<u32> = laps
        .iter()
        .filter(|lap| lap.is_pit_out())
        .map(|lap| lap.lap_number())
        .collect();

    let lap_times: Vec<f64> = laps.iter().filter_map(|lap| lap.lap_time()).collect();
    let total_time: f64 = lap_times.iter().sum();

    Ok(StrategyResult {
        name: ACTUAL_RESULT_NAME.to_string(),
        total_time,
        pit_laps,
        lap_times,
        tire_stints: stints_from_laps(laps),
    })
}

/// Maximal runs of consecutive laps on an identical compound
///
/// A compound change closes the current stint at the prior lap and opens a
/// new one at the current lap; the last open stint closes at the maximum
/// lap number seen.
fn stints_from_laps(laps: &[LapRecord]) -> Vec<TireStint> {
    let mut stints = Vec::new();
    let mut iter = laps.iter();
    let Some(first) = iter.next() else {
        return stints;
    };

    let mut current_compound = first.compound().clone();
    let mut stint_start = first.lap_number();
    let mut prev_lap = first.lap_number();

    for lap in iter {
        if *lap.compound() != current_compound {
            stints.push(TireStint::new(current_compound, stint_start, prev_lap));
            current_compound = lap.compound().clone();
            stint_start = lap.lap_number();
        }
        prev_lap = lap.lap_number();
    }
    stints.push(TireStint::new(current_compound, stint_start, prev_lap));
    stints
}
