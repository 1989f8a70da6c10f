//! Strategy simulator
//!
//! Turns an abstract stint plan into a synthetic lap-time sequence, pit-stop
//! placement, tire stints and total race time. This is a pure function:
//! identical inputs always reproduce bit-identical output, which the optimal
//! selection and the regression tests rely on.
//!
//! # Per-lap loop
//!
//! For each lap 1..=total_laps:
//!
//! 1. Select the active stint by index; a plan shorter than the race clamps
//!    to its last stint and extends that compound to the flag
//! 2. Age the tire, then price the lap:
//!    `base_lap_time + rate(compound) * tire_age`
//! 3. With N stints, pit whenever the lap is an exact multiple of
//!    `total_laps / N` (integer division) and is not the final lap — evenly
//!    spaced stops from stint *count* alone; requested per-stint lap
//!    boundaries are advisory and do not move the stops
//! 4. On a pit lap: add the pit loss to that lap, record it, close the open
//!    stint, reset tire age, advance the stint index
//!
//! Every pit closes exactly one stint and the final stint closes at the
//! flag, so `pit_laps.len() == tire_stints.len() - 1` and the stints
//! partition `[1, total_laps]` by construction.

use crate::degradation::DegradationModel;
use crate::models::strategy::{Scenario, StrategyResult, TireStint};
use thiserror::Error;

/// Simulator failures; any of these aborts the whole request
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulateError {
    #[error("scenario {0:?} has no stints")]
    EmptyStintPlan(String),

    #[error("race distance must be at least one lap")]
    ZeroRaceDistance,

    #[error("scenario {name:?} plans {stints} stints over {total_laps} laps")]
    MoreStintsThanLaps {
        name: String,
        stints: usize,
        total_laps: u32,
    },
}

/// Simulate one scenario over a race distance
///
/// `base_lap_time` is the driver's fastest recorded lap in seconds;
/// `pit_loss_seconds` is added to each lap on which a stop occurs.
///
/// # Example
/// ```
/// use race_strategy_core_rs::{
///     simulate_strategy, Compound, DegradationModel, Scenario, StintSpec,
/// };
///
/// let model = DegradationModel::fit(&[]);
/// let scenario = Scenario::new("M", vec![StintSpec::new(Compound::Medium)]);
/// let result = simulate_strategy(&scenario, 10, 90.0, &model, 20.0).unwrap();
///
/// // Single stint: no stops, tire just ages to the flag.
/// assert!(result.pit_laps.is_empty());
/// assert_eq!(result.lap_times.len(), 10);
/// assert_eq!(result.tire_stints.len(), 1);
/// ```
pub fn simulate_strategy(
    scenario: &Scenario,
    total_laps: u32,
    base_lap_time: f64,
    model: &DegradationModel,
    pit_loss_seconds: f64,
) -> Result<StrategyResult, SimulateError> {
    if total_laps == 0 {
        return Err(SimulateError::ZeroRaceDistance);
    }

    let mut stints = scenario.stints.clone();
    if stints.is_empty() {
        return Err(SimulateError::EmptyStintPlan(scenario.name.clone()));
    }
    // A lone stint is a stop-free race: force its end lap to the distance.
    if stints.len() == 1 {
        stints[0].end_lap = Some(total_laps);
    }

    let stint_count = stints.len();
    let pit_interval = if stint_count > 1 {
        let interval = total_laps / stint_count as u32;
        if interval == 0 {
            return Err(SimulateError::MoreStintsThanLaps {
                name: scenario.name.clone(),
                stints: stint_count,
                total_laps,
            });
        }
        Some(interval)
    } else {
        None
    };

    let mut lap_times = Vec::with_capacity(total_laps as usize);
    let mut pit_laps = Vec::new();
    let mut tire_stints = Vec::new();
    let mut stint_index = 0usize;
    let mut stint_start = 1u32;
    let mut tire_age = 0u32;

    for lap in 1..=total_laps {
        let compound = &stints[stint_index.min(stint_count - 1)].compound;
        tire_age += 1;

        let mut lap_time = base_lap_time + model.rate(compound) * tire_age as f64;

        let is_pit_lap = match pit_interval {
            Some(interval) => lap % interval == 0 && lap < total_laps,
            None => false,
        };

        if is_pit_lap {
            lap_time += pit_loss_seconds;
            pit_laps.push(lap);
            tire_stints.push(TireStint::new(compound.clone(), stint_start, lap));
            stint_start = lap + 1;
            tire_age = 0;
            stint_index = (stint_index + 1).min(stint_count - 1);
        }

        lap_times.push(lap_time);
    }

    let final_compound = stints[stint_index.min(stint_count - 1)].compound.clone();
    tire_stints.push(TireStint::new(final_compound, stint_start, total_laps));

    Ok(StrategyResult {
        name: scenario.name.clone(),
        total_time: lap_times.iter().sum(),
        pit_laps,
        lap_times,
        tire_stints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lap::{Compound, LapRecord};
    use crate::models::strategy::StintSpec;

    /// Model where every slick compound carries its hardcoded default rate
    fn default_model() -> DegradationModel {
        DegradationModel::fit(&[])
    }

    /// Model trained to an exact rate for one compound
    fn model_with_rate(compound: Compound, rate: f64) -> DegradationModel {
        let laps: Vec<LapRecord> = (1..=8)
            .map(|age| {
                LapRecord::new(age, Some(90.0 + rate * age as f64), compound.clone(), age)
            })
            .collect();
        DegradationModel::fit(&laps)
    }

    #[test]
    fn empty_stint_plan_is_an_error() {
        let scenario = Scenario::new("broken", vec![]);
        let err = simulate_strategy(&scenario, 50, 90.0, &default_model(), 20.0).unwrap_err();
        assert_eq!(err, SimulateError::EmptyStintPlan("broken".to_string()));
    }

    #[test]
    fn more_stints_than_laps_is_an_error() {
        let scenario = Scenario::new(
            "absurd",
            vec![
                StintSpec::new(Compound::Soft),
                StintSpec::new(Compound::Medium),
                StintSpec::new(Compound::Hard),
            ],
        );
        let err = simulate_strategy(&scenario, 2, 90.0, &default_model(), 20.0).unwrap_err();
        assert!(matches!(err, SimulateError::MoreStintsThanLaps { .. }));
    }

    #[test]
    fn single_stint_matches_the_arithmetic_series() {
        let model = model_with_rate(Compound::Medium, 0.1);
        let scenario = Scenario::new("M", vec![StintSpec::new(Compound::Medium)]);
        let result = simulate_strategy(&scenario, 10, 90.0, &model, 0.0).unwrap();

        assert!(result.pit_laps.is_empty());
        for (i, lap_time) in result.lap_times.iter().enumerate() {
            let expected = 90.0 + 0.1 * (i + 1) as f64;
            assert!((lap_time - expected).abs() < 1e-9, "lap {}", i + 1);
        }
        assert!((result.total_time - 905.5).abs() < 1e-9);
        assert_eq!(
            result.tire_stints,
            vec![TireStint::new(Compound::Medium, 1, 10)]
        );
    }

    #[test]
    fn two_stints_pit_once_at_the_midpoint() {
        let scenario = Scenario::new(
            "S-H",
            vec![StintSpec::new(Compound::Soft), StintSpec::new(Compound::Hard)],
        );
        let result = simulate_strategy(&scenario, 20, 90.0, &default_model(), 20.0).unwrap();

        assert_eq!(result.pit_laps, vec![10]);
        assert_eq!(
            result.tire_stints,
            vec![
                TireStint::new(Compound::Soft, 1, 10),
                TireStint::new(Compound::Hard, 11, 20),
            ]
        );

        // Pit loss lands on lap 10; tire age resets so lap 11 is a fresh tire.
        let soft = 0.15;
        let hard = 0.08;
        assert!((result.lap_times[9] - (90.0 + soft * 10.0 + 20.0)).abs() < 1e-9);
        assert!((result.lap_times[10] - (90.0 + hard * 1.0)).abs() < 1e-9);
    }

    #[test]
    fn short_plan_extends_the_last_compound() {
        // Interval 20/3 = 6: stops at 6, 12 and 18, one more than planned
        // transitions, so the final hard stint is split in two.
        let scenario = Scenario::new(
            "S-M-H",
            vec![
                StintSpec::new(Compound::Soft),
                StintSpec::new(Compound::Medium),
                StintSpec::new(Compound::Hard),
            ],
        );
        let result = simulate_strategy(&scenario, 20, 90.0, &default_model(), 20.0).unwrap();

        assert_eq!(result.pit_laps, vec![6, 12, 18]);
        assert_eq!(
            result.tire_stints,
            vec![
                TireStint::new(Compound::Soft, 1, 6),
                TireStint::new(Compound::Medium, 7, 12),
                TireStint::new(Compound::Hard, 13, 18),
                TireStint::new(Compound::Hard, 19, 20),
            ]
        );
        assert_eq!(result.pit_laps.len(), result.tire_stints.len() - 1);
    }

    #[test]
    fn unmodeled_compound_uses_the_default_rate() {
        let scenario = Scenario::new(
            "I",
            vec![StintSpec::new(Compound::Other("INTERMEDIATE".to_string()))],
        );
        let result = simulate_strategy(&scenario, 3, 80.0, &default_model(), 0.0).unwrap();
        // rate 0.1: 80.1 + 80.2 + 80.3
        assert!((result.total_time - 240.6).abs() < 1e-9);
    }

    #[test]
    fn simulator_is_deterministic() {
        let scenario = Scenario::new(
            "M-H",
            vec![
                StintSpec::new(Compound::Medium),
                StintSpec::new(Compound::Hard),
            ],
        );
        let model = default_model();
        let a = simulate_strategy(&scenario, 57, 88.4, &model, 21.5).unwrap();
        let b = simulate_strategy(&scenario, 57, 88.4, &model, 21.5).unwrap();
        assert_eq!(a, b);
    }
}
