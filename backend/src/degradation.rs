//! Tire degradation modeling
//!
//! Fits, per compound, a straight line of lap time (seconds) against tire
//! age (laps). The slope is the degradation rate: seconds added per lap of
//! tire age. Only clean laps feed the fit — caution periods, inaccurate
//! timing and pit transitions bias the slope and are discarded first.
//!
//! The model is built fresh per simulation request from one driver's laps,
//! never persisted, and read-only once produced.
//!
//! # Rate policy
//!
//! - A fitted slope outside `[0, 0.5]` looks wrong and is capped to a fixed
//!   0.01 sentinel rather than dropping the compound
//! - A numerical failure during fitting falls back to 0.1 for that compound
//! - Compounds with fewer than 5 qualifying laps are not fitted; SOFT,
//!   MEDIUM and HARD always end up present via hardcoded defaults
//! - Lookups for compounds absent from the model return 0.1

use crate::models::lap::{Compound, LapRecord};
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Minimum clean laps on a compound before a fit is attempted
const MIN_LAPS_FOR_FIT: usize = 5;

/// Largest slope considered physically credible, seconds per lap of age
const MAX_CREDIBLE_RATE: f64 = 0.5;

/// Substitute for a fitted slope outside the credible range
const IMPLAUSIBLE_SLOPE_RATE: f64 = 0.01;

/// Rate assigned when the least-squares fit itself fails
const FIT_FAILURE_RATE: f64 = 0.1;

/// Rate returned for compounds the model has no entry for
const UNMODELED_RATE: f64 = 0.1;

/// Defaults for the slick compounds when data could not model them
const COMPOUND_DEFAULTS: [(Compound, f64); 3] = [
    (Compound::Soft, 0.15),
    (Compound::Medium, 0.10),
    (Compound::Hard, 0.08),
];

/// Per-compound degradation rates for one driver in one race
///
/// # Example
/// ```
/// use race_strategy_core_rs::{Compound, DegradationModel};
///
/// // No laps at all: every slick compound falls back to its default.
/// let model = DegradationModel::fit(&[]);
/// assert_eq!(model.rate(&Compound::Soft), 0.15);
/// assert_eq!(model.rate(&Compound::Medium), 0.10);
/// assert_eq!(model.rate(&Compound::Hard), 0.08);
///
/// // Unmodeled compounds read as 0.1.
/// let wet = Compound::Other("WET".to_string());
/// assert_eq!(model.rate(&wet), 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DegradationModel {
    rates: HashMap<Compound, f64>,
}

impl DegradationModel {
    /// Fit a model from one driver's full lap sequence
    ///
    /// Deterministic for identical input; no side effects beyond warn-level
    /// logs on fallback paths.
    pub fn fit(laps: &[LapRecord]) -> Self {
        let clean: Vec<&LapRecord> = laps.iter().filter(|lap| lap.is_clean()).collect();

        let mut by_compound: HashMap<Compound, Vec<&LapRecord>> = HashMap::new();
        for lap in clean {
            by_compound
                .entry(lap.compound().clone())
                .or_default()
                .push(lap);
        }

        let mut rates = HashMap::new();
        for (compound, compound_laps) in by_compound {
            if compound_laps.len() < MIN_LAPS_FOR_FIT {
                continue;
            }

            let rate = match Self::fit_slope(&compound_laps) {
                Ok(slope) => {
                    if !(0.0..=MAX_CREDIBLE_RATE).contains(&slope) {
                        tracing::warn!(
                            compound = %compound,
                            slope,
                            "implausible degradation slope, using sentinel"
                        );
                        IMPLAUSIBLE_SLOPE_RATE
                    } else {
                        slope
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        compound = %compound,
                        error = %err,
                        "degradation fit failed, using fallback rate"
                    );
                    FIT_FAILURE_RATE
                }
            };
            rates.insert(compound, rate);
        }

        for (compound, default_rate) in COMPOUND_DEFAULTS {
            rates.entry(compound).or_insert(default_rate);
        }

        Self { rates }
    }

    /// Ordinary least squares of lap time against tire age
    fn fit_slope(laps: &[&LapRecord]) -> Result<f64, String> {
        let ages: Vec<f64> = laps.iter().map(|lap| lap.tyre_life() as f64).collect();
        // is_clean() guarantees a recorded time for every fitted lap
        let times: Vec<f64> = laps.iter().filter_map(|lap| lap.lap_time()).collect();

        let x = Array2::from_shape_vec((ages.len(), 1), ages).map_err(|e| e.to_string())?;
        let y = Array1::from_vec(times);
        let dataset = Dataset::new(x, y);

        let fitted = LinearRegression::new()
            .fit(&dataset)
            .map_err(|e| e.to_string())?;
        let slope = fitted.params()[0];
        if !slope.is_finite() {
            return Err(format!("non-finite slope {slope}"));
        }
        Ok(slope)
    }

    /// Degradation rate for a compound, seconds per lap of tire age
    pub fn rate(&self, compound: &Compound) -> f64 {
        self.rates.get(compound).copied().unwrap_or(UNMODELED_RATE)
    }

    /// All modeled compounds and their rates
    pub fn rates(&self) -> &HashMap<Compound, f64> {
        &self.rates
    }
}
