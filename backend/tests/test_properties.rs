//! Property Tests
//!
//! Structural properties that must hold for every simulated result and
//! every fitted model, regardless of input: the stint partition invariant,
//! the lap-time/total consistency, determinism, and the rate bounds.

use proptest::prelude::*;
use race_strategy_core_rs::{
    simulate_strategy, Compound, DegradationModel, LapRecord, Scenario, StintSpec,
};

fn compound_for(index: usize) -> Compound {
    match index % 3 {
        0 => Compound::Soft,
        1 => Compound::Medium,
        _ => Compound::Hard,
    }
}

fn plan(stint_count: usize) -> Scenario {
    Scenario::new(
        "prop",
        (0..stint_count).map(|i| StintSpec::new(compound_for(i))).collect(),
    )
}

proptest! {
    #[test]
    fn simulated_stints_partition_the_race(
        total_laps in 1u32..200,
        stint_count in 1usize..5,
        base in 60.0f64..110.0,
        pit_loss in 0.0f64..40.0,
    ) {
        // The even-spacing interval must be at least one lap.
        prop_assume!(total_laps as usize >= stint_count);

        let model = DegradationModel::fit(&[]);
        let result = simulate_strategy(&plan(stint_count), total_laps, base, &model, pit_loss)
            .unwrap();

        prop_assert_eq!(result.lap_times.len(), total_laps as usize);
        prop_assert_eq!(result.pit_laps.len(), result.tire_stints.len() - 1);

        let mut expected_start = 1u32;
        for stint in &result.tire_stints {
            prop_assert_eq!(stint.start_lap, expected_start);
            prop_assert!(stint.end_lap >= stint.start_lap);
            expected_start = stint.end_lap + 1;
        }
        prop_assert_eq!(expected_start, total_laps + 1);

        let sum: f64 = result.lap_times.iter().sum();
        prop_assert!((sum - result.total_time).abs() < 1e-6);

        for window in result.pit_laps.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        for &pit in &result.pit_laps {
            prop_assert!(pit >= 1 && pit < total_laps);
        }
    }

    #[test]
    fn simulation_is_deterministic(
        total_laps in 1u32..150,
        stint_count in 1usize..4,
        base in 60.0f64..110.0,
        pit_loss in 0.0f64..40.0,
    ) {
        prop_assume!(total_laps as usize >= stint_count);

        let model = DegradationModel::fit(&[]);
        let first = simulate_strategy(&plan(stint_count), total_laps, base, &model, pit_loss)
            .unwrap();
        let second = simulate_strategy(&plan(stint_count), total_laps, base, &model, pit_loss)
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fitted_rates_stay_in_bounds(times in proptest::collection::vec(70.0f64..130.0, 5..40)) {
        let laps: Vec<LapRecord> = times
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                let age = i as u32 + 1;
                LapRecord::new(age, Some(t), compound_for(i / 14), age)
            })
            .collect();

        let model = DegradationModel::fit(&laps);
        for (_, rate) in model.rates() {
            prop_assert!((0.0..=0.5).contains(rate));
        }
        // The slick compounds are always present, fitted or defaulted.
        prop_assert!(model.rates().contains_key(&Compound::Soft));
        prop_assert!(model.rates().contains_key(&Compound::Medium));
        prop_assert!(model.rates().contains_key(&Compound::Hard));
    }
}
