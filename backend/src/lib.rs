//! Race Strategy Simulator - Core Engine
//!
//! Answers "what would have happened under a different tire strategy?" for
//! a chosen driver and race: reconstructs the strategy actually driven,
//! simulates every caller-proposed alternative, picks the best one, and
//! marks anomalous track periods (safety car).
//!
//! # Architecture
//!
//! - **models**: Domain and wire types (laps, stints, results, request)
//! - **telemetry**: Ingest collaborator contract + in-memory source
//! - **degradation**: Per-compound lap-time-vs-tire-age fitting
//! - **events**: Safety-car period extraction
//! - **strategy**: Actual-strategy reconstruction and the lap-by-lap
//!   strategy simulator
//! - **orchestrator**: Per-request pipeline and error taxonomy
//!
//! # Critical Invariants
//!
//! 1. Simulation is a pure, deterministic function of its inputs
//! 2. Result stints partition `[1, total_laps]`; pits = stints − 1
//! 3. Degradation rates stay within `[0, 0.5]` and SOFT/MEDIUM/HARD are
//!    always modeled, by data or by default

// Module declarations
pub mod degradation;
pub mod events;
pub mod models;
pub mod orchestrator;
pub mod strategy;
pub mod telemetry;

// Re-exports for convenience
pub use degradation::DegradationModel;
pub use events::{events_from_periods, extract_race_events};
pub use models::{
    lap::{Compound, LapRecord, TrackStatus},
    request::{SimulationRequest, SimulationResponse, SimulationResults},
    strategy::{RaceEvent, RaceEventKind, Scenario, StintSpec, StrategyResult, TireStint},
};
pub use orchestrator::{SimulationError, SimulationOrchestrator};
pub use strategy::{
    extract_actual_strategy, simulate_strategy, ActualStrategyError, SimulateError,
};
pub use telemetry::{InMemoryTelemetry, RaceSession, SafetyCarPeriod, TelemetryError, TelemetrySource};
