//! Orchestrator - per-request simulation pipeline
//!
//! Composes telemetry resolution, degradation modeling, actual-strategy
//! reconstruction, race-event extraction and per-scenario simulation into
//! one response.
//!
//! See `engine.rs` for the implementation.

pub mod engine;

pub use engine::{SimulationError, SimulationOrchestrator};
