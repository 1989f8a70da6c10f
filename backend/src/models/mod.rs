//! Domain and wire types

pub mod lap;
pub mod request;
pub mod strategy;

pub use lap::{Compound, LapRecord, TrackStatus};
pub use request::{SimulationRequest, SimulationResponse, SimulationResults};
pub use strategy::{RaceEvent, RaceEventKind, Scenario, StintSpec, StrategyResult, TireStint};
