//! Strategy reconstruction and simulation
//!
//! `actual` rebuilds what the driver really did; `simulator` prices an
//! abstract stint plan lap by lap.

pub mod actual;
pub mod simulator;

pub use actual::{extract_actual_strategy, try_extract_actual_strategy, ActualStrategyError};
pub use simulator::{simulate_strategy, SimulateError};
