//! Countdown system
//!
//! This module provides:
//! - **Target**: parsing of the target instant under an explicit time zone mode
//! - **Remaining**: decomposition of the time left into days/hours/minutes/seconds
//! - **Machine**: the pure `{Running, Stopped}` tick state machine
//! - **Engine**: the tokio schedule that drives the machine once per second

mod engine;
mod machine;
mod remaining;
mod target;


pub use engine::{CountdownEngine, EngineOptions, Updates};
pub use machine::{Countdown, EngineState, Phase, TickOutcome};
pub use remaining::RemainingDuration;
pub use target::TargetInstant;
