pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CountdownConfig, CountdownConfigExt, Language, TerminalFrame, TimeZoneMode};
pub use countdown::{
    Countdown, CountdownEngine, EngineOptions, EngineState, Phase, RemainingDuration,
    TargetInstant, TickOutcome, Updates,
};
pub use error::{ConfigError, CountdownError};
