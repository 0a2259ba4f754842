//! Shared configuration types for the invitation countdown
//!
//! This crate contains serializable configuration types that are shared between
//! the countdown engine (countdown-core) and the terminal front end.

use serde::{Deserialize, Serialize};

/// Default tick cadence of the countdown.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Target date used by the original invitation page.
pub const DEFAULT_TARGET: &str = "2025-05-13T18:00:00";

// ─────────────────────────────────────────────────────────────────────────────
// Countdown Behaviour
// ─────────────────────────────────────────────────────────────────────────────

/// How a target string without an explicit offset is placed on the timeline.
///
/// Strings that carry an offset (`Z`, `+06:00`) ignore this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeZoneMode {
    /// The host's local time zone
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
    /// A fixed offset east of UTC, in seconds
    FixedOffset(i32),
}

/// What the countdown shows once the target instant has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalFrame {
    /// Keep the last positive reading on display
    #[default]
    Freeze,
    /// Replace the last reading with an all-zero frame
    Zero,
}

// ─────────────────────────────────────────────────────────────────────────────
// Presentation
// ─────────────────────────────────────────────────────────────────────────────

/// Display language of the invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Kyrgyz
    #[default]
    Kg,
    /// Russian
    Ru,
}

impl Language {
    /// The other supported language
    pub fn toggled(self) -> Self {
        match self {
            Language::Kg => Language::Ru,
            Language::Ru => Language::Kg,
        }
    }

    /// Short uppercase code shown on the language switch
    pub fn code(&self) -> &'static str {
        match self {
            Language::Kg => "KG",
            Language::Ru => "RU",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Config
// ─────────────────────────────────────────────────────────────────────────────

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

/// Persisted configuration of the countdown application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// ISO-8601 date-time the countdown runs to
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default)]
    pub time_zone: TimeZoneMode,

    #[serde(default)]
    pub terminal_frame: TerminalFrame,

    /// Tick cadence in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default)]
    pub language: Language,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            time_zone: TimeZoneMode::default(),
            terminal_frame: TerminalFrame::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            language: Language::default(),
        }
    }
}

impl CountdownConfig {
    /// Config for the given target, all other settings at their defaults
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }
}
