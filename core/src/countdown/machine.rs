//! Tick state machine of a single countdown
//!
//! `Countdown` owns the displayed state and the `{Running, Stopped}` phase.
//! It has no notion of timers: whoever drives it feeds the sampled `now` into
//! [`Countdown::tick`]. Expiry and [`Countdown::stop`] are the only ways into
//! `Stopped`, and nothing leads back out.

use chrono::{DateTime, Utc};
use countdown_types::TerminalFrame;

use super::remaining::RemainingDuration;
use super::target::TargetInstant;

/// Whether the countdown still reacts to ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

/// Snapshot read by the display side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineState {
    pub remaining: RemainingDuration,
    pub expired: bool,
}

/// Result of feeding one tick into the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Target still ahead; `remaining` was replaced
    Updated(RemainingDuration),
    /// Target reached on this tick; carries the frame left on display
    Expired(RemainingDuration),
    /// Machine already stopped, nothing changed
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    target: TargetInstant,
    terminal_frame: TerminalFrame,
    state: EngineState,
    phase: Phase,
}

impl Countdown {
    /// A running countdown showing the zero frame until its first tick
    pub fn new(target: TargetInstant, terminal_frame: TerminalFrame) -> Self {
        Self {
            target,
            terminal_frame,
            state: EngineState::default(),
            phase: Phase::Running,
        }
    }

    /// Recompute the remaining time from an absolute `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if self.phase == Phase::Stopped {
            return TickOutcome::Stopped;
        }

        let delta = self.target.epoch_millis() - now.timestamp_millis();
        if delta <= 0 {
            self.phase = Phase::Stopped;
            self.state.expired = true;
            if self.terminal_frame == TerminalFrame::Zero {
                self.state.remaining = RemainingDuration::ZERO;
            }
            return TickOutcome::Expired(self.state.remaining);
        }

        let remaining = RemainingDuration::from_millis(delta as u64);
        self.state.remaining = remaining;
        TickOutcome::Updated(remaining)
    }

    /// Stop reacting to ticks. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if self.phase == Phase::Stopped {
            return false;
        }
        self.phase = Phase::Stopped;
        true
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn target(&self) -> &TargetInstant {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 10, 9, 30, 0).unwrap()
    }

    fn countdown_in(millis: i64, frame: TerminalFrame) -> Countdown {
        let target = TargetInstant::from_utc(now() + Duration::milliseconds(millis));
        Countdown::new(target, frame)
    }

    #[test]
    fn starts_running_on_the_zero_frame() {
        let countdown = countdown_in(90_061_000, TerminalFrame::Freeze);
        assert!(countdown.is_running());
        assert_eq!(countdown.state(), EngineState::default());
        assert!(countdown.state().remaining.is_zero());
    }

    #[test]
    fn tick_decomposes_the_delta() {
        let mut countdown = countdown_in(90_061_000, TerminalFrame::Freeze);

        let outcome = countdown.tick(now());
        let expected = RemainingDuration {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1,
        };
        assert_eq!(outcome, TickOutcome::Updated(expected));
        assert_eq!(countdown.state().remaining, expected);
        assert!(!countdown.state().expired);
    }

    #[test]
    fn target_in_the_past_expires_on_first_tick() {
        let mut countdown = countdown_in(500, TerminalFrame::Freeze);

        let outcome = countdown.tick(now() + Duration::milliseconds(1_000));
        assert_eq!(outcome, TickOutcome::Expired(RemainingDuration::ZERO));
        assert!(countdown.state().expired);
        assert_eq!(countdown.phase(), Phase::Stopped);
    }

    #[test]
    fn exact_target_instant_counts_as_expired() {
        let mut countdown = countdown_in(3_000, TerminalFrame::Freeze);
        let outcome = countdown.tick(now() + Duration::milliseconds(3_000));
        assert!(matches!(outcome, TickOutcome::Expired(_)));
    }

    #[test]
    fn freeze_keeps_last_positive_reading() {
        let mut countdown = countdown_in(2_500, TerminalFrame::Freeze);

        countdown.tick(now() + Duration::milliseconds(1_000));
        let last = countdown.state().remaining;
        assert_eq!(last.seconds, 1);

        let outcome = countdown.tick(now() + Duration::milliseconds(3_000));
        assert_eq!(outcome, TickOutcome::Expired(last));
        assert_eq!(countdown.state().remaining, last);
    }

    #[test]
    fn zero_policy_clears_the_last_reading() {
        let mut countdown = countdown_in(2_500, TerminalFrame::Zero);

        countdown.tick(now() + Duration::milliseconds(1_000));
        assert!(!countdown.state().remaining.is_zero());

        let outcome = countdown.tick(now() + Duration::milliseconds(3_000));
        assert_eq!(outcome, TickOutcome::Expired(RemainingDuration::ZERO));
        assert!(countdown.state().remaining.is_zero());
    }

    #[test]
    fn expired_state_never_changes_again() {
        let mut countdown = countdown_in(1_500, TerminalFrame::Freeze);
        countdown.tick(now() + Duration::milliseconds(1_000));
        countdown.tick(now() + Duration::milliseconds(2_000));
        let frozen = countdown.state();

        // Even a clock that jumps backwards cannot revive it
        assert_eq!(countdown.tick(now()), TickOutcome::Stopped);
        assert_eq!(
            countdown.tick(now() + Duration::days(1)),
            TickOutcome::Stopped
        );
        assert_eq!(countdown.state(), frozen);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut countdown = countdown_in(60_000, TerminalFrame::Freeze);
        countdown.tick(now());
        let before = countdown.state();

        assert!(countdown.stop());
        assert!(!countdown.stop());
        assert_eq!(countdown.phase(), Phase::Stopped);
        assert_eq!(countdown.state(), before);
        assert!(!countdown.state().expired);
        assert_eq!(countdown.tick(now()), TickOutcome::Stopped);
    }

    #[test]
    fn stop_after_expiry_is_a_no_op() {
        let mut countdown = countdown_in(10, TerminalFrame::Freeze);
        countdown.tick(now() + Duration::seconds(1));
        assert!(!countdown.stop());
        assert!(countdown.state().expired);
    }

    #[test]
    fn successive_ticks_never_increase() {
        let mut countdown = countdown_in(5 * 86_400_000 + 1_234, TerminalFrame::Freeze);
        let mut previous = u64::MAX;
        let mut at = now();

        // Irregular spacing, as a late timer would produce
        for step_ms in [1_000, 1_003, 997, 2_400, 1_000, 60_000, 3_600_000] {
            at += Duration::milliseconds(step_ms);
            countdown.tick(at);
            let millis = countdown.state().remaining.as_millis();
            assert!(millis <= previous);
            previous = millis;
        }
    }
}
