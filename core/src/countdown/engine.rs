//! Periodic driver of a [`Countdown`]
//!
//! The engine spawns one tokio interval per target and feeds the sampled
//! clock into the tick machine. State and phase live in a single watch
//! channel value, so a tick and a dispose can never interleave: once
//! [`CountdownEngine::dispose`] returns, no queued tick can still publish.
//!
//! # Lifecycle
//!
//! 1. `start` → zero frame published, first tick one period later
//! 2. Each tick recomputes from absolute `now` and publishes the new frame
//! 3. Target reached → expired frame published, schedule ends
//! 4. `dispose` / drop → schedule cancelled; `retarget` starts a fresh one

use std::sync::Arc;
use std::time::Duration;

use countdown_types::{CountdownConfig, DEFAULT_TICK_INTERVAL_MS, TerminalFrame, TimeZoneMode};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use super::machine::{Countdown, EngineState, Phase, TickOutcome};
use super::target::TargetInstant;
use crate::clock::Clock;
use crate::error::CountdownError;

/// Tuning of a countdown schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub tick_interval: Duration,
    pub terminal_frame: TerminalFrame,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            terminal_frame: TerminalFrame::default(),
        }
    }
}

impl EngineOptions {
    pub fn from_config(config: &CountdownConfig) -> Self {
        Self {
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            terminal_frame: config.terminal_frame,
        }
        .checked()
    }

    /// Replace a zero tick interval with the default; tokio intervals need
    /// a non-zero period.
    fn checked(self) -> Self {
        if !self.tick_interval.is_zero() {
            return self;
        }

        tracing::warn!("tick interval of 0 is not allowed, using the default");
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            ..self
        }
    }
}

/// Channel value: the machine plus the schedule that owns it
#[derive(Debug)]
struct Slot {
    countdown: Countdown,
    generation: u64,
}

/// Live countdown to a fixed target, refreshed once per tick interval.
///
/// Dropping the engine cancels its schedule.
pub struct CountdownEngine {
    shared: Arc<watch::Sender<Slot>>,
    clock: Arc<dyn Clock>,
    options: EngineOptions,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl CountdownEngine {
    /// Start counting down to `target` with default options.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn start<C: Clock + 'static>(target: TargetInstant, clock: C) -> Self {
        Self::with_options(target, clock, EngineOptions::default())
    }

    /// Start counting down to `target`. A zero tick interval falls back to
    /// the default.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn with_options<C: Clock + 'static>(
        target: TargetInstant,
        clock: C,
        options: EngineOptions,
    ) -> Self {
        let options = options.checked();
        let countdown = Countdown::new(target, options.terminal_frame);
        let (tx, _) = watch::channel(Slot {
            countdown,
            generation: 0,
        });

        let mut engine = Self {
            shared: Arc::new(tx),
            clock: Arc::new(clock),
            options,
            generation: 0,
            task: None,
        };
        engine.spawn_schedule();
        engine
    }

    /// Parse the configured target and start counting down to it.
    ///
    /// An unparseable target fails here, before any schedule exists.
    pub fn from_config<C: Clock + 'static>(
        config: &CountdownConfig,
        clock: C,
    ) -> Result<Self, CountdownError> {
        let target = TargetInstant::parse(&config.target, config.time_zone)?;
        Ok(Self::with_options(
            target,
            clock,
            EngineOptions::from_config(config),
        ))
    }

    /// Cancel the schedule. Safe to call repeatedly and after expiry.
    ///
    /// Returns `true` if a live schedule was cancelled, `false` if it had
    /// already ended.
    pub fn dispose(&mut self) -> bool {
        // Receivers are not woken: the displayed state does not change.
        self.shared.send_if_modified(|slot| {
            slot.countdown.stop();
            false
        });

        match self.task.take() {
            Some(task) if !task.is_finished() => {
                task.abort();
                tracing::info!(generation = self.generation, "countdown disposed");
                true
            }
            _ => false,
        }
    }

    /// Replace the target: dispose the current schedule, start a new one.
    ///
    /// Subscribers stay attached and see the reset zero frame, then the new
    /// schedule's ticks.
    pub fn retarget(&mut self, target: TargetInstant) {
        self.dispose();
        self.generation += 1;

        let generation = self.generation;
        let countdown = Countdown::new(target, self.options.terminal_frame);
        self.shared.send_modify(|slot| {
            slot.countdown = countdown;
            slot.generation = generation;
        });

        self.spawn_schedule();
    }

    /// Parse `input` and retarget to it. On a parse error the current
    /// schedule keeps running.
    pub fn retarget_str(&mut self, input: &str, mode: TimeZoneMode) -> Result<(), CountdownError> {
        let target = TargetInstant::parse(input, mode)?;
        self.retarget(target);
        Ok(())
    }

    /// Current frame
    pub fn snapshot(&self) -> EngineState {
        self.shared.borrow().countdown.state()
    }

    /// Stream of frames published from now on
    pub fn subscribe(&self) -> Updates {
        Updates {
            rx: self.shared.subscribe(),
        }
    }

    pub fn target(&self) -> TargetInstant {
        self.shared.borrow().countdown.target().clone()
    }

    pub fn phase(&self) -> Phase {
        self.shared.borrow().countdown.phase()
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    fn spawn_schedule(&mut self) {
        let shared = Arc::clone(&self.shared);
        let clock = Arc::clone(&self.clock);
        let period = self.options.tick_interval;
        let generation = self.generation;

        tracing::info!(
            instant = %shared.borrow().countdown.target(),
            generation,
            period_ms = period.as_millis() as u64,
            "countdown started"
        );

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let now = clock.now();

                let mut keep_ticking = true;
                shared.send_if_modified(|slot| {
                    if slot.generation != generation {
                        keep_ticking = false;
                        return false;
                    }

                    let previous = slot.countdown.state();
                    match slot.countdown.tick(now) {
                        TickOutcome::Updated(remaining) => {
                            tracing::debug!(%remaining, generation, "countdown tick");
                            remaining != previous.remaining
                        }
                        TickOutcome::Expired(remaining) => {
                            tracing::info!(%remaining, generation, "countdown expired");
                            keep_ticking = false;
                            true
                        }
                        TickOutcome::Stopped => {
                            keep_ticking = false;
                            false
                        }
                    }
                });

                if !keep_ticking {
                    break;
                }
            }
        }));
    }
}

impl Drop for CountdownEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Receiver side of a [`CountdownEngine`]
#[derive(Debug, Clone)]
pub struct Updates {
    rx: watch::Receiver<Slot>,
}

impl Updates {
    /// Wait for the next published frame.
    ///
    /// Fails with [`CountdownError::Closed`] once the engine is gone.
    pub async fn changed(&mut self) -> Result<EngineState, CountdownError> {
        self.rx
            .changed()
            .await
            .map_err(|_| CountdownError::Closed)?;
        Ok(self.rx.borrow_and_update().countdown.state())
    }

    /// Latest frame, without marking it as seen
    pub fn current(&self) -> EngineState {
        self.rx.borrow().countdown.state()
    }

    /// Whether a frame was published since the last `changed`
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}
