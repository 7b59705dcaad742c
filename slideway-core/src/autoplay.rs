//! Autoplay scheduling.
//!
//! An [`AutoplaySchedule`] decides *whether* a timer should run and tags each
//! arming with a generation. Hosts that own an event loop (the iced player)
//! key their timer subscription by that generation; headless hosts use an
//! [`AutoplayDriver`], which keeps at most one [`AutoplayTimer`] alive and
//! swaps it whenever the generation moves on.
//!
//! Ticks carry the generation they were armed for, so a tick that was already
//! in flight when the timer was replaced is recognised as stale and dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// One firing of an autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayTick {
    pub generation: u64,
}

/// What a host must arm: a repeating timer with this interval, tagged with
/// this generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArmRequest {
    pub interval: Duration,
    pub generation: u64,
}

/// Whether autoplay should run, how often, and which arming is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplaySchedule {
    enabled: bool,
    interval: Duration,
    generation: u64,
}

impl AutoplaySchedule {
    pub fn new(enabled: bool, interval: Duration) -> Self {
        Self {
            enabled,
            interval: interval.max(Duration::from_millis(1)),
            generation: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidate the armed timer so the host arms a fresh one.
    pub fn rearm(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.rearm();
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        let interval = interval.max(Duration::from_millis(1));
        if self.interval != interval {
            self.interval = interval;
            self.rearm();
        }
    }

    /// The timer the host should be running right now, if any.
    pub fn request(&self) -> Option<ArmRequest> {
        self.enabled.then_some(ArmRequest {
            interval: self.interval,
            generation: self.generation,
        })
    }

    /// Whether `tick` came from the currently armed timer.
    pub fn accepts(&self, tick: AutoplayTick) -> bool {
        self.enabled && tick.generation == self.generation
    }
}

/// A repeating timer task. Dropping the handle cancels the task.
#[derive(Debug)]
pub struct AutoplayTimer {
    request: ArmRequest,
    handle: JoinHandle<()>,
}

impl AutoplayTimer {
    /// Spawn the timer on the current tokio runtime. The first tick fires one
    /// full interval after arming.
    pub fn arm(request: ArmRequest, ticks: mpsc::UnboundedSender<AutoplayTick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval_at(Instant::now() + request.interval, request.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let tick = AutoplayTick {
                    generation: request.generation,
                };
                if ticks.send(tick).is_err() {
                    tracing::trace!("autoplay receiver dropped; stopping timer");
                    break;
                }
            }
        });
        tracing::debug!(
            generation = request.generation,
            interval_ms = request.interval.as_millis() as u64,
            "autoplay timer armed"
        );
        Self { request, handle }
    }

    pub fn request(&self) -> ArmRequest {
        self.request
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!(generation = self.request.generation, "autoplay timer released");
    }
}

/// Keeps a single [`AutoplayTimer`] in step with a schedule.
#[derive(Debug)]
pub struct AutoplayDriver {
    ticks: mpsc::UnboundedSender<AutoplayTick>,
    timer: Option<AutoplayTimer>,
}

impl AutoplayDriver {
    pub fn new(ticks: mpsc::UnboundedSender<AutoplayTick>) -> Self {
        Self { ticks, timer: None }
    }

    /// A driver together with the receiving end of its tick channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<AutoplayTick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn armed(&self) -> Option<ArmRequest> {
        self.timer.as_ref().map(AutoplayTimer::request)
    }

    /// Arm, re-arm, or release so that exactly `request` is running.
    pub fn sync(&mut self, request: Option<ArmRequest>) {
        if self.armed() == request {
            return;
        }
        // Release first so two timers never overlap.
        self.timer = None;
        if let Some(request) = request {
            self.timer = Some(AutoplayTimer::arm(request, self.ticks.clone()));
        }
    }

    pub fn release(&mut self) {
        self.timer = None;
    }
}
