//! Calm breathing: four timed in/hold/out cycles.
//!
//! The session is a small state machine advanced by a single [`Timer`].
//! Each transition is scheduled from the previous deadline, so a late tick
//! catches up through every phase it missed without drifting.

use std::time::{Duration, Instant};

use tracing::info;

use crate::timer::Timer;

/// Cycles in one session
pub const TOTAL_CYCLES: u32 = 4;

pub const INHALE: Duration = Duration::from_secs(3);
pub const HOLD: Duration = Duration::from_secs(2);
pub const EXHALE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreathPhase {
    #[default]
    Idle,
    In,
    Hold,
    Out,
    Done,
}

impl BreathPhase {
    pub fn text(&self) -> &'static str {
        match self {
            BreathPhase::Idle => "Ready when you are!",
            BreathPhase::In => "Breathe in... 🌸",
            BreathPhase::Hold => "Hold... ✨",
            BreathPhase::Out => "Breathe out... 💨",
            BreathPhase::Done => "Well done! 🌸",
        }
    }

    /// How long the phase lasts; `None` for resting phases
    pub fn duration(&self) -> Option<Duration> {
        match self {
            BreathPhase::In => Some(INHALE),
            BreathPhase::Hold => Some(HOLD),
            BreathPhase::Out => Some(EXHALE),
            BreathPhase::Idle | BreathPhase::Done => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BreathingSession {
    phase: BreathPhase,
    completed: u32,
    timer: Timer,
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingSession {
    pub fn new() -> Self {
        Self {
            phase: BreathPhase::Idle,
            completed: 0,
            timer: Timer::idle(),
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            BreathPhase::In | BreathPhase::Hold | BreathPhase::Out
        )
    }

    /// Start is only offered while idle or after a finished session
    pub fn can_start(&self) -> bool {
        !self.is_running()
    }

    /// Time left in the current phase
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Begin a fresh session. Returns false (and changes nothing) while one
    /// is already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if !self.can_start() {
            return false;
        }
        info!("Breathing session started");
        self.completed = 0;
        self.enter(BreathPhase::In, now);
        true
    }

    /// Stop without completing; used when the section is left
    pub fn cancel(&mut self) {
        self.timer.cancel();
        if self.is_running() {
            self.phase = BreathPhase::Idle;
        }
    }

    /// Advance through every transition that is due at `now`
    pub fn tick(&mut self, now: Instant) {
        while let Some(due) = self.timer.take_due(now) {
            self.advance(due);
        }
    }

    fn advance(&mut self, at: Instant) {
        match self.phase {
            BreathPhase::In => self.enter(BreathPhase::Hold, at),
            BreathPhase::Hold => self.enter(BreathPhase::Out, at),
            BreathPhase::Out => {
                self.completed += 1;
                if self.completed >= TOTAL_CYCLES {
                    info!(cycles = self.completed, "Breathing session complete");
                    self.enter(BreathPhase::Done, at);
                } else {
                    self.enter(BreathPhase::In, at);
                }
            }
            BreathPhase::Idle | BreathPhase::Done => {}
        }
    }

    fn enter(&mut self, phase: BreathPhase, at: Instant) {
        self.phase = phase;
        match phase.duration() {
            Some(d) => self.timer.arm(at, d),
            None => self.timer.cancel(),
        }
    }
}
