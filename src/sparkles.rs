//! Floating sparkle particles behind every screen.
//!
//! Each particle is a restartable generator over normalized time `t` in
//! `[0, 1]`: [`sample`] maps `t` to a position, opacity and rotation. The
//! field holds no timers of its own; [`SparkleField::tick`] is driven by the
//! app clock and restarts particles as they finish.

use std::time::{Duration, Instant};

use rand::Rng;

pub const GLYPHS: [char; 7] = ['✦', '★', '♥', '✧', '✺', '❀', '✿'];
pub const NUM_SPARKLES: usize = 12;

/// Peak opacity, reached after the fade-in
pub const MAX_OPACITY: f32 = 0.6;
const FADE_IN_END: f32 = 0.2;
const HOLD_END: f32 = 0.7;

/// Vertical start/end as a fraction of viewport height; 0 is the top edge
const RISE_FROM: f32 = 1.05;
const RISE_TO: f32 = -0.1;

const MIN_DURATION_MS: u64 = 4_000;
const DURATION_SPREAD_MS: u64 = 6_000;
const MAX_INITIAL_DELAY_MS: u64 = 5_000;

/// Where a particle is at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkleFrame {
    /// Horizontal position, fraction of viewport width
    pub x: f32,
    /// Vertical position, fraction of viewport height (may be off-screen)
    pub y: f32,
    pub opacity: f32,
    /// Degrees, 0 to 360 over one traversal
    pub rotation: f32,
}

/// Pure envelope of one traversal at normalized time `t`
pub fn sample(x: f32, t: f32) -> SparkleFrame {
    let t = t.clamp(0.0, 1.0);
    let opacity = if t < FADE_IN_END {
        MAX_OPACITY * t / FADE_IN_END
    } else if t < HOLD_END {
        MAX_OPACITY
    } else {
        MAX_OPACITY * (1.0 - t) / (1.0 - HOLD_END)
    };
    SparkleFrame {
        x,
        y: RISE_FROM + (RISE_TO - RISE_FROM) * t,
        opacity,
        rotation: 360.0 * t,
    }
}

#[derive(Debug, Clone)]
pub struct Sparkle {
    pub glyph: char,
    x: f32,
    delay: Duration,
    duration: Duration,
    cycle_start: Instant,
}

impl Sparkle {
    fn spawn<R: Rng + ?Sized>(glyph: char, now: Instant, rng: &mut R) -> Self {
        Self {
            glyph,
            x: rng.random::<f32>(),
            delay: Duration::from_millis(rng.random_range(0..=MAX_INITIAL_DELAY_MS)),
            duration: random_duration(rng),
            cycle_start: now,
        }
    }

    /// Normalized progress through the current traversal; `None` while the
    /// initial delay is still running
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.cycle_start);
        let moving = elapsed.checked_sub(self.delay)?;
        let t = moving.as_secs_f32() / self.duration.as_secs_f32();
        Some(t.min(1.0))
    }

    pub fn frame(&self, now: Instant) -> Option<SparkleFrame> {
        self.progress(now).map(|t| sample(self.x, t))
    }

    /// Restart every traversal that has finished by `now`, re-randomizing
    /// position and duration
    fn advance<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        loop {
            let end = self.cycle_start + self.delay + self.duration;
            if end > now {
                return;
            }
            self.cycle_start = end;
            self.delay = Duration::ZERO;
            self.x = rng.random::<f32>();
            self.duration = random_duration(rng);
        }
    }
}

fn random_duration<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(MIN_DURATION_MS + rng.random_range(0..=DURATION_SPREAD_MS))
}

#[derive(Debug, Clone, Default)]
pub struct SparkleField {
    sparkles: Vec<Sparkle>,
}

impl SparkleField {
    pub fn new<R: Rng + ?Sized>(count: usize, now: Instant, rng: &mut R) -> Self {
        let sparkles = (0..count)
            .map(|i| Sparkle::spawn(GLYPHS[i % GLYPHS.len()], now, rng))
            .collect();
        Self { sparkles }
    }

    /// A field with no particles
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        for sparkle in &mut self.sparkles {
            sparkle.advance(now, rng);
        }
    }

    /// Visible frames at `now`, with their glyphs
    pub fn frames(&self, now: Instant) -> impl Iterator<Item = (char, SparkleFrame)> + '_ {
        self.sparkles
            .iter()
            .filter_map(move |s| s.frame(now).map(|f| (s.glyph, f)))
    }
}
