//! Mood check-in: pick a feeling, read a kind reply, then drift back to the menu.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::models::{MOODS, MoodOption};
use crate::timer::Timer;

/// How long a response stays on screen before returning to the menu
pub const DISMISS_AFTER: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct MoodCheckIn {
    selected: Option<usize>,
    dismiss: Timer,
}

impl Default for MoodCheckIn {
    fn default() -> Self {
        Self::new()
    }
}

impl MoodCheckIn {
    pub fn new() -> Self {
        Self {
            selected: None,
            dismiss: Timer::idle(),
        }
    }

    pub fn options(&self) -> &'static [MoodOption] {
        &MOODS
    }

    pub fn selected(&self) -> Option<&'static MoodOption> {
        self.selected.and_then(|i| MOODS.get(i))
    }

    /// Show the response for a mood and (re)arm the dismiss timer.
    /// Returns false for an index outside the catalog.
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        if index >= MOODS.len() {
            return false;
        }
        debug!(mood = MOODS[index].key, "Mood selected");
        self.selected = Some(index);
        self.dismiss.arm(now, DISMISS_AFTER);
        true
    }

    /// True once the response has been shown long enough
    pub fn take_dismiss(&mut self, now: Instant) -> bool {
        self.dismiss.take_due(now).is_some()
    }
}
