//! The five activities.
//!
//! Each open section owns its state through [`Activity`]; leaving the
//! section drops the value, which is how ephemeral state is discarded.

pub mod breathing;
pub mod mood;
pub mod puzzle;
pub mod story;
pub mod worry;

use rand::Rng;

pub use breathing::{BreathingSession, TOTAL_CYCLES};
pub use mood::MoodCheckIn;
pub use puzzle::WordPuzzle;
pub use story::StoryStudio;
pub use worry::WorryPillow;

use crate::models::Section;

/// State of the section currently on screen
#[derive(Debug, Clone)]
pub enum Activity {
    Mood(MoodCheckIn),
    Worry(WorryPillow),
    Breathing(BreathingSession),
    Word(WordPuzzle),
    Story(StoryStudio),
}

impl Activity {
    /// Fresh state for a section, drawing content where needed
    pub fn enter<R: Rng + ?Sized>(section: Section, rng: &mut R) -> Self {
        match section {
            Section::Mood => Activity::Mood(MoodCheckIn::new()),
            Section::Worry => Activity::Worry(WorryPillow::new()),
            Section::Breathing => Activity::Breathing(BreathingSession::new()),
            Section::Word => Activity::Word(WordPuzzle::random(rng)),
            Section::Story => Activity::Story(StoryStudio::random(rng)),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Activity::Mood(_) => Section::Mood,
            Activity::Worry(_) => Section::Worry,
            Activity::Breathing(_) => Section::Breathing,
            Activity::Word(_) => Section::Word,
            Activity::Story(_) => Section::Story,
        }
    }

    /// Whether typed characters go into a text field
    pub fn accepts_text(&self) -> bool {
        match self {
            Activity::Worry(pillow) => !pillow.is_sent(),
            Activity::Story(_) => true,
            _ => false,
        }
    }
}
