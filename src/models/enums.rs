//! Enums used throughout the app
//!
//! Screens and sections are plain value types; the state that belongs to an
//! open section lives in [`crate::activities::Activity`].

/// One of the five activities reachable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Mood,
    Worry,
    Breathing,
    Word,
    Story,
}

impl Section {
    /// Menu order
    pub const ALL: [Section; 5] = [
        Section::Mood,
        Section::Worry,
        Section::Breathing,
        Section::Word,
        Section::Story,
    ];

    /// Stable name of the section (`mood | worry | breathing | word | story`)
    pub fn key(&self) -> &'static str {
        match self {
            Section::Mood => "mood",
            Section::Worry => "worry",
            Section::Breathing => "breathing",
            Section::Word => "word",
            Section::Story => "story",
        }
    }

    /// Label shown on the menu card
    pub fn label(&self) -> &'static str {
        match self {
            Section::Mood => "How are you?",
            Section::Worry => "Worry Pillow",
            Section::Breathing => "Calm Breathing",
            Section::Word => "Word Sparkle",
            Section::Story => "Story Studio",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Mood => "🌈",
            Section::Worry => "☁️",
            Section::Breathing => "🌸",
            Section::Word => "💎",
            Section::Story => "📖",
        }
    }

    /// Section at a menu position, if any
    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }
}

/// What the user is currently looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Menu,
    Section(Section),
}
