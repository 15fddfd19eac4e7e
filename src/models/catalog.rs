//! Static content shipped with the app
//!
//! Every catalog is a read-only array. Selection is done with pure functions
//! over an explicit random source so tests can seed it.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// A word for the unscramble puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleWord {
    pub word: &'static str,
    pub hint: &'static str,
}

/// A mood the user can check in with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub key: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    pub response: &'static str,
}

#[rustfmt::skip]
pub const PUZZLE_WORDS: [PuzzleWord; 11] = [
    PuzzleWord { word: "GLITTER", hint: "Sparkly stuff for crafts" },
    PuzzleWord { word: "SPARKLE", hint: "To shine brightly" },
    PuzzleWord { word: "FLUFFY", hint: "Soft and cuddly" },
    PuzzleWord { word: "CUDDLE", hint: "A warm, cosy hug" },
    PuzzleWord { word: "SHIMMER", hint: "A soft, pretty glow" },
    PuzzleWord { word: "GLOW", hint: "To shine softly" },
    PuzzleWord { word: "COSY", hint: "Warm and comfortable" },
    PuzzleWord { word: "SHINE", hint: "To be bright and glossy" },
    PuzzleWord { word: "BEAUTY", hint: "Looking and feeling lovely" },
    PuzzleWord { word: "CHARM", hint: "Something lovely and delightful" },
    PuzzleWord { word: "SNUGGLE", hint: "To cuddle up close" },
];

pub const STORY_STARTERS: [&str; 8] = [
    "It was a cosy day when a tiny glittering envelope appeared on the windowsill...",
    "At the sleepover, something magical appeared in the garden...",
    "A mysterious pink door appeared that had never been there before. Behind it was...",
    "One sparkly morning, a wish could be granted. The decision was to...",
    "A map to the legendary Glitter Grotto was found...",
    "Everything had turned pink and sparkly overnight...",
    "The glitter jar spilled and something magical started to grow...",
    "A shooting star landed in the garden, and out stepped...",
];

pub const MOODS: [MoodOption; 8] = [
    MoodOption {
        key: "happy",
        emoji: "😊",
        label: "Happy",
        response: "Yay! That makes me so happy too! 🎉",
    },
    MoodOption {
        key: "calm",
        emoji: "😌",
        label: "Calm",
        response: "That's so peaceful 🌸",
    },
    MoodOption {
        key: "worried",
        emoji: "😟",
        label: "Worried",
        response: "*big hug* I'm here for you 💕",
    },
    MoodOption {
        key: "sad",
        emoji: "😢",
        label: "Sad",
        response: "It's okay to feel this way 💕",
    },
    MoodOption {
        key: "angry",
        emoji: "😠",
        label: "Angry",
        response: "Those feelings are totally valid. I'm here 💕",
    },
    MoodOption {
        key: "tired",
        emoji: "😴",
        label: "Tired",
        response: "Rest is so important. Try calm breathing? 💤",
    },
    MoodOption {
        key: "anxious",
        emoji: "😰",
        label: "Anxious",
        response: "Moment by moment, you've got this 🌈",
    },
    MoodOption {
        key: "excited",
        emoji: "🤩",
        label: "Excited",
        response: "Ooh exciting! That energy is amazing! ✨",
    },
];

/// Uniform pick from any slice; `None` only when the slice is empty
pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Uniform random permutation of a word's letters (the identity included)
pub fn shuffle_letters<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Vec<char> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    letters
}

pub fn draw_word<R: Rng + ?Sized>(rng: &mut R) -> &'static PuzzleWord {
    pick(&PUZZLE_WORDS, rng).unwrap_or(&PUZZLE_WORDS[0])
}

pub fn draw_story_starter<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(&STORY_STARTERS, rng)
        .copied()
        .unwrap_or(STORY_STARTERS[0])
}
