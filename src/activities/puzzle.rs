//! Word Sparkle: unscramble a catalog word by tapping letter tiles.

use rand::Rng;
use tracing::debug;

use crate::models::catalog::{draw_word, shuffle_letters};
use crate::models::PuzzleWord;

/// Outcome once every answer slot is filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleResult {
    Solved,
    Revealed(&'static str),
}

impl PuzzleResult {
    pub fn message(&self) -> String {
        match self {
            PuzzleResult::Solved => "🎉 Sparkling! You got it!".to_string(),
            PuzzleResult::Revealed(word) => format!("The word was {}. Try again! 💪", word),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordPuzzle {
    target: &'static PuzzleWord,
    tiles: Vec<char>,
    used: Vec<bool>,
    answer: Vec<char>,
    result: Option<PuzzleResult>,
}

impl WordPuzzle {
    /// Draw a random word and shuffle its tiles
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let target = draw_word(rng);
        let tiles = shuffle_letters(target.word, rng);
        debug!(len = tiles.len(), "New puzzle drawn");
        Self::with_tiles(target, tiles)
    }

    /// Puzzle over an explicit tile order
    pub fn with_tiles(target: &'static PuzzleWord, tiles: Vec<char>) -> Self {
        Self {
            target,
            used: vec![false; tiles.len()],
            tiles,
            answer: Vec::new(),
            result: None,
        }
    }

    /// Draw a new word and forget everything about the current one
    pub fn redraw<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::random(rng);
    }

    pub fn hint(&self) -> &'static str {
        self.target.hint
    }

    pub fn word_len(&self) -> usize {
        self.target.word.chars().count()
    }

    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }

    pub fn answer(&self) -> &[char] {
        &self.answer
    }

    pub fn result(&self) -> Option<&PuzzleResult> {
        self.result.as_ref()
    }

    /// Tap a tile. Used tiles, out-of-range indices and taps after the answer
    /// is full are ignored; returns whether the tap took effect.
    pub fn tap(&mut self, index: usize) -> bool {
        if self.answer.len() >= self.word_len() {
            return false;
        }
        let Some(&letter) = self.tiles.get(index) else {
            return false;
        };
        if self.used[index] {
            return false;
        }

        self.used[index] = true;
        self.answer.push(letter);

        if self.answer.len() == self.word_len() {
            let attempt: String = self.answer.iter().collect();
            self.result = Some(if attempt == self.target.word {
                PuzzleResult::Solved
            } else {
                PuzzleResult::Revealed(self.target.word)
            });
            let solved = matches!(self.result, Some(PuzzleResult::Solved));
            debug!(solved, "Puzzle finished");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::PUZZLE_WORDS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn glow() -> &'static PuzzleWord {
        PUZZLE_WORDS.iter().find(|w| w.word == "GLOW").unwrap()
    }

    /// Tiles "OGWL": G=1, L=3, O=0, W=2
    fn glow_puzzle() -> WordPuzzle {
        WordPuzzle::with_tiles(glow(), vec!['O', 'G', 'W', 'L'])
    }

    #[test]
    fn test_correct_order_solves() {
        let mut puzzle = glow_puzzle();
        for index in [1, 3, 0, 2] {
            assert!(puzzle.tap(index));
        }
        assert_eq!(puzzle.answer(), &['G', 'L', 'O', 'W']);
        assert_eq!(puzzle.result(), Some(&PuzzleResult::Solved));
        let message = puzzle.result().unwrap().message();
        assert_eq!(message, "🎉 Sparkling! You got it!");
    }

    #[test]
    fn test_wrong_order_reveals_word() {
        let mut puzzle = glow_puzzle();
        for index in [0, 1, 2, 3] {
            puzzle.tap(index);
        }
        assert_eq!(puzzle.result(), Some(&PuzzleResult::Revealed("GLOW")));
        assert!(puzzle.result().unwrap().message().contains("GLOW"));
    }

    #[test]
    fn test_used_tile_is_noop() {
        let mut puzzle = glow_puzzle();
        assert!(puzzle.tap(1));
        assert!(!puzzle.tap(1));
        assert_eq!(puzzle.answer(), &['G']);
        assert!(puzzle.is_used(1));
        assert!(puzzle.result().is_none());
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut puzzle = glow_puzzle();
        assert!(!puzzle.tap(4));
        assert!(!puzzle.tap(usize::MAX));
        assert!(puzzle.answer().is_empty());
    }

    #[test]
    fn test_answer_never_exceeds_word_length() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut puzzle = WordPuzzle::random(&mut rng);
            for index in 0..puzzle.tiles().len() + 3 {
                puzzle.tap(index);
                assert!(puzzle.answer().len() <= puzzle.word_len());
            }
            assert!(puzzle.result().is_some());
        }
    }

    #[test]
    fn test_comparison_is_case_exact() {
        static LOWER: PuzzleWord = PuzzleWord {
            word: "glow",
            hint: "",
        };
        let mut puzzle = WordPuzzle::with_tiles(&LOWER, vec!['G', 'L', 'O', 'W']);
        for index in 0..4 {
            puzzle.tap(index);
        }
        assert_eq!(puzzle.result(), Some(&PuzzleResult::Revealed("glow")));
    }

    #[test]
    fn test_redraw_resets_state() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut puzzle = glow_puzzle();
        puzzle.tap(0);
        puzzle.tap(1);

        puzzle.redraw(&mut rng);
        assert!(puzzle.answer().is_empty());
        assert!(puzzle.result().is_none());
        assert!((0..puzzle.tiles().len()).all(|i| !puzzle.is_used(i)));
        assert_eq!(puzzle.tiles().len(), puzzle.word_len());
    }
}
