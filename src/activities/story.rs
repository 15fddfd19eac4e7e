//! Story Studio: a random opening line and room to keep writing.

use rand::Rng;

use crate::models::catalog::draw_story_starter;
use crate::text_input::TextInput;

#[derive(Debug, Clone)]
pub struct StoryStudio {
    starter: &'static str,
    continuation: TextInput,
}

impl StoryStudio {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_starter(draw_story_starter(rng))
    }

    pub fn with_starter(starter: &'static str) -> Self {
        Self {
            starter,
            continuation: TextInput::new(),
        }
    }

    pub fn starter(&self) -> &'static str {
        self.starter
    }

    pub fn continuation(&self) -> &str {
        self.continuation.as_str()
    }

    pub fn type_char(&mut self, c: char) {
        self.continuation.insert(c);
    }

    pub fn backspace(&mut self) {
        self.continuation.backspace();
    }

    /// New starter, empty page
    pub fn redraw<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::random(rng);
    }
}
