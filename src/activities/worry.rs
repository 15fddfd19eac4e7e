//! Worry Pillow: write a worry down, then let it go.
//!
//! Submitted text is dropped on the spot. It is never stored, logged or
//! kept anywhere in memory after the confirmation appears.

use tracing::info;

use crate::text_input::TextInput;

pub const CONFIRMATION: &str = "Your worry is safe now.\nIt's okay. You can let it go. 💕";

#[derive(Debug, Clone, Default)]
pub struct WorryPillow {
    draft: TextInput,
    sent: bool,
}

impl WorryPillow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        self.draft.as_str()
    }

    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn type_char(&mut self, c: char) {
        if !self.sent {
            self.draft.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if !self.sent {
            self.draft.backspace();
        }
    }

    /// Let the worry go. Blank drafts are ignored; returns whether the
    /// confirmation is now showing because of this call.
    pub fn submit(&mut self) -> bool {
        if self.sent || self.draft.is_blank() {
            return false;
        }
        self.draft.clear();
        self.sent = true;
        info!("Worry let go");
        true
    }

    /// Back to an empty page after the confirmation
    pub fn write_another(&mut self) {
        self.draft.clear();
        self.sent = false;
    }
}
