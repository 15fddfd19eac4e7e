//! Editable text buffer backing the name, worry and story fields.

/// Text field with an optional character cap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    max_chars: Option<usize>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field that silently refuses input past `max` characters
    pub fn with_max_chars(max: usize) -> Self {
        Self {
            value: String::new(),
            max_chars: Some(max),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Append a character; returns false when the cap is reached
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() && c != '\n' {
            return false;
        }
        if let Some(max) = self.max_chars {
            if self.char_count() >= max {
                return false;
            }
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
