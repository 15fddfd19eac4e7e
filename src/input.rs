//! Keyboard mapping.
//!
//! Keys are translated into [`Action`]s without touching app state; the
//! app decides what an action means on the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Whether printable keys are text or shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// A text field has focus (setup name, worry, story)
    Text,
    /// Menus, grids and tiles
    Navigate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Back,
    Move(Direction),
    /// Enter: activate the focused item or submit the field
    Confirm,
    /// Digit shortcut, zero-based
    Pick(usize),
    /// Draw a new word or story starter
    Redraw,
    Type(char),
    Erase,
}

/// Translate one key event; releases and unmapped keys yield `None`
pub fn map_key(context: InputContext, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('n') if ctrl => return Some(Action::Redraw),
        KeyCode::Esc => return Some(Action::Back),
        KeyCode::Enter => return Some(Action::Confirm),
        KeyCode::Up => return Some(Action::Move(Direction::Up)),
        KeyCode::Down => return Some(Action::Move(Direction::Down)),
        KeyCode::Left => return Some(Action::Move(Direction::Left)),
        KeyCode::Right => return Some(Action::Move(Direction::Right)),
        KeyCode::Tab => return Some(Action::Move(Direction::Right)),
        KeyCode::BackTab => return Some(Action::Move(Direction::Left)),
        _ => {}
    }

    match context {
        InputContext::Text => match key.code {
            KeyCode::Backspace => Some(Action::Erase),
            KeyCode::Char(c) if !ctrl => Some(Action::Type(c)),
            _ => None,
        },
        InputContext::Navigate => match key.code {
            KeyCode::Char(' ') => Some(Action::Confirm),
            KeyCode::Char('q') => Some(Action::Back),
            KeyCode::Char('n') => Some(Action::Redraw),
            KeyCode::Char(c @ '1'..='9') => Some(Action::Pick(c as usize - '1' as usize)),
            _ => None,
        },
    }
}
