//! UI helper functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::theme::{BG_CARD, BG_PRIMARY, PINK_SOFT, TEXT_ON_ACCENT, TEXT_PRIMARY};

/// Squidge, the mascot
pub const MASCOT: [&str; 3] = ["  .-\"\"\"-.  ", " ( ◕ ‿ ◕ ) ", "  `~~~~~`  "];

/// Word wrapping that keeps explicit line breaks and splits words longer
/// than the width
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            // Hard-split words that can never fit
            while word.len() > max_width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            if current_len == 0 {
                current = word.iter().collect();
                current_len = word.len();
            } else if current_len + 1 + word.len() <= max_width {
                current.push(' ');
                current.extend(word.iter());
                current_len += 1 + word.len();
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.iter().collect();
                current_len = word.len();
            }
        }

        lines.push(current);
    }

    lines
}

/// Hard wrap at `max_width` chars for text being typed: every space is kept
/// so the caret follows what was entered
pub fn wrap_chars(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let chars: Vec<char> = paragraph.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
        }
        for chunk in chars.chunks(max_width) {
            lines.push(chunk.iter().collect());
        }
    }

    lines
}

/// Paragraph with every line centered
pub fn centered_text<'a>(text: impl Into<Text<'a>>) -> Paragraph<'a> {
    Paragraph::new(text).alignment(Alignment::Center)
}

/// Rect of at most `width` x `height`, centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Horizontal strip of at most `width`, centered in `area`, full height
pub fn column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// White rounded card; `highlighted` swaps the border to the accent color
pub fn card(highlighted: Color, selected: bool) -> Block<'static> {
    let border = if selected { highlighted } else { PINK_SOFT };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(BG_CARD).fg(TEXT_PRIMARY))
}

/// Clear the cells under a widget so background sparkles don't show through
pub fn clear(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

/// Section title flanked by short rules
pub fn section_header(icon: &str, title: &str) -> Line<'static> {
    let rule = Style::default().fg(PINK_SOFT);
    let bold = Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("─── ", rule),
        Span::styled(format!("{icon} {title}"), bold),
        Span::styled(" ───", rule),
    ])
    .alignment(Alignment::Center)
}

/// Button label; disabled buttons are drawn without the accent fill
pub fn button(label: &str, accent: Color, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default()
            .fg(TEXT_ON_ACCENT)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent).bg(BG_PRIMARY)
    };
    Line::styled(format!("  {label}  "), style).alignment(Alignment::Center)
}

/// Dim key hint line shown at the bottom of a screen
pub fn key_hints(hints: &str, color: Color) -> Line<'static> {
    Line::styled(hints.to_string(), Style::default().fg(color)).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("a cosy day", 0), vec!["a cosy day"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        assert_eq!(
            wrap_text("once upon a time", 9),
            vec!["once upon", "a time"]
        );
    }

    #[test]
    fn test_wrap_text_keeps_line_breaks() {
        assert_eq!(wrap_text("a fox\n\nwaved", 20), vec!["a fox", "", "waved"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(
            wrap_text("hi sparklesparkle", 5),
            vec!["hi", "spark", "lespa", "rkle"]
        );
    }

    #[test]
    fn test_wrap_text_counts_chars() {
        assert_eq!(wrap_text("ééé ééé", 3), vec!["ééé", "ééé"]);
    }

    #[test]
    fn test_wrap_chars_keeps_double_and_trailing_spaces() {
        assert_eq!(wrap_chars("a  b ", 10), vec!["a  b "]);
    }

    #[test]
    fn test_wrap_chars_splits_at_width() {
        assert_eq!(wrap_chars("ab cd ef", 3), vec!["ab ", "cd ", "ef"]);
    }

    #[test]
    fn test_wrap_chars_keeps_line_breaks() {
        assert_eq!(wrap_chars("hi \n\n  yo", 8), vec!["hi ", "", "  yo"]);
        assert_eq!(wrap_chars("end\n", 8), vec!["end", ""]);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }

    #[test]
    fn test_column() {
        let area = Rect::new(2, 1, 40, 8);
        assert_eq!(column(area, 20), Rect::new(12, 1, 20, 8));
    }
}
