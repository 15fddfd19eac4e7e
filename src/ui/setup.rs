//! First-launch name prompt

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::models::MAX_NAME_CHARS;
use crate::theme::{LILAC, PINK, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

use super::helpers::{MASCOT, button, card, centered, centered_text, clear, key_hints};

pub fn render_setup(frame: &mut Frame, area: Rect, app: &App) {
    let panel = centered(area, 44, 15);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mascot
            Constraint::Length(2), // Title
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Name field
            Constraint::Length(2), // Button
            Constraint::Length(1), // Hints
        ])
        .split(panel);

    let pink = Style::default().fg(PINK);
    let primary = Style::default().fg(TEXT_PRIMARY);

    let mascot: Vec<Line> = MASCOT.iter().map(|l| Line::styled(*l, pink)).collect();
    frame.render_widget(centered_text(mascot), layout[0]);

    let bold = primary.add_modifier(Modifier::BOLD);
    let title = Line::styled("🌸 My Cosy Corner 🌸", bold);
    frame.render_widget(centered_text(title), layout[1]);

    let secondary = Style::default().fg(TEXT_SECONDARY);
    let prompt = Line::styled("What's your name?", secondary);
    frame.render_widget(centered_text(prompt), layout[2]);

    let field_area = centered(layout[3], 24, 3);
    clear(frame, field_area);
    let value = app.name_input.as_str();
    let text = if value.is_empty() {
        Line::styled("Your name...", Style::default().fg(TEXT_MUTED))
    } else {
        Line::from(vec![
            Span::styled(value.to_string(), primary),
            Span::styled("▏", pink),
        ])
    };
    frame.render_widget(centered_text(text).block(card(PINK, true)), field_area);

    let ready = !app.name_input.is_blank();
    let go = button("Let's Go! ✨", PINK, ready);
    frame.render_widget(Paragraph::new(go), layout[4]);

    let hints = format!("Enter: continue · up to {MAX_NAME_CHARS} letters · Esc: quit");
    frame.render_widget(Paragraph::new(key_hints(&hints, LILAC)), layout[5]);
}
