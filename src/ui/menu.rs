//! Main menu: greeting and the activity grid

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::{App, MENU_COLUMNS};
use crate::models::Section;
use crate::theme::{LILAC, PINK, PURPLE, TEXT_MUTED, TEXT_PRIMARY};

use super::helpers::{MASCOT, card, centered_text, clear, column, key_hints};

const CARD_HEIGHT: u16 = 4;

pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let area = column(area, 56);
    let rows = Section::ALL.len().div_ceil(MENU_COLUMNS) as u16;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Top margin
            Constraint::Length(3),                  // Mascot
            Constraint::Length(1),                  // Greeting
            Constraint::Length(2),                  // Tagline
            Constraint::Length(rows * CARD_HEIGHT), // Activity grid
            Constraint::Length(3),                  // Footer
            Constraint::Min(0),                     // Spacer
            Constraint::Length(1),                  // Hints
        ])
        .split(area);

    let pink = Style::default().fg(PINK);
    let primary = Style::default().fg(TEXT_PRIMARY);
    let bold = primary.add_modifier(Modifier::BOLD);

    let mascot: Vec<Line> = MASCOT.iter().map(|l| Line::styled(*l, pink)).collect();
    frame.render_widget(centered_text(mascot), layout[1]);

    let greeting = format!("Hi {} 🌸", app.profile.display_name());
    frame.render_widget(centered_text(Line::styled(greeting, bold)), layout[2]);

    let tagline = "Your cosy corner, always here for you";
    let tagline = Line::styled(tagline, Style::default().fg(TEXT_MUTED));
    frame.render_widget(centered_text(tagline), layout[3]);

    render_grid(frame, layout[4], app.menu_cursor);

    let footer = vec![
        Line::styled("Made with 💕 for you", primary),
        Line::styled("Your data stays on your device", primary),
    ];
    frame.render_widget(centered_text(footer), layout[5]);

    let hints = key_hints("←↑↓→ move · Enter/1-5 open · q: quit", LILAC);
    frame.render_widget(Paragraph::new(hints), layout[7]);
}

fn render_grid(frame: &mut Frame, area: Rect, cursor: usize) {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            Section::ALL
                .chunks(MENU_COLUMNS)
                .map(|_| Constraint::Length(CARD_HEIGHT)),
        )
        .split(area);

    for (row, sections) in Section::ALL.chunks(MENU_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, MENU_COLUMNS as u32); MENU_COLUMNS])
            .split(row_areas[row]);

        for (col, section) in sections.iter().enumerate() {
            let index = row * MENU_COLUMNS + col;
            let selected = index == cursor;
            let cell = cells[col].inner(Margin::new(1, 0));
            clear(frame, cell);

            let label_style = if selected {
                Style::default().fg(PURPLE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_PRIMARY)
            };
            let content = vec![
                Line::from(format!("{} {}", index + 1, section.icon())),
                Line::from(Span::styled(section.label(), label_style)),
            ];
            let block = card(PINK, selected);
            frame.render_widget(centered_text(content).block(block), cell);
        }
    }
}
