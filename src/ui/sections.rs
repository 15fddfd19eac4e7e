//! Activity screens

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::activities::worry::CONFIRMATION;
use crate::activities::{
    Activity, BreathingSession, MoodCheckIn, StoryStudio, TOTAL_CYCLES, WordPuzzle, WorryPillow,
};
use crate::app::{App, MOOD_COLUMNS};
use crate::models::Section;
use crate::theme::{
    BG_SLOT, CALM_BLUE, DOT_PENDING, LILAC, PINK, PINK_SOFT, PURPLE, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_STORY,
};
use crate::utils::seconds_left;

use super::helpers::{
    button, card, centered_text, clear, column, key_hints, section_header, wrap_chars, wrap_text,
};

/// Shared frame for every section: back hint, title, body, key hints.
/// Returns the body area.
fn section_frame(
    frame: &mut Frame,
    area: Rect,
    section: Section,
    title: &str,
    hints: &str,
) -> Rect {
    let area = column(area, 64);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Back
            Constraint::Length(2), // Header
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Hints
        ])
        .split(area);

    let back_style = Style::default().fg(TEXT_PRIMARY).bg(Color::White);
    let back = Line::styled(" ← Back (Esc) ", back_style);
    frame.render_widget(Paragraph::new(back), layout[0]);
    let header = section_header(section.icon(), title);
    frame.render_widget(Paragraph::new(header), layout[1]);
    frame.render_widget(Paragraph::new(key_hints(hints, LILAC)), layout[3]);
    layout[2]
}

pub fn render_section(frame: &mut Frame, area: Rect, app: &App) {
    let Some(activity) = &app.activity else {
        return;
    };
    match activity {
        Activity::Mood(mood) => render_mood(frame, area, mood, app.mood_cursor),
        Activity::Worry(pillow) => render_worry(frame, area, pillow),
        Activity::Breathing(session) => render_breathing(frame, area, session, app),
        Activity::Word(puzzle) => render_word(frame, area, puzzle, app.tile_cursor),
        Activity::Story(studio) => render_story(frame, area, studio),
    }
}

fn render_mood(frame: &mut Frame, area: Rect, mood: &MoodCheckIn, cursor: usize) {
    let body = section_frame(
        frame,
        area,
        Section::Mood,
        "How are you feeling?",
        "←↑↓→ move · Enter/1-8 choose · Esc: back",
    );

    let options = mood.options();
    let rows = options.len().div_ceil(MOOD_COLUMNS);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows as u16 * 4),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(body);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(4); rows])
        .split(layout[0]);

    let primary = Style::default().fg(TEXT_PRIMARY);
    for (row, chunk) in options.chunks(MOOD_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, MOOD_COLUMNS as u32); MOOD_COLUMNS])
            .split(row_areas[row]);
        for (col, option) in chunk.iter().enumerate() {
            let index = row * MOOD_COLUMNS + col;
            let cell = cells[col].inner(Margin::new(1, 0));
            clear(frame, cell);
            let label = Line::styled(option.label, primary);
            let content = vec![Line::from(option.emoji), label];
            let block = card(PINK, index == cursor);
            frame.render_widget(centered_text(content).block(block), cell);
        }
    }

    if let Some(selected) = mood.selected() {
        let bold = Style::default().fg(PURPLE).add_modifier(Modifier::BOLD);
        let response = Line::from(vec![
            Span::raw(format!("{} ", selected.emoji)),
            Span::styled(selected.response, bold),
        ]);
        let response = centered_text(response).wrap(Wrap { trim: true });
        frame.render_widget(response, layout[2]);
    }
}

fn render_worry(frame: &mut Frame, area: Rect, pillow: &WorryPillow) {
    let primary = Style::default().fg(TEXT_PRIMARY);

    if pillow.is_sent() {
        let hints = "Enter: write another · Esc: back";
        let body = section_frame(frame, area, Section::Worry, "Worry Pillow", hints);
        let mut lines = vec![Line::from("☁️"), Line::from("")];
        lines.extend(CONFIRMATION.lines().map(|l| Line::styled(l, primary)));
        lines.push(Line::from(""));
        lines.push(button("Write Another", PINK, true));
        let confirmation = centered_text(lines).wrap(Wrap { trim: true });
        frame.render_widget(confirmation, body);
        return;
    }

    let hints = "type freely · Enter: let it go · Esc: back";
    let body = section_frame(frame, area, Section::Worry, "Worry Pillow", hints);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(body);

    let intro = "Write it down and let it go. This is your safe space.";
    let intro = centered_text(Line::styled(intro, primary));
    frame.render_widget(intro.wrap(Wrap { trim: true }), layout[0]);

    render_text_area(
        frame,
        layout[1],
        pillow.draft(),
        "Let it all out... I'm listening...",
        TEXT_PRIMARY,
    );

    let ready = !pillow.draft().trim().is_empty();
    let let_go = button("💕 Let It Go", PURPLE, ready);
    frame.render_widget(Paragraph::new(let_go), layout[2]);
}

fn render_breathing(frame: &mut Frame, area: Rect, session: &BreathingSession, app: &App) {
    let hints = if session.is_running() {
        "breathe along · Esc: back"
    } else {
        "Enter: start · Esc: back"
    };
    let body = section_frame(frame, area, Section::Breathing, "Calm Breathing", hints);

    let calm = Style::default().fg(CALM_BLUE).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(TEXT_MUTED);
    let pending = Style::default().fg(DOT_PENDING);

    let mut lines = vec![
        Line::from(""),
        Line::from("🌸"),
        Line::from(""),
        Line::styled(session.phase().text(), calm),
    ];

    let countdown = match session.remaining(app.now) {
        Some(left) if session.is_running() => seconds_left(left).to_string(),
        _ => String::new(),
    };
    lines.push(Line::styled(countdown, muted));
    lines.push(Line::from(""));

    let dots: Vec<Span> = (0..TOTAL_CYCLES)
        .map(|i| {
            if session.completed_cycles() > i {
                Span::styled("● ", calm)
            } else {
                Span::styled("○ ", pending)
            }
        })
        .collect();
    lines.push(Line::from(dots));
    let progress = format!("{} of {}", session.completed_cycles(), TOTAL_CYCLES);
    lines.push(Line::styled(progress, muted));
    lines.push(Line::from(""));

    let label = if session.is_running() {
        "Breathing..."
    } else {
        "Start Breathing 🌸"
    };
    lines.push(button(label, PINK, session.can_start()));

    frame.render_widget(centered_text(lines), body);
}

fn render_word(frame: &mut Frame, area: Rect, puzzle: &WordPuzzle, cursor: usize) {
    let body = section_frame(
        frame,
        area,
        Section::Word,
        "Word Sparkle",
        "←→ move · Enter/1-9 tap · n: new word · Esc: back",
    );
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Length(2)])
        .split(body);

    let card_area = layout[0];
    clear(frame, card_area);
    let block = card(PURPLE, false);
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let muted = Style::default().fg(TEXT_MUTED);
    let primary = Style::default().fg(TEXT_PRIMARY);

    let hint = format!("Hint: {}", puzzle.hint());
    let mut lines = vec![
        Line::styled(hint, muted.add_modifier(Modifier::ITALIC)),
        Line::from(""),
    ];

    // Answer slots
    let filled = primary.bg(BG_SLOT).add_modifier(Modifier::BOLD);
    let empty = Style::default().fg(DOT_PENDING).bg(BG_SLOT);
    let slots: Vec<Span> = (0..puzzle.word_len())
        .map(|i| match puzzle.answer().get(i) {
            Some(c) => Span::styled(format!(" {c} "), filled),
            None => Span::styled(" _ ", empty),
        })
        .flat_map(|s| [s, Span::raw(" ")])
        .collect();
    lines.push(Line::from(slots));
    lines.push(Line::from(""));

    // Letter tiles
    let used = Style::default().fg(PINK_SOFT);
    let tile = Style::default().fg(PURPLE).add_modifier(Modifier::BOLD);
    let focused = tile.fg(Color::White).bg(PURPLE);
    let tiles: Vec<Span> = puzzle
        .tiles()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let style = if puzzle.is_used(i) {
                used
            } else if i == cursor {
                focused
            } else {
                tile
            };
            Span::styled(format!("[{c}]"), style)
        })
        .flat_map(|s| [s, Span::raw(" ")])
        .collect();
    lines.push(Line::from(tiles));

    let numbers: Vec<Span> = (1..=puzzle.tiles().len())
        .map(|n| Span::styled(format!(" {n}  "), muted))
        .collect();
    lines.push(Line::from(numbers));
    lines.push(Line::from(""));

    if let Some(result) = puzzle.result() {
        let bold = primary.add_modifier(Modifier::BOLD);
        lines.push(Line::styled(result.message(), bold));
    }

    frame.render_widget(centered_text(lines), inner);
    let new_word = button("New Word 💎", PURPLE, true);
    frame.render_widget(Paragraph::new(new_word), layout[1]);
}

fn render_story(frame: &mut Frame, area: Rect, studio: &StoryStudio) {
    let body = section_frame(
        frame,
        area,
        Section::Story,
        "Story Studio",
        "type freely · Enter: new line · Ctrl+N: new story · Esc: back",
    );

    let width = body.width.saturating_sub(4) as usize;
    let starter_lines = wrap_text(studio.starter(), width);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(starter_lines.len() as u16 + 2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(body);

    clear(frame, layout[0]);
    let italic = Style::default()
        .fg(TEXT_STORY)
        .add_modifier(Modifier::ITALIC);
    let starter: Vec<Line> = starter_lines
        .into_iter()
        .map(|l| Line::styled(l, italic))
        .collect();
    let starter = Paragraph::new(starter).block(card(PURPLE, false));
    frame.render_widget(starter, layout[0]);

    render_text_area(
        frame,
        layout[1],
        studio.continuation(),
        "Continue the story...",
        TEXT_STORY,
    );

    let new_story = button("New Story 📖", PURPLE, true);
    frame.render_widget(Paragraph::new(new_story), layout[2]);
}

/// Multi-line input box showing the tail of the text when it overflows
fn render_text_area(frame: &mut Frame, area: Rect, text: &str, placeholder: &str, color: Color) {
    clear(frame, area);
    let block = card(LILAC, true);
    let inner = block.inner(area);

    let lines: Vec<Line> = if text.is_empty() {
        let muted = Style::default().fg(TEXT_MUTED);
        vec![Line::styled(placeholder, muted)]
    } else {
        let typed = Style::default().fg(color);
        let caret = Style::default().fg(PINK);
        let mut wrapped = wrap_chars(text, inner.width.saturating_sub(1) as usize);
        let visible = inner.height as usize;
        if wrapped.len() > visible {
            wrapped.drain(..wrapped.len() - visible);
        }
        let last = wrapped.len().saturating_sub(1);
        wrapped
            .into_iter()
            .enumerate()
            .map(|(i, l)| {
                let mut spans = vec![Span::styled(l, typed)];
                if i == last {
                    spans.push(Span::styled("▏", caret));
                }
                Line::from(spans)
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
