//! UI module for squish-sparkle
//!
//! Rendering only reads [`App`]; each screen has its own module and the
//! sparkle layer is drawn underneath all of them.

mod helpers;
mod menu;
mod sections;
mod setup;
mod sparkles;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;
use crate::theme::{BG_BAND, BG_PRIMARY, TEXT_PRIMARY};

use sparkles::SparkleLayer;

/// Draw the whole frame
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background with a soft band across the top third
    let background = Style::default().bg(BG_PRIMARY).fg(TEXT_PRIMARY);
    frame.render_widget(Block::default().style(background), area);
    let band = Rect {
        height: area.height * 35 / 100,
        ..area
    };
    let band_style = Style::default().bg(BG_BAND);
    frame.render_widget(Block::default().style(band_style), band);

    frame.render_widget(
        SparkleLayer {
            field: &app.sparkles,
            now: app.now,
        },
        area,
    );

    match app.screen() {
        Screen::Setup => setup::render_setup(frame, area, app),
        Screen::Menu => menu::render_menu(frame, area, app),
        Screen::Section(_) => sections::render_section(frame, area, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;
    use crate::store::Store;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::backend::TestBackend;
    use std::time::Instant;
    use tempfile::tempdir;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        screen_text(&terminal)
    }

    fn app_with_profile(dir: &tempfile::TempDir) -> App {
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"userName":"Mia","setupComplete":true}"#).unwrap();
        let rng = StdRng::seed_from_u64(2);
        App::new(Store::new(path), rng, true, Instant::now())
    }

    #[test]
    fn test_setup_screen_renders() {
        let dir = tempdir().unwrap();
        let app = App::new(
            Store::new(dir.path().join("profile.json")),
            StdRng::seed_from_u64(1),
            true,
            Instant::now(),
        );
        let text = render(&app);
        assert!(text.contains("What's your name?"));
    }

    #[test]
    fn test_menu_greets_user() {
        let dir = tempdir().unwrap();
        let app = app_with_profile(&dir);
        let text = render(&app);
        assert!(text.contains("Hi Mia"));
        assert!(text.contains("Worry Pillow"));
        assert!(text.contains("Story Studio"));
    }

    #[test]
    fn test_every_section_renders() {
        let dir = tempdir().unwrap();
        let mut app = app_with_profile(&dir);
        for section in Section::ALL {
            app.open_section(section);
            let text = render(&app);
            assert!(text.contains("Back"), "{} should render", section.key());
        }
    }

    #[test]
    fn test_breathing_shows_progress() {
        let dir = tempdir().unwrap();
        let mut app = app_with_profile(&dir);
        app.open_section(Section::Breathing);
        let text = render(&app);
        assert!(text.contains("Ready when you are!"));
        assert!(text.contains("0 of 4"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let dir = tempdir().unwrap();
        let mut app = app_with_profile(&dir);
        app.open_section(Section::Word);
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
